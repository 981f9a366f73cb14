use serde::{Deserialize, Serialize};

/// Locations list modal messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListMsg {
    /// "View Locations"
    Open,
    Close,
    HighlightNext,
    HighlightPrevious,
    SelectHighlighted,
    /// Select the entry at this index of "all locations"
    Select(usize),
}
