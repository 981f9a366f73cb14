use serde::{Deserialize, Serialize};

/// Camera messages that do not originate from the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MapMsg {
    GoToMyLocation,
}
