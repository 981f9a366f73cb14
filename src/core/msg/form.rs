use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

/// Add-location form messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormMsg {
    /// "Add Current Location"
    Open,
    Cancel,
    Save,
    FocusNext,
    FocusPrevious,
    /// Raw key forwarded to the focused text field
    Input(KeyEvent),
    /// Text pasted into the focused field
    Paste(String),
    SetTitle(String),
    SetDescription(String),
}
