use serde::{Deserialize, Serialize};

/// System-level messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystemMsg {
    /// Application finished mounting; triggers the permission request
    Started,
    Quit,
    Suspend,
    Resume,
    Resize(u16, u16),
    ToggleHelp,
    /// Surface an unexpected runtime failure to the user
    ShowError(String),
}
