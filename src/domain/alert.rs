use serde::{Deserialize, Serialize};

/// Modal notification with a title and a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn permission_denied() -> Self {
        Self::new(
            "Permission Denied",
            "Permission to access location was denied.",
        )
    }

    pub fn fetch_failed() -> Self {
        Self::new("Error", "Could not fetch your location.")
    }

    pub fn save_failed() -> Self {
        Self::new("Error", "Could not save your location.")
    }

    pub fn missing_title() -> Self {
        Self::new("Incomplete", "Please enter a location name.")
    }
}
