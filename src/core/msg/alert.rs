use serde::{Deserialize, Serialize};

use crate::domain::alert::Alert;

/// Alert queue messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertMsg {
    Show(Alert),
    Dismiss,
}
