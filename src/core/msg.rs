use serde::{Deserialize, Serialize};

pub mod alert;
pub mod form;
pub mod list;
pub mod location;
pub mod map;
pub mod system;

use alert::AlertMsg;
use form::FormMsg;
use list::ListMsg;
use location::LocationMsg;
use map::MapMsg;
use system::SystemMsg;

/// Domain messages representing application intent
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Add-location form (delegated to FormState, Save is coordinated)
    Form(FormMsg),

    // Locations list modal
    List(ListMsg),

    // Camera actions
    Map(MapMsg),

    // Location provider results
    Location(LocationMsg),

    // Alert queue (delegated to AlertState)
    Alert(AlertMsg),
}

impl Msg {
    /// Keystrokes typed into the form are too noisy to log at debug level
    pub fn is_frequent(&self) -> bool {
        matches!(self, Msg::Form(FormMsg::Input(_)))
    }
}
