//! Component collection and management
//!
//! Components are stateless renderers that receive state as parameters.
//! The map fills the screen; overlays are drawn on top in focus order.

use ratatui::prelude::*;

use crate::{core::state::AppState, domain::region::Region};

pub mod alert;
pub mod form;
pub mod help;
pub mod list;
pub mod map;
pub mod status_bar;

pub use alert::AlertComponent;
pub use form::FormComponent;
pub use help::HelpComponent;
pub use list::LocationListComponent;
pub use map::MapComponent;
pub use status_bar::StatusBarComponent;

/// Collection of all components
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub map: MapComponent,
    pub form: FormComponent,
    pub list: LocationListComponent,
    pub help: HelpComponent,
    pub alert: AlertComponent,
    pub status_bar: StatusBarComponent,
}

impl Components {
    /// Create a new component collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Render all components with the camera at `region`
    pub fn render(&mut self, frame: &mut Frame, state: &AppState, region: Region) {
        let area = frame.area();

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Min(0),    // Map
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        self.map.view(state, frame, layout[0], region);
        self.status_bar.view(state, frame, layout[1]);

        // Overlays, bottom to top
        self.help.view(state, frame, layout[0]);
        self.list.view(state, frame, layout[0]);
        self.form.view(state, frame, layout[0]);
        self.alert.view(state, frame, layout[0]);
    }
}
