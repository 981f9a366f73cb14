pub mod alert;
pub mod form;
pub mod list;
pub mod map;
pub mod store;
pub mod system;

use crate::{
    domain::{location::SavedLocation, marker::Marker, ui::Mode},
    infrastructure::config::Config,
};

pub use alert::AlertState;
pub use form::FormState;
pub use list::LocationListState;
pub use map::MapState;
pub use store::LocationStore;
pub use system::SystemState;

/// Unified application state
///
/// Owns every piece of mutable UI state. All transitions go through
/// [`crate::core::update::update`]; nothing here talks to the host.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub store: LocationStore,
    pub form: FormState,
    pub list: LocationListState,
    pub map: MapState,
    pub alerts: AlertState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize AppState with the map settings taken from config
    pub fn new_with_config(config: Config) -> Self {
        let map = MapState::new(
            config.map.initial_region,
            config.map.shows_user_location,
            config.map.animation_ms,
        );
        Self {
            map,
            config: ConfigState { config },
            ..Default::default()
        }
    }

    /// Sample location followed by the store contents
    pub fn all_locations(&self) -> Vec<SavedLocation> {
        self.store.all_locations()
    }

    /// Markers for the current render pass
    pub fn markers(&self) -> Vec<Marker> {
        self.store.markers()
    }

    /// "View Locations" is offered only while the form is closed
    pub fn view_locations_available(&self) -> bool {
        !self.form.is_open()
    }

    /// Surface that currently receives keyboard input
    pub fn mode(&self) -> Mode {
        if self.alerts.is_showing() {
            Mode::Alert
        } else if self.form.is_open() {
            Mode::Form
        } else if self.list.is_open() {
            Mode::List
        } else if self.system.show_help {
            Mode::Help
        } else {
            Mode::Map
        }
    }
}
