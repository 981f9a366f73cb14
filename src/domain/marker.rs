use serde::{Deserialize, Serialize};

use crate::domain::location::{Coordinates, SavedLocation};

/// Pin color used when a location carries none
pub const DEFAULT_MARKER_COLOR: &str = "green";

/// Point annotation drawn on the map, one per location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub id: u64,
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    pub description: String,
    pub color: String,
}

impl Marker {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

impl From<&SavedLocation> for Marker {
    fn from(location: &SavedLocation) -> Self {
        Self {
            id: location.id,
            latitude: location.latitude,
            longitude: location.longitude,
            title: location.title.clone(),
            description: location.description.clone(),
            color: location
                .color
                .clone()
                .unwrap_or_else(|| DEFAULT_MARKER_COLOR.to_owned()),
        }
    }
}
