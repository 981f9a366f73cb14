use std::fmt;

use serde::{Deserialize, Serialize};

/// Description stored when the user leaves the description field empty
pub const DEFAULT_DESCRIPTION: &str = "No description provided";

pub const SAMPLE_LOCATION_ID: u64 = 0;
pub const SAMPLE_LATITUDE: f64 = 17.8035236;
pub const SAMPLE_LONGITUDE: f64 = 102.7478215;
pub const SAMPLE_TITLE: &str = "Khon Kaen University";
pub const SAMPLE_DESCRIPTION: &str = "Nong Khai Campus";
pub const SAMPLE_COLOR: &str = "brown";

/// A point on the globe in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Outcome of asking the host for location access
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    #[default]
    Granted,
    Denied,
}

impl Permission {
    pub fn is_granted(self) -> bool {
        self == Permission::Granted
    }
}

/// Failure reported by a location provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationError {
    PermissionDenied,
    Unavailable(String),
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationError::PermissionDenied => write!(f, "location permission denied"),
            LocationError::Unavailable(reason) => write!(f, "location unavailable: {reason}"),
        }
    }
}

impl std::error::Error for LocationError {}

/// Uncommitted title/description pair captured from the add-location form
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Draft {
    pub title: String,
    pub description: String,
}

impl Draft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// A draft can be saved only when its title has visible characters
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

/// A location the user captured, or the built-in sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedLocation {
    pub id: u64,
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    pub description: String,
    pub color: Option<String>,
}

impl SavedLocation {
    /// Build a location from a validated draft and a position fix.
    /// An empty description is replaced by [`DEFAULT_DESCRIPTION`].
    pub fn from_draft(id: u64, coordinates: Coordinates, draft: &Draft) -> Self {
        let description = if draft.description.is_empty() {
            DEFAULT_DESCRIPTION.to_owned()
        } else {
            draft.description.clone()
        };

        Self {
            id,
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
            title: draft.title.clone(),
            description,
            color: None,
        }
    }

    /// The fixed record shown ahead of every user location
    pub fn sample() -> Self {
        Self {
            id: SAMPLE_LOCATION_ID,
            latitude: SAMPLE_LATITUDE,
            longitude: SAMPLE_LONGITUDE,
            title: SAMPLE_TITLE.to_owned(),
            description: SAMPLE_DESCRIPTION.to_owned(),
            color: Some(SAMPLE_COLOR.to_owned()),
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }

    pub fn is_sample(&self) -> bool {
        self.id == SAMPLE_LOCATION_ID
    }
}
