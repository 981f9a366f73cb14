use serde::{Deserialize, Serialize};

use crate::domain::location::{Coordinates, SAMPLE_LATITUDE, SAMPLE_LONGITUDE};

/// Duration of every programmatic camera move
pub const CAMERA_ANIMATION_MS: u64 = 1000;

/// Zoom used when centering on the device position
pub const WIDE_SPAN: Span = Span::new(0.0922, 0.0421);

/// Zoom used when jumping to an entry from the locations list
pub const CLOSE_SPAN: Span = Span::new(0.01, 0.01);

/// Camera viewport on mount
pub const INITIAL_REGION: Region = Region::new(
    SAMPLE_LATITUDE,
    SAMPLE_LONGITUDE,
    WIDE_SPAN.latitude_delta,
    WIDE_SPAN.longitude_delta,
);

/// Latitude/longitude extent of a viewport, in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Span {
    pub const fn new(latitude_delta: f64, longitude_delta: f64) -> Self {
        Self {
            latitude_delta,
            longitude_delta,
        }
    }
}

/// Camera viewport: a center point plus the visible span around it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Default for Region {
    fn default() -> Self {
        INITIAL_REGION
    }
}

impl Region {
    pub const fn new(
        latitude: f64,
        longitude: f64,
        latitude_delta: f64,
        longitude_delta: f64,
    ) -> Self {
        Self {
            latitude,
            longitude,
            latitude_delta,
            longitude_delta,
        }
    }

    pub fn centered_on(center: Coordinates, span: Span) -> Self {
        Self::new(
            center.latitude,
            center.longitude,
            span.latitude_delta,
            span.longitude_delta,
        )
    }

    pub fn center(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }

    pub fn span(&self) -> Span {
        Span::new(self.latitude_delta, self.longitude_delta)
    }

    /// Longitude bounds `[west, east]`, the canvas x axis
    pub fn x_bounds(&self) -> [f64; 2] {
        let half = self.longitude_delta / 2.0;
        [self.longitude - half, self.longitude + half]
    }

    /// Latitude bounds `[south, north]`, the canvas y axis
    pub fn y_bounds(&self) -> [f64; 2] {
        let half = self.latitude_delta / 2.0;
        [self.latitude - half, self.latitude + half]
    }

    pub fn contains(&self, point: Coordinates) -> bool {
        let [west, east] = self.x_bounds();
        let [south, north] = self.y_bounds();
        (west..=east).contains(&point.longitude) && (south..=north).contains(&point.latitude)
    }

    /// Linear interpolation toward `target`; `t` is clamped to `0.0..=1.0`
    pub fn lerp(&self, target: &Region, t: f64) -> Region {
        let t = t.clamp(0.0, 1.0);
        if t >= 1.0 {
            return *target;
        }
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Region::new(
            mix(self.latitude, target.latitude),
            mix(self.longitude, target.longitude),
            mix(self.latitude_delta, target.latitude_delta),
            mix(self.longitude_delta, target.longitude_delta),
        )
    }
}
