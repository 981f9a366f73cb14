use crate::domain::{
    location::Coordinates,
    region::{Region, CAMERA_ANIMATION_MS},
};

/// Map surface settings plus what the coordinator last asked the camera to do
#[derive(Debug, Clone)]
pub struct MapState {
    pub initial_region: Region,
    /// Region of the most recent camera command, or the initial region
    pub camera_target: Region,
    /// Last known device position, from the latest successful fetch
    pub user_position: Option<Coordinates>,
    pub shows_user_location: bool,
    pub animation_ms: u64,
}

impl Default for MapState {
    fn default() -> Self {
        Self::new(Region::default(), true, CAMERA_ANIMATION_MS)
    }
}

impl MapState {
    pub fn new(initial_region: Region, shows_user_location: bool, animation_ms: u64) -> Self {
        Self {
            initial_region,
            camera_target: initial_region,
            user_position: None,
            shows_user_location,
            animation_ms,
        }
    }

    /// Device position to draw, if enabled and known
    pub fn visible_user_position(&self) -> Option<Coordinates> {
        self.user_position.filter(|_| self.shows_user_location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_position_hidden_when_disabled() {
        let mut map = MapState::new(Region::default(), false, 1000);
        map.user_position = Some(Coordinates::new(1.0, 2.0));
        assert_eq!(map.visible_user_position(), None);

        map.shows_user_location = true;
        assert_eq!(map.visible_user_position(), Some(Coordinates::new(1.0, 2.0)));
    }
}
