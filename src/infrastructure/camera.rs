use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use color_eyre::eyre::Result;

use crate::domain::region::Region;

/// Imperative handle on the map viewport.
///
/// Only the presentation layer reads the animated position; state keeps the
/// target region so the pure update path never waits on the camera.
pub trait CameraController: Send + Sync {
    /// Start moving the viewport to `region` over `duration`
    fn animate_to(&self, region: Region, duration: Duration) -> Result<()>;

    /// Viewport as of now, mid-animation included
    fn current_region(&self) -> Region;
}

#[derive(Debug, Clone, Copy)]
struct CameraAnimation {
    from: Region,
    to: Region,
    started: Instant,
    duration: Duration,
}

impl CameraAnimation {
    fn settled(region: Region) -> Self {
        Self {
            from: region,
            to: region,
            started: Instant::now(),
            duration: Duration::ZERO,
        }
    }

    fn region_at(&self, now: Instant) -> Region {
        if self.duration.is_zero() {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.started);
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.from.lerp(&self.to, t)
    }
}

/// Camera that interpolates between regions over wall-clock time
#[derive(Debug, Clone)]
pub struct MapCamera {
    animation: Arc<Mutex<CameraAnimation>>,
}

impl MapCamera {
    pub fn new(initial: Region) -> Self {
        Self {
            animation: Arc::new(Mutex::new(CameraAnimation::settled(initial))),
        }
    }

    fn lock(&self) -> MutexGuard<'_, CameraAnimation> {
        self.animation
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Viewport at an arbitrary instant
    pub fn region_at(&self, now: Instant) -> Region {
        self.lock().region_at(now)
    }

    /// Whether an animation is still running at `now`
    pub fn is_animating(&self, now: Instant) -> bool {
        let animation = self.lock();
        now.saturating_duration_since(animation.started) < animation.duration
    }
}

impl CameraController for MapCamera {
    fn animate_to(&self, region: Region, duration: Duration) -> Result<()> {
        let now = Instant::now();
        let mut animation = self.lock();
        // Start from wherever the camera is right now, even mid-flight
        let from = animation.region_at(now);
        *animation = CameraAnimation {
            from,
            to: region,
            started: now,
            duration,
        };
        log::debug!("camera: animating to {region:?} over {duration:?}");
        Ok(())
    }

    fn current_region(&self) -> Region {
        self.region_at(Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_new_camera_is_settled() {
        let region = Region::new(1.0, 2.0, 0.1, 0.1);
        let camera = MapCamera::new(region);

        assert_eq!(camera.current_region(), region);
        assert!(!camera.is_animating(Instant::now()));
    }

    #[test]
    fn test_animation_interpolates_and_settles() {
        let from = Region::new(0.0, 0.0, 1.0, 1.0);
        let to = Region::new(10.0, 20.0, 0.01, 0.01);
        let camera = MapCamera::new(from);

        camera.animate_to(to, Duration::from_millis(1000)).unwrap();
        let started = camera.lock().started;

        let halfway = camera.region_at(started + Duration::from_millis(500));
        assert_eq!(halfway.latitude, 5.0);
        assert_eq!(halfway.longitude, 10.0);
        assert!(camera.is_animating(started + Duration::from_millis(500)));

        assert_eq!(camera.region_at(started + Duration::from_millis(1500)), to);
        assert!(!camera.is_animating(started + Duration::from_millis(1500)));
    }

    #[test]
    fn test_zero_duration_jumps() {
        let to = Region::new(3.0, 4.0, 0.01, 0.01);
        let camera = MapCamera::new(Region::default());

        camera.animate_to(to, Duration::ZERO).unwrap();

        assert_eq!(camera.current_region(), to);
    }
}
