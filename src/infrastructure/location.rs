use std::time::Duration;

use futures::future::{BoxFuture, FutureExt};

use crate::{
    domain::location::{Coordinates, LocationError, Permission},
    infrastructure::config::LocationConfig,
};

/// Source of the device position.
///
/// Both calls may take arbitrarily long; the command executor runs them on
/// spawned tasks and feeds the answers back as messages.
pub trait LocationProvider: Send + Sync {
    /// Ask the host for foreground location access
    fn request_permission(&self) -> BoxFuture<'_, Permission>;

    /// One-shot read of the current position
    fn current_position(&self) -> BoxFuture<'_, Result<Coordinates, LocationError>>;
}

/// Provider that serves a configured position after a configured delay.
///
/// Terminals have no GPS, so the device position comes from config or CLI
/// flags. Denied permission and forced failures surface as errors from
/// [`LocationProvider::current_position`].
#[derive(Debug, Clone)]
pub struct SimulatedLocationProvider {
    position: Coordinates,
    permission: Permission,
    fail: bool,
    delay: Duration,
}

impl SimulatedLocationProvider {
    pub fn new(config: &LocationConfig) -> Self {
        Self {
            position: Coordinates::new(config.latitude, config.longitude),
            permission: config.permission,
            fail: config.fail,
            delay: Duration::from_millis(config.delay_ms),
        }
    }
}

impl LocationProvider for SimulatedLocationProvider {
    fn request_permission(&self) -> BoxFuture<'_, Permission> {
        async move {
            tokio::time::sleep(self.delay).await;
            self.permission
        }
        .boxed()
    }

    fn current_position(&self) -> BoxFuture<'_, Result<Coordinates, LocationError>> {
        async move {
            tokio::time::sleep(self.delay).await;
            if !self.permission.is_granted() {
                return Err(LocationError::PermissionDenied);
            }
            if self.fail {
                return Err(LocationError::Unavailable("no position fix".to_owned()));
            }
            Ok(self.position)
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn config() -> LocationConfig {
        LocationConfig {
            latitude: 10.0,
            longitude: 20.0,
            delay_ms: 0,
            ..LocationConfig::default()
        }
    }

    #[tokio::test]
    async fn test_granted_provider_returns_position() {
        let provider = SimulatedLocationProvider::new(&config());

        assert_eq!(provider.request_permission().await, Permission::Granted);
        assert_eq!(
            provider.current_position().await,
            Ok(Coordinates::new(10.0, 20.0))
        );
    }

    #[tokio::test]
    async fn test_denied_provider_fails_fetch() {
        let provider = SimulatedLocationProvider::new(&LocationConfig {
            permission: Permission::Denied,
            ..config()
        });

        assert_eq!(provider.request_permission().await, Permission::Denied);
        assert_eq!(
            provider.current_position().await,
            Err(LocationError::PermissionDenied)
        );
    }

    #[tokio::test]
    async fn test_failing_provider_reports_unavailable() {
        let provider = SimulatedLocationProvider::new(&LocationConfig {
            fail: true,
            ..config()
        });

        let result = provider.current_position().await;
        assert!(matches!(result, Err(LocationError::Unavailable(_))));
    }
}
