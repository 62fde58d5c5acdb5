//! One-shot device position lookup used by the map screen.

use std::sync::Arc;

use tracing::{info, warn};

use super::error::LocationError;
use super::permission::PermissionGate;
use super::ports::LocationSourceError;
use super::user::Coordinates;

/// Reads the device position after making sure permission is granted.
#[derive(Clone)]
pub struct DeviceLocation {
    gate: Arc<PermissionGate>,
}

impl DeviceLocation {
    /// Build the hook over the shared permission gate.
    pub fn new(gate: Arc<PermissionGate>) -> Self {
        Self { gate }
    }

    /// Request permission, then read the current position once.
    ///
    /// # Errors
    ///
    /// [`LocationError::PermissionDenied`] when access is refused and
    /// [`LocationError::Unavailable`] for any other platform failure,
    /// including a position that is not a finite coordinate.
    pub async fn fetch(&self) -> Result<Coordinates, LocationError> {
        let state = self.gate.request().await?;
        if !state.is_granted() {
            warn!("device position skipped: permission not granted");
            return Err(LocationError::PermissionDenied);
        }

        let position = self
            .gate
            .source()
            .current_position()
            .await
            .inspect_err(|error| warn!(%error, "device position lookup failed"))?;
        if !position.is_finite() {
            warn!(
                latitude = position.latitude,
                longitude = position.longitude,
                "device position rejected: non-finite coordinate"
            );
            return Err(LocationError::Unavailable(LocationSourceError::platform(
                "location platform returned a non-finite coordinate",
            )));
        }
        info!(
            latitude = position.latitude,
            longitude = position.longitude,
            "device position resolved"
        );
        Ok(position)
    }
}

#[cfg(test)]
mod tests {
    //! Permission and failure handling for the position lookup.

    use super::*;
    use crate::domain::ports::{FixtureLocationSource, MockLocationSource, PermissionStatus};
    use rstest::rstest;

    #[tokio::test]
    async fn returns_position_when_granted() {
        let source = FixtureLocationSource::granted_at(Coordinates::new(-8.05, -34.9));
        let hook = DeviceLocation::new(Arc::new(PermissionGate::new(Arc::new(source))));
        assert_eq!(hook.fetch().await, Ok(Coordinates::new(-8.05, -34.9)));
    }

    #[tokio::test]
    async fn denial_skips_position_read() {
        let mut source = MockLocationSource::new();
        source
            .expect_request_permission()
            .times(1)
            .returning(|| Ok(PermissionStatus::Denied));
        source.expect_current_position().never();
        let hook = DeviceLocation::new(Arc::new(PermissionGate::new(Arc::new(source))));

        assert_eq!(hook.fetch().await, Err(LocationError::PermissionDenied));
    }

    #[tokio::test]
    async fn platform_failure_is_unavailable() {
        let mut source = MockLocationSource::new();
        source
            .expect_request_permission()
            .returning(|| Ok(PermissionStatus::Granted));
        source
            .expect_current_position()
            .times(1)
            .returning(|| Err(LocationSourceError::unavailable("no fix")));
        let hook = DeviceLocation::new(Arc::new(PermissionGate::new(Arc::new(source))));

        let error = hook.fetch().await.expect_err("lookup fails");
        assert!(matches!(error, LocationError::Unavailable(_)));
    }

    #[tokio::test]
    async fn permission_request_failure_is_unavailable() {
        let mut source = MockLocationSource::new();
        source
            .expect_request_permission()
            .returning(|| Err(LocationSourceError::platform("prompt failed")));
        let hook = DeviceLocation::new(Arc::new(PermissionGate::new(Arc::new(source))));

        let error = hook.fetch().await.expect_err("lookup fails");
        assert!(matches!(error, LocationError::Unavailable(_)));
    }

    #[rstest]
    #[case::nan_latitude(Coordinates::new(f64::NAN, -34.9))]
    #[case::infinite_longitude(Coordinates::new(-8.05, f64::INFINITY))]
    #[case::both(Coordinates::new(f64::NAN, f64::INFINITY))]
    #[tokio::test]
    async fn non_finite_position_is_unavailable(#[case] position: Coordinates) {
        let mut source = MockLocationSource::new();
        source
            .expect_request_permission()
            .returning(|| Ok(PermissionStatus::Granted));
        source
            .expect_current_position()
            .times(1)
            .returning(move || Ok(position));
        let hook = DeviceLocation::new(Arc::new(PermissionGate::new(Arc::new(source))));

        let error = hook.fetch().await.expect_err("non-finite position rejected");
        assert!(
            matches!(
                error,
                LocationError::Unavailable(LocationSourceError::Platform { .. })
            ),
            "{error:?}"
        );
    }
}
