//! Location source answering from configuration.
//!
//! Hosts without a location service (a terminal, a CI runner) still need a
//! device position for the map screen. This adapter answers the permission
//! prompt from a policy flag and reports a fixed coordinate.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::Coordinates;
use crate::domain::ports::{LocationSource, LocationSourceError, PermissionStatus};

/// [`LocationSource`] backed by a configured coordinate and permission policy.
#[derive(Debug, Clone, Copy)]
pub struct ConfiguredLocationSource {
    deny: bool,
    position: Option<Coordinates>,
}

impl ConfiguredLocationSource {
    /// Grant permission unless `deny` is set, reporting `position` when present.
    pub fn new(deny: bool, position: Option<Coordinates>) -> Self {
        Self { deny, position }
    }
}

#[async_trait]
impl LocationSource for ConfiguredLocationSource {
    async fn request_permission(&self) -> Result<PermissionStatus, LocationSourceError> {
        let status = if self.deny {
            PermissionStatus::Denied
        } else {
            PermissionStatus::Granted
        };
        debug!(?status, "answered location permission from configuration");
        Ok(status)
    }

    async fn current_position(&self) -> Result<Coordinates, LocationSourceError> {
        if self.deny {
            return Err(LocationSourceError::permission_denied());
        }
        let position = self.position.ok_or_else(|| {
            LocationSourceError::unavailable("no device coordinate configured")
        })?;
        if !position.is_finite() {
            return Err(LocationSourceError::platform(
                "configured device coordinate is not finite",
            ));
        }
        Ok(position)
    }
}
