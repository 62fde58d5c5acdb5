//! Driven port for the device's location permission and position.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::user::Coordinates;

/// Answer returned by the platform permission prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    /// The user allowed foreground location access.
    Granted,
    /// The user refused, or the platform blocked the prompt.
    Denied,
}

define_port_error! {
    /// Errors surfaced by the location platform.
    pub enum LocationSourceError {
        /// Position was requested without location permission.
        PermissionDenied =>
            "location permission denied",
        /// The platform could not produce a position.
        Unavailable { message: String } =>
            "location unavailable: {message}",
        /// The platform call itself failed.
        Platform { message: String } =>
            "location platform error: {message}",
    }
}

/// Port over the platform location API.
///
/// Permission requests must be safe to repeat; once granted, the platform is
/// expected to answer again without re-prompting.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationSource: Send + Sync {
    /// Ask for foreground location permission.
    async fn request_permission(&self) -> Result<PermissionStatus, LocationSourceError>;

    /// Read the current device position.
    async fn current_position(&self) -> Result<Coordinates, LocationSourceError>;
}

/// Fixture location source with a fixed answer.
#[derive(Debug, Clone, Copy)]
pub struct FixtureLocationSource {
    status: PermissionStatus,
    position: Option<Coordinates>,
}

impl FixtureLocationSource {
    /// Grant permission and report `position`.
    pub fn granted_at(position: Coordinates) -> Self {
        Self {
            status: PermissionStatus::Granted,
            position: Some(position),
        }
    }

    /// Refuse permission.
    pub fn denied() -> Self {
        Self {
            status: PermissionStatus::Denied,
            position: None,
        }
    }
}

#[async_trait]
impl LocationSource for FixtureLocationSource {
    async fn request_permission(&self) -> Result<PermissionStatus, LocationSourceError> {
        Ok(self.status)
    }

    async fn current_position(&self) -> Result<Coordinates, LocationSourceError> {
        if self.status == PermissionStatus::Denied {
            return Err(LocationSourceError::permission_denied());
        }
        self.position
            .ok_or_else(|| LocationSourceError::unavailable("fixture has no position"))
    }
}
