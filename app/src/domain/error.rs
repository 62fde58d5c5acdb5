//! Domain-level error types.
//!
//! These errors are presentation agnostic. Screens map them to user-facing
//! alerts; nothing here is fatal to the app.

use thiserror::Error;

use super::ports::{GeocoderError, LocationSourceError};
use super::user::ValidationError;

/// Reasons a registration submission did not add a user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// A required form field is empty. The form is kept as is.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Location permission has not been granted.
    #[error("location permission is required to register users")]
    PermissionRequired,
    /// The geocoder found no match for the address. The form is kept.
    #[error("no geocoding match for `{address}`")]
    GeocodeNotFound {
        /// Address text that was looked up.
        address: String,
    },
    /// The geocoder call failed. Treated as transient; the form is kept.
    #[error("geocoding failed: {0}")]
    GeocodeService(#[source] GeocoderError),
    /// Another submission from the same form is still running.
    #[error("a registration is already in progress")]
    SubmissionInFlight,
}

/// Reasons the device position could not be obtained.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    /// The user refused location permission.
    #[error("location permission denied")]
    PermissionDenied,
    /// The platform could not produce a position.
    #[error("location unavailable: {0}")]
    Unavailable(#[source] LocationSourceError),
}

impl From<LocationSourceError> for LocationError {
    fn from(error: LocationSourceError) -> Self {
        match error {
            LocationSourceError::PermissionDenied => Self::PermissionDenied,
            other => Self::Unavailable(other),
        }
    }
}
