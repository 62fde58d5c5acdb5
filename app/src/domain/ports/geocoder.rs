//! Driven port for turning free-text addresses into coordinates.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::user::Coordinates;

define_port_error! {
    /// Errors surfaced while calling a geocoding provider.
    pub enum GeocoderError {
        /// Network transport failed before a usable response arrived.
        Transport { message: String } =>
            "geocoder transport failed: {message}",
        /// The provider did not answer in time.
        Timeout { message: String } =>
            "geocoder timeout: {message}",
        /// The provider throttled the request.
        RateLimited { message: String } =>
            "geocoder rate limited request: {message}",
        /// The provider answered with a payload that could not be decoded.
        Decode { message: String } =>
            "geocoder response decode failed: {message}",
        /// The request was rejected before or by the provider.
        InvalidRequest { message: String } =>
            "geocoder request invalid: {message}",
    }
}

impl GeocoderError {
    /// Whether trying again later is expected to help.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::Timeout { .. } | Self::RateLimited { .. }
        )
    }
}

/// Port for geocoding addresses.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolve `address` into candidate positions, best match first.
    ///
    /// An empty vector means the provider found no match.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use usermap::domain::Coordinates;
    /// use usermap::domain::ports::{FixtureGeocoder, Geocoder};
    ///
    /// let geocoder = FixtureGeocoder::resolving(Coordinates::new(-23.5, -46.6));
    /// let matches = geocoder.geocode("Rua A, 10, São Paulo, SP").await?;
    /// assert_eq!(matches, vec![Coordinates::new(-23.5, -46.6)]);
    /// # Ok::<(), usermap::domain::ports::GeocoderError>(())
    /// ```
    async fn geocode(&self, address: &str) -> Result<Vec<Coordinates>, GeocoderError>;
}

/// Fixture geocoder returning the same answer for every address.
#[derive(Debug, Clone, Default)]
pub struct FixtureGeocoder {
    matches: Vec<Coordinates>,
}

impl FixtureGeocoder {
    /// Resolve every address to `coordinates`.
    pub fn resolving(coordinates: Coordinates) -> Self {
        Self {
            matches: vec![coordinates],
        }
    }

    /// Report every address as not found.
    pub fn not_found() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Geocoder for FixtureGeocoder {
    async fn geocode(&self, _address: &str) -> Result<Vec<Coordinates>, GeocoderError> {
        Ok(self.matches.clone())
    }
}
