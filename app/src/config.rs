//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `USERMAP_*` environment variables, and an
//! optional configuration file. Accessors fill in defaults for anything left
//! unset.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use crate::domain::Coordinates;
use crate::outbound::nominatim::{DEFAULT_NOMINATIM_ENDPOINT, NominatimIdentity};

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Runtime configuration for the geocoder and the device location.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USERMAP")]
pub struct AppSettings {
    /// Nominatim-compatible search endpoint.
    pub geocoder_endpoint: Option<String>,
    /// Per-request timeout in seconds.
    pub geocoder_timeout_secs: Option<u64>,
    /// User-agent sent with geocoding requests.
    pub geocoder_user_agent: Option<String>,
    /// Candidates requested per address.
    pub geocoder_result_limit: Option<u8>,
    /// Latitude reported as the device position.
    pub device_latitude: Option<f64>,
    /// Longitude reported as the device position.
    pub device_longitude: Option<f64>,
    /// Answer the location permission prompt with a refusal.
    #[ortho_config(default = false)]
    pub deny_location: bool,
}

/// A configured value that cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The geocoder endpoint is not an absolute URL.
    #[error("invalid geocoder endpoint `{value}`: {source}")]
    Endpoint {
        /// Configured text.
        value: String,
        /// Parse failure.
        #[source]
        source: url::ParseError,
    },
}

impl AppSettings {
    /// Geocoder endpoint, falling back to the public Nominatim instance.
    ///
    /// # Errors
    ///
    /// [`SettingsError::Endpoint`] when the configured value does not parse.
    pub fn geocoder_endpoint(&self) -> Result<Url, SettingsError> {
        let value = self
            .geocoder_endpoint
            .as_deref()
            .unwrap_or(DEFAULT_NOMINATIM_ENDPOINT);
        Url::parse(value).map_err(|source| SettingsError::Endpoint {
            value: value.to_owned(),
            source,
        })
    }

    /// Request timeout, defaulting to ten seconds.
    pub fn geocoder_timeout(&self) -> Duration {
        Duration::from_secs(self.geocoder_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    /// Outbound identity for the geocoder.
    pub fn geocoder_identity(&self) -> NominatimIdentity {
        let defaults = NominatimIdentity::default();
        NominatimIdentity {
            user_agent: self
                .geocoder_user_agent
                .clone()
                .unwrap_or(defaults.user_agent),
            result_limit: self.geocoder_result_limit.unwrap_or(defaults.result_limit),
        }
    }

    /// Device position, present only when both axes are configured.
    pub fn device_position(&self) -> Option<Coordinates> {
        Some(Coordinates::new(self.device_latitude?, self.device_longitude?))
    }
}
