//! Reqwest-backed Nominatim geocoder adapter.
//!
//! This adapter owns transport details only: query construction, timeout and
//! HTTP error mapping, and JSON decoding into domain coordinates.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use super::dto::{SearchResultDto, into_domain_coordinates};
use crate::domain::Coordinates;
use crate::domain::ports::{Geocoder, GeocoderError};

/// Public Nominatim search endpoint.
pub const DEFAULT_NOMINATIM_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";
const DEFAULT_USER_AGENT: &str = "usermap/0.1";
const DEFAULT_RESULT_LIMIT: u8 = 5;
const MAX_RESULT_LIMIT: u8 = 40;

/// Outbound identity and result shaping for Nominatim requests.
pub struct NominatimIdentity {
    /// HTTP user-agent; Nominatim's usage policy requires one.
    pub user_agent: String,
    /// Maximum number of candidates requested per address.
    pub result_limit: u8,
}

impl Default for NominatimIdentity {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            result_limit: DEFAULT_RESULT_LIMIT,
        }
    }
}

/// Geocoder adapter performing HTTP GET searches against one endpoint.
pub struct NominatimGeocoder {
    client: Client,
    endpoint: Url,
    user_agent: String,
    result_limit: u8,
}

impl NominatimGeocoder {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        Self::with_identity(endpoint, timeout, NominatimIdentity::default())
    }

    /// Build an adapter with an explicit outbound identity.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_identity(
        endpoint: Url,
        timeout: Duration,
        identity: NominatimIdentity,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            user_agent: identity.user_agent,
            result_limit: identity.result_limit.clamp(1, MAX_RESULT_LIMIT),
        })
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn geocode(&self, address: &str) -> Result<Vec<Coordinates>, GeocoderError> {
        let url = build_search_url(&self.endpoint, address, self.result_limit)?;
        debug!(%url, "querying nominatim");
        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, self.user_agent.as_str())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        parse_results(body.as_ref())
    }
}

fn build_search_url(endpoint: &Url, address: &str, limit: u8) -> Result<Url, GeocoderError> {
    let query = address.trim();
    if query.is_empty() {
        return Err(GeocoderError::invalid_request("address must not be blank"));
    }

    let mut url = endpoint.clone();
    url.query_pairs_mut()
        .append_pair("q", query)
        .append_pair("format", "jsonv2")
        .append_pair("limit", &limit.to_string());
    Ok(url)
}

fn parse_results(body: &[u8]) -> Result<Vec<Coordinates>, GeocoderError> {
    let decoded: Vec<SearchResultDto> = serde_json::from_slice(body).map_err(|error| {
        GeocoderError::decode(format!("invalid Nominatim JSON payload: {error}"))
    })?;
    into_domain_coordinates(decoded).map_err(GeocoderError::decode)
}

fn map_transport_error(error: reqwest::Error) -> GeocoderError {
    if error.is_timeout() {
        GeocoderError::timeout(error.to_string())
    } else {
        GeocoderError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> GeocoderError {
    let body_preview = body_preview(body);
    let message = if body_preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), body_preview)
    };

    match status {
        StatusCode::TOO_MANY_REQUESTS => GeocoderError::rate_limited(message),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            GeocoderError::timeout(message)
        }
        _ if status.is_client_error() => GeocoderError::invalid_request(message),
        _ => GeocoderError::transport(message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
