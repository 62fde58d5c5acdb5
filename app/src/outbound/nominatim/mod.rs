//! Nominatim geocoding adapter.

mod dto;
mod http_geocoder;

pub use http_geocoder::{DEFAULT_NOMINATIM_ENDPOINT, NominatimGeocoder, NominatimIdentity};
