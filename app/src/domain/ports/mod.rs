//! Domain ports and supporting types for the hexagonal boundary.
//!
//! The app depends on two external collaborators: a geocoding provider and
//! the device location platform. Map rendering is a pure composition step in
//! the domain and needs no port.

mod macros;
pub(crate) use macros::define_port_error;

mod geocoder;
mod location_source;

#[cfg(test)]
pub use geocoder::MockGeocoder;
pub use geocoder::{FixtureGeocoder, Geocoder, GeocoderError};
#[cfg(test)]
pub use location_source::MockLocationSource;
pub use location_source::{
    FixtureLocationSource, LocationSource, LocationSourceError, PermissionStatus,
};
