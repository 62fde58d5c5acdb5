//! Outbound adapters implementing domain ports.

pub mod device;
pub mod nominatim;
