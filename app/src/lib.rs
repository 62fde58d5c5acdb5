//! User registration with address geocoding and a map of registered users.
//!
//! Layout follows a ports-and-adapters split:
//! - `domain`: registration rules, the session registry, permission state,
//!   map composition, navigation, and the ports for geocoding and location.
//! - `outbound`: the Nominatim geocoder and the configured location source.
//! - `inbound`: screen view models and the terminal shell driving them.
//! - `config`: settings loaded via OrthoConfig.

pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;
