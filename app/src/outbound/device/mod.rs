//! Device location adapters.

mod configured_location;

pub use configured_location::ConfiguredLocationSource;
