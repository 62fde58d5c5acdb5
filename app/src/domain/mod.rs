//! Domain primitives, services, and ports.
//!
//! Purpose: own the registration rules, the session registry, the map
//! composition, and navigation state without depending on any adapter.
//!
//! Public surface:
//! - `RegistrationFlow`: form, registry, and the submit state machine.
//! - `PermissionGate` / `DeviceLocation`: shared permission and the one-shot
//!   position lookup.
//! - `MapComposition`: what the map surface draws for a snapshot.
//! - `Navigator`: four-route stack.

pub mod error;
pub mod location;
pub mod map_view;
pub mod navigation;
pub mod palette;
pub mod permission;
pub mod ports;
pub mod registration;
pub mod registry;
pub mod user;

pub use self::error::{LocationError, RegistrationError};
pub use self::location::DeviceLocation;
pub use self::map_view::{
    Legend, LegendRow, MapComposition, MapRegion, MarkerAppearance, MarkerDescriptor, MarkerKey,
};
pub use self::navigation::{
    MapsParams, NavigationError, Navigator, RouteEntry, RouteName, RouteParams,
};
pub use self::palette::{MarkerColor, PALETTE, color_for};
pub use self::permission::{PermissionGate, PermissionState};
pub use self::registration::{RegistrationFlow, RegistrationPhase};
pub use self::registry::{RegistrySnapshot, UserRegistry};
pub use self::user::{AddressForm, Coordinates, FormField, User, UserId, ValidationError};
