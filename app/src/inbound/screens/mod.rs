//! Screen view models.
//!
//! Each screen derives a plain view from domain state and exposes its buttons
//! as async actions. Renderers only read views; they never reach into the
//! domain directly.

pub mod alert;
pub mod main_screen;
pub mod maps_screen;
pub mod placeholder;

pub use alert::Alert;
pub use main_screen::{Button, FieldView, MainScreen, MainView, PermissionBanner};
pub use maps_screen::{LOADING_TEXT, MapsScreen, MapsView};
pub use placeholder::PlaceholderScreen;
