//! Stack navigator over the app's four routes.
//!
//! Navigating to a route already on the stack pops back to it instead of
//! pushing a second copy, so the stack never revisits a route. Only the map
//! route carries a payload.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::registry::RegistrySnapshot;

/// Named destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RouteName {
    /// Registration form, the initial route.
    Main,
    /// Map of registered users.
    Maps,
    /// Charts placeholder.
    Graficos,
    /// Camera placeholder.
    Camera,
}

impl RouteName {
    /// Header title shown by the navigator.
    pub fn title(self) -> &'static str {
        match self {
            Self::Main => "Cadastro de Usuários",
            Self::Maps => "Mapa de Usuários",
            Self::Graficos => "Graficos",
            Self::Camera => "Camera",
        }
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Payload of the map route.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MapsParams {
    /// Registry snapshot taken when navigating; absent means empty.
    #[serde(default)]
    pub usuarios: RegistrySnapshot,
}

/// Parameters passed along with a navigation request.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RouteParams {
    /// No payload.
    #[default]
    None,
    /// Payload for [`RouteName::Maps`].
    Maps(MapsParams),
}

/// Navigation requests the stack refuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// The destination does not take a payload.
    #[error("route {route} does not accept parameters")]
    UnexpectedParams {
        /// Destination that was requested.
        route: RouteName,
    },
}

/// One entry on the stack.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteEntry {
    /// Which screen.
    pub name: RouteName,
    /// Payload handed to the screen.
    pub params: RouteParams,
    /// Changes whenever the entry is pushed or its params replaced.
    pub key: u64,
}

impl RouteEntry {
    /// Map payload, defaulting to an empty snapshot.
    pub fn maps_params(&self) -> MapsParams {
        match &self.params {
            RouteParams::Maps(params) => params.clone(),
            RouteParams::None => MapsParams::default(),
        }
    }
}

/// Push/pop navigator rooted at [`RouteName::Main`].
#[derive(Debug, Clone)]
pub struct Navigator {
    root: RouteEntry,
    pushed: Vec<RouteEntry>,
    next_key: u64,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Navigator showing the initial route.
    pub fn new() -> Self {
        Self {
            root: RouteEntry {
                name: RouteName::Main,
                params: RouteParams::None,
                key: 0,
            },
            pushed: Vec::new(),
            next_key: 1,
        }
    }

    fn take_key(&mut self) -> u64 {
        let key = self.next_key;
        self.next_key += 1;
        key
    }

    /// Entry currently on top.
    pub fn current(&self) -> &RouteEntry {
        self.pushed.last().unwrap_or(&self.root)
    }

    fn current_mut(&mut self) -> &mut RouteEntry {
        self.pushed.last_mut().unwrap_or(&mut self.root)
    }

    /// Route names from root to top.
    pub fn routes(&self) -> Vec<RouteName> {
        std::iter::once(&self.root)
            .chain(&self.pushed)
            .map(|entry| entry.name)
            .collect()
    }

    /// Whether `back` would do anything.
    pub fn can_go_back(&self) -> bool {
        !self.pushed.is_empty()
    }

    /// Go to `name`, pushing it or popping back to an existing entry.
    ///
    /// # Errors
    ///
    /// [`NavigationError::UnexpectedParams`] when a payload is passed to a
    /// route that takes none.
    pub fn navigate(
        &mut self,
        name: RouteName,
        params: RouteParams,
    ) -> Result<&RouteEntry, NavigationError> {
        let params = match (name, params) {
            (RouteName::Maps, RouteParams::None) => RouteParams::Maps(MapsParams::default()),
            (RouteName::Maps, params @ RouteParams::Maps(_)) | (_, params @ RouteParams::None) => {
                params
            }
            (route, RouteParams::Maps(_)) => {
                return Err(NavigationError::UnexpectedParams { route });
            }
        };

        if self.root.name == name {
            self.pushed.clear();
        } else if let Some(position) = self.pushed.iter().position(|entry| entry.name == name) {
            self.pushed.truncate(position + 1);
        } else {
            let key = self.take_key();
            self.pushed.push(RouteEntry { name, params, key });
            return Ok(self.current());
        }

        if self.current().params != params {
            let key = self.take_key();
            let entry = self.current_mut();
            entry.params = params;
            entry.key = key;
        }
        Ok(self.current())
    }

    /// Pop the top entry. Returns `false` at the root.
    pub fn back(&mut self) -> bool {
        self.pushed.pop().is_some()
    }
}

#[cfg(test)]
mod tests {
    //! Stack discipline and payload rules.

    use super::*;
    use crate::domain::user::{Coordinates, User, UserId};
    use rstest::rstest;

    fn snapshot(names: &[&str]) -> RegistrySnapshot {
        names
            .iter()
            .map(|name| User {
                id: UserId::generate(),
                name: (*name).to_owned(),
                address: "Rua B, 2, Belém, PA".to_owned(),
                coordinates: Coordinates::new(-1.45, -48.5),
            })
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn starts_at_main_and_cannot_go_back() {
        let mut navigator = Navigator::new();
        assert_eq!(navigator.current().name, RouteName::Main);
        assert!(!navigator.back());
        assert_eq!(navigator.routes(), [RouteName::Main]);
    }

    #[test]
    fn push_then_pop_returns_to_previous() {
        let mut navigator = Navigator::new();
        navigator
            .navigate(RouteName::Graficos, RouteParams::None)
            .expect("navigate");
        assert_eq!(navigator.routes(), [RouteName::Main, RouteName::Graficos]);
        assert!(navigator.back());
        assert_eq!(navigator.current().name, RouteName::Main);
    }

    #[test]
    fn revisiting_a_route_pops_back_to_it() {
        let mut navigator = Navigator::new();
        navigator
            .navigate(RouteName::Camera, RouteParams::None)
            .expect("navigate");
        navigator
            .navigate(RouteName::Graficos, RouteParams::None)
            .expect("navigate");
        navigator
            .navigate(RouteName::Main, RouteParams::None)
            .expect("navigate");
        assert_eq!(navigator.routes(), [RouteName::Main]);
    }

    #[test]
    fn maps_receives_snapshot_payload() {
        let mut navigator = Navigator::new();
        let params = MapsParams {
            usuarios: snapshot(&["Ana", "Bia"]),
        };
        let entry = navigator
            .navigate(RouteName::Maps, RouteParams::Maps(params))
            .expect("navigate");
        assert_eq!(entry.maps_params().usuarios.len(), 2);
    }

    #[test]
    fn maps_without_payload_defaults_to_empty() {
        let mut navigator = Navigator::new();
        let entry = navigator
            .navigate(RouteName::Maps, RouteParams::None)
            .expect("navigate");
        assert!(entry.maps_params().usuarios.is_empty());
    }

    #[test]
    fn replacing_maps_params_changes_entry_key() {
        let mut navigator = Navigator::new();
        let first_key = navigator
            .navigate(RouteName::Maps, RouteParams::None)
            .expect("navigate")
            .key;
        let second_key = navigator
            .navigate(
                RouteName::Maps,
                RouteParams::Maps(MapsParams {
                    usuarios: snapshot(&["Ana"]),
                }),
            )
            .expect("navigate")
            .key;
        assert_ne!(first_key, second_key);
        assert_eq!(navigator.routes(), [RouteName::Main, RouteName::Maps]);
    }

    #[rstest]
    #[case(RouteName::Main)]
    #[case(RouteName::Graficos)]
    #[case(RouteName::Camera)]
    fn only_maps_accepts_a_payload(#[case] route: RouteName) {
        let mut navigator = Navigator::new();
        let error = navigator
            .navigate(route, RouteParams::Maps(MapsParams::default()))
            .expect_err("payload rejected");
        assert_eq!(error, NavigationError::UnexpectedParams { route });
    }

    #[test]
    fn maps_params_payload_defaults_when_absent() {
        let params: MapsParams = serde_json::from_str("{}").expect("deserialise");
        assert!(params.usuarios.is_empty());
    }
}
