//! Registration screen: permission banner, address form, and navigation.
//!
//! The screen is a view model over [`RegistrationFlow`]. `view()` derives
//! everything a renderer needs; the actions return the alert to show, or
//! `None` when the pressed button is hidden or disabled.

use std::sync::Arc;

use tracing::debug;

use super::alert::Alert;
use crate::domain::{
    FormField, MapsParams, NavigationError, Navigator, RegistrationFlow, RouteName, RouteParams,
};

const BANNER_TEXT: &str = "Permissão de localização necessária";
const BANNER_ACTION: &str = "Conceder Permissão";
const MAP_HINT: &str = "Toque em \"Ver Mapa\" para visualizar no mapa";

/// A pressable button as rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    /// Caption.
    pub label: String,
    /// Disabled buttons ignore presses.
    pub enabled: bool,
}

/// Warning strip shown while permission is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionBanner {
    /// Warning text.
    pub text: &'static str,
    /// Caption of the retry button.
    pub action: &'static str,
}

/// One text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    /// Which field.
    pub field: FormField,
    /// Placeholder shown while empty.
    pub placeholder: &'static str,
    /// Current contents.
    pub value: String,
}

/// Snapshot of the registration screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainView {
    /// Screen title.
    pub title: &'static str,
    /// Present only while permission is not granted.
    pub banner: Option<PermissionBanner>,
    /// Inputs in form order.
    pub fields: Vec<FieldView>,
    /// Submit button.
    pub submit: Button,
    /// A submission is outstanding.
    pub busy: bool,
    /// Registered-users counter line.
    pub info: String,
    /// Shown once at least one user is registered.
    pub hint: Option<&'static str>,
    /// Button opening the map with the current registry.
    pub map_button: Button,
}

/// View model of the registration screen.
#[derive(Clone)]
pub struct MainScreen {
    flow: Arc<RegistrationFlow>,
}

impl MainScreen {
    /// Screen over a shared registration flow.
    pub fn new(flow: Arc<RegistrationFlow>) -> Self {
        Self { flow }
    }

    /// The flow backing this screen.
    pub fn flow(&self) -> &RegistrationFlow {
        &self.flow
    }

    /// Derive the current view.
    pub fn view(&self) -> MainView {
        let granted = self.flow.permission().is_granted();
        let count = self.flow.registered_count();
        let form = self.flow.form();

        MainView {
            title: RouteName::Main.title(),
            banner: (!granted).then_some(PermissionBanner {
                text: BANNER_TEXT,
                action: BANNER_ACTION,
            }),
            fields: FormField::ALL
                .iter()
                .map(|&field| FieldView {
                    field,
                    placeholder: field.placeholder(),
                    value: form.get(field).to_owned(),
                })
                .collect(),
            submit: Button {
                label: if granted {
                    "Cadastrar Usuário"
                } else {
                    "Aguardando Permissão"
                }
                .to_owned(),
                enabled: granted,
            },
            busy: self.flow.phase().is_busy(),
            info: format!("Usuários cadastrados: {count}"),
            hint: (count > 0).then_some(MAP_HINT),
            map_button: Button {
                label: format!("Ver Mapa com Usuários ({count})"),
                enabled: count > 0 && granted,
            },
        }
    }

    /// Initial permission request when the screen is first shown.
    pub async fn mount(&self) -> Option<Alert> {
        let outcome = self.flow.mount().await;
        Alert::for_mount(&outcome)
    }

    /// Press the banner's retry button.
    pub async fn retry_permission(&self) -> Option<Alert> {
        if self.flow.permission().is_granted() {
            return None;
        }
        let outcome = self.flow.retry_permission().await;
        Some(Alert::for_retry(&outcome))
    }

    /// Type into one field.
    pub fn set_field(&self, field: FormField, value: impl Into<String>) {
        self.flow.set_field(field, value);
    }

    /// Press the submit button.
    pub async fn submit(&self) -> Option<Alert> {
        if !self.flow.permission().is_granted() {
            debug!("submit pressed while disabled");
            return None;
        }
        Some(match self.flow.submit().await {
            Ok(_) => Alert::registered(),
            Err(error) => Alert::from(&error),
        })
    }

    /// Press the map button, navigating with a snapshot of the registry.
    ///
    /// Returns `false` when the button is disabled.
    ///
    /// # Errors
    ///
    /// Propagates a navigator refusal.
    pub fn open_map(&self, navigator: &mut Navigator) -> Result<bool, NavigationError> {
        if !self.view().map_button.enabled {
            return Ok(false);
        }
        let params = MapsParams {
            usuarios: self.flow.snapshot(),
        };
        navigator.navigate(RouteName::Maps, RouteParams::Maps(params))?;
        Ok(true)
    }
}
