//! Modal alerts shown by the screens.
//!
//! Domain outcomes are mapped to a title and message here, and only here, so
//! every screen shows the same wording for the same outcome.

use std::fmt;

use crate::domain::ports::LocationSourceError;
use crate::domain::{PermissionState, RegistrationError};

/// Title and message of a modal alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alert {
    /// Bold first line.
    pub title: &'static str,
    /// Body text.
    pub message: &'static str,
}

impl Alert {
    const fn new(title: &'static str, message: &'static str) -> Self {
        Self { title, message }
    }

    /// Shown after a user was appended to the registry.
    pub const fn registered() -> Self {
        Self::new("Sucesso", "Usuário cadastrado com sucesso!")
    }

    /// Outcome of the permission request made when the form is first shown.
    ///
    /// A grant is silent.
    pub fn for_mount(outcome: &Result<PermissionState, LocationSourceError>) -> Option<Self> {
        match outcome {
            Ok(PermissionState::Granted) => None,
            Ok(PermissionState::Denied | PermissionState::Unknown) => Some(Self::new(
                "Permissão Negada",
                "Precisamos de permissão de localização para converter endereços em coordenadas.",
            )),
            Err(_) => Some(permission_request_failed()),
        }
    }

    /// Outcome of the banner's "Conceder Permissão" button.
    pub fn for_retry(outcome: &Result<PermissionState, LocationSourceError>) -> Self {
        match outcome {
            Ok(PermissionState::Granted) => Self::new("Sucesso", "Permissão concedida!"),
            Ok(PermissionState::Denied | PermissionState::Unknown) => Self::new(
                "Permissão Negada",
                "A permissão de localização é necessária para o funcionamento do app.",
            ),
            Err(_) => permission_request_failed(),
        }
    }
}

const fn permission_request_failed() -> Alert {
    Alert::new(
        "Erro",
        "Não foi possível solicitar permissão de localização",
    )
}

impl From<&RegistrationError> for Alert {
    fn from(error: &RegistrationError) -> Self {
        match error {
            RegistrationError::Validation(_) => {
                Self::new("Erro", "Por favor, preencha todos os campos")
            }
            RegistrationError::PermissionRequired => Self::new(
                "Permissão Necessária",
                "É necessário conceder permissão de localização para cadastrar usuários.",
            ),
            RegistrationError::GeocodeNotFound { .. } => {
                Self::new("Erro", "Endereço não encontrado. Verifique os dados.")
            }
            RegistrationError::GeocodeService(_) => Self::new(
                "Erro",
                "Não foi possível encontrar o endereço. Verifique a conexão ou tente outro endereço.",
            ),
            RegistrationError::SubmissionInFlight => {
                Self::new("Aguarde", "Um cadastro já está em andamento.")
            }
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}
