//! Registration flow: form → validation → permission → geocode → registry.
//!
//! The steps of one submission run strictly in that order. The flow keeps a
//! phase marker so a second submission while one is outstanding is rejected
//! instead of racing the first. The mutex guarding the state is never held
//! across an `.await`.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{info, warn};

use super::error::RegistrationError;
use super::permission::{PermissionGate, PermissionState};
use super::ports::{Geocoder, LocationSourceError};
use super::registry::{RegistrySnapshot, UserRegistry};
use super::user::{AddressForm, FormField, User};

/// Where the form currently is in the submission state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationPhase {
    /// Every field is blank.
    FormEmpty,
    /// At least one field has content.
    FormFilled,
    /// Checking the form and the permission.
    Validating,
    /// Waiting for the geocoder.
    Geocoding,
}

impl RegistrationPhase {
    /// Whether a submission is outstanding.
    pub fn is_busy(self) -> bool {
        matches!(self, Self::Validating | Self::Geocoding)
    }

    fn resting(form: &AddressForm) -> Self {
        if form.is_empty() {
            Self::FormEmpty
        } else {
            Self::FormFilled
        }
    }
}

#[derive(Debug)]
struct FlowState {
    form: AddressForm,
    registry: UserRegistry,
    phase: RegistrationPhase,
}

/// Owner of the registration form and the session's user registry.
pub struct RegistrationFlow {
    gate: Arc<PermissionGate>,
    geocoder: Arc<dyn Geocoder>,
    state: Mutex<FlowState>,
}

impl RegistrationFlow {
    /// Create a flow with an empty form and an empty registry.
    pub fn new(gate: Arc<PermissionGate>, geocoder: Arc<dyn Geocoder>) -> Self {
        Self {
            gate,
            geocoder,
            state: Mutex::new(FlowState {
                form: AddressForm::default(),
                registry: UserRegistry::new(),
                phase: RegistrationPhase::FormEmpty,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, FlowState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Initial permission request performed when the form is first shown.
    ///
    /// # Errors
    ///
    /// Propagates a failing platform request.
    pub async fn mount(&self) -> Result<PermissionState, LocationSourceError> {
        self.gate.request().await
    }

    /// Ask for permission again after a denial.
    ///
    /// # Errors
    ///
    /// Propagates a failing platform request.
    pub async fn retry_permission(&self) -> Result<PermissionState, LocationSourceError> {
        self.gate.request().await
    }

    /// Current permission state as seen by the gate.
    pub fn permission(&self) -> PermissionState {
        self.gate.state()
    }

    /// Update one form field.
    pub fn set_field(&self, field: FormField, value: impl Into<String>) {
        let mut state = self.lock();
        state.form.set(field, value);
        if !state.phase.is_busy() {
            state.phase = RegistrationPhase::resting(&state.form);
        }
    }

    /// Copy of the current form contents.
    pub fn form(&self) -> AddressForm {
        self.lock().form.clone()
    }

    /// Current phase of the state machine.
    pub fn phase(&self) -> RegistrationPhase {
        self.lock().phase
    }

    /// Number of users registered so far.
    pub fn registered_count(&self) -> usize {
        self.lock().registry.len()
    }

    /// Immutable copy of the registry for navigation.
    pub fn snapshot(&self) -> RegistrySnapshot {
        self.lock().registry.snapshot()
    }

    /// Submit the form.
    ///
    /// On success the new user is appended to the registry and the form is
    /// cleared. On any error the registry is untouched and the form is kept.
    ///
    /// # Errors
    ///
    /// See [`RegistrationError`] for the individual outcomes.
    pub async fn submit(&self) -> Result<User, RegistrationError> {
        let submission = Submission::begin(self)?;

        let address = {
            let state = self.lock();
            state.form.validate()?
        };
        if !self.gate.state().is_granted() {
            warn!("registration blocked: location permission not granted");
            return Err(RegistrationError::PermissionRequired);
        }

        submission.advance(RegistrationPhase::Geocoding);
        let address_text = address.address_text();
        let matches = self.geocoder.geocode(&address_text).await.map_err(|error| {
            warn!(%error, transient = error.is_transient(), "geocoding failed");
            RegistrationError::GeocodeService(error)
        })?;
        let Some(coordinates) = matches.first().copied() else {
            info!(address = %address_text, "geocoding returned no match");
            return Err(RegistrationError::GeocodeNotFound {
                address: address_text,
            });
        };

        let user = User::register(&address, coordinates);
        let mut state = self.lock();
        state.registry.append(user.clone());
        state.form.clear();
        info!(
            user_id = %user.id,
            candidates = matches.len(),
            registered = state.registry.len(),
            "user registered"
        );
        Ok(user)
    }
}

/// Marks a submission as in flight and restores the resting phase on drop.
struct Submission<'a> {
    flow: &'a RegistrationFlow,
}

impl<'a> Submission<'a> {
    fn begin(flow: &'a RegistrationFlow) -> Result<Self, RegistrationError> {
        let mut state = flow.lock();
        if state.phase.is_busy() {
            return Err(RegistrationError::SubmissionInFlight);
        }
        state.phase = RegistrationPhase::Validating;
        Ok(Self { flow })
    }

    fn advance(&self, phase: RegistrationPhase) {
        self.flow.lock().phase = phase;
    }
}

impl Drop for Submission<'_> {
    fn drop(&mut self) {
        let mut state = self.flow.lock();
        state.phase = RegistrationPhase::resting(&state.form);
    }
}
