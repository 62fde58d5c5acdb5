//! Location permission state shared by every screen that needs it.
//!
//! Both the registration screen and the device-location hook ask for the
//! same permission. They share one [`PermissionGate`] so a grant observed by
//! either is seen by both, and a granted state never re-prompts.

use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, info, warn};

use super::ports::{LocationSource, LocationSourceError, PermissionStatus};

/// Tri-state view of the location permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PermissionState {
    /// Not asked yet, or the last request failed before answering.
    #[default]
    Unknown,
    /// Location access allowed.
    Granted,
    /// Location access refused. Can be requested again.
    Denied,
}

impl PermissionState {
    /// Whether dependent actions may run.
    pub fn is_granted(self) -> bool {
        self == Self::Granted
    }
}

impl From<PermissionStatus> for PermissionState {
    fn from(status: PermissionStatus) -> Self {
        match status {
            PermissionStatus::Granted => Self::Granted,
            PermissionStatus::Denied => Self::Denied,
        }
    }
}

/// Idempotent permission requester over a [`LocationSource`].
pub struct PermissionGate {
    source: Arc<dyn LocationSource>,
    state: Mutex<PermissionState>,
}

impl PermissionGate {
    /// Wrap a location source. The initial state is [`PermissionState::Unknown`].
    pub fn new(source: Arc<dyn LocationSource>) -> Self {
        Self {
            source,
            state: Mutex::new(PermissionState::Unknown),
        }
    }

    /// Last known permission state.
    pub fn state(&self) -> PermissionState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Request permission, short-circuiting when already granted.
    ///
    /// # Errors
    ///
    /// Returns the platform error when the request itself fails; the stored
    /// state is left unchanged in that case.
    pub async fn request(&self) -> Result<PermissionState, LocationSourceError> {
        let current = self.state();
        if current.is_granted() {
            debug!("location permission already granted");
            return Ok(current);
        }

        let status = self.source.request_permission().await.inspect_err(|error| {
            warn!(%error, "location permission request failed");
        })?;
        let next = PermissionState::from(status);
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if !state.is_granted() {
            *state = next;
        }
        info!(state = ?*state, "location permission resolved");
        Ok(*state)
    }

    /// The underlying location source, for position reads.
    pub(crate) fn source(&self) -> &dyn LocationSource {
        self.source.as_ref()
    }
}
