//! Shared port doubles for the behaviour suites.

#![expect(
    dead_code,
    reason = "each behaviour suite uses a different subset of the shared doubles"
)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use tokio::runtime::{Builder, Runtime};
use usermap::domain::ports::{
    Geocoder, GeocoderError, LocationSource, LocationSourceError, PermissionStatus,
};
use usermap::domain::{
    Coordinates, DeviceLocation, FormField, PermissionGate, RegistrationFlow,
};

/// Geocoder answering from a script and recording every query.
#[derive(Default)]
pub struct RecordingGeocoder {
    answer: Mutex<Option<Result<Vec<Coordinates>, GeocoderError>>>,
    queries: Mutex<Vec<String>>,
}

impl RecordingGeocoder {
    pub fn answer_with(&self, answer: Result<Vec<Coordinates>, GeocoderError>) {
        *self.answer.lock().unwrap_or_else(PoisonError::into_inner) = Some(answer);
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl Geocoder for RecordingGeocoder {
    async fn geocode(&self, address: &str) -> Result<Vec<Coordinates>, GeocoderError> {
        self.queries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(address.to_owned());
        self.answer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// Location source whose permission answers are consumed in order; the last
/// answer repeats.
pub struct ScriptedLocationSource {
    answers: Mutex<VecDeque<PermissionStatus>>,
    position: Mutex<Option<Coordinates>>,
    prompts: Mutex<usize>,
}

impl ScriptedLocationSource {
    pub fn answering(answers: &[PermissionStatus]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().copied().collect()),
            position: Mutex::new(None),
            prompts: Mutex::new(0),
        }
    }

    pub fn place_device_at(&self, position: Coordinates) {
        *self.position.lock().unwrap_or_else(PoisonError::into_inner) = Some(position);
    }

    pub fn prompts(&self) -> usize {
        *self.prompts.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl LocationSource for ScriptedLocationSource {
    async fn request_permission(&self) -> Result<PermissionStatus, LocationSourceError> {
        *self.prompts.lock().unwrap_or_else(PoisonError::into_inner) += 1;
        let mut answers = self.answers.lock().unwrap_or_else(PoisonError::into_inner);
        let answer = if answers.len() > 1 {
            answers.pop_front()
        } else {
            answers.front().copied()
        };
        answer.ok_or_else(|| LocationSourceError::platform("no scripted answer"))
    }

    async fn current_position(&self) -> Result<Coordinates, LocationSourceError> {
        self.position
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .ok_or_else(|| LocationSourceError::unavailable("no scripted position"))
    }
}

/// Ports and services wired the way the binary wires them.
pub struct App {
    pub geocoder: Arc<RecordingGeocoder>,
    pub source: Arc<ScriptedLocationSource>,
    pub gate: Arc<PermissionGate>,
    pub flow: Arc<RegistrationFlow>,
}

impl App {
    pub fn new(answers: &[PermissionStatus]) -> Self {
        let geocoder = Arc::new(RecordingGeocoder::default());
        let source = Arc::new(ScriptedLocationSource::answering(answers));
        let gate = Arc::new(PermissionGate::new(source.clone()));
        let flow = Arc::new(RegistrationFlow::new(Arc::clone(&gate), geocoder.clone()));
        Self {
            geocoder,
            source,
            gate,
            flow,
        }
    }

    pub fn device_location(&self) -> DeviceLocation {
        DeviceLocation::new(Arc::clone(&self.gate))
    }
}

pub fn runtime() -> Runtime {
    Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("create runtime")
}

pub fn field_named(name: &str) -> FormField {
    match name {
        "nome" => FormField::Name,
        "rua" => FormField::Street,
        "numero" => FormField::Number,
        "cidade" => FormField::City,
        "estado" => FormField::State,
        other => panic!("unknown form field: {other}"),
    }
}

pub fn permission_named(name: &str) -> PermissionStatus {
    match name {
        "granted" => PermissionStatus::Granted,
        "denied" => PermissionStatus::Denied,
        other => panic!("unknown permission answer: {other}"),
    }
}

pub fn parse_coordinates(text: &str) -> Coordinates {
    let (latitude, longitude) = text.split_once(',').expect("latitude, longitude");
    Coordinates::new(
        latitude.trim().parse().expect("latitude"),
        longitude.trim().parse().expect("longitude"),
    )
}
