//! Registered user model and the address form that produces it.
//!
//! A [`User`] only exists once its address has been geocoded, so the type
//! carries resolved [`Coordinates`] rather than an optional position. The
//! [`AddressForm`] is the editable input; [`AddressForm::validate`] turns it
//! into a [`ValidatedAddress`] whose `address_text` is what the geocoder sees.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Maximum characters kept in the state (UF) field.
pub const STATE_MAX_CHARS: usize = 2;

/// Opaque user identifier, time-ordered within a process run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Generate a fresh identifier.
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// WGS84 position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl Coordinates {
    /// Build a coordinate pair.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

/// A registered user placed on the map.
///
/// Serialised field names follow the navigation payload contract so a
/// registry snapshot can be handed to the map route as `usuarios`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Identifier assigned at registration.
    pub id: UserId,
    /// Full name as entered.
    pub name: String,
    /// `"{street}, {number}, {city}, {state}"`.
    pub address: String,
    /// Geocoded position of `address`.
    pub coordinates: Coordinates,
}

impl User {
    /// Create a user from a validated address and its geocoded position.
    pub fn register(address: &ValidatedAddress, coordinates: Coordinates) -> Self {
        Self {
            id: UserId::generate(),
            name: address.name.clone(),
            address: address.address_text(),
            coordinates,
        }
    }

    /// Text before the first space of the name, or the whole name.
    pub fn first_name(&self) -> &str {
        first_name_token(&self.name)
    }
}

/// Return the substring of `name` up to (excluding) the first space.
pub fn first_name_token(name: &str) -> &str {
    name.split_once(' ').map_or(name, |(first, _)| first)
}

/// Editable fields of the registration form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    /// Full name.
    Name,
    /// Street.
    Street,
    /// House number.
    Number,
    /// City.
    City,
    /// Two-letter state code.
    State,
}

impl FormField {
    /// All fields in the order they are validated and shown.
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Street,
        Self::Number,
        Self::City,
        Self::State,
    ];

    /// Placeholder text shown in the empty input.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Nome completo",
            Self::Street => "Rua",
            Self::Number => "Número",
            Self::City => "Cidade",
            Self::State => "Estado (ex: SP, RJ)",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Name => "name",
            Self::Street => "street",
            Self::Number => "number",
            Self::City => "city",
            Self::State => "state",
        };
        f.write_str(label)
    }
}

/// A required form field was left blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("required field `{field}` is empty")]
pub struct ValidationError {
    /// First empty field in form order.
    pub field: FormField,
}

/// Raw registration form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressForm {
    name: String,
    street: String,
    number: String,
    city: String,
    state: String,
}

impl AddressForm {
    /// Replace the value of one field.
    ///
    /// The state field behaves like its input widget: characters are
    /// upper-cased and anything past [`STATE_MAX_CHARS`] is dropped.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Street => self.street = value,
            FormField::Number => self.number = value,
            FormField::City => self.city = value,
            FormField::State => {
                self.state = value.to_uppercase().chars().take(STATE_MAX_CHARS).collect();
            }
        }
    }

    /// Current value of one field.
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Street => &self.street,
            FormField::Number => &self.number,
            FormField::City => &self.city,
            FormField::State => &self.state,
        }
    }

    /// Whether every field is blank.
    pub fn is_empty(&self) -> bool {
        FormField::ALL
            .into_iter()
            .all(|field| self.get(field).trim().is_empty())
    }

    /// Reset every field to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check completeness and produce trimmed values.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] naming the first blank field.
    pub fn validate(&self) -> Result<ValidatedAddress, ValidationError> {
        if let Some(field) = FormField::ALL
            .into_iter()
            .find(|field| self.get(*field).trim().is_empty())
        {
            return Err(ValidationError { field });
        }

        Ok(ValidatedAddress {
            name: self.name.trim().to_owned(),
            street: self.street.trim().to_owned(),
            number: self.number.trim().to_owned(),
            city: self.city.trim().to_owned(),
            state: self.state.trim().to_owned(),
        })
    }
}

/// Complete, trimmed form input ready for geocoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedAddress {
    name: String,
    street: String,
    number: String,
    city: String,
    state: String,
}

impl ValidatedAddress {
    /// Name of the person being registered.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable address handed to the geocoder.
    pub fn address_text(&self) -> String {
        format!(
            "{}, {}, {}, {}",
            self.street, self.number, self.city, self.state
        )
    }
}
