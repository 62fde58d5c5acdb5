//! Map composition: registry snapshot + device position → drawable view.
//!
//! The rendering surface is external; this module only decides what it is
//! asked to draw. Marker and legend entries are produced from the same index
//! so the colour of a pin always matches its legend row.

use serde::Serialize;

use super::palette::{DEVICE_PIN_COLOR, MarkerColor, color_for};
use super::registry::RegistrySnapshot;
use super::user::{Coordinates, User, UserId};

/// Zoom span applied on both axes around the device position.
pub const REGION_DELTA_DEGREES: f64 = 0.05;

/// Header shown when the snapshot is empty.
pub const EMPTY_HEADER: &str = "Nenhum usuário cadastrado";

/// Viewport handed to the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapRegion {
    /// Centre of the viewport.
    pub center: Coordinates,
    /// Latitude span in degrees.
    pub latitude_delta: f64,
    /// Longitude span in degrees.
    pub longitude_delta: f64,
}

impl MapRegion {
    /// Fixed-zoom region centred on `center`.
    pub const fn around(center: Coordinates) -> Self {
        Self {
            center,
            latitude_delta: REGION_DELTA_DEGREES,
            longitude_delta: REGION_DELTA_DEGREES,
        }
    }
}

/// How a marker is drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MarkerAppearance {
    /// Stock pin in a flat colour.
    Pin {
        /// Pin colour.
        color: MarkerColor,
    },
    /// Coloured badge carrying a short label, anchored at its bottom centre.
    Badge {
        /// Text inside the badge.
        label: String,
        /// Badge background.
        color: MarkerColor,
    },
}

/// Identity of a marker on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKey {
    /// The device's own position.
    Device,
    /// A registered user.
    User(UserId),
}

/// One marker descriptor for the rendering surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerDescriptor {
    /// Stable key.
    pub key: MarkerKey,
    /// Marker position.
    pub coordinate: Coordinates,
    /// Callout title.
    pub title: String,
    /// Callout description.
    pub description: String,
    /// Custom view.
    pub appearance: MarkerAppearance,
}

impl MarkerDescriptor {
    fn device(position: Coordinates) -> Self {
        Self {
            key: MarkerKey::Device,
            coordinate: position,
            title: "Sua Localização".to_owned(),
            description: "Você está aqui".to_owned(),
            appearance: MarkerAppearance::Pin {
                color: DEVICE_PIN_COLOR,
            },
        }
    }

    fn user(user: &User, color: MarkerColor) -> Self {
        Self {
            key: MarkerKey::User(user.id),
            coordinate: user.coordinates,
            title: user.name.clone(),
            description: user.address.clone(),
            appearance: MarkerAppearance::Badge {
                label: user.first_name().to_owned(),
                color,
            },
        }
    }
}

/// One legend row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendRow {
    /// One-based position in registration order.
    pub position: usize,
    /// Swatch colour, identical to the user's marker.
    pub color: MarkerColor,
    /// Full name.
    pub name: String,
    /// Address text.
    pub address: String,
}

/// Horizontally scrollable strip listing every registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Legend {
    /// Strip title.
    pub title: String,
    /// Rows in registration order.
    pub rows: Vec<LegendRow>,
}

/// Everything the map screen draws once the device position is known.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapComposition {
    /// Header text above the map.
    pub header: String,
    /// Initial viewport.
    pub region: MapRegion,
    /// Whether the surface shows its own live location dot.
    pub shows_user_location: bool,
    /// Device marker first, then one per user in registration order.
    pub markers: Vec<MarkerDescriptor>,
    /// Legend strip, absent when nobody is registered.
    pub legend: Option<Legend>,
}

impl MapComposition {
    /// Compose the map for `users` around the device `position`.
    pub fn compose(users: &RegistrySnapshot, position: Coordinates) -> Self {
        let entries: Vec<(&User, MarkerColor)> = users
            .users()
            .iter()
            .enumerate()
            .map(|(index, user)| (user, color_for(index)))
            .collect();

        let markers = std::iter::once(MarkerDescriptor::device(position))
            .chain(
                entries
                    .iter()
                    .map(|(user, color)| MarkerDescriptor::user(user, *color)),
            )
            .collect();

        let legend = (!entries.is_empty()).then(|| Legend {
            title: "Usuários Cadastrados:".to_owned(),
            rows: entries
                .iter()
                .enumerate()
                .map(|(index, (user, color))| LegendRow {
                    position: index + 1,
                    color: *color,
                    name: user.name.clone(),
                    address: user.address.clone(),
                })
                .collect(),
        });

        Self {
            header: header_text(users.len()),
            region: MapRegion::around(position),
            shows_user_location: true,
            markers,
            legend,
        }
    }

    /// Markers belonging to registered users, in registration order.
    pub fn user_markers(&self) -> impl Iterator<Item = &MarkerDescriptor> {
        self.markers
            .iter()
            .filter(|marker| matches!(marker.key, MarkerKey::User(_)))
    }
}

fn header_text(count: usize) -> String {
    if count == 0 {
        EMPTY_HEADER.to_owned()
    } else {
        format!("{count} usuário(s) no mapa")
    }
}
