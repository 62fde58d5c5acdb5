//! Deterministic marker colours.
//!
//! Colour is a pure function of a user's position in the registry. Past
//! [`PALETTE.len()`](PALETTE) users the colours repeat, so collisions are
//! expected from the sixteenth user onwards.

use std::fmt;

use serde::Serialize;

/// Ordered marker palette.
pub const PALETTE: [MarkerColor; 15] = [
    MarkerColor("#e74c3c"),
    MarkerColor("#3498db"),
    MarkerColor("#2ecc71"),
    MarkerColor("#f39c12"),
    MarkerColor("#9b59b6"),
    MarkerColor("#1abc9c"),
    MarkerColor("#d35400"),
    MarkerColor("#34495e"),
    MarkerColor("#e67e22"),
    MarkerColor("#27ae60"),
    MarkerColor("#2980b9"),
    MarkerColor("#8e44ad"),
    MarkerColor("#c0392b"),
    MarkerColor("#16a085"),
    MarkerColor("#f1c40f"),
];

/// Pin colour used for the device's own marker.
pub const DEVICE_PIN_COLOR: MarkerColor = MarkerColor("blue");

/// CSS-style colour string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MarkerColor(&'static str);

impl MarkerColor {
    /// The colour as written in the palette.
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for MarkerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Colour for the user at `index` in registration order.
pub fn color_for(index: usize) -> MarkerColor {
    index
        .checked_rem(PALETTE.len())
        .and_then(|slot| PALETTE.get(slot))
        .copied()
        .unwrap_or(DEVICE_PIN_COLOR)
}
