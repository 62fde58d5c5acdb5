//! DTOs for decoding Nominatim search responses.
//!
//! Nominatim encodes coordinates as decimal strings; decoding goes through
//! these transport DTOs first and then maps into domain coordinates in one
//! pass, preserving the provider's ranking order.

use serde::Deserialize;

use crate::domain::Coordinates;

#[derive(Debug, Deserialize)]
pub(super) struct SearchResultDto {
    #[serde(default)]
    pub(super) place_id: Option<u64>,
    pub(super) lat: String,
    pub(super) lon: String,
}

impl SearchResultDto {
    pub(super) fn into_coordinates(self) -> Result<Coordinates, String> {
        let label = self
            .place_id
            .map_or_else(|| "result".to_owned(), |id| format!("place {id}"));
        let latitude = parse_degrees(&self.lat, &label, "lat")?;
        let longitude = parse_degrees(&self.lon, &label, "lon")?;
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(format!("{label} lies outside WGS84 ranges"));
        }
        Ok(Coordinates::new(latitude, longitude))
    }
}

fn parse_degrees(raw: &str, label: &str, field: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|error| format!("{label} has unparsable {field} `{raw}`: {error}"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("{label} has non-finite {field}"))
    }
}

pub(super) fn into_domain_coordinates(
    results: Vec<SearchResultDto>,
) -> Result<Vec<Coordinates>, String> {
    results
        .into_iter()
        .map(SearchResultDto::into_coordinates)
        .collect()
}
