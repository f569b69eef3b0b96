use serde::{Deserialize, Serialize};

/// Latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lon")]
    pub longitude: f64,
}

/// The location currently in effect, rebuilt from the location text on
/// every refresh.
///
/// Coordinates are only present when a postal code was found and geocoded;
/// otherwise downstream lookups fall back to the city label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub postal_code: Option<String>,
    pub city_label: String,
    pub coordinates: Option<Coordinates>,
}

impl Location {
    /// Human-readable label, e.g. "Kulgam (192231)"
    pub fn display_label(&self) -> String {
        match &self.postal_code {
            Some(pin) => format!("{} ({})", self.city_label, pin),
            None => self.city_label.clone(),
        }
    }
}

/// Result of a postal-code lookup (OpenWeather `geo/1.0/zip`)
#[derive(Debug, Clone, Deserialize)]
pub struct PostalPlace {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub coordinates: Coordinates,
}

/// A place-search result row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    pub display_name: String,
}
