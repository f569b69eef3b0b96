//! Location resolution for Jamaat.
//!
//! Turns free-text location input into a postal code or city label and,
//! where possible, coordinates. Geocoding goes through OpenWeather; place
//! suggestions come from Nominatim (OpenStreetMap).

pub mod client;
pub mod error;
pub mod parse;
pub mod types;

pub use client::GeoClient;
pub use error::GeoError;
pub use parse::{extract_postal_code, parse_city_label};
pub use types::{Coordinates, Location, Place, PostalPlace};
