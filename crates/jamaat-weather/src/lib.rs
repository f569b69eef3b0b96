//! Current temperature for Jamaat via the OpenWeather API.

pub mod provider;
pub mod types;

pub use provider::WeatherProvider;
pub use types::{CurrentWeather, WeatherError};
