use jamaat_core::{NetworkError, ReqwestErrorExt};
use jamaat_geo::GeoError;
use serde::Deserialize;

/// Subset of OpenWeather's `data/2.5/weather` response
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeather {
    #[serde(default)]
    pub main: Option<MainReadings>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MainReadings {
    /// Celsius when requested with `units=metric`
    #[serde(default)]
    pub temp: Option<f64>,
}

impl CurrentWeather {
    /// Temperature rounded to the nearest whole degree, halves rounding up
    pub fn rounded_temperature(&self) -> Option<i64> {
        self.main
            .as_ref()
            .and_then(|m| m.temp)
            .map(|t| (t + 0.5).floor() as i64)
    }
}

/// Weather provider errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Weather API error: {0}")]
    Api(String),

    #[error(transparent)]
    Geo(#[from] GeoError),

    #[error(transparent)]
    Network(#[from] NetworkError),
}

impl From<reqwest::Error> for WeatherError {
    fn from(e: reqwest::Error) -> Self {
        WeatherError::Network(e.into_network_error())
    }
}
