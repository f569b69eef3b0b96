use jamaat_core::{NetworkError, ReqwestErrorExt};
use thiserror::Error;

/// Geocoding and place-search errors
#[derive(Debug, Error)]
pub enum GeoError {
    /// The provider rejected the lookup
    #[error("{0}")]
    Resolution(String),

    #[error("City not found: {0}")]
    NotFound(String),

    #[error("Invalid geocoding response: {0}")]
    Parse(String),

    #[error(transparent)]
    Network(#[from] NetworkError),
}

impl From<reqwest::Error> for GeoError {
    fn from(e: reqwest::Error) -> Self {
        GeoError::Network(e.into_network_error())
    }
}

impl GeoError {
    pub fn user_message(&self) -> &'static str {
        match self {
            GeoError::Resolution(_) => "Location lookup failed. Check the PIN code and try again.",
            GeoError::NotFound(_) => "Location not found. Check and try again.",
            GeoError::Parse(_) => "Received an unexpected location response.",
            GeoError::Network(e) => e.user_message(),
        }
    }
}
