use jamaat_core::{NetworkError, ReqwestErrorExt};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrayerError {
    #[error("{0}")]
    Api(String),

    #[error("Prayer timings missing")]
    MissingTimings,

    #[error("Invalid time value: {0:?}")]
    InvalidTime(String),

    #[error(transparent)]
    Network(#[from] NetworkError),
}

impl From<reqwest::Error> for PrayerError {
    fn from(e: reqwest::Error) -> Self {
        PrayerError::Network(e.into_network_error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(PrayerError::MissingTimings.to_string(), "Prayer timings missing");
        assert_eq!(
            PrayerError::Api("Prayer API error".into()).to_string(),
            "Prayer API error"
        );
        assert!(PrayerError::InvalidTime("25:99".into()).to_string().contains("25:99"));
    }
}
