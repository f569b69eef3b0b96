use jamaat_geo::GeoError;
use jamaat_prayer::PrayerError;
use thiserror::Error;

/// Failure of a prayer-time refresh; surfaced to the user as a banner
#[derive(Debug, Error)]
pub enum RefreshError {
    #[error(transparent)]
    Location(#[from] GeoError),

    #[error(transparent)]
    Prayer(#[from] PrayerError),
}

impl RefreshError {
    /// Banner text shown for a failed refresh
    pub fn banner(&self) -> String {
        format!("Error fetching prayer times: {}", self)
    }
}
