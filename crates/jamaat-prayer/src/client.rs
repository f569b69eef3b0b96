//! Aladhan prayer-times API client.

use jamaat_core::Config;
use jamaat_geo::Location;
use reqwest::Client;
use serde::Deserialize;
use tracing::instrument;

use crate::error::PrayerError;
use crate::types::{Fiqh, RawTimings};

#[derive(Debug, Deserialize)]
struct AladhanResponse {
    data: Option<AladhanData>,
}

#[derive(Debug, Deserialize)]
struct AladhanData {
    timings: Option<serde_json::Value>,
}

#[derive(Debug, Clone)]
pub struct PrayerClient {
    client: Client,
    base_url: String,
    method: u8,
    country_code: String,
}

impl PrayerClient {
    pub fn new(config: &Config) -> Result<Self, PrayerError> {
        let client = jamaat_core::http::build_client(&config.services)?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.services.aladhan_url.trim_end_matches('/').to_string(),
            method: config.services.calculation_method,
            country_code: config.location.country_code.clone(),
        }
    }

    /// Build the request URL: by coordinates when known, otherwise by address.
    fn timings_url(&self, location: &Location, fiqh: Fiqh) -> String {
        match location.coordinates {
            Some(coords) => format!(
                "{}/timings?latitude={}&longitude={}&method={}&school={}",
                self.base_url,
                coords.latitude,
                coords.longitude,
                self.method,
                fiqh.school_code(),
            ),
            None => format!(
                "{}/timingsByAddress?address={}&method={}&school={}",
                self.base_url,
                urlencoding::encode(&format!("{}, {}", location.city_label, self.country_code)),
                self.method,
                fiqh.school_code(),
            ),
        }
    }

    /// Fetch today's raw timings for a location.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch_timings(
        &self,
        location: &Location,
        fiqh: Fiqh,
    ) -> Result<RawTimings, PrayerError> {
        let url = self.timings_url(location, fiqh);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            tracing::debug!("Aladhan returned status {}", response.status());
            return Err(PrayerError::Api("Prayer API error".to_string()));
        }

        let body: AladhanResponse = response
            .json()
            .await
            .map_err(|e| PrayerError::Api(format!("JSON parse error: {}", e)))?;

        let timings = body
            .data
            .and_then(|d| d.timings)
            .ok_or(PrayerError::MissingTimings)?;

        serde_json::from_value(timings).map_err(|e| {
            tracing::debug!("Incomplete timings: {}", e);
            PrayerError::MissingTimings
        })
    }
}
