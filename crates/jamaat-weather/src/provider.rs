use jamaat_core::Config;
use jamaat_geo::{Coordinates, GeoClient, Location};
use reqwest::Client;
use tracing::instrument;

use crate::types::{CurrentWeather, WeatherError};

#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Client,
    base_url: String,
    api_key: String,
}

impl WeatherProvider {
    pub fn new(config: &Config) -> Result<Self, WeatherError> {
        let client = jamaat_core::http::build_client(&config.services)?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.services.openweather_url.trim_end_matches('/').to_string(),
            api_key: config.services.openweather_api_key.clone(),
        }
    }

    /// Current conditions at a point, metric units.
    #[instrument(skip(self), level = "debug")]
    pub async fn fetch_current(&self, coords: Coordinates) -> Result<CurrentWeather, WeatherError> {
        let url = format!(
            "{}/data/2.5/weather?lat={}&lon={}&units=metric&appid={}",
            self.base_url,
            coords.latitude,
            coords.longitude,
            urlencoding::encode(&self.api_key),
        );

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(WeatherError::Api(format!("status {}", response.status())));
        }

        response
            .json()
            .await
            .map_err(|e| WeatherError::Api(format!("JSON parse error: {}", e)))
    }

    /// Rounded temperature for a resolved location.
    ///
    /// Without coordinates, the city label is geocoded first.
    #[instrument(skip(self, geo), level = "info")]
    pub async fn temperature_for(
        &self,
        location: &Location,
        geo: &GeoClient,
    ) -> Result<Option<i64>, WeatherError> {
        let coords = match location.coordinates {
            Some(c) => c,
            None => {
                let city = if location.city_label.is_empty() {
                    geo.default_city()
                } else {
                    location.city_label.as_str()
                };
                geo.lookup_city(city).await?
            }
        };

        let weather = self.fetch_current(coords).await?;
        Ok(weather.rounded_temperature())
    }
}
