//! Geocoding and place-search client.
//!
//! Postal-code and city lookups use OpenWeather's geocoding API; free-text
//! suggestions use Nominatim (OpenStreetMap), which needs no API key.

use jamaat_core::Config;
use reqwest::Client;
use tracing::instrument;

use crate::error::GeoError;
use crate::parse::{extract_postal_code, parse_city_label};
use crate::types::{Coordinates, Location, Place, PostalPlace};

/// Maximum number of place suggestions returned
pub const MAX_SUGGESTIONS: usize = 5;

#[derive(Debug, Clone)]
pub struct GeoClient {
    client: Client,
    openweather_url: String,
    nominatim_url: String,
    api_key: String,
    country_code: String,
    default_city: String,
}

impl GeoClient {
    pub fn new(config: &Config) -> Result<Self, GeoError> {
        let client = jamaat_core::http::build_client(&config.services)?;
        Ok(Self::with_client(client, config))
    }

    /// Build on an existing reqwest client (shared connection pool)
    pub fn with_client(client: Client, config: &Config) -> Self {
        Self {
            client,
            openweather_url: config.services.openweather_url.trim_end_matches('/').to_string(),
            nominatim_url: config.services.nominatim_url.trim_end_matches('/').to_string(),
            api_key: config.services.openweather_api_key.clone(),
            country_code: config.location.country_code.clone(),
            default_city: config.location.default_city.clone(),
        }
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn default_city(&self) -> &str {
        &self.default_city
    }

    /// Resolve free-text location input.
    ///
    /// A postal code is geocoded to coordinates and an authoritative city
    /// name. Without one, only the parsed city label is returned.
    #[instrument(skip(self), level = "debug")]
    pub async fn resolve(&self, text: &str) -> Result<Location, GeoError> {
        let Some(pin) = extract_postal_code(text) else {
            return Ok(Location {
                postal_code: None,
                city_label: parse_city_label(text, &self.default_city),
                coordinates: None,
            });
        };

        let place = self.lookup_postal_code(&pin).await?;
        let city_label = place
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| parse_city_label(text, &self.default_city));

        tracing::debug!("Resolved {} to {}", pin, city_label);

        Ok(Location {
            postal_code: Some(pin),
            city_label,
            coordinates: Some(place.coordinates),
        })
    }

    /// Look up a postal code within the configured country.
    #[instrument(skip(self), level = "debug")]
    pub async fn lookup_postal_code(&self, pin: &str) -> Result<PostalPlace, GeoError> {
        let url = format!(
            "{}/geo/1.0/zip?zip={},{}&appid={}",
            self.openweather_url,
            urlencoding::encode(pin),
            urlencoding::encode(&self.country_code),
            urlencoding::encode(&self.api_key),
        );

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            tracing::debug!("Postal geocoding returned status {}", response.status());
            return Err(GeoError::Resolution("PIN geocoding failed".to_string()));
        }

        response
            .json()
            .await
            .map_err(|e| GeoError::Parse(e.to_string()))
    }

    /// Look up a city name within the configured country, first match only.
    #[instrument(skip(self), level = "debug")]
    pub async fn lookup_city(&self, city: &str) -> Result<Coordinates, GeoError> {
        let url = format!(
            "{}/geo/1.0/direct?q={},{}&limit=1&appid={}",
            self.openweather_url,
            urlencoding::encode(city),
            urlencoding::encode(&self.country_code),
            urlencoding::encode(&self.api_key),
        );

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            tracing::debug!("City geocoding returned status {}", response.status());
            return Err(GeoError::Resolution("City geocoding failed".to_string()));
        }

        let matches: Vec<Coordinates> = response
            .json()
            .await
            .map_err(|e| GeoError::Parse(e.to_string()))?;

        matches
            .into_iter()
            .next()
            .ok_or_else(|| GeoError::NotFound(city.to_string()))
    }

    /// Free-text place search, at most [`MAX_SUGGESTIONS`] rows.
    #[instrument(skip(self), level = "debug")]
    pub async fn search_places(&self, query: &str) -> Result<Vec<Place>, GeoError> {
        let url = format!(
            "{}/search?format=json&limit={}&q={}",
            self.nominatim_url,
            MAX_SUGGESTIONS,
            urlencoding::encode(query),
        );

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            tracing::debug!("Place search returned status {}", response.status());
            return Err(GeoError::Resolution("Suggestion request failed".to_string()));
        }

        let mut places: Vec<Place> = response
            .json()
            .await
            .map_err(|e| GeoError::Parse(e.to_string()))?;
        places.truncate(MAX_SUGGESTIONS);

        Ok(places)
    }
}
