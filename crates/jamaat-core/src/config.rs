use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

use crate::error::{AppError, ConfigError};

/// Environment variable that overrides the configured OpenWeather key
pub const OPENWEATHER_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Location defaults
    #[serde(default)]
    pub location: LocationConfig,

    /// Third-party endpoints and credentials
    #[serde(default)]
    pub services: ServiceConfig,

    /// Timer periods
    #[serde(default)]
    pub schedule: ScheduleConfig,

    /// Prayer settings
    #[serde(default)]
    pub prayer: PrayerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Location text used when the input is empty
    pub default_text: String,

    /// City label used when nothing usable can be parsed from the input
    pub default_city: String,

    /// ISO country code appended to geocoding and address queries
    pub country_code: String,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            default_text: "Kulgam 192231".to_string(),
            default_city: "Kulgam".to_string(),
            country_code: "IN".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// OpenWeather base URL (geocoding and current weather)
    pub openweather_url: String,

    /// OpenWeather API key; `OPENWEATHER_API_KEY` takes precedence when set
    #[serde(default)]
    pub openweather_api_key: String,

    /// Aladhan prayer-times base URL
    pub aladhan_url: String,

    /// Nominatim place-search base URL
    pub nominatim_url: String,

    /// Aladhan calculation method
    #[serde(default = "default_calculation_method")]
    pub calculation_method: u8,

    /// User agent sent with every request (Nominatim requires one)
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_calculation_method() -> u8 {
    2
}

fn default_user_agent() -> String {
    format!("Jamaat/{}", env!("CARGO_PKG_VERSION"))
}

fn default_request_timeout() -> u64 {
    10
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            openweather_url: "https://api.openweathermap.org".to_string(),
            openweather_api_key: String::new(),
            aladhan_url: "https://api.aladhan.com/v1".to_string(),
            nominatim_url: "https://nominatim.openstreetmap.org".to_string(),
            calculation_method: default_calculation_method(),
            user_agent: default_user_agent(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    pub clock_tick_secs: u64,
    pub temperature_refresh_minutes: u64,
    pub prayer_refresh_minutes: u64,
    /// How long a status banner stays visible
    pub status_banner_secs: u64,
    pub marquee_rotate_secs: u64,
    /// Quiet period after the last keystroke before searching
    pub suggestion_debounce_ms: u64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            clock_tick_secs: 1,
            temperature_refresh_minutes: 10,
            prayer_refresh_minutes: 60,
            status_banner_secs: 5,
            marquee_rotate_secs: 5,
            suggestion_debounce_ms: 300,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrayerConfig {
    /// Selector value used at startup ("hanafi" or "shafi")
    pub default_fiqh: String,
}

impl Default for PrayerConfig {
    fn default() -> Self {
        Self {
            default_fiqh: "hanafi".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the user config directory, creating it if missing
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from an explicit path, writing defaults if it doesn't exist
    ///
    /// The environment key override is applied after any write, so it never
    /// reaches the file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path).context("Failed to read config file")?;
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?
        } else {
            let config = Self::default();
            config.save_to(path)?;
            tracing::info!("Wrote default configuration to {}", path.display());
            config
        };

        config.override_api_key(std::env::var(OPENWEATHER_KEY_ENV).ok());
        Ok(config)
    }

    fn override_api_key(&mut self, key: Option<String>) {
        if let Some(key) = key.filter(|k| !k.is_empty()) {
            self.services.openweather_api_key = key;
        }
    }

    /// Load configuration and validate it
    ///
    /// Warnings are logged; errors abort loading.
    pub fn load_validated() -> Result<(Self, ValidationResult), AppError> {
        let config = Self::load()?;
        let validation = config.validate();

        if !validation.is_valid() {
            return Err(ConfigError::Invalid(validation.error_summary()).into());
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok((config, validation))
    }

    /// Validate the configuration
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        validate_url(&self.services.openweather_url, "services.openweather_url", &mut result);
        validate_url(&self.services.aladhan_url, "services.aladhan_url", &mut result);
        validate_url(&self.services.nominatim_url, "services.nominatim_url", &mut result);

        if self.services.openweather_api_key.is_empty() {
            result.add_warning(
                "services.openweather_api_key",
                format!(
                    "OpenWeather API key not configured (set {} or the config value) - postal lookup and temperature will fail",
                    OPENWEATHER_KEY_ENV
                ),
            );
        }

        if self.services.request_timeout_secs == 0 {
            result.add_error(
                "services.request_timeout_secs",
                "Request timeout must be greater than 0",
            );
        }

        let country = &self.location.country_code;
        if country.len() != 2 || !country.chars().all(|c| c.is_ascii_alphabetic()) {
            result.add_error(
                "location.country_code",
                format!("Expected a two-letter country code, got: {:?}", country),
            );
        }

        if self.location.default_city.trim().is_empty() {
            result.add_error("location.default_city", "Default city cannot be empty");
        }

        let schedule = &self.schedule;
        for (field, value) in [
            ("schedule.clock_tick_secs", schedule.clock_tick_secs),
            ("schedule.temperature_refresh_minutes", schedule.temperature_refresh_minutes),
            ("schedule.prayer_refresh_minutes", schedule.prayer_refresh_minutes),
            ("schedule.marquee_rotate_secs", schedule.marquee_rotate_secs),
        ] {
            if value == 0 {
                result.add_error(field, "Interval must be greater than 0");
            }
        }

        if schedule.prayer_refresh_minutes > 1440 {
            result.add_warning(
                "schedule.prayer_refresh_minutes",
                "Prayer refresh interval is more than 24 hours",
            );
        }

        match self.prayer.default_fiqh.as_str() {
            "hanafi" | "shafi" => {}
            other => result.add_warning(
                "prayer.default_fiqh",
                format!("Unrecognized fiqh {:?}, times will not be offset", other),
            ),
        }

        result
    }

    /// Save configuration to the user config directory
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("jamaat");

        Ok(config_dir.join("config.toml"))
    }
}

fn validate_url(url_str: &str, field_name: &str, result: &mut ValidationResult) {
    match Url::parse(url_str) {
        Ok(url) => {
            if url.scheme() != "http" && url.scheme() != "https" {
                result.add_error(
                    field_name,
                    format!("URL must use http or https scheme, got: {}", url.scheme()),
                );
            }

            if url.host().is_none() {
                result.add_error(field_name, "URL must have a host");
            }
        }
        Err(e) => {
            result.add_error(field_name, format!("Invalid URL: {}", e));
        }
    }
}
