//! The board controller: resolves the current location, fetches timings and
//! temperature, and writes everything to the display sink.

use std::sync::Arc;
use std::time::Duration;

use jamaat_core::{AppError, Config, ScheduleConfig};
use jamaat_geo::{GeoClient, Location};
use jamaat_prayer::time::minutes_since_midnight;
use jamaat_prayer::{
    adjust_times, format_clock, marquee_messages, select_next_jamaat, Fiqh, MarqueeCursor,
    PrayerClient, PrayerError, RawTimings, JUMAH_DISPLAY,
};
use jamaat_weather::{WeatherError, WeatherProvider};

use crate::clock::{LocalClock, TimeSource};
use crate::display::{DisplaySink, Slot};
use crate::error::RefreshError;
use crate::session::Session;
use crate::task::TaskSlot;

pub struct Dashboard {
    pub(crate) geo: GeoClient,
    prayer: PrayerClient,
    weather: WeatherProvider,
    pub(crate) sink: Arc<dyn DisplaySink>,
    clock: Arc<dyn TimeSource>,
    pub(crate) session: Session,
    pub(crate) schedule: ScheduleConfig,
    default_location: String,
    marquee: TaskSlot,
    pub(crate) debounce: TaskSlot,
}

impl Dashboard {
    /// Create a dashboard reading the local system clock
    pub fn new(config: &Config, sink: Arc<dyn DisplaySink>) -> Result<Self, AppError> {
        Self::with_clock(config, sink, Arc::new(LocalClock))
    }

    pub fn with_clock(
        config: &Config,
        sink: Arc<dyn DisplaySink>,
        clock: Arc<dyn TimeSource>,
    ) -> Result<Self, AppError> {
        let client = jamaat_core::http::build_client(&config.services)?;
        let fiqh = Fiqh::from_selector(Some(config.prayer.default_fiqh.as_str()));

        Ok(Self {
            geo: GeoClient::with_client(client.clone(), config),
            prayer: PrayerClient::with_client(client.clone(), config),
            weather: WeatherProvider::with_client(client, config),
            sink,
            clock,
            session: Session::new(config.location.default_text.clone(), fiqh),
            schedule: config.schedule.clone(),
            default_location: config.location.default_text.clone(),
            marquee: TaskSlot::new("marquee"),
            debounce: TaskSlot::new("suggestion debounce"),
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Prayer times then temperature, in that order
    pub async fn refresh_all(&self) {
        let fiqh = self.session.fiqh();
        // Both report their own failures
        let _ = self.refresh_prayer_times(fiqh).await;
        let _ = self.refresh_temperature().await;
    }

    /// Take new location input and refresh everything.
    ///
    /// Blank input falls back to the configured default location.
    pub async fn update_location(&self, text: &str) {
        let trimmed = text.trim();
        let location = if trimmed.is_empty() {
            self.default_location.as_str()
        } else {
            trimmed
        };
        tracing::info!("Location set to {:?}", location);
        self.session.set_location_text(location);
        self.refresh_all().await;
    }

    /// Handle a jurisprudence selector change; refreshes prayer times only.
    pub async fn change_fiqh(&self, value: Option<&str>) {
        let fiqh = Fiqh::from_selector(value);
        self.session.set_fiqh(fiqh);
        let _ = self.refresh_prayer_times(fiqh).await;
    }

    /// Fetch and display prayer times, then show a banner with the outcome.
    pub async fn refresh_prayer_times(&self, fiqh: Fiqh) -> Result<Location, RefreshError> {
        let result = self.load_prayer_times(fiqh).await;

        match &result {
            Ok(location) => {
                let message = format!("Prayer times updated for {}", location.display_label());
                tracing::info!("{}", message);
                self.show_banner(&message);
            }
            Err(e) => {
                tracing::error!("fetch prayer times: {}", e);
                self.show_banner(&e.banner());
            }
        }

        result
    }

    async fn load_prayer_times(&self, fiqh: Fiqh) -> Result<Location, RefreshError> {
        let location = self.geo.resolve(&self.session.location_text()).await?;
        let raw = self.prayer.fetch_timings(&location, fiqh).await?;
        self.session.set_last_raw_timings(raw.clone());

        let adjusted = adjust_times(&raw, fiqh)?;
        self.sink.set_text(Slot::Fajr, &adjusted.fajr);
        self.sink.set_text(Slot::Zuhar, &adjusted.dhuhr);
        self.sink.set_text(Slot::Asr, &adjusted.asr);
        self.sink.set_text(Slot::Magrib, &adjusted.maghrib);
        self.sink.set_text(Slot::Isha, &adjusted.isha);
        self.sink.set_text(Slot::Jumah, JUMAH_DISPLAY);
        self.sink.set_text(Slot::Azaan, &adjusted.maghrib);
        self.sink.set_text(Slot::Tomorrow, &adjusted.fajr);
        self.sink.set_text(Slot::SahriIftar, &adjusted.sunrise);

        self.update_next_jamaat(&raw, fiqh)?;
        self.start_marquee(&raw)?;

        Ok(location)
    }

    /// Fetch and display the current temperature. Failures are logged only.
    pub async fn refresh_temperature(&self) -> Result<(), WeatherError> {
        let result = self.load_temperature().await;
        if let Err(e) = &result {
            tracing::error!("fetch temperature: {}", e);
        }
        result
    }

    async fn load_temperature(&self) -> Result<(), WeatherError> {
        let location = self.geo.resolve(&self.session.location_text()).await?;

        match self.weather.temperature_for(&location, &self.geo).await? {
            Some(temp) => self.sink.set_text(Slot::Temperature, &temp.to_string()),
            None => tracing::debug!("Weather response had no temperature"),
        }
        Ok(())
    }

    /// Recompute and display the next jamaat from raw timings.
    pub fn update_next_jamaat(&self, raw: &RawTimings, fiqh: Fiqh) -> Result<(), PrayerError> {
        let now = minutes_since_midnight(self.clock.now());
        let next = select_next_jamaat(raw, fiqh, now)?;

        self.sink.set_text(Slot::NextJamaatTime, &next.time);
        self.sink.set_text(Slot::NextJamaatName, &next.display_name());
        tracing::debug!("Next jamaat: {} at {}", next.prayer.name(), next.time);
        Ok(())
    }

    /// Show the first marquee message and rotate through the rest.
    ///
    /// Any rotation already running is cancelled first.
    pub fn start_marquee(&self, raw: &RawTimings) -> Result<(), PrayerError> {
        let mut cursor = MarqueeCursor::new(marquee_messages(raw)?);
        if let Some(first) = cursor.advance() {
            self.sink.set_text(Slot::Marquee, first);
        }

        let sink = Arc::clone(&self.sink);
        let period = Duration::from_secs(self.schedule.marquee_rotate_secs.max(1));

        self.marquee.start(async move {
            let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
            loop {
                ticker.tick().await;
                if let Some(message) = cursor.advance() {
                    sink.set_text(Slot::Marquee, message);
                }
            }
        });

        Ok(())
    }

    pub fn marquee_active(&self) -> bool {
        self.marquee.is_active()
    }

    /// Show a banner and hide it after the configured delay.
    ///
    /// Each call schedules its own hide; an earlier timer can hide a later
    /// banner early.
    pub fn show_banner(&self, message: &str) {
        self.sink.show_status(message);

        let sink = Arc::clone(&self.sink);
        let delay = Duration::from_secs(self.schedule.status_banner_secs);
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            sink.hide_status();
        });
    }

    /// Write the current wall-clock time
    pub fn tick_clock(&self) {
        self.sink.set_text(Slot::CurrentTime, &format_clock(self.clock.now()));
    }
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("session", &self.session)
            .field("marquee", &self.marquee)
            .finish_non_exhaustive()
    }
}
