//! Periodic tasks: wall clock, temperature poll and prayer-time poll.
//!
//! Every task stops when the shared shutdown token is cancelled.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::dashboard::Dashboard;

/// Start the clock, run a full refresh, then schedule the polls.
///
/// The clock is written once before the refresh begins.
pub async fn boot(dashboard: Arc<Dashboard>, shutdown: CancellationToken) -> Vec<JoinHandle<()>> {
    dashboard.tick_clock();
    let period = clock_period(&dashboard);
    let mut handles = vec![spawn_clock_after(Arc::clone(&dashboard), period, shutdown.clone())];

    dashboard.refresh_all().await;

    handles.extend(spawn_schedules(dashboard, shutdown));
    tracing::info!("Dashboard started");
    handles
}

/// Write the current time every tick, starting immediately
pub fn spawn_clock(dashboard: Arc<Dashboard>, shutdown: CancellationToken) -> JoinHandle<()> {
    spawn_clock_after(dashboard, Duration::ZERO, shutdown)
}

fn clock_period(dashboard: &Dashboard) -> Duration {
    Duration::from_secs(dashboard.schedule.clock_tick_secs)
}

fn spawn_clock_after(
    dashboard: Arc<Dashboard>,
    first_delay: Duration,
    shutdown: CancellationToken,
) -> JoinHandle<()> {
    let period = clock_period(&dashboard);
    spawn_periodic("clock", period, first_delay, shutdown, move || {
        let dashboard = Arc::clone(&dashboard);
        async move { dashboard.tick_clock() }
    })
}

/// Schedule the temperature and prayer-time polls.
///
/// The first poll of each fires one full period from now; callers are
/// expected to have refreshed already.
pub fn spawn_schedules(dashboard: Arc<Dashboard>, shutdown: CancellationToken) -> Vec<JoinHandle<()>> {
    let temperature_period = minutes(dashboard.schedule.temperature_refresh_minutes);
    let prayer_period = minutes(dashboard.schedule.prayer_refresh_minutes);
    spawn_polls(dashboard, temperature_period, prayer_period, shutdown)
}

fn spawn_polls(
    dashboard: Arc<Dashboard>,
    temperature_period: Duration,
    prayer_period: Duration,
    shutdown: CancellationToken,
) -> Vec<JoinHandle<()>> {
    let weather = Arc::clone(&dashboard);
    let temperature = spawn_periodic(
        "temperature",
        temperature_period,
        temperature_period,
        shutdown.clone(),
        move || {
            let dashboard = Arc::clone(&weather);
            async move {
                let _ = dashboard.refresh_temperature().await;
            }
        },
    );

    let prayer = spawn_periodic("prayer", prayer_period, prayer_period, shutdown, move || {
        let dashboard = Arc::clone(&dashboard);
        async move {
            let fiqh = dashboard.session().fiqh();
            let _ = dashboard.refresh_prayer_times(fiqh).await;
        }
    });

    vec![temperature, prayer]
}

fn minutes(count: u64) -> Duration {
    Duration::from_secs(count * 60)
}

fn spawn_periodic<F, Fut>(
    name: &'static str,
    period: Duration,
    first_delay: Duration,
    shutdown: CancellationToken,
    mut job: F,
) -> JoinHandle<()>
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    let period = if period.is_zero() {
        tracing::warn!("{} period is zero, using one second", name);
        Duration::from_secs(1)
    } else {
        period
    };

    tokio::spawn(async move {
        let mut interval = time::interval_at(Instant::now() + first_delay, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tracing::debug!("{} task every {:?}", name, period);

        loop {
            tokio::select! {
                biased;
                _ = shutdown.cancelled() => {
                    tracing::debug!("{} task stopped", name);
                    break;
                }
                _ = interval.tick() => job().await,
            }
        }
    })
}
