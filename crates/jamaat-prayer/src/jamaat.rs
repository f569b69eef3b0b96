use serde::Serialize;

use crate::adjust::adjust_times;
use crate::error::PrayerError;
use crate::time::minutes_from_12_hour;
use crate::types::{Fiqh, Prayer, RawTimings};

/// The upcoming congregational prayer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextJamaat {
    pub prayer: Prayer,
    /// 12-hour display time after offsets
    pub time: String,
}

impl NextJamaat {
    /// Upper-cased prayer name for the banner slot
    pub fn display_name(&self) -> String {
        self.prayer.name().to_uppercase()
    }
}

/// Pick the first jamaat strictly after `now_minutes` (minutes since midnight).
///
/// When every jamaat has passed, Fajr is returned with today's time; the
/// following day's timings are not fetched.
pub fn select_next_jamaat(
    raw: &RawTimings,
    fiqh: Fiqh,
    now_minutes: u32,
) -> Result<NextJamaat, PrayerError> {
    let adjusted = adjust_times(raw, fiqh)?;

    let mut schedule = Vec::with_capacity(Prayer::ORDER.len());
    for prayer in Prayer::ORDER {
        let time = adjusted.get(prayer).to_string();
        let minutes = minutes_from_12_hour(&time)?;
        schedule.push((prayer, time, minutes));
    }

    let pick = schedule
        .iter()
        .position(|(_, _, minutes)| *minutes > now_minutes)
        .unwrap_or(0);

    let (prayer, time, _) = schedule.swap_remove(pick);
    Ok(NextJamaat { prayer, time })
}
