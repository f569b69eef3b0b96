//! Fiqh-specific jamaat offsets.

use crate::error::PrayerError;
use crate::time::{add_minutes, to_12_hour};
use crate::types::{AdjustedTimings, Fiqh, RawTimings};

/// Dhuhr jamaat is held at a fixed time under the Hanafi schedule
pub const FIXED_DHUHR_DISPLAY: &str = "1:30 PM";

/// Friday congregation time
pub const JUMAH_DISPLAY: &str = "1:30 PM";

const FAJR_OFFSET: i64 = 40;
const SUNRISE_OFFSET: i64 = 10;
const ASR_OFFSET: i64 = 10;
const MAGHRIB_OFFSET: i64 = 5;
const ISHA_OFFSET: i64 = 10;

/// Apply the fiqh's offsets and convert to 12-hour display.
///
/// Hanafi delays each jamaat past the provider time and ignores the
/// computed Dhuhr entirely; Shafi only reformats.
pub fn adjust_times(raw: &RawTimings, fiqh: Fiqh) -> Result<AdjustedTimings, PrayerError> {
    match fiqh {
        Fiqh::Hanafi => Ok(AdjustedTimings {
            fajr: shifted(&raw.fajr, FAJR_OFFSET)?,
            sunrise: shifted(&raw.sunrise, SUNRISE_OFFSET)?,
            dhuhr: FIXED_DHUHR_DISPLAY.to_string(),
            asr: shifted(&raw.asr, ASR_OFFSET)?,
            maghrib: shifted(&raw.maghrib, MAGHRIB_OFFSET)?,
            isha: shifted(&raw.isha, ISHA_OFFSET)?,
        }),
        Fiqh::Shafi => Ok(AdjustedTimings {
            fajr: to_12_hour(&raw.fajr)?,
            sunrise: to_12_hour(&raw.sunrise)?,
            dhuhr: to_12_hour(&raw.dhuhr)?,
            asr: to_12_hour(&raw.asr)?,
            maghrib: to_12_hour(&raw.maghrib)?,
            isha: to_12_hour(&raw.isha)?,
        }),
    }
}

fn shifted(time: &str, minutes: i64) -> Result<String, PrayerError> {
    to_12_hour(&add_minutes(time, minutes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RawTimings {
        RawTimings {
            fajr: "04:00".to_string(),
            sunrise: "05:30".to_string(),
            dhuhr: "12:15".to_string(),
            asr: "15:45".to_string(),
            maghrib: "18:20".to_string(),
            isha: "19:45".to_string(),
        }
    }

    #[test]
    fn test_hanafi_offsets() {
        let adj = adjust_times(&sample(), Fiqh::Hanafi).unwrap();
        assert_eq!(adj.fajr, "4:40 AM");
        assert_eq!(adj.sunrise, "5:40 AM");
        assert_eq!(adj.asr, "3:55 PM");
        assert_eq!(adj.maghrib, "6:25 PM");
        assert_eq!(adj.isha, "7:55 PM");
    }

    #[test]
    fn test_hanafi_dhuhr_is_fixed() {
        let mut raw = sample();
        raw.dhuhr = "11:02".to_string();
        let adj = adjust_times(&raw, Fiqh::Hanafi).unwrap();
        assert_eq!(adj.dhuhr, "1:30 PM");
    }

    #[test]
    fn test_hanafi_ignores_unparseable_dhuhr() {
        let mut raw = sample();
        raw.dhuhr = "??".to_string();
        assert!(adjust_times(&raw, Fiqh::Hanafi).is_ok());
    }

    #[test]
    fn test_shafi_passes_through() {
        let adj = adjust_times(&sample(), Fiqh::Shafi).unwrap();
        assert_eq!(adj.fajr, "4:00 AM");
        assert_eq!(adj.sunrise, "5:30 AM");
        assert_eq!(adj.dhuhr, "12:15 PM");
        assert_eq!(adj.asr, "3:45 PM");
        assert_eq!(adj.maghrib, "6:20 PM");
        assert_eq!(adj.isha, "7:45 PM");
    }

    #[test]
    fn test_hanafi_isha_wraps_midnight() {
        let mut raw = sample();
        raw.isha = "23:55".to_string();
        let adj = adjust_times(&raw, Fiqh::Hanafi).unwrap();
        assert_eq!(adj.isha, "12:05 AM");
    }

    #[test]
    fn test_invalid_time_propagates() {
        let mut raw = sample();
        raw.asr = "late".to_string();
        let err = adjust_times(&raw, Fiqh::Shafi).unwrap_err();
        assert!(matches!(err, PrayerError::InvalidTime(_)));
    }
}
