//! Clock-time helpers for "HH:MM" provider values and 12-hour display strings.

use chrono::{Duration, NaiveTime, Timelike};

use crate::error::PrayerError;

/// Parse a 24-hour "HH:MM" value.
///
/// Anything after the minutes (Aladhan can append a zone such as
/// `" (IST)"`) is ignored; a missing minute part reads as zero.
pub fn parse_24_hour(time: &str) -> Result<NaiveTime, PrayerError> {
    let invalid = || PrayerError::InvalidTime(time.to_string());

    let mut parts = time.trim().splitn(2, ':');
    let hour: u32 = parts
        .next()
        .map(str::trim)
        .and_then(|h| h.parse().ok())
        .ok_or_else(invalid)?;

    let minute: u32 = match parts.next() {
        Some(rest) => {
            let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
            digits.parse().map_err(|_| invalid())?
        }
        None => 0,
    };

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)
}

/// "13:00" -> "1:00 PM", "00:05" -> "12:05 AM"
pub fn to_12_hour(time: &str) -> Result<String, PrayerError> {
    Ok(parse_24_hour(time)?.format("%-I:%M %p").to_string())
}

/// Add (or subtract) minutes to an "HH:MM" value, wrapping around midnight.
pub fn add_minutes(time: &str, minutes: i64) -> Result<String, PrayerError> {
    let (shifted, _) = parse_24_hour(time)?.overflowing_add_signed(Duration::minutes(minutes));
    Ok(shifted.format("%H:%M").to_string())
}

/// Minutes since midnight for a 12-hour display string such as "1:30 PM".
///
/// 12 AM maps to hour 0, 12 PM stays at 12. A value without an AM/PM
/// suffix is read as 24-hour.
pub fn minutes_from_12_hour(display: &str) -> Result<u32, PrayerError> {
    let invalid = || PrayerError::InvalidTime(display.to_string());

    let trimmed = display.trim();
    let upper = trimmed.to_ascii_uppercase();
    let (clock, is_pm, is_am) = if let Some(rest) = upper.strip_suffix("PM") {
        (rest.trim_end(), true, false)
    } else if let Some(rest) = upper.strip_suffix("AM") {
        (rest.trim_end(), false, true)
    } else {
        (upper.as_str(), false, false)
    };

    let (h, m) = clock.split_once(':').ok_or_else(invalid)?;
    let mut hour: u32 = h.trim().parse().map_err(|_| invalid())?;
    let minute: u32 = m.trim().parse().map_err(|_| invalid())?;

    if is_pm && hour != 12 {
        hour += 12;
    }
    if is_am && hour == 12 {
        hour = 0;
    }

    Ok(hour * 60 + minute)
}

/// Minutes since midnight for a wall-clock time
pub fn minutes_since_midnight(now: NaiveTime) -> u32 {
    now.hour() * 60 + now.minute()
}

/// Wall-clock display with seconds, e.g. "1:05:09 PM"
pub fn format_clock(now: NaiveTime) -> String {
    now.format("%-I:%M:%S %p").to_string()
}
