//! Prayer times for Jamaat.
//!
//! Fetches daily timings from the Aladhan API, applies the selected fiqh's
//! jamaat offsets, and derives the next jamaat and marquee messages.

pub mod adjust;
pub mod client;
pub mod error;
pub mod jamaat;
pub mod marquee;
pub mod time;
pub mod types;

pub use adjust::{adjust_times, FIXED_DHUHR_DISPLAY, JUMAH_DISPLAY};
pub use client::PrayerClient;
pub use error::PrayerError;
pub use jamaat::{select_next_jamaat, NextJamaat};
pub use marquee::{marquee_messages, MarqueeCursor};
pub use time::{add_minutes, format_clock, minutes_from_12_hour, to_12_hour};
pub use types::{AdjustedTimings, Fiqh, Prayer, RawTimings};
