//! Rotating marquee messages.

use crate::error::PrayerError;
use crate::time::to_12_hour;
use crate::types::RawTimings;

/// Build the four marquee messages from the unadjusted timings.
pub fn marquee_messages(raw: &RawTimings) -> Result<Vec<String>, PrayerError> {
    Ok(vec![
        format!("Sunrise: {}", to_12_hour(&raw.sunrise)?),
        format!("Sunset: {}", to_12_hour(&raw.maghrib)?),
        "Zawaal: Around Midday".to_string(),
        "Ishraaq: After Sunrise".to_string(),
    ])
}

/// Cycles through a fixed message list, wrapping at the end.
#[derive(Debug, Clone)]
pub struct MarqueeCursor {
    messages: Vec<String>,
    index: usize,
}

impl MarqueeCursor {
    pub fn new(messages: Vec<String>) -> Self {
        Self { messages, index: 0 }
    }

    /// Return the current message and move to the next one
    pub fn advance(&mut self) -> Option<&str> {
        if self.messages.is_empty() {
            return None;
        }
        let current = self.index;
        self.index = (self.index + 1) % self.messages.len();
        self.messages.get(current).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
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
    fn test_messages_use_raw_sunrise_and_sunset() {
        let msgs = marquee_messages(&sample()).unwrap();
        assert_eq!(
            msgs,
            [
                "Sunrise: 5:30 AM",
                "Sunset: 6:20 PM",
                "Zawaal: Around Midday",
                "Ishraaq: After Sunrise",
            ]
        );
    }

    #[test]
    fn test_cursor_wraps() {
        let mut cursor = MarqueeCursor::new(vec!["a".into(), "b".into(), "c".into()]);
        let seen: Vec<String> = (0..5)
            .filter_map(|_| cursor.advance().map(str::to_string))
            .collect();
        assert_eq!(seen, ["a", "b", "c", "a", "b"]);
    }

    #[test]
    fn test_empty_cursor() {
        let mut cursor = MarqueeCursor::new(Vec::new());
        assert!(cursor.is_empty());
        assert_eq!(cursor.advance(), None);
    }
}
