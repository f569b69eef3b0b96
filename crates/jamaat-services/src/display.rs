//! Output surface: named display slots plus a status banner and a
//! suggestion list.

use std::collections::HashMap;

use parking_lot::Mutex;

/// A named text slot on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Fajr,
    Zuhar,
    Asr,
    Magrib,
    Isha,
    Jumah,
    Azaan,
    Tomorrow,
    SahriIftar,
    NextJamaatTime,
    NextJamaatName,
    Temperature,
    CurrentTime,
    Marquee,
    LocationInput,
}

impl Slot {
    /// Element identifier of the slot
    pub fn id(self) -> &'static str {
        match self {
            Slot::Fajr => "fajrTime",
            Slot::Zuhar => "zuharTime",
            Slot::Asr => "asrTime",
            Slot::Magrib => "magribTime",
            Slot::Isha => "ishaTime",
            Slot::Jumah => "jumahTime",
            Slot::Azaan => "azaanTime",
            Slot::Tomorrow => "tomorrowTime",
            Slot::SahriIftar => "sahriIftarTime",
            Slot::NextJamaatTime => "nextJamaatTime",
            Slot::NextJamaatName => "currentJamaatName",
            Slot::Temperature => "temp",
            Slot::CurrentTime => "currentTime",
            Slot::Marquee => "marquee",
            Slot::LocationInput => "districtInput",
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Where computed values are rendered.
///
/// Implementations must be cheap and non-blocking; they are called from
/// timer tasks as well as request handlers.
pub trait DisplaySink: Send + Sync {
    fn set_text(&self, slot: Slot, text: &str);

    fn show_status(&self, message: &str);

    fn hide_status(&self);

    /// Replace the suggestion rows; an empty slice clears the list
    fn set_suggestions(&self, rows: &[String]);
}

#[derive(Debug, Default)]
struct MemoryState {
    slots: HashMap<Slot, String>,
    history: Vec<(Slot, String)>,
    status: Option<String>,
    status_log: Vec<String>,
    suggestions: Vec<String>,
}

/// In-memory sink that records every write
#[derive(Debug, Default)]
pub struct MemorySink {
    state: Mutex<MemoryState>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text of a slot
    pub fn text(&self, slot: Slot) -> Option<String> {
        self.state.lock().slots.get(&slot).cloned()
    }

    /// Every value written to a slot, oldest first
    pub fn history(&self, slot: Slot) -> Vec<String> {
        self.state
            .lock()
            .history
            .iter()
            .filter(|(s, _)| *s == slot)
            .map(|(_, text)| text.clone())
            .collect()
    }

    /// Every slot write across all slots, oldest first
    pub fn writes(&self) -> Vec<(Slot, String)> {
        self.state.lock().history.clone()
    }

    /// Visible banner message, if any
    pub fn status(&self) -> Option<String> {
        self.state.lock().status.clone()
    }

    /// Every banner message shown, oldest first
    pub fn status_log(&self) -> Vec<String> {
        self.state.lock().status_log.clone()
    }

    pub fn suggestions(&self) -> Vec<String> {
        self.state.lock().suggestions.clone()
    }
}

impl DisplaySink for MemorySink {
    fn set_text(&self, slot: Slot, text: &str) {
        let mut state = self.state.lock();
        state.slots.insert(slot, text.to_string());
        state.history.push((slot, text.to_string()));
    }

    fn show_status(&self, message: &str) {
        let mut state = self.state.lock();
        state.status = Some(message.to_string());
        state.status_log.push(message.to_string());
    }

    fn hide_status(&self) {
        self.state.lock().status = None;
    }

    fn set_suggestions(&self, rows: &[String]) {
        self.state.lock().suggestions = rows.to_vec();
    }
}
