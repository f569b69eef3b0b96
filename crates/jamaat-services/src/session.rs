use jamaat_geo::Place;
use jamaat_prayer::{Fiqh, RawTimings};
use parking_lot::RwLock;

#[derive(Debug)]
struct SessionState {
    location_text: String,
    fiqh: Fiqh,
    last_raw_timings: Option<RawTimings>,
    suggestions: Vec<Place>,
}

/// Mutable state shared by every dashboard handler for the process lifetime
#[derive(Debug)]
pub struct Session {
    state: RwLock<SessionState>,
}

impl Session {
    pub fn new(location_text: impl Into<String>, fiqh: Fiqh) -> Self {
        Self {
            state: RwLock::new(SessionState {
                location_text: location_text.into(),
                fiqh,
                last_raw_timings: None,
                suggestions: Vec::new(),
            }),
        }
    }

    pub fn location_text(&self) -> String {
        self.state.read().location_text.clone()
    }

    pub fn set_location_text(&self, text: impl Into<String>) {
        self.state.write().location_text = text.into();
    }

    pub fn fiqh(&self) -> Fiqh {
        self.state.read().fiqh
    }

    pub fn set_fiqh(&self, fiqh: Fiqh) {
        self.state.write().fiqh = fiqh;
    }

    /// Most recently fetched provider timings
    pub fn last_raw_timings(&self) -> Option<RawTimings> {
        self.state.read().last_raw_timings.clone()
    }

    pub fn set_last_raw_timings(&self, raw: RawTimings) {
        self.state.write().last_raw_timings = Some(raw);
    }

    pub fn set_suggestions(&self, places: Vec<Place>) {
        self.state.write().suggestions = places;
    }

    pub fn clear_suggestions(&self) {
        self.state.write().suggestions.clear();
    }

    pub fn suggestion(&self, index: usize) -> Option<Place> {
        self.state.read().suggestions.get(index).cloned()
    }

    pub fn suggestion_count(&self) -> usize {
        self.state.read().suggestions.len()
    }
}
