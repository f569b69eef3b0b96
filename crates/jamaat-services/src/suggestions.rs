//! Place suggestions for the location input box.

use std::sync::Arc;
use std::time::Duration;

use crate::dashboard::Dashboard;
use crate::display::Slot;

/// Queries shorter than this never reach the search endpoint
pub const MIN_QUERY_CHARS: usize = 3;

impl Dashboard {
    /// Debounced keystroke handler.
    ///
    /// Each call cancels the pending wait and starts a new one, so only the
    /// last input of a burst is searched. A search that has already started
    /// is never cancelled and may land after a newer one.
    pub fn on_search_input(self: &Arc<Self>, text: &str) {
        let dashboard = Arc::clone(self);
        let query = text.to_string();
        let delay = Duration::from_millis(self.schedule.suggestion_debounce_ms);

        self.debounce.start(async move {
            tokio::time::sleep(delay).await;
            tokio::spawn(async move {
                dashboard.fetch_suggestions(&query).await;
            });
        });
    }

    /// Replace the suggestion list with search results for `query`.
    pub async fn fetch_suggestions(&self, query: &str) {
        self.session.clear_suggestions();
        self.sink.set_suggestions(&[]);

        if query.chars().count() < MIN_QUERY_CHARS {
            return;
        }

        match self.geo.search_places(query).await {
            Ok(places) => {
                tracing::debug!("{} suggestions for {:?}", places.len(), query);
                let rows: Vec<String> = places.iter().map(|p| p.display_name.clone()).collect();
                self.session.set_suggestions(places);
                self.sink.set_suggestions(&rows);
            }
            Err(e) => tracing::error!("fetch suggestions: {}", e),
        }
    }

    /// Use the suggestion at `index` as the new location.
    ///
    /// Returns false when no suggestion has that index.
    pub async fn select_suggestion(&self, index: usize) -> bool {
        let Some(place) = self.session.suggestion(index) else {
            tracing::warn!("No suggestion at index {}", index);
            return false;
        };

        self.sink.set_text(Slot::LocationInput, &place.display_name);
        self.session.set_location_text(place.display_name);
        self.session.clear_suggestions();
        self.sink.set_suggestions(&[]);

        self.refresh_all().await;
        true
    }
}
