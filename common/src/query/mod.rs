//! Client-side query helpers for the food listing.
//!
//! A client keeps the listing for each search term it has fetched, drops all
//! of them after any create, update or delete, and only sends a search once
//! the user has stopped typing for `SEARCH_DEBOUNCE`. Nothing here performs
//! I/O or reads the clock: callers pass `Instant`s in, which keeps the types
//! usable from any runtime.

use std::collections::HashMap;
use std::time::{Duration, Instant};
use url::form_urlencoded;

pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(400);

pub const FOOD_API_PATH: &str = "/api/food";

/// Path of the list request for a search term. A blank term lists everything.
pub fn list_path(term: &str) -> String {
    let term = term.trim();
    if term.is_empty() {
        return FOOD_API_PATH.to_string();
    }
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("name", term)
        .finish();
    format!("{FOOD_API_PATH}?{query}")
}

/// Holds back search input until it has been quiet for the debounce window.
#[derive(Debug, Clone)]
pub struct SearchDebounce {
    window: Duration,
    pending: Option<(String, Instant)>,
    settled: String,
}

impl Default for SearchDebounce {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchDebounce {
    pub fn new() -> Self {
        Self::with_window(SEARCH_DEBOUNCE)
    }

    pub fn with_window(window: Duration) -> Self {
        Self {
            window,
            pending: None,
            settled: String::new(),
        }
    }

    /// Records a keystroke. Each call restarts the quiet period.
    pub fn input(&mut self, text: impl Into<String>, now: Instant) {
        self.pending = Some((text.into(), now));
    }

    /// Instant at which the pending input settles, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, at)| *at + self.window)
    }

    /// Returns the newly settled search term once the quiet period has
    /// elapsed. A term equal to the previously settled one is not released
    /// again.
    pub fn poll(&mut self, now: Instant) -> Option<&str> {
        let at = self.pending.as_ref()?.1;
        if now.saturating_duration_since(at) < self.window {
            return None;
        }

        let (text, _) = self.pending.take()?;
        let term = text.trim();
        if term == self.settled {
            return None;
        }
        self.settled = term.to_string();
        Some(&self.settled)
    }

    pub fn settled(&self) -> &str {
        &self.settled
    }
}

/// Listing results keyed by settled search term.
///
/// `invalidate` bumps a generation counter. A fetch started before an
/// invalidation carries the old generation and is rejected by
/// `insert_if_current`, so a stale listing never repopulates the cache after
/// a mutation.
#[derive(Debug, Clone)]
pub struct QueryCache<T> {
    entries: HashMap<String, T>,
    generation: u64,
}

impl<T> Default for QueryCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> QueryCache<T> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            generation: 0,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn get(&self, term: &str) -> Option<&T> {
        self.entries.get(term.trim())
    }

    pub fn insert(&mut self, term: &str, value: T) {
        self.entries.insert(term.trim().to_string(), value);
    }

    /// Stores `value` only if no invalidation happened since `generation`
    /// was read. Returns whether the value was stored.
    pub fn insert_if_current(&mut self, generation: u64, term: &str, value: T) -> bool {
        if generation != self.generation {
            return false;
        }
        self.insert(term, value);
        true
    }

    /// Drops every cached listing. Called after each successful mutation.
    pub fn invalidate(&mut self) {
        self.entries.clear();
        self.generation += 1;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_path_encodes_the_term() {
        assert_eq!(list_path(""), "/api/food");
        assert_eq!(list_path("   "), "/api/food");
        assert_eq!(list_path("pie"), "/api/food?name=pie");
        assert_eq!(list_path(" mac & cheese "), "/api/food?name=mac+%26+cheese");
    }

    #[test]
    fn debounce_waits_for_quiet_period() {
        let start = Instant::now();
        let mut debounce = SearchDebounce::new();

        debounce.input("p", start);
        debounce.input("pi", start + Duration::from_millis(100));
        debounce.input("pie", start + Duration::from_millis(200));

        assert_eq!(debounce.poll(start + Duration::from_millis(500)), None);
        assert_eq!(
            debounce.deadline(),
            Some(start + Duration::from_millis(600))
        );
        assert_eq!(debounce.poll(start + Duration::from_millis(600)), Some("pie"));
        assert_eq!(debounce.settled(), "pie");
        assert_eq!(debounce.poll(start + Duration::from_millis(2000)), None);
        assert_eq!(debounce.deadline(), None);
    }

    #[test]
    fn debounce_does_not_repeat_the_same_term() {
        let start = Instant::now();
        let mut debounce = SearchDebounce::with_window(Duration::from_millis(10));

        debounce.input("soup", start);
        assert_eq!(debounce.poll(start + Duration::from_millis(10)), Some("soup"));

        debounce.input("soup ", start + Duration::from_millis(20));
        assert_eq!(debounce.poll(start + Duration::from_millis(40)), None);

        debounce.input("", start + Duration::from_millis(50));
        assert_eq!(debounce.poll(start + Duration::from_millis(60)), Some(""));
    }

    #[test]
    fn invalidation_clears_and_rejects_stale_results() {
        let mut cache: QueryCache<Vec<&str>> = QueryCache::new();
        cache.insert("", vec!["pie"]);
        cache.insert(" soup", vec![]);
        assert_eq!(cache.get("soup"), Some(&vec![]));
        assert_eq!(cache.len(), 2);

        let in_flight = cache.generation();
        cache.invalidate();
        assert!(cache.is_empty());

        assert!(!cache.insert_if_current(in_flight, "", vec!["pie"]));
        assert!(cache.get("").is_none());

        assert!(cache.insert_if_current(cache.generation(), "", vec!["pie", "cake"]));
        assert_eq!(cache.get("").map(Vec::len), Some(2));
    }
}
