//! Coin cache — responses keyed by id, gated by request generation.
//!
//! Every fetch takes a generation from [`CoinCache::begin`] before it is sent.
//! Only the newest generation for an id may write its response, so a slow
//! older request can never overwrite a newer one. Entries older than the
//! freshness window are pruned on every write.

use crate::domain::coin::wire::CoinResponse;
use crate::shared::CoinId;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::time::Duration;

/// Generation handed out per fetch.
pub type Generation = u64;

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    coin: CoinResponse,
    fetched_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct CoinCache {
    entries: HashMap<CoinId, Entry>,
    /// Newest outstanding generation per id.
    in_flight: HashMap<CoinId, Generation>,
    last_generation: Generation,
}

/// Whether something fetched at `fetched_at` is still within `window` at `now`.
pub fn is_fresh(fetched_at: DateTime<Utc>, now: DateTime<Utc>, window: Duration) -> bool {
    now.signed_duration_since(fetched_at)
        .to_std()
        .map(|age| age < window)
        .unwrap_or(true)
}

impl CoinCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached response for `id` if it is still fresh.
    pub fn fresh(&self, id: &CoinId, now: DateTime<Utc>, window: Duration) -> Option<&CoinResponse> {
        self.entries
            .get(id)
            .filter(|e| is_fresh(e.fetched_at, now, window))
            .map(|e| &e.coin)
    }

    /// Registers a new request for `id`; earlier requests for it become stale.
    pub fn begin(&mut self, id: &CoinId) -> Generation {
        self.last_generation += 1;
        self.in_flight.insert(id.clone(), self.last_generation);
        self.last_generation
    }

    /// Stores a response if `generation` is still the newest request for
    /// `id`. Returns `false` when the response was superseded and dropped.
    pub fn resolve(
        &mut self,
        id: &CoinId,
        generation: Generation,
        coin: CoinResponse,
        now: DateTime<Utc>,
        window: Duration,
    ) -> bool {
        if self.in_flight.get(id) != Some(&generation) {
            tracing::debug!(%id, generation, "Discarding superseded coin response");
            return false;
        }
        self.in_flight.remove(id);
        self.entries.insert(id.clone(), Entry { coin, fetched_at: now });
        self.prune(now, window);
        true
    }

    /// Ends a failed request without touching the cached value.
    pub fn abandon(&mut self, id: &CoinId, generation: Generation) {
        if self.in_flight.get(id) == Some(&generation) {
            self.in_flight.remove(id);
        }
    }

    /// Drops every entry outside the freshness window.
    pub fn prune(&mut self, now: DateTime<Utc>, window: Duration) {
        self.entries.retain(|_, e| is_fresh(e.fetched_at, now, window));
    }

    /// Removes `id` and voids any request outstanding for it.
    pub fn remove(&mut self, id: &CoinId) {
        self.entries.remove(id);
        self.in_flight.remove(id);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.in_flight.clear();
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
    use chrono::TimeZone;

    const WINDOW: Duration = Duration::from_secs(300);

    fn t(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn coin(name: &str) -> CoinResponse {
        CoinResponse {
            id: "bitcoin".into(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_freshness_window() {
        assert!(is_fresh(t(0), t(299), WINDOW));
        assert!(!is_fresh(t(0), t(300), WINDOW));
    }

    #[test]
    fn test_older_response_arriving_last_is_dropped() {
        let mut cache = CoinCache::new();
        let id: CoinId = "bitcoin".into();
        let older = cache.begin(&id);
        let newer = cache.begin(&id);

        assert!(cache.resolve(&id, newer, coin("NEW"), t(1), WINDOW));
        assert!(!cache.resolve(&id, older, coin("OLD"), t(2), WINDOW));
        assert_eq!(cache.fresh(&id, t(3), WINDOW).unwrap().name, "NEW");
    }

    #[test]
    fn test_older_response_arriving_first_is_dropped() {
        let mut cache = CoinCache::new();
        let id: CoinId = "bitcoin".into();
        let older = cache.begin(&id);
        let newer = cache.begin(&id);

        assert!(!cache.resolve(&id, older, coin("OLD"), t(1), WINDOW));
        assert!(cache.fresh(&id, t(1), WINDOW).is_none());
        assert!(cache.resolve(&id, newer, coin("NEW"), t(2), WINDOW));
        assert_eq!(cache.fresh(&id, t(2), WINDOW).unwrap().name, "NEW");
    }

    #[test]
    fn test_generations_are_per_id() {
        let mut cache = CoinCache::new();
        let btc: CoinId = "bitcoin".into();
        let eth: CoinId = "ethereum".into();
        let g_btc = cache.begin(&btc);
        let _g_eth = cache.begin(&eth);
        assert!(cache.resolve(&btc, g_btc, coin("BTC"), t(0), WINDOW));
    }

    #[test]
    fn test_failed_request_keeps_previous_value() {
        let mut cache = CoinCache::new();
        let id: CoinId = "bitcoin".into();
        let first = cache.begin(&id);
        cache.resolve(&id, first, coin("GOOD"), t(0), WINDOW);

        let failed = cache.begin(&id);
        cache.abandon(&id, failed);
        assert_eq!(cache.fresh(&id, t(10), WINDOW).unwrap().name, "GOOD");
        assert!(!cache.resolve(&id, failed, coin("LATE"), t(11), WINDOW));
    }

    #[test]
    fn test_writes_prune_expired_entries() {
        let mut cache = CoinCache::new();
        let btc: CoinId = "bitcoin".into();
        let eth: CoinId = "ethereum".into();
        let g = cache.begin(&btc);
        cache.resolve(&btc, g, coin("BTC"), t(0), WINDOW);

        let g = cache.begin(&eth);
        cache.resolve(&eth, g, coin("ETH"), t(400), WINDOW);
        assert_eq!(cache.len(), 1);
        assert!(cache.fresh(&btc, t(400), WINDOW).is_none());
    }

    #[test]
    fn test_remove_voids_outstanding_request() {
        let mut cache = CoinCache::new();
        let id: CoinId = "bitcoin".into();
        let g = cache.begin(&id);
        cache.remove(&id);
        assert!(!cache.resolve(&id, g, coin("X"), t(0), WINDOW));
        assert!(cache.is_empty());
    }
}
