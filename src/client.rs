//! High-level client — `CoinTrekClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, shared cache state, and accessor methods.

use crate::domain::coin::client::Coins;
use crate::domain::coin::CoinCache;
use crate::domain::price_history::client::PriceHistoryClient;
use crate::error::SdkError;
use crate::http::{CoinGeckoHttp, DEFAULT_TIMEOUT};
use crate::query::REFRESH_INTERVAL;

use async_lock::RwLock;
use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::coin::client::Coins as CoinsClient;
pub use crate::domain::price_history::client::PriceHistoryClient as PriceHistorySubClient;

/// Reads the CoinGecko demo key from `COIN_GECKO_API_TOKEN`.
pub fn api_key_from_env() -> Option<String> {
    std::env::var(crate::network::API_KEY_ENV)
        .ok()
        .filter(|k| !k.trim().is_empty())
}

/// The primary entry point for the CoinTrek SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.coins()`, `client.price_history()`.
pub struct CoinTrekClient {
    pub(crate) http: CoinGeckoHttp,
    /// Coin cache: id → newest response, gated by request generation
    pub(crate) coin_cache: Arc<RwLock<CoinCache>>,
    /// Freshness window for cached coins and the `watch` period.
    pub(crate) refresh_interval: Duration,
}

impl CoinTrekClient {
    pub fn builder() -> CoinTrekClientBuilder {
        CoinTrekClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn coins(&self) -> Coins<'_> {
        Coins { client: self }
    }

    pub fn price_history(&self) -> PriceHistoryClient<'_> {
        PriceHistoryClient { client: self }
    }

    pub fn refresh_interval(&self) -> Duration {
        self.refresh_interval
    }

    /// Direct access to the endpoint layer.
    pub fn http(&self) -> &CoinGeckoHttp {
        &self.http
    }

    /// Clear all HTTP caches.
    pub async fn clear_all_caches(&self) {
        self.coin_cache.write().await.clear();
    }
}

impl Clone for CoinTrekClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            coin_cache: self.coin_cache.clone(),
            refresh_interval: self.refresh_interval,
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct CoinTrekClientBuilder {
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
    refresh_interval: Duration,
}

impl Default for CoinTrekClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
            refresh_interval: REFRESH_INTERVAL,
        }
    }
}

impl CoinTrekClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Use `COIN_GECKO_API_TOKEN` if set; leaves any key already configured
    /// in place otherwise.
    pub fn api_key_from_env(mut self) -> Self {
        if let Some(key) = api_key_from_env() {
            self.api_key = Some(key);
        }
        self
    }

    /// Per-request timeout (native only; the browser owns it on WASM).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }

    pub fn build(self) -> Result<CoinTrekClient, SdkError> {
        if self.refresh_interval.is_zero() {
            return Err(SdkError::Validation(
                "refresh interval must be greater than zero".to_string(),
            ));
        }
        Ok(CoinTrekClient {
            http: CoinGeckoHttp::with_timeout(&self.base_url, self.api_key, self.timeout)?,
            coin_cache: Arc::new(RwLock::new(CoinCache::new())),
            refresh_interval: self.refresh_interval,
        })
    }
}
