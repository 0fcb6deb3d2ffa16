//! Low-level HTTP client — `CoinGeckoHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain types
//! happens at the client boundary). Requests are never retried.

use crate::domain::coin::wire::{CoinQuery, CoinResponse};
use crate::domain::price_history::wire::{OhlcQuery, OhlcResponse};
use crate::error::HttpError;
use crate::network::API_KEY_HEADER;
use crate::shared::CoinId;

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Default per-request timeout on native targets.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Low-level HTTP client for the CoinGecko REST API.
pub struct CoinGeckoHttp {
    base_url: String,
    client: Client,
    /// Demo API key. NEVER exposed publicly.
    api_key: Option<String>,
}

impl CoinGeckoHttp {
    pub fn new(base_url: &str, api_key: Option<String>) -> Result<Self, HttpError> {
        Self::with_timeout(base_url, api_key, DEFAULT_TIMEOUT)
    }

    #[cfg_attr(target_arch = "wasm32", allow(unused_variables))]
    pub fn with_timeout(
        base_url: &str,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, HttpError> {
        #[cfg_attr(target_arch = "wasm32", allow(unused_mut))]
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(timeout).pool_max_idle_per_host(10);
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether requests carry an API key.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    // ── Coins ────────────────────────────────────────────────────────────

    pub async fn get_coin(
        &self,
        id: &CoinId,
        query: &CoinQuery,
    ) -> Result<CoinResponse, HttpError> {
        self.get(&self.coin_url(id, query)).await
    }

    // ── Price History ────────────────────────────────────────────────────

    pub async fn get_coin_ohlc(&self, query: &OhlcQuery) -> Result<OhlcResponse, HttpError> {
        self.get(&self.ohlc_url(query)).await
    }

    // ── URLs ─────────────────────────────────────────────────────────────

    pub(crate) fn coin_url(&self, id: &CoinId, query: &CoinQuery) -> String {
        let url = format!("{}/coins/{}", self.base_url, urlencoding::encode(id.as_str()));
        let params = query.to_query_string();
        if params.is_empty() {
            url
        } else {
            format!("{}?{}", url, params)
        }
    }

    pub(crate) fn ohlc_url(&self, query: &OhlcQuery) -> String {
        format!(
            "{}/coins/{}/ohlc?{}",
            self.base_url,
            urlencoding::encode(query.id.as_str()),
            query.to_query_string()
        )
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        tracing::debug!("GET {}", url);
        let mut req = self.client.get(url).header("accept", "application/json");
        if let Some(key) = &self.api_key {
            req = req.header(API_KEY_HEADER, key);
        }

        let resp = req.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else {
                HttpError::Reqwest(e)
            }
        })?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();
        tracing::warn!(status = status_code, "Request to {} failed", url);

        Err(status_error(status_code, body_text))
    }
}

/// Maps a non-2xx status to the matching error variant.
pub(crate) fn status_error(status: u16, body: String) -> HttpError {
    match status {
        401 | 403 => HttpError::Unauthorized,
        404 => HttpError::NotFound(body),
        408 => HttpError::Timeout,
        429 => HttpError::RateLimited,
        400..=499 => HttpError::BadRequest(body),
        _ => HttpError::ServerError { status, body },
    }
}

impl Clone for CoinGeckoHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
            api_key: self.api_key.clone(),
        }
    }
}
