//! Coins sub-client — fetch, cache, periodic refresh.

use crate::client::CoinTrekClient;
use crate::domain::coin::wire::{CoinQuery, CoinResponse};
use crate::domain::coin::{self, CoinDetails, CoinRows};
use crate::error::SdkError;
use crate::shared::CoinId;
use chrono::Utc;
use futures_util::Stream;

/// Sub-client for coin operations.
pub struct Coins<'a> {
    pub(crate) client: &'a CoinTrekClient,
}

impl<'a> Coins<'a> {
    /// Get a coin with the detail-page flags. Uses the refresh-interval cache.
    pub async fn get(&self, id: &CoinId) -> Result<CoinResponse, SdkError> {
        require_id(id)?;
        {
            let cache = self.client.coin_cache.read().await;
            if let Some(coin) = cache.fresh(id, Utc::now(), self.client.refresh_interval) {
                return Ok(coin.clone());
            }
        }
        self.refresh(id).await
    }

    /// Fetch a coin bypassing the cache, then cache the result.
    ///
    /// Only the most recently started request for `id` updates the cache;
    /// a superseded response is still returned to its caller.
    pub async fn refresh(&self, id: &CoinId) -> Result<CoinResponse, SdkError> {
        require_id(id)?;
        let generation = self.client.coin_cache.write().await.begin(id);
        let result = self
            .client
            .http
            .get_coin(id, &CoinQuery::detail_page())
            .await;

        let mut cache = self.client.coin_cache.write().await;
        match result {
            Ok(coin) => {
                cache.resolve(
                    id,
                    generation,
                    coin.clone(),
                    Utc::now(),
                    self.client.refresh_interval,
                );
                Ok(coin)
            }
            Err(e) => {
                cache.abandon(id, generation);
                Err(e.into())
            }
        }
    }

    /// Fetch a coin with custom flags. Not cached.
    pub async fn get_with(
        &self,
        id: &CoinId,
        query: &CoinQuery,
    ) -> Result<CoinResponse, SdkError> {
        require_id(id)?;
        Ok(self.client.http.get_coin(id, query).await?)
    }

    /// Validated header projection of a coin.
    pub async fn details(&self, id: &CoinId) -> Result<CoinDetails, SdkError> {
        let coin = self.get(id).await?;
        CoinDetails::try_from(&coin)
            .map_err(|e: coin::ValidationError| SdkError::Validation(e.to_string()))
    }

    /// Market stats, historical range and external links for a coin.
    pub async fn rows(&self, id: &CoinId) -> Result<CoinRows, SdkError> {
        let coin = self.get(id).await?;
        Ok(CoinRows::from(&coin))
    }

    /// Emits a fresh fetch immediately, then once per refresh interval.
    ///
    /// Failed refreshes are yielded as errors and the stream keeps going;
    /// pair it with a `QueryCell` to keep serving the last good value.
    /// Dropping the stream stops the polling.
    pub fn watch(&self, id: CoinId) -> impl Stream<Item = Result<CoinResponse, SdkError>> + 'a {
        let client = self.client;
        async_stream::stream! {
            loop {
                yield client.coins().refresh(&id).await;
                futures_timer::Delay::new(client.refresh_interval).await;
            }
        }
    }

    /// Invalidate a cached coin.
    pub async fn invalidate(&self, id: &CoinId) {
        self.client.coin_cache.write().await.remove(id);
    }

    /// Clear the coin cache.
    pub async fn clear_cache(&self) {
        self.client.coin_cache.write().await.clear();
    }
}

fn require_id(id: &CoinId) -> Result<(), SdkError> {
    if id.is_empty() {
        return Err(SdkError::Validation("coin id is required".to_string()));
    }
    Ok(())
}
