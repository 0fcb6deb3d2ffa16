//! Price history sub-client — OHLC candles, chart series, periodic refresh.

use crate::client::CoinTrekClient;
use crate::domain::price_history::wire::{Ohlc, OhlcQuery};
use crate::domain::price_history::{to_series, ChartMode, ChartSeries, OhlcDays};
use crate::error::SdkError;
use crate::shared::CoinId;
use futures_util::Stream;

/// Sub-client for price history.
pub struct PriceHistoryClient<'a> {
    pub(crate) client: &'a CoinTrekClient,
}

impl<'a> PriceHistoryClient<'a> {
    /// Candles for `query`, oldest first as returned by the API.
    pub async fn ohlc(&self, query: &OhlcQuery) -> Result<Vec<Ohlc>, SdkError> {
        if query.id.is_empty() {
            return Err(SdkError::Validation("coin id is required".to_string()));
        }
        if query.days == 0 {
            return Err(SdkError::Validation("days must be at least 1".to_string()));
        }
        Ok(self.client.http.get_coin_ohlc(query).await?)
    }

    /// USD candles for one of the range selector options.
    pub async fn ohlc_for(&self, id: &CoinId, days: OhlcDays) -> Result<Vec<Ohlc>, SdkError> {
        self.ohlc(&OhlcQuery::usd(id.clone(), days.days())).await
    }

    /// Candles adapted for the selected chart mode.
    pub async fn series(
        &self,
        query: &OhlcQuery,
        mode: ChartMode,
    ) -> Result<ChartSeries, SdkError> {
        let data = self.ohlc(query).await?;
        Ok(to_series(&data, mode))
    }

    /// Emits candles immediately, then once per refresh interval.
    pub fn watch(&self, query: OhlcQuery) -> impl Stream<Item = Result<Vec<Ohlc>, SdkError>> + 'a {
        let client = self.client;
        async_stream::stream! {
            loop {
                yield client.price_history().ohlc(&query).await;
                futures_timer::Delay::new(client.refresh_interval).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;

    fn client() -> CoinTrekClient {
        CoinTrekClient::builder()
            .base_url("http://127.0.0.1:9")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_rejects_empty_id_and_zero_days() {
        let client = client();
        let err = client
            .price_history()
            .ohlc(&OhlcQuery::usd("", 1))
            .await
            .unwrap_err();
        assert!(matches!(err, SdkError::Validation(_)));

        let err = client
            .price_history()
            .ohlc(&OhlcQuery::usd("bitcoin", 0))
            .await
            .unwrap_err();
        assert!(matches!(err, SdkError::Validation(_)));
    }

    #[tokio::test]
    async fn test_watch_yields_first_result_immediately() {
        let client = client();
        let stream = client.price_history().watch(OhlcQuery::usd("", 1));
        futures_util::pin_mut!(stream);
        let first = stream.next().await.unwrap();
        assert!(matches!(first, Err(SdkError::Validation(_))));
    }
}
