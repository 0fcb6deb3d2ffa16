//! Integration tests against the live CoinGecko API.
//!
//! These tests fetch real coin and OHLC data and run it through row
//! derivation and the chart adapter.
//!
//! All tests are `#[ignore]` because they require network access. The demo
//! API key is read from `COIN_GECKO_API_TOKEN` (a `.env` file works).
//!
//! Run with:
//! ```bash
//! cargo test -p cointrek-sdk --features native --test coingecko_integration -- --ignored
//! ```

#![cfg(feature = "native")]

use std::time::Duration;

use futures_util::StreamExt;
use tokio::time::timeout;

use cointrek_sdk::domain::coin::{CoinRows, RowKind};
use cointrek_sdk::domain::price_history::{to_series, ChartMode, ChartSeries, OhlcDays};
use cointrek_sdk::prelude::*;

const TEST_TIMEOUT: Duration = Duration::from_secs(20);
const TEST_COIN: &str = "bitcoin";

fn client() -> CoinTrekClient {
    let _ = dotenvy::dotenv();
    CoinTrekClient::builder()
        .api_key_from_env()
        .build()
        .expect("client should build")
}

#[tokio::test]
#[ignore]
async fn coin_rows_from_live_response() {
    let client = client();
    let coin = timeout(TEST_TIMEOUT, client.coins().get(&TEST_COIN.into()))
        .await
        .expect("timed out")
        .expect("coin fetch should succeed");

    let rows = CoinRows::from(&coin);
    assert_eq!(rows.market_stats.len(), 5);
    assert_eq!(rows.history_range.len(), 3);
    assert!(rows.external_links.iter().all(|r| r.kind == RowKind::Links));

    let details = client
        .coins()
        .details(&TEST_COIN.into())
        .await
        .expect("cached details should convert");
    assert_eq!(details.symbol, "BTC");
}

#[tokio::test]
#[ignore]
async fn ohlc_adapts_to_both_chart_modes() {
    let client = client();
    let data = timeout(
        TEST_TIMEOUT,
        client
            .price_history()
            .ohlc_for(&TEST_COIN.into(), OhlcDays::Week1),
    )
    .await
    .expect("timed out")
    .expect("ohlc fetch should succeed");
    assert!(!data.is_empty());

    match to_series(&data, ChartMode::Line) {
        ChartSeries::Line(points) => {
            assert_eq!(points.len(), data.len());
            assert_eq!(points[0].time, data[0].time_ms / 1000);
        }
        other => panic!("expected line series, got {other:?}"),
    }
    assert_eq!(to_series(&data, ChartMode::Candlestick).len(), data.len());
}

#[tokio::test]
#[ignore]
async fn watch_emits_first_value_immediately() {
    let client = client();
    let stream = client.coins().watch(TEST_COIN.into());
    tokio::pin!(stream);

    let first = timeout(TEST_TIMEOUT, stream.next())
        .await
        .expect("timed out waiting for first value")
        .expect("stream ended");
    assert_eq!(first.expect("fetch should succeed").id.as_str(), TEST_COIN);
}
