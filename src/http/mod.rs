//! HTTP client layer — `CoinGeckoHttp`, one method per endpoint, no retry.

pub mod client;

pub use client::{CoinGeckoHttp, DEFAULT_TIMEOUT};
