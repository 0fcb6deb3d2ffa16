//! Wire types for coin responses (REST `GET /coins/{id}`).
//!
//! CoinGecko omits or nulls almost any field depending on the coin, so every
//! field here is optional or defaulted. Unknown fields are ignored.

use crate::shared::serde_util::{lossy_string_vec, null_as_default};
use crate::shared::{CoinId, USD};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-currency values, e.g. `{"usd": 67000.0, "eur": 61000.0}`.
pub type CurrencyMap = HashMap<String, f64>;

/// Reads the USD entry of an optional currency map.
pub fn usd_of(map: &Option<CurrencyMap>) -> Option<f64> {
    map.as_ref().and_then(|m| m.get(USD)).copied()
}

/// REST response for a single coin.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CoinResponse {
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub id: CoinId,
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub symbol: String,
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_slug: Option<String>,
    #[serde(default, deserialize_with = "lossy_string_vec::deserialize")]
    pub categories: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub description: HashMap<String, String>,
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub links: Links,
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub image: Image,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genesis_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_cap_rank: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub market_data: MarketData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

/// Coin artwork in three sizes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Image {
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub thumb: String,
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub small: String,
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub large: String,
}

/// External link collections.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Links {
    #[serde(default, deserialize_with = "lossy_string_vec::deserialize")]
    pub homepage: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub whitepaper: String,
    #[serde(default, deserialize_with = "lossy_string_vec::deserialize")]
    pub blockchain_site: Vec<String>,
    #[serde(default, deserialize_with = "lossy_string_vec::deserialize")]
    pub official_forum_url: Vec<String>,
    #[serde(default, deserialize_with = "lossy_string_vec::deserialize")]
    pub chat_url: Vec<String>,
    #[serde(default, deserialize_with = "lossy_string_vec::deserialize")]
    pub announcement_url: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub twitter_screen_name: String,
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub facebook_username: String,
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub telegram_channel_identifier: String,
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub subreddit_url: String,
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub repos_url: ReposUrl,
}

/// Source repositories by host.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReposUrl {
    #[serde(default, deserialize_with = "lossy_string_vec::deserialize")]
    pub github: Vec<String>,
    #[serde(default, deserialize_with = "lossy_string_vec::deserialize")]
    pub bitbucket: Vec<String>,
}

/// Market data block.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MarketData {
    #[serde(default)]
    pub current_price: Option<CurrencyMap>,
    #[serde(default)]
    pub ath: Option<CurrencyMap>,
    #[serde(default)]
    pub ath_change_percentage: Option<CurrencyMap>,
    #[serde(default)]
    pub atl: Option<CurrencyMap>,
    #[serde(default)]
    pub atl_change_percentage: Option<CurrencyMap>,
    #[serde(default)]
    pub market_cap: Option<CurrencyMap>,
    #[serde(default)]
    pub fully_diluted_valuation: Option<CurrencyMap>,
    #[serde(default)]
    pub total_volume: Option<CurrencyMap>,
    #[serde(default)]
    pub high_24h: Option<CurrencyMap>,
    #[serde(default)]
    pub low_24h: Option<CurrencyMap>,
    #[serde(default)]
    pub price_change_24h: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_7d: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_14d: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_30d: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_60d: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_200d: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_1y: Option<f64>,
    #[serde(default)]
    pub price_change_24h_in_currency: Option<CurrencyMap>,
    #[serde(default)]
    pub price_change_percentage_1h_in_currency: Option<CurrencyMap>,
    #[serde(default)]
    pub price_change_percentage_24h_in_currency: Option<CurrencyMap>,
    #[serde(default)]
    pub price_change_percentage_7d_in_currency: Option<CurrencyMap>,
    #[serde(default)]
    pub market_cap_change_24h: Option<f64>,
    #[serde(default)]
    pub market_cap_change_percentage_24h: Option<f64>,
    #[serde(default)]
    pub total_supply: Option<f64>,
    #[serde(default)]
    pub max_supply: Option<f64>,
    #[serde(default)]
    pub circulating_supply: Option<f64>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

/// Optional flags narrowing the `GET /coins/{id}` payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinQuery {
    pub localization: Option<bool>,
    pub tickers: Option<bool>,
    pub market_data: Option<bool>,
    pub community_data: Option<bool>,
    pub developer_data: Option<bool>,
    pub sparkline: Option<bool>,
}

impl CoinQuery {
    /// The detail page needs market data and links only.
    pub fn detail_page() -> Self {
        Self {
            localization: Some(false),
            tickers: Some(false),
            market_data: Some(true),
            community_data: Some(false),
            developer_data: Some(false),
            sparkline: Some(false),
        }
    }

    /// `key=value` pairs for every set flag, in declaration order.
    pub fn to_query_string(&self) -> String {
        [
            ("localization", self.localization),
            ("tickers", self.tickers),
            ("market_data", self.market_data),
            ("community_data", self.community_data),
            ("developer_data", self.developer_data),
            ("sparkline", self.sparkline),
        ]
        .iter()
        .filter_map(|(k, v)| v.map(|v| format!("{}={}", k, v)))
        .collect::<Vec<_>>()
        .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_response_deserializes() {
        let json = r#"{
            "id": "bitcoin",
            "symbol": "btc",
            "name": "Bitcoin",
            "links": { "homepage": ["https://bitcoin.org", "", null], "subreddit_url": null },
            "market_data": { "market_cap": { "usd": 1300000000000.0 }, "max_supply": null }
        }"#;
        let coin: CoinResponse = serde_json::from_str(json).unwrap();
        assert_eq!(coin.id.as_str(), "bitcoin");
        assert_eq!(coin.links.homepage, vec!["https://bitcoin.org", ""]);
        assert_eq!(coin.links.subreddit_url, "");
        assert_eq!(usd_of(&coin.market_data.market_cap), Some(1.3e12));
        assert_eq!(coin.market_data.max_supply, None);
        assert!(coin.image.large.is_empty());
    }

    #[test]
    fn test_null_market_data_defaults() {
        let coin: CoinResponse =
            serde_json::from_str(r#"{"id":"x","market_data":null,"links":null}"#).unwrap();
        assert_eq!(coin.market_data, MarketData::default());
        assert_eq!(coin.links, Links::default());
    }

    #[test]
    fn test_coin_query_string() {
        assert_eq!(CoinQuery::default().to_query_string(), "");
        let q = CoinQuery {
            tickers: Some(false),
            market_data: Some(true),
            ..Default::default()
        };
        assert_eq!(q.to_query_string(), "tickers=false&market_data=true");
    }
}
