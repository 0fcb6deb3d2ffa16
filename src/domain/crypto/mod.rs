//! Crypto list domain — the coins shown on the market table.

pub mod pagination;

use crate::domain::coin::Trend;
use crate::shared::fmt::num;
use crate::shared::{title_case_slug, CoinId};
use serde::{Deserialize, Serialize};

pub use pagination::{Paginator, PAGE_SIZE};

/// One row of the market table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crypto {
    /// Coin identifier, also the detail route segment.
    pub name: CoinId,
    pub ticker: String,
    pub image: String,
    pub price: f64,
    pub market_history: MarketHistory,
}

/// Percentage price changes over the table's windows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketHistory {
    #[serde(rename = "priceChangePercentage24h")]
    pub price_change_percentage_24h: f64,
    #[serde(rename = "priceChangePercentage7d")]
    pub price_change_percentage_7d: f64,
    #[serde(rename = "priceChangePercentage14d")]
    pub price_change_percentage_14d: f64,
}

/// A formatted percentage cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeCell {
    pub text: String,
    pub trend: Trend,
}

impl ChangeCell {
    fn new(value: f64) -> Self {
        Self {
            text: num::percentage(value),
            trend: if value < 0.0 { Trend::Down } else { Trend::Up },
        }
    }
}

impl Crypto {
    /// `"Wrapped Bitcoin"` for `"wrapped-bitcoin"`.
    pub fn display_name(&self) -> String {
        title_case_slug(self.name.as_str())
    }

    pub fn display_ticker(&self) -> String {
        self.ticker.to_uppercase()
    }

    /// Table price cell, two decimals.
    pub fn price_label(&self) -> String {
        format!("${:.2}", self.price)
    }

    /// Detail route for this coin.
    pub fn detail_path(&self) -> String {
        format!("/cryptos/{}", self.name)
    }

    /// 7d, 24h and 14d change cells, in table column order.
    pub fn change_cells(&self) -> [ChangeCell; 3] {
        let h = &self.market_history;
        [
            ChangeCell::new(h.price_change_percentage_7d),
            ChangeCell::new(h.price_change_percentage_24h),
            ChangeCell::new(h.price_change_percentage_14d),
        ]
    }
}

/// Finds a listed coin by identifier.
pub fn find<'a>(cryptos: &'a [Crypto], id: &CoinId) -> Option<&'a Crypto> {
    cryptos.iter().find(|c| &c.name == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crypto() -> Crypto {
        Crypto {
            name: "wrapped-bitcoin".into(),
            ticker: "wbtc".to_string(),
            image: "wbtc.png".to_string(),
            price: 67_001.456,
            market_history: MarketHistory {
                price_change_percentage_24h: -1.234,
                price_change_percentage_7d: 3.0,
                price_change_percentage_14d: 0.0,
            },
        }
    }

    #[test]
    fn test_display_fields() {
        let c = crypto();
        assert_eq!(c.display_name(), "Wrapped Bitcoin");
        assert_eq!(c.display_ticker(), "WBTC");
        assert_eq!(c.price_label(), "$67001.46");
        assert_eq!(c.detail_path(), "/cryptos/wrapped-bitcoin");
    }

    #[test]
    fn test_change_cells_order_and_trend() {
        let [d7, d24, d14] = crypto().change_cells();
        assert_eq!(d7.text, "3.00%");
        assert_eq!(d24.text, "-1.23%");
        assert_eq!(d24.trend, Trend::Down);
        assert_eq!(d14.trend, Trend::Up);
    }

    #[test]
    fn test_deserializes_store_shape() {
        let json = r#"{
            "name": "bitcoin", "ticker": "btc", "image": "b.png", "price": 1.0,
            "marketHistory": {
                "priceChangePercentage24h": 1.0,
                "priceChangePercentage7d": 2.0,
                "priceChangePercentage14d": 3.0
            }
        }"#;
        let c: Crypto = serde_json::from_str(json).unwrap();
        assert_eq!(c.market_history.price_change_percentage_14d, 3.0);
        assert!(find(&[c.clone()], &"bitcoin".into()).is_some());
    }
}
