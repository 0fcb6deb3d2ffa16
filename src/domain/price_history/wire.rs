//! Wire types for OHLC price history (REST `GET /coins/{id}/ohlc`).

use crate::shared::{CoinId, USD};
use serde::{Deserialize, Serialize};

/// One candle as sent by the API: `[time_ms, open, high, low, close]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(i64, f64, f64, f64, f64)", into = "(i64, f64, f64, f64, f64)")]
pub struct Ohlc {
    /// Unix timestamp in milliseconds.
    pub time_ms: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl From<(i64, f64, f64, f64, f64)> for Ohlc {
    fn from((time_ms, open, high, low, close): (i64, f64, f64, f64, f64)) -> Self {
        Self {
            time_ms,
            open,
            high,
            low,
            close,
        }
    }
}

impl From<Ohlc> for (i64, f64, f64, f64, f64) {
    fn from(c: Ohlc) -> Self {
        (c.time_ms, c.open, c.high, c.low, c.close)
    }
}

/// REST response: candles sorted ascending by time.
pub type OhlcResponse = Vec<Ohlc>;

/// Price precision requested from the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Precision {
    Full,
    Decimals(u8),
}

impl Precision {
    pub fn as_query_value(&self) -> String {
        match self {
            Precision::Full => "full".to_string(),
            Precision::Decimals(d) => d.to_string(),
        }
    }
}

/// Query for `GET /coins/{id}/ohlc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OhlcQuery {
    pub id: CoinId,
    pub vs_currency: String,
    pub days: u32,
    pub precision: Option<Precision>,
}

impl OhlcQuery {
    /// USD candles over `days`, default precision.
    pub fn usd(id: impl Into<CoinId>, days: u32) -> Self {
        Self {
            id: id.into(),
            vs_currency: USD.to_string(),
            days,
            precision: None,
        }
    }

    pub fn to_query_string(&self) -> String {
        let mut params = vec![
            format!("vs_currency={}", urlencoding::encode(&self.vs_currency)),
            format!("days={}", self.days),
        ];
        if let Some(p) = &self.precision {
            params.push(format!("precision={}", p.as_query_value()));
        }
        params.join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ohlc_from_array() {
        let data: OhlcResponse =
            serde_json::from_str("[[1700000000000, 1.0, 2.0, 0.5, 1.5]]").unwrap();
        assert_eq!(
            data[0],
            Ohlc {
                time_ms: 1_700_000_000_000,
                open: 1.0,
                high: 2.0,
                low: 0.5,
                close: 1.5
            }
        );
    }

    #[test]
    fn test_ohlc_query_string() {
        let mut q = OhlcQuery::usd("bitcoin", 7);
        assert_eq!(q.to_query_string(), "vs_currency=usd&days=7");
        q.precision = Some(Precision::Full);
        assert_eq!(q.to_query_string(), "vs_currency=usd&days=7&precision=full");
        q.precision = Some(Precision::Decimals(4));
        assert_eq!(q.to_query_string(), "vs_currency=usd&days=7&precision=4");
    }
}
