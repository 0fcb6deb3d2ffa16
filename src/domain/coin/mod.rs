//! Coin domain — detail-page header, display rows, market-data fetches.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod rows;
pub mod state;
pub mod wire;

use crate::shared::fmt::num;
use crate::shared::CoinId;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use rows::{CoinRows, DisplayRow, DisplayValue, RowKind};
pub use state::CoinCache;

// ─── CoinDetails ─────────────────────────────────────────────────────────────

/// Header projection of a coin response: identity, artwork, rank, 24h move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinDetails {
    pub id: CoinId,
    pub name: String,
    /// Upper-cased ticker, e.g. `"BTC"`.
    pub symbol: String,
    pub image_url: String,
    pub market_cap_rank: Option<u32>,
    pub current_price: Option<f64>,
    pub price_change_24h: PriceChange,
    /// English description (HTML as delivered by the API), empty if absent.
    pub description: String,
}

impl CoinDetails {
    /// Rank badge text, e.g. `"#1"`.
    pub fn rank_badge(&self) -> Option<String> {
        self.market_cap_rank
            .filter(|r| *r > 0)
            .map(|r| format!("#{}", r))
    }
}

// ─── PriceChange ─────────────────────────────────────────────────────────────

/// Direction of a price move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Up,
    Down,
}

/// Absolute and relative price change over a window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceChange {
    pub value: Option<f64>,
    pub percentage: Option<f64>,
}

impl PriceChange {
    /// Negative percentages are down, everything else up.
    pub fn trend(&self) -> Trend {
        match self.percentage {
            Some(p) if p < 0.0 => Trend::Down,
            _ => Trend::Up,
        }
    }

    /// `"1,234.5 (2.35%)"`, `"2.35%"` or `None` when nothing is known.
    pub fn label(&self) -> Option<String> {
        let pct = self.percentage.filter(|p| *p != 0.0);
        match (self.value.filter(|v| *v != 0.0), pct) {
            (Some(v), Some(p)) => Some(format!("{} ({})", num::display(v), num::percentage(p))),
            (Some(v), None) => Some(num::display(v)),
            (None, Some(p)) => Some(num::percentage(p)),
            (None, None) => None,
        }
    }
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum ValidationError {
    Multiple(String, Vec<ValidationError>),
    MissingId,
    MissingName,
    MissingSymbol,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Multiple(id, errors) => {
                writeln!(f, "Coin validation errors ({id}):")?;
                for err in errors {
                    writeln!(f, "  - {}", err)?;
                }
                Ok(())
            }
            ValidationError::MissingId => write!(f, "Missing id"),
            ValidationError::MissingName => write!(f, "Missing name"),
            ValidationError::MissingSymbol => write!(f, "Missing symbol"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_change_label() {
        let both = PriceChange {
            value: Some(-1234.5),
            percentage: Some(-2.3456),
        };
        assert_eq!(both.label().unwrap(), "-1,234.5 (-2.35%)");
        assert_eq!(both.trend(), Trend::Down);

        let pct_only = PriceChange {
            value: None,
            percentage: Some(4.0),
        };
        assert_eq!(pct_only.label().unwrap(), "4.00%");
        assert_eq!(pct_only.trend(), Trend::Up);

        assert_eq!(PriceChange::default().label(), None);
    }
}
