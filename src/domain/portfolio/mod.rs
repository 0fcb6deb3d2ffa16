//! Portfolio domain — the signed-in user, cash balance and coin holdings.
//!
//! The SDK only reads these records. A purchase returns a complete new
//! [`User`], which replaces the old one wholesale (see `store`).

use crate::shared::fmt::num;
use crate::shared::CoinId;
use serde::{Deserialize, Serialize};

/// A signed-in user as returned by the portfolio backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub username: String,
    /// Virtual cash balance in USD. Absent for accounts without a wallet.
    #[serde(default)]
    pub balance: Option<f64>,
    #[serde(default)]
    pub portfolio: Vec<Holding>,
}

/// Quantity of one coin owned by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Coin identifier the holding is keyed by.
    pub name: CoinId,
    pub quantity: f64,
}

impl User {
    /// Owned quantity of `coin`, zero when not held.
    pub fn owned_quantity(&self, coin: &CoinId) -> f64 {
        self.portfolio
            .iter()
            .filter(|h| &h.name == coin)
            .map(|h| h.quantity)
            .sum()
    }

    /// Balance as a usable positive number.
    pub fn positive_balance(&self) -> Option<f64> {
        self.balance.filter(|b| b.is_finite() && *b > 0.0)
    }

    /// `"Cash Balance: $1,234.56"` when a positive balance is known.
    pub fn cash_balance_label(&self) -> Option<String> {
        self.positive_balance()
            .map(|b| format!("Cash Balance: {}", num::usd(b)))
    }
}

/// Owned quantity for an optional user (signed-out users own nothing).
pub fn owned_quantity(user: Option<&User>, coin: &CoinId) -> f64 {
    user.map(|u| u.owned_quantity(coin)).unwrap_or(0.0)
}

/// `"BTC Balance: 2 BTCs"` for the purchase panel.
pub fn holding_label(quantity: f64, ticker: &str) -> String {
    let ticker = ticker.to_uppercase();
    let plural = if quantity > 1.0 { "s" } else { "" };
    format!(
        "{ticker} Balance: {} {ticker}{plural}",
        num::with_commas(quantity)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: "u1".to_string(),
            username: "satoshi".to_string(),
            balance: Some(1500.25),
            portfolio: vec![
                Holding {
                    name: "bitcoin".into(),
                    quantity: 0.5,
                },
                Holding {
                    name: "ethereum".into(),
                    quantity: 3.0,
                },
            ],
        }
    }

    #[test]
    fn test_owned_quantity() {
        let u = user();
        assert_eq!(u.owned_quantity(&"bitcoin".into()), 0.5);
        assert_eq!(u.owned_quantity(&"dogecoin".into()), 0.0);
        assert_eq!(owned_quantity(None, &"bitcoin".into()), 0.0);
    }

    #[test]
    fn test_positive_balance() {
        let mut u = user();
        assert_eq!(u.positive_balance(), Some(1500.25));
        u.balance = Some(0.0);
        assert_eq!(u.positive_balance(), None);
        u.balance = None;
        assert_eq!(u.cash_balance_label(), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(user().cash_balance_label().unwrap(), "Cash Balance: $1,500.25");
        assert_eq!(holding_label(3.0, "eth"), "ETH Balance: 3 ETHs");
        assert_eq!(holding_label(0.5, "btc"), "BTC Balance: 0.5 BTC");
    }

    #[test]
    fn test_user_deserializes_with_missing_fields() {
        let u: User = serde_json::from_str(r#"{"username":"a"}"#).unwrap();
        assert_eq!(u.balance, None);
        assert!(u.portfolio.is_empty());
    }
}
