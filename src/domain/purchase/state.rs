//! Purchase form state — app-owned, SDK-provided reconciliation logic.

use super::{
    Field, PurchaseError, PurchaseOrder, PurchaseReceipt, Purchaser, ValidationError,
    AMOUNT_DECIMALS,
};
use crate::domain::portfolio::User;
use crate::error::RemoteError;
use crate::shared::fmt::{decimal, num};
use crate::shared::CoinId;
use rust_decimal::prelude::*;

/// USD amount and coin quantity bound through the coin price.
///
/// `None` in either field is the explicit "unset" state: the field renders
/// empty and never as zero or `NaN`.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseForm {
    coin: CoinId,
    ticker: String,
    coin_price: Decimal,
    usd_amount: Option<Decimal>,
    coin_quantity: Option<Decimal>,
    last_edited: Field,
    error: Option<String>,
    pending: bool,
}

/// Rounds to the form precision, half away from zero.
pub fn round_amount(value: Decimal) -> Decimal {
    value
        .round_dp_with_strategy(AMOUNT_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
}

/// Parses field text; anything non-numeric is `None`.
pub fn parse_amount(text: &str) -> Option<Decimal> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

impl PurchaseForm {
    /// Starts at one coin worth `coin_price` dollars.
    pub fn new(coin: impl Into<CoinId>, ticker: &str, coin_price: f64) -> Self {
        let coin_price = Decimal::from_f64(coin_price)
            .filter(|p| p.is_sign_positive())
            .unwrap_or(Decimal::ZERO);
        Self {
            coin: coin.into(),
            ticker: ticker.to_uppercase(),
            coin_price,
            usd_amount: Some(round_amount(coin_price)),
            coin_quantity: Some(Decimal::ONE),
            last_edited: Field::Quantity,
            error: None,
            pending: false,
        }
    }

    // ── Editing ──────────────────────────────────────────────────────────

    /// Applies an edit to `field` and re-derives the other field.
    pub fn edit(&mut self, field: Field, text: &str) {
        self.last_edited = field;
        let typed = parse_amount(text).map(round_amount);
        let derived = typed.and_then(|v| self.derive(field, v));
        match field {
            Field::Usd => {
                self.usd_amount = typed;
                self.coin_quantity = derived;
            }
            Field::Quantity => {
                self.coin_quantity = typed;
                self.usd_amount = derived;
            }
        }
    }

    pub fn edit_usd(&mut self, text: &str) {
        self.edit(Field::Usd, text);
    }

    pub fn edit_quantity(&mut self, text: &str) {
        self.edit(Field::Quantity, text);
    }

    fn derive(&self, from: Field, value: Decimal) -> Option<Decimal> {
        match from {
            Field::Usd => value.checked_div(self.coin_price).map(round_amount),
            Field::Quantity => value.checked_mul(self.coin_price).map(round_amount),
        }
    }

    /// Applies a new coin price, re-deriving from the last edited field.
    pub fn set_coin_price(&mut self, coin_price: f64) {
        let Some(price) = Decimal::from_f64(coin_price).filter(|p| p.is_sign_positive()) else {
            return;
        };
        self.coin_price = price;
        let driving = match self.last_edited {
            Field::Usd => self.usd_amount,
            Field::Quantity => self.coin_quantity,
        };
        let derived = driving.and_then(|v| self.derive(self.last_edited, v));
        match self.last_edited {
            Field::Usd => self.coin_quantity = derived,
            Field::Quantity => self.usd_amount = derived,
        }
    }

    // ── Reads ────────────────────────────────────────────────────────────

    pub fn coin(&self) -> &CoinId {
        &self.coin
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn coin_price(&self) -> Decimal {
        self.coin_price
    }

    pub fn usd_amount(&self) -> Option<Decimal> {
        self.usd_amount
    }

    pub fn coin_quantity(&self) -> Option<Decimal> {
        self.coin_quantity
    }

    pub fn last_edited(&self) -> Field {
        self.last_edited
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Text for the USD input, empty when unset.
    pub fn usd_input(&self) -> String {
        decimal::input_value(self.usd_amount.as_ref())
    }

    /// Text for the quantity input, empty when unset.
    pub fn quantity_input(&self) -> String {
        decimal::input_value(self.coin_quantity.as_ref())
    }

    /// `"Total: $1,234.5"`; an unset amount shows as zero here only.
    pub fn total_label(&self) -> String {
        format!(
            "Total: ${}",
            decimal::display(&self.usd_amount.unwrap_or(Decimal::ZERO))
        )
    }

    /// Whether the submit action is disabled.
    ///
    /// Blocked while a purchase is outstanding, or when `balance` is a
    /// positive number strictly below the current USD amount. An absent or
    /// zero balance never blocks.
    pub fn is_blocked(&self, balance: Option<f64>) -> bool {
        if self.pending {
            return true;
        }
        let balance = balance
            .filter(|b| b.is_finite() && *b > 0.0)
            .and_then(Decimal::from_f64);
        match (balance, self.usd_amount) {
            (Some(balance), Some(usd)) => balance < usd,
            _ => false,
        }
    }

    // ── Submission ───────────────────────────────────────────────────────

    /// Submission-time input check.
    pub fn validate(&self) -> Result<PurchaseOrder, ValidationError> {
        let usd_amount = match self.usd_amount {
            Some(usd) if usd.is_zero() => return Err(ValidationError::ZeroAmount),
            Some(usd) => usd,
            None => return Err(ValidationError::MissingAmount),
        };
        let quantity = self.coin_quantity.ok_or(ValidationError::MissingAmount)?;
        Ok(PurchaseOrder {
            coin: self.coin.clone(),
            quantity,
            usd_amount,
        })
    }

    /// Validates and marks the form pending. The caller executes the order
    /// and reports back through [`PurchaseForm::complete`].
    pub fn prepare(&mut self, balance: Option<f64>) -> Result<PurchaseOrder, PurchaseError> {
        if self.pending {
            return Err(PurchaseError::Pending);
        }
        let order = match self.validate() {
            Ok(order) => order,
            Err(e) => {
                self.error = Some(e.to_string());
                return Err(e.into());
            }
        };
        if self.is_blocked(balance) {
            return Err(PurchaseError::InsufficientBalance);
        }
        self.error = None;
        self.pending = true;
        Ok(order)
    }

    /// Records the collaborator's answer for an order from [`prepare`].
    ///
    /// [`prepare`]: PurchaseForm::prepare
    pub fn complete(
        &mut self,
        order: &PurchaseOrder,
        result: Result<User, RemoteError>,
    ) -> Result<PurchaseReceipt, PurchaseError> {
        self.pending = false;
        match result {
            Ok(user) => {
                self.error = None;
                let message = purchase_message(order.quantity, &self.ticker);
                tracing::debug!(coin = %order.coin, quantity = %order.quantity, "Purchase completed");
                Ok(PurchaseReceipt { user, message })
            }
            Err(e) => {
                tracing::warn!(coin = %order.coin, error = %e, "Purchase rejected");
                self.error = Some(e.message.clone());
                Err(e.into())
            }
        }
    }

    /// Validates, executes through `purchaser` and records the outcome.
    pub async fn submit<P: Purchaser>(
        &mut self,
        purchaser: &P,
        balance: Option<f64>,
    ) -> Result<PurchaseReceipt, PurchaseError> {
        let order = self.prepare(balance)?;
        let result = purchaser.purchase(&order.coin, order.quantity).await;
        self.complete(&order, result)
    }
}

/// `"Purchased 2 BTC coins"` / `"Purchased 0.5 BTC coin"`.
pub fn purchase_message(quantity: Decimal, ticker: &str) -> String {
    let plural = if quantity > Decimal::ONE { "s" } else { "" };
    let quantity = quantity
        .to_f64()
        .map(num::with_commas)
        .unwrap_or_else(|| decimal::display(&quantity));
    format!("Purchased {} {} coin{}", quantity, ticker.to_uppercase(), plural)
}
