//! Purchase domain — simulated coin purchases against a virtual balance.
//!
//! [`PurchaseForm`] keeps a USD amount and a coin quantity in agreement with
//! the coin price. The actual purchase is executed by an external
//! [`Purchaser`]; its returned [`User`] becomes the new source of truth.

pub mod state;

use crate::domain::portfolio::User;
use crate::error::RemoteError;
use crate::shared::CoinId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;
use thiserror::Error;

pub use state::PurchaseForm;

/// Decimal places both form fields are rounded to.
pub const AMOUNT_DECIMALS: u32 = 5;

// ─── Field ───────────────────────────────────────────────────────────────────

/// The two bound form fields; the last edited one drives the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Usd,
    Quantity,
}

// ─── Collaborator ────────────────────────────────────────────────────────────

/// Executes a purchase remotely and returns the updated user record.
pub trait Purchaser {
    fn purchase(
        &self,
        coin: &CoinId,
        quantity: Decimal,
    ) -> impl Future<Output = Result<User, RemoteError>>;
}

/// A validated order ready to hand to a [`Purchaser`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub coin: CoinId,
    pub quantity: Decimal,
    pub usd_amount: Decimal,
}

/// Outcome of a successful purchase.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseReceipt {
    /// Replacement user record (balance and holdings after the purchase).
    pub user: User,
    /// Banner text, e.g. `"Purchased 2 BTC coins"`.
    pub message: String,
}

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Input precondition failures, checked at submission only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    ZeroAmount,
    MissingAmount,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::ZeroAmount => write!(f, "quantity must be greater than zero"),
            ValidationError::MissingAmount => write!(f, "enter an amount to purchase"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Why a submission did not go through.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PurchaseError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("insufficient balance")]
    InsufficientBalance,

    #[error("a purchase is already in progress")]
    Pending,

    #[error("{0}")]
    Remote(#[from] RemoteError),
}
