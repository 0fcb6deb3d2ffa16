//! # CoinTrek SDK
//!
//! Client-side core of the CoinTrek crypto portfolio viewer, for native and
//! WASM targets.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Newtypes, wire types, display rows, purchase form, chart adapter
//!    and pagination (always available, WASM-safe)
//! 2. **HTTP API** — `CoinGeckoHttp`, one method per endpoint
//! 3. **High-Level Client** — `CoinTrekClient` with nested sub-clients and caching
//! 4. **Queries** — last-request-wins query cells with stale-while-revalidate
//! 5. **App State** — whole-record store and route table
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cointrek_sdk::prelude::*;
//!
//! let client = CoinTrekClient::builder().api_key_from_env().build()?;
//!
//! let coin = client.coins().get(&"bitcoin".into()).await?;
//! let rows = CoinRows::from(&coin);
//! let candles = client.price_history().ohlc(&OhlcQuery::usd("bitcoin", 7)).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and formatting used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client for the CoinGecko API.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `CoinTrekClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Layer 4: Queries ─────────────────────────────────────────────────────────

/// Query cells: request ordering and refresh scheduling.
pub mod query;

// ── Layer 5: App State ───────────────────────────────────────────────────────

/// Global app state with whole-record replacement.
pub mod store;

/// Route table and login guard.
pub mod routes;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::CoinId;

    // Domain types — coin
    pub use crate::domain::coin::wire::{CoinQuery, CoinResponse};
    pub use crate::domain::coin::{
        CoinDetails, CoinRows, DisplayRow, DisplayValue, PriceChange, RowKind, Trend,
    };

    // Domain types — list, news, portfolio
    pub use crate::domain::crypto::{Crypto, MarketHistory, Paginator, PAGE_SIZE};
    pub use crate::domain::news::NewsArticle;
    pub use crate::domain::portfolio::{Holding, User};

    // Domain types — purchase
    pub use crate::domain::purchase::{
        Field, PurchaseError, PurchaseForm, PurchaseOrder, PurchaseReceipt, Purchaser,
    };

    // Domain types — price history
    pub use crate::domain::price_history::{
        ChartMode, ChartMount, ChartOptions, ChartRenderer, ChartSeries, Density, Ohlc,
        OhlcDays, OhlcQuery, RenderOutcome,
    };

    // Errors
    pub use crate::error::{HttpError, RemoteError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Queries, state, routes
    pub use crate::query::{QueryCell, QueryKey, QueryStatus, REFRESH_INTERVAL};
    pub use crate::routes::{Resolution, Route};
    pub use crate::store::{AppState, AppStore};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        api_key_from_env, CoinTrekClient, CoinTrekClientBuilder, CoinsClient,
        PriceHistorySubClient,
    };
}
