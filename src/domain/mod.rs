//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains some of:
//! - `mod.rs` — Rich domain types (validated, business-logic-ready)
//! - `wire.rs` — Raw serde structs matching CoinGecko responses
//! - `convert.rs` — `TryFrom`/`From` conversions with validation
//! - `state.rs` — App-owned state containers with update methods
//! - `client.rs` — Sub-client with HTTP methods and caching

pub mod coin;
pub mod crypto;
pub mod news;
pub mod portfolio;
pub mod price_history;
pub mod purchase;
