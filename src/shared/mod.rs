//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the API sends, so they can be used directly in wire types
//! without conversion overhead.

pub mod fmt;
pub mod serde_util;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Quote currency used for every price the SDK displays.
pub const USD: &str = "usd";

// ─── CoinId ──────────────────────────────────────────────────────────────────

/// Newtype for CoinGecko coin identifiers (e.g. `"bitcoin"`, `"wrapped-bitcoin"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CoinId(String);

impl CoinId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An empty identifier never produces requests or derived rows.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for CoinId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CoinId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CoinId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for CoinId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CoinId(s.to_string()))
    }
}

impl Serialize for CoinId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CoinId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(CoinId(s))
    }
}

// ─── Utilities ───────────────────────────────────────────────────────────────

/// Turns a coin slug into a title: `"wrapped-bitcoin"` → `"Wrapped Bitcoin"`.
pub fn title_case_slug(slug: &str) -> String {
    slug.split(['-', ' '])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
