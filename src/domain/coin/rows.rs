//! Display rows derived from a coin response.
//!
//! Derivation is unconditional: every row is present even when its source
//! field is missing (the value slot becomes an empty string). Filtering of
//! empty link rows happens only at render time, see [`renderable_rows`].

use super::wire::{usd_of, CoinResponse};
use crate::shared::fmt::num;
use serde::{Deserialize, Serialize};

/// How a row's values are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowKind {
    Price,
    Number,
    Links,
}

/// One value slot of a row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DisplayValue {
    Number(f64),
    Text(String),
}

impl DisplayValue {
    /// `Number` when present, empty `Text` otherwise.
    pub fn from_option(value: Option<f64>) -> Self {
        match value {
            Some(v) => DisplayValue::Number(v),
            None => DisplayValue::empty(),
        }
    }

    pub fn empty() -> Self {
        DisplayValue::Text(String::new())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, DisplayValue::Text(s) if s.is_empty())
    }

    /// The URL if this value can be shown as a link (non-blank text).
    fn as_link(&self) -> Option<&str> {
        match self {
            DisplayValue::Text(s) if !s.trim().is_empty() => Some(s.as_str()),
            _ => None,
        }
    }
}

impl From<&str> for DisplayValue {
    fn from(s: &str) -> Self {
        DisplayValue::Text(s.to_string())
    }
}

impl From<String> for DisplayValue {
    fn from(s: String) -> Self {
        DisplayValue::Text(s)
    }
}

/// A labelled, display-ready row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayRow {
    pub label: String,
    pub values: Vec<DisplayValue>,
    pub kind: RowKind,
}

impl DisplayRow {
    fn new(label: &str, kind: RowKind, values: Vec<DisplayValue>) -> Self {
        Self {
            label: label.to_string(),
            values,
            kind,
        }
    }

    fn links(label: &str, links: impl IntoIterator<Item = String>) -> Self {
        Self::new(
            label,
            RowKind::Links,
            links.into_iter().map(DisplayValue::Text).collect(),
        )
    }

    /// The row as it should be rendered, or `None` if it must not render.
    ///
    /// Links rows keep only non-blank string values and disappear when none
    /// remain. Price and Number rows always render; missing values show as
    /// empty slots.
    pub fn rendered(&self) -> Option<DisplayRow> {
        match self.kind {
            RowKind::Links => {
                let values: Vec<DisplayValue> = self
                    .values
                    .iter()
                    .filter(|v| v.as_link().is_some())
                    .cloned()
                    .collect();
                if values.is_empty() {
                    None
                } else {
                    Some(Self {
                        values,
                        ..self.clone()
                    })
                }
            }
            RowKind::Price | RowKind::Number => Some(self.clone()),
        }
    }

    pub fn is_renderable(&self) -> bool {
        self.rendered().is_some()
    }

    /// Link targets of a Links row (empty for other kinds).
    pub fn link_urls(&self) -> Vec<&str> {
        if self.kind != RowKind::Links {
            return Vec::new();
        }
        self.values.iter().filter_map(DisplayValue::as_link).collect()
    }

    /// Formatted value text; multiple values are joined with `" - "`.
    pub fn display_text(&self) -> String {
        match self.kind {
            RowKind::Links => self
                .link_urls()
                .into_iter()
                .map(link_label)
                .collect::<Vec<_>>()
                .join(" "),
            RowKind::Price | RowKind::Number => self
                .values
                .iter()
                .map(|v| match v {
                    DisplayValue::Number(n) if self.kind == RowKind::Price => num::usd(*n),
                    DisplayValue::Number(n) => num::with_commas(*n),
                    DisplayValue::Text(s) => s.clone(),
                })
                .collect::<Vec<_>>()
                .join(" - "),
        }
    }
}

/// Short badge label for a link: its host without a leading `www.`.
pub fn link_label(url: &str) -> String {
    url.split('/')
        .nth(2)
        .map(|host| host.trim_start_matches("www.").to_string())
        .unwrap_or_default()
}

/// Filters a derived list down to the rows that render.
pub fn renderable_rows(rows: &[DisplayRow]) -> Vec<DisplayRow> {
    rows.iter().filter_map(DisplayRow::rendered).collect()
}

// ─── Derivation ──────────────────────────────────────────────────────────────

/// Market cap, volume and supply rows.
pub fn market_stats(coin: &CoinResponse) -> Vec<DisplayRow> {
    if coin.id.is_empty() {
        return Vec::new();
    }
    let md = &coin.market_data;
    vec![
        DisplayRow::new(
            "Market Cap",
            RowKind::Price,
            vec![DisplayValue::from_option(usd_of(&md.market_cap))],
        ),
        DisplayRow::new(
            "24 Hour Trading Vol",
            RowKind::Price,
            vec![DisplayValue::from_option(usd_of(&md.total_volume))],
        ),
        DisplayRow::new(
            "Circulating Supply",
            RowKind::Number,
            vec![DisplayValue::from_option(md.circulating_supply)],
        ),
        DisplayRow::new(
            "Total Supply",
            RowKind::Number,
            vec![DisplayValue::from_option(md.total_supply)],
        ),
        DisplayRow::new(
            "Max Supply",
            RowKind::Number,
            vec![DisplayValue::from_option(md.max_supply)],
        ),
    ]
}

/// 24h range and all-time extremes.
pub fn history_range(coin: &CoinResponse) -> Vec<DisplayRow> {
    if coin.id.is_empty() {
        return Vec::new();
    }
    let md = &coin.market_data;
    vec![
        DisplayRow::new(
            "24h Range",
            RowKind::Price,
            vec![
                DisplayValue::from_option(usd_of(&md.low_24h)),
                DisplayValue::from_option(usd_of(&md.high_24h)),
            ],
        ),
        DisplayRow::new(
            "All-Time High",
            RowKind::Price,
            vec![DisplayValue::from_option(usd_of(&md.ath))],
        ),
        DisplayRow::new(
            "All-Time Low",
            RowKind::Price,
            vec![DisplayValue::from_option(usd_of(&md.atl))],
        ),
    ]
}

/// Website, source, community and whitepaper links.
pub fn external_links(coin: &CoinResponse) -> Vec<DisplayRow> {
    if coin.id.is_empty() {
        return Vec::new();
    }
    let links = &coin.links;
    let telegram = if links.telegram_channel_identifier.trim().is_empty() {
        String::new()
    } else {
        format!("https://t.me/{}", links.telegram_channel_identifier)
    };
    vec![
        DisplayRow::links("Website", links.homepage.iter().cloned()),
        DisplayRow::links("Source Code", links.repos_url.github.iter().cloned()),
        DisplayRow::links("Reddit", [links.subreddit_url.clone()]),
        DisplayRow::links("Whitepaper", [links.whitepaper.clone()]),
        DisplayRow::links("Telegram", [telegram]),
    ]
}

/// All three row lists for a coin detail page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoinRows {
    pub market_stats: Vec<DisplayRow>,
    pub history_range: Vec<DisplayRow>,
    pub external_links: Vec<DisplayRow>,
}

impl From<&CoinResponse> for CoinRows {
    fn from(coin: &CoinResponse) -> Self {
        Self {
            market_stats: market_stats(coin),
            history_range: history_range(coin),
            external_links: external_links(coin),
        }
    }
}
