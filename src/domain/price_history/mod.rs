//! Price history domain — OHLC candles adapted into chart series.

#[cfg(feature = "http")]
pub mod client;
pub mod state;
pub mod wire;

use serde::{Deserialize, Serialize};

pub use state::{ChartMount, ChartRenderer, RenderOutcome};
pub use wire::{Ohlc, OhlcQuery};

const MS_PER_SECOND: i64 = 1000;

/// Number of days fetched when nothing else is selected.
pub const DEFAULT_OHLC_DAYS: u32 = 1;

// ─── Chart selection ─────────────────────────────────────────────────────────

/// How the series is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartMode {
    #[default]
    Line,
    Candlestick,
}

/// Viewport class the chart is laid out for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    #[default]
    Desktop,
    Compact,
}

impl Density {
    /// Desktop from a viewport width of 768px up.
    pub fn from_viewport_width(width_px: u32) -> Self {
        if width_px >= 768 {
            Density::Desktop
        } else {
            Density::Compact
        }
    }
}

/// Range selector options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OhlcDays {
    #[default]
    #[serde(rename = "1")]
    Day1,
    #[serde(rename = "7")]
    Week1,
    #[serde(rename = "30")]
    Month1,
    #[serde(rename = "90")]
    Month3,
    #[serde(rename = "365")]
    Year1,
}

impl OhlcDays {
    pub const ALL: [OhlcDays; 5] = [
        OhlcDays::Day1,
        OhlcDays::Week1,
        OhlcDays::Month1,
        OhlcDays::Month3,
        OhlcDays::Year1,
    ];

    pub fn days(&self) -> u32 {
        match self {
            Self::Day1 => 1,
            Self::Week1 => 7,
            Self::Month1 => 30,
            Self::Month3 => 90,
            Self::Year1 => 365,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Day1 => "1D",
            Self::Week1 => "7D",
            Self::Month1 => "1M",
            Self::Month3 => "3M",
            Self::Year1 => "1Y",
        }
    }

    /// Parses a selector value; anything unknown falls back to one day.
    pub fn from_value(value: &str) -> Self {
        let days = value.trim().parse::<u32>().unwrap_or(DEFAULT_OHLC_DAYS);
        Self::ALL
            .into_iter()
            .find(|d| d.days() == days)
            .unwrap_or_default()
    }
}

// ─── Series ──────────────────────────────────────────────────────────────────

/// A single point on a line chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    /// Unix timestamp in seconds.
    pub time: i64,
    pub value: f64,
}

/// A single candlestick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandlePoint {
    /// Unix timestamp in seconds.
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl From<&Ohlc> for LinePoint {
    fn from(c: &Ohlc) -> Self {
        Self {
            time: c.time_ms / MS_PER_SECOND,
            value: c.close,
        }
    }
}

impl From<&Ohlc> for CandlePoint {
    fn from(c: &Ohlc) -> Self {
        Self {
            time: c.time_ms / MS_PER_SECOND,
            open: c.open,
            high: c.high,
            low: c.low,
            close: c.close,
        }
    }
}

/// Series data in the shape the charting library expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum ChartSeries {
    Line(Vec<LinePoint>),
    Candlestick(Vec<CandlePoint>),
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        match self {
            ChartSeries::Line(points) => points.len(),
            ChartSeries::Candlestick(points) => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Adapts candles for the selected mode.
pub fn to_series(data: &[Ohlc], mode: ChartMode) -> ChartSeries {
    match mode {
        ChartMode::Line => ChartSeries::Line(data.iter().map(LinePoint::from).collect()),
        ChartMode::Candlestick => {
            ChartSeries::Candlestick(data.iter().map(CandlePoint::from).collect())
        }
    }
}

/// Baseline reference: close of the first candle, zero for no data.
pub fn base_price(data: &[Ohlc]) -> f64 {
    data.first().map(|c| c.close).unwrap_or(0.0)
}

// ─── Options ─────────────────────────────────────────────────────────────────

/// Layout options handed to the renderer alongside the series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub mode: ChartMode,
    pub density: Density,
    pub height_px: u32,
    /// Baseline for line-mode coloring (above = up, below = down).
    pub base_price: f64,
    pub show_time_scale: bool,
}

impl ChartOptions {
    pub fn for_view(mode: ChartMode, density: Density, base_price: f64) -> Self {
        Self {
            mode,
            density,
            height_px: match density {
                Density::Desktop => 380,
                Density::Compact => 250,
            },
            base_price,
            show_time_scale: density == Density::Desktop,
        }
    }
}
