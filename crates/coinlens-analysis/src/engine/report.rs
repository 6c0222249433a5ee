//! Analysis result types
//!
//! Everything here is plain immutable data: each snapshot is owned by the
//! report that produced it, and the chart series is a separate read-only
//! composite rather than a mutated shared frame.

use crate::api::PriceBar;
use crate::indicators::IndicatorSeries;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trend state of the latest close against its moving averages
///
/// Classification is total: exactly one variant applies to any
/// (close, EMA50, EMA200) triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    StrongUptrend,
    StrongDowntrend,
    ModerateUptrend,
    WeakChoppy,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::StrongUptrend => "Strong Uptrend",
            Self::StrongDowntrend => "Strong Downtrend",
            Self::ModerateUptrend => "Moderate Uptrend",
            Self::WeakChoppy => "Weak/Choppy",
        };
        f.write_str(label)
    }
}

/// Latest technical reading, one per analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnicalSnapshot {
    pub current_price: f64,
    pub rsi: f64,
    pub ema_50: f64,
    pub ema_200: f64,
    pub trend: Trend,
    pub support: f64,
    pub resistance: f64,
}

/// Derived fundamental reading, one per analysis
///
/// `supply_percent` is `None` exactly when `max_supply` is absent or
/// non-positive; it is never collapsed to zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundamentalSnapshot {
    pub market_cap: f64,
    pub volume: f64,
    pub volume_to_market_cap: f64,
    pub circulating_supply: f64,
    pub max_supply: Option<f64>,
    pub supply_percent: Option<f64>,
    pub year_high: f64,
    pub year_low: f64,
    pub range_position: f64,
}

/// A scored headline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub publisher: String,
    pub link: String,
    /// Polarity in [-1, 1]; negative reads negative
    pub polarity: f64,
}

/// Aggregate sentiment category
///
/// `NoData` marks "no headlines were ever retrieved" and is distinct from a
/// genuinely neutral score computed from real items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentCategory {
    Bullish,
    Bearish,
    Neutral,
    NoData,
}

impl fmt::Display for SentimentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Bullish => "Bullish",
            Self::Bearish => "Bearish",
            Self::Neutral => "Neutral",
            Self::NoData => "Neutral (no data)",
        };
        f.write_str(label)
    }
}

/// Aggregate news sentiment, one per analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentSnapshot {
    /// Mean polarity over scored items, 0.0 when there are none
    pub score: f64,
    pub category: SentimentCategory,
    /// Scored items in retrieval order
    pub items: Vec<NewsItem>,
}

/// Final weighted confidence outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfidenceReport {
    pub symbol: String,
    /// Weighted confidence score, clamped to [0, 100]
    pub score: u8,
    pub technical: TechnicalSnapshot,
    pub fundamental: FundamentalSnapshot,
    pub sentiment: SentimentSnapshot,
    pub generated_at: DateTime<Utc>,
}

/// Read-only composite handed to the display layer for charting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketSeries {
    pub bars: Vec<PriceBar>,
    pub indicators: IndicatorSeries,
}

/// Complete outcome of one analysis run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    pub report: ConfidenceReport,
    pub series: MarketSeries,
}
