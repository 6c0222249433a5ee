//! Crypto confidence analysis
//!
//! This crate computes a single 0-100 confidence score for a cryptocurrency
//! by combining three independently derived signals:
//!
//! - Technical: RSI(14), EMA(50)/EMA(200) trend state and rolling
//!   support/resistance over the price history
//! - Fundamental: liquidity ratio, supply emission and 52-week range
//!   position from asset metadata
//! - Sentiment: lexical polarity over recent headlines, retrieved from a
//!   primary source with a search-feed fallback
//!
//! # Architecture
//!
//! The engine (`CoinAnalyzer`) talks to the outside world only through the
//! `MarketDataProvider` and `HeadlineSource` seams:
//! - `YahooMarketClient`: OHLCV history and asset metadata
//! - `YahooNewsClient`: primary headlines via ticker search
//! - `SearchFeedClient`: fallback headlines via a news search feed
//!
//! Market data is mandatory (an empty series fails the analysis); news is
//! best-effort and degrades to the distinguished no-data sentiment state.
//! Each analysis produces an independent, immutable [`Analysis`] value.
//!
//! # Example
//!
//! ```rust,ignore
//! use coinlens_analysis::{AnalyzerConfig, CoinAnalyzer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let analyzer = CoinAnalyzer::new(AnalyzerConfig::default())?;
//!     let analysis = analyzer.analyze("BTC").await?;
//!
//!     println!("{}: {}/100", analysis.report.symbol, analysis.report.score);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cache;
pub mod config;
pub mod engine;
pub mod error;
pub mod indicators;
pub mod news;
pub mod scoring;

// Re-export main types for convenience
pub use api::{AssetMetadata, Headline, PriceBar};
pub use config::AnalyzerConfig;
pub use engine::{
    Analysis, CoinAnalyzer, ConfidenceReport, FundamentalSnapshot, MarketSeries, NewsItem,
    SentimentCategory, SentimentSnapshot, TechnicalSnapshot, Trend,
};
pub use error::{AnalysisError, Result};
pub use indicators::IndicatorSeries;
