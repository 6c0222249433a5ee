//! Provider seams and wire types for external market-data and news sources
//!
//! The analysis engine only ever talks to the outside world through the two
//! traits defined here.

pub mod feed;
pub mod news;
pub mod yahoo;

use crate::error::{AnalysisError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use feed::SearchFeedClient;
pub use news::YahooNewsClient;
pub use yahoo::YahooMarketClient;

/// One OHLCV bar, chronological and immutable once fetched
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceBar {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// Asset-level metadata supplied once per analysis
///
/// `max_supply` is the one field where absence carries meaning (uncapped or
/// unknown supply), so it is an `Option` rather than a zero sentinel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetMetadata {
    pub market_cap: f64,
    pub volume_24h: f64,
    pub circulating_supply: f64,
    pub max_supply: Option<f64>,
    pub fifty_two_week_high: f64,
    pub fifty_two_week_low: f64,
}

/// A retrieved headline before polarity scoring
///
/// Sources guarantee a non-empty title and a present publisher/link; items
/// that cannot satisfy this are dropped at the source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Headline {
    pub title: String,
    pub publisher: String,
    pub link: String,
}

/// Mandatory market-data seam: history and metadata for one asset
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetch one year of daily OHLCV bars, oldest first
    async fn price_history(&self, symbol: &str) -> Result<Vec<PriceBar>>;

    /// Fetch asset metadata; `Ok(None)` means the provider answered but
    /// knows nothing about this asset
    async fn asset_metadata(&self, symbol: &str) -> Result<Option<AssetMetadata>>;
}

/// Best-effort headline seam, shared by the primary and fallback sources
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HeadlineSource: Send + Sync {
    /// Fetch up to `limit` headlines for a query (symbol or free text)
    async fn fetch(&self, query: &str, limit: usize) -> Result<Vec<Headline>>;
}

/// Normalize a user-supplied ticker into the provider's quote form
///
/// Upper-cases and appends the `-USD` quote suffix when missing, matching
/// how crypto assets are keyed by the market-data provider.
pub fn normalize_symbol(input: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AnalysisError::InvalidSymbol(input.to_string()));
    }

    let upper = trimmed.to_uppercase();
    if upper.ends_with("-USD") {
        Ok(upper)
    } else {
        Ok(format!("{upper}-USD"))
    }
}

/// Strip the quote suffix back off for free-text news queries
pub fn bare_symbol(symbol: &str) -> &str {
    symbol.strip_suffix("-USD").unwrap_or(symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_appends_quote_suffix() {
        assert_eq!(normalize_symbol("btc").unwrap(), "BTC-USD");
        assert_eq!(normalize_symbol(" eth ").unwrap(), "ETH-USD");
    }

    #[test]
    fn test_normalize_keeps_existing_suffix() {
        assert_eq!(normalize_symbol("SOL-USD").unwrap(), "SOL-USD");
        assert_eq!(normalize_symbol("sol-usd").unwrap(), "SOL-USD");
    }

    #[test]
    fn test_normalize_rejects_empty() {
        assert!(matches!(
            normalize_symbol("   "),
            Err(AnalysisError::InvalidSymbol(_))
        ));
    }

    #[test]
    fn test_bare_symbol() {
        assert_eq!(bare_symbol("BTC-USD"), "BTC");
        assert_eq!(bare_symbol("BTC"), "BTC");
    }
}
