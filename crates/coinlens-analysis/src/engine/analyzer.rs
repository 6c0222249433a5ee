//! One-shot analysis pipeline for a single asset
//!
//! Each `analyze` call produces a fully independent result: retrieval,
//! indicator calculation, the three scorers and the final aggregation share
//! no mutable state across invocations. Only the two retrieval seams are
//! async; scoring is pure.

use crate::api::{
    HeadlineSource, MarketDataProvider, SearchFeedClient, YahooMarketClient, YahooNewsClient,
    normalize_symbol,
};
use crate::cache::{CachedMarket, MarketCache};
use crate::config::AnalyzerConfig;
use crate::engine::report::{Analysis, ConfidenceReport, MarketSeries};
use crate::error::{AnalysisError, Result};
use crate::indicators::IndicatorSeries;
use crate::news::HeadlineCollector;
use crate::scoring::{SentimentModel, confidence_score, fundamental, technical};
use chrono::Utc;
use std::sync::Arc;

/// Orchestrates one analysis run per call
pub struct CoinAnalyzer {
    config: AnalyzerConfig,
    market: Arc<dyn MarketDataProvider>,
    collector: HeadlineCollector,
    sentiment: SentimentModel,
    cache: MarketCache,
}

impl CoinAnalyzer {
    /// Create an analyzer wired to the production providers
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        config.validate()?;

        let market = Arc::new(YahooMarketClient::new(config.request_timeout)?);
        let primary = Arc::new(YahooNewsClient::new());
        let fallback = Arc::new(SearchFeedClient::new(
            config.request_timeout,
            config.feed_rate_limit,
        )?);

        Ok(Self::with_providers(config, market, primary, fallback))
    }

    /// Create an analyzer over explicit provider implementations
    pub fn with_providers(
        config: AnalyzerConfig,
        market: Arc<dyn MarketDataProvider>,
        primary: Arc<dyn HeadlineSource>,
        fallback: Arc<dyn HeadlineSource>,
    ) -> Self {
        let collector = HeadlineCollector::new(primary, fallback, &config);
        let cache = MarketCache::new(config.market_cache_ttl);

        Self {
            config,
            market,
            collector,
            sentiment: SentimentModel::new(),
            cache,
        }
    }

    /// Run one full analysis for a ticker
    ///
    /// Market data is mandatory: an empty series or failed fetch aborts with
    /// [`AnalysisError::DataUnavailable`], and absent metadata aborts with
    /// [`AnalysisError::MetadataMissing`] rather than scoring partially.
    /// News retrieval degrades instead of failing.
    pub async fn analyze(&self, ticker: &str) -> Result<Analysis> {
        let symbol = normalize_symbol(ticker)?;
        tracing::info!("analyzing {symbol}");

        let (market, headlines) = tokio::join!(
            self.fetch_market(&symbol),
            self.collector.collect(&symbol),
        );
        let market = market?;

        if market.bars.is_empty() {
            return Err(AnalysisError::DataUnavailable {
                symbol,
                reason: "empty price history".to_string(),
            });
        }

        let indicators = IndicatorSeries::compute(&market.bars)?;

        let technical_snap = technical::technical_snapshot(&market.bars, &indicators)
            .ok_or_else(|| AnalysisError::DataUnavailable {
                symbol: symbol.clone(),
                reason: "empty price history".to_string(),
            })?;

        let fundamental_snap =
            fundamental::fundamental_snapshot(market.metadata.as_ref(), market.bars.last())
                .ok_or_else(|| AnalysisError::MetadataMissing {
                    symbol: symbol.clone(),
                })?;

        let sentiment_snap = self
            .sentiment
            .snapshot(&headlines, self.config.sentiment_threshold);

        let score = confidence_score(
            &technical_snap,
            &fundamental_snap,
            &sentiment_snap,
            self.config.sentiment_weight,
        );
        tracing::info!(
            "{symbol}: score {score}, trend {}, sentiment {}",
            technical_snap.trend,
            sentiment_snap.category
        );

        Ok(Analysis {
            report: ConfidenceReport {
                symbol,
                score,
                technical: technical_snap,
                fundamental: fundamental_snap,
                sentiment: sentiment_snap,
                generated_at: Utc::now(),
            },
            series: MarketSeries {
                bars: market.bars,
                indicators,
            },
        })
    }

    async fn fetch_market(&self, symbol: &str) -> Result<CachedMarket> {
        if let Some(cached) = self.cache.get(symbol).await {
            return Ok(cached);
        }

        let (bars, metadata) = tokio::join!(
            self.market.price_history(symbol),
            self.market.asset_metadata(symbol),
        );

        // Market data is mandatory; retrieval errors surface as the
        // no-data condition for this symbol
        let fetch_failure = |e: AnalysisError| AnalysisError::DataUnavailable {
            symbol: symbol.to_string(),
            reason: e.to_string(),
        };

        let market = CachedMarket {
            bars: bars.map_err(fetch_failure)?,
            metadata: metadata.map_err(fetch_failure)?,
        };

        if !market.bars.is_empty() {
            self.cache.insert(symbol.to_string(), market.clone()).await;
        }

        Ok(market)
    }
}
