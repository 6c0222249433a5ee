//! Headline collection with primary-then-fallback retrieval
//!
//! Both sources are best-effort: a provider failure is logged and the
//! collector degrades to whatever was gathered, possibly nothing. The
//! fallback APPENDS to the primary items rather than replacing them, and
//! duplicates across the two sources are tolerated.

use crate::api::{Headline, HeadlineSource, bare_symbol};
use crate::config::AnalyzerConfig;
use std::sync::Arc;

/// Qualifier added to the bare symbol for the free-text fallback query
const FALLBACK_QUALIFIER: &str = "crypto";

/// The news aggregator: primary source with a feed fallback
pub struct HeadlineCollector {
    primary: Arc<dyn HeadlineSource>,
    fallback: Arc<dyn HeadlineSource>,
    max_primary: usize,
    max_fallback: usize,
    max_total: usize,
    fallback_min: usize,
}

impl HeadlineCollector {
    /// Create a collector over the two sources
    pub fn new(
        primary: Arc<dyn HeadlineSource>,
        fallback: Arc<dyn HeadlineSource>,
        config: &AnalyzerConfig,
    ) -> Self {
        Self {
            primary,
            fallback,
            max_primary: config.max_primary_headlines,
            max_fallback: config.max_fallback_headlines,
            max_total: config.max_headlines,
            fallback_min: config.fallback_min_items,
        }
    }

    /// Collect headlines for a normalized symbol
    ///
    /// Never fails: retrieval errors degrade to fewer (or zero) items and
    /// the sentiment stage reports the distinguished no-data state instead.
    pub async fn collect(&self, symbol: &str) -> Vec<Headline> {
        let mut headlines = match self.primary.fetch(symbol, self.max_primary).await {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!("primary news source failed for {symbol}: {e}");
                Vec::new()
            }
        };
        headlines.retain(|h| !h.title.trim().is_empty());

        if headlines.len() < self.fallback_min {
            let query = format!("{} {FALLBACK_QUALIFIER}", bare_symbol(symbol));
            match self.fallback.fetch(&query, self.max_fallback).await {
                Ok(extra) => {
                    tracing::debug!(
                        "fallback feed supplied {} items for {symbol}",
                        extra.len()
                    );
                    headlines.extend(
                        extra.into_iter().filter(|h| !h.title.trim().is_empty()),
                    );
                }
                Err(e) => {
                    tracing::warn!("fallback news feed failed for {symbol}: {e}");
                }
            }
        }

        headlines.truncate(self.max_total);
        headlines
    }
}
