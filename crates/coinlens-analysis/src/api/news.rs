//! Primary headline source backed by the Yahoo Finance ticker search

use crate::api::{Headline, HeadlineSource};
use crate::error::{AnalysisError, Result};
use async_trait::async_trait;
use yahoo_finance_api as yahoo;

/// Primary implementation of [`HeadlineSource`], keyed by the normalized
/// quote symbol
pub struct YahooNewsClient {}

impl YahooNewsClient {
    /// Create a new primary news client
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for YahooNewsClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HeadlineSource for YahooNewsClient {
    async fn fetch(&self, query: &str, limit: usize) -> Result<Vec<Headline>> {
        let provider = yahoo::YahooConnector::new()
            .map_err(|e| AnalysisError::ProviderError(e.to_string()))?;

        let result = provider
            .search_ticker(query)
            .await
            .map_err(|e| AnalysisError::ProviderError(e.to_string()))?;

        Ok(result
            .news
            .into_iter()
            .filter(|item| !item.title.trim().is_empty())
            .take(limit)
            .map(|item| Headline {
                title: item.title,
                publisher: item.publisher,
                link: item.link,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_fetch_headlines_live() {
        let client = YahooNewsClient::new();
        let headlines = client.fetch("BTC-USD", 6).await.unwrap();

        for headline in &headlines {
            assert!(!headline.title.is_empty());
        }
        assert!(headlines.len() <= 6);
    }
}
