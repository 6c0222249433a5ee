//! Yahoo Finance market-data client
//!
//! OHLCV history goes through the `yahoo_finance_api` connector; asset
//! metadata comes from the quote-summary HTTP endpoint. Crypto assets
//! populate an unpredictable subset of the modules, so every metadata field
//! parses as optional.

use crate::api::{AssetMetadata, MarketDataProvider, PriceBar};
use crate::error::{AnalysisError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::time::Duration;
use time::OffsetDateTime;
use yahoo_finance_api as yahoo;

const QUOTE_SUMMARY_URL: &str = "https://query1.finance.yahoo.com/v10/finance/quoteSummary";
const LOOKBACK_DAYS: i64 = 365;

/// Yahoo-backed implementation of [`MarketDataProvider`]
pub struct YahooMarketClient {
    http: reqwest::Client,
}

impl YahooMarketClient {
    /// Create a new client with the given per-request timeout
    pub fn new(request_timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()?;
        Ok(Self { http })
    }

    async fn fetch_history(&self, symbol: &str) -> Result<Vec<PriceBar>> {
        let provider = yahoo::YahooConnector::new()
            .map_err(|e| AnalysisError::ProviderError(e.to_string()))?;

        let end = Utc::now();
        let start = end - chrono::Duration::days(LOOKBACK_DAYS);

        let start_odt = OffsetDateTime::from_unix_timestamp(start.timestamp())
            .map_err(|e| AnalysisError::ProviderError(format!("invalid start timestamp: {e}")))?;
        let end_odt = OffsetDateTime::from_unix_timestamp(end.timestamp())
            .map_err(|e| AnalysisError::ProviderError(format!("invalid end timestamp: {e}")))?;

        let response = provider
            .get_quote_history(symbol, start_odt, end_odt)
            .await
            .map_err(|e| AnalysisError::ProviderError(e.to_string()))?;

        let quotes = response
            .quotes()
            .map_err(|e| AnalysisError::ProviderError(e.to_string()))?;

        Ok(quotes
            .iter()
            .map(|q| PriceBar {
                timestamp: DateTime::from_timestamp(q.timestamp as i64, 0)
                    .unwrap_or_else(Utc::now),
                open: q.open,
                high: q.high,
                low: q.low,
                close: q.close,
                volume: q.volume,
            })
            .collect())
    }

    async fn fetch_metadata(&self, symbol: &str) -> Result<Option<AssetMetadata>> {
        let url = format!("{QUOTE_SUMMARY_URL}/{symbol}?modules=price%2CsummaryDetail");

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(AnalysisError::ProviderError(format!(
                "quote summary returned HTTP {} for {symbol}",
                response.status()
            )));
        }

        let envelope: QuoteSummaryEnvelope = response.json().await?;
        Ok(envelope.into_metadata())
    }
}

#[async_trait]
impl MarketDataProvider for YahooMarketClient {
    async fn price_history(&self, symbol: &str) -> Result<Vec<PriceBar>> {
        self.fetch_history(symbol).await
    }

    async fn asset_metadata(&self, symbol: &str) -> Result<Option<AssetMetadata>> {
        self.fetch_metadata(symbol).await
    }
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryEnvelope {
    #[serde(rename = "quoteSummary")]
    quote_summary: QuoteSummaryOuter,
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryOuter {
    result: Option<Vec<QuoteSummaryNode>>,
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryNode {
    #[serde(rename = "summaryDetail")]
    summary_detail: Option<SummaryDetail>,
    price: Option<PriceModule>,
}

/// Numeric fields arrive wrapped as `{"raw": ..., "fmt": ...}` and any of
/// them may be missing entirely
#[derive(Debug, Default, Deserialize)]
struct SummaryDetail {
    #[serde(rename = "marketCap")]
    market_cap: Option<WrappedNumber>,
    #[serde(rename = "volume24Hr")]
    volume_24hr: Option<WrappedNumber>,
    #[serde(rename = "circulatingSupply")]
    circulating_supply: Option<WrappedNumber>,
    #[serde(rename = "maxSupply")]
    max_supply: Option<WrappedNumber>,
    #[serde(rename = "fiftyTwoWeekHigh")]
    fifty_two_week_high: Option<WrappedNumber>,
    #[serde(rename = "fiftyTwoWeekLow")]
    fifty_two_week_low: Option<WrappedNumber>,
}

#[derive(Debug, Default, Deserialize)]
struct PriceModule {
    #[serde(rename = "marketCap")]
    market_cap: Option<WrappedNumber>,
    #[serde(rename = "volume24Hr")]
    volume_24hr: Option<WrappedNumber>,
    #[serde(rename = "circulatingSupply")]
    circulating_supply: Option<WrappedNumber>,
}

#[derive(Debug, Deserialize)]
struct WrappedNumber {
    raw: Option<f64>,
}

fn unwrap_number(field: Option<&WrappedNumber>) -> Option<f64> {
    field.and_then(|w| w.raw)
}

impl QuoteSummaryEnvelope {
    /// Collapse the module soup into one metadata record, or `None` when
    /// the provider answered without any usable module
    fn into_metadata(self) -> Option<AssetMetadata> {
        let node = self.quote_summary.result?.into_iter().next()?;
        if node.summary_detail.is_none() && node.price.is_none() {
            return None;
        }

        let detail = node.summary_detail.unwrap_or_default();
        let price = node.price.unwrap_or_default();

        Some(AssetMetadata {
            market_cap: unwrap_number(detail.market_cap.as_ref())
                .or_else(|| unwrap_number(price.market_cap.as_ref()))
                .unwrap_or(0.0),
            volume_24h: unwrap_number(detail.volume_24hr.as_ref())
                .or_else(|| unwrap_number(price.volume_24hr.as_ref()))
                .unwrap_or(0.0),
            circulating_supply: unwrap_number(detail.circulating_supply.as_ref())
                .or_else(|| unwrap_number(price.circulating_supply.as_ref()))
                .unwrap_or(0.0),
            max_supply: unwrap_number(detail.max_supply.as_ref()),
            fifty_two_week_high: unwrap_number(detail.fifty_two_week_high.as_ref())
                .unwrap_or(0.0),
            fifty_two_week_low: unwrap_number(detail.fifty_two_week_low.as_ref())
                .unwrap_or(0.0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_parsing() {
        let payload = r#"{
            "quoteSummary": {
                "result": [{
                    "summaryDetail": {
                        "marketCap": {"raw": 1.2e12, "fmt": "1.2T"},
                        "volume24Hr": {"raw": 3.5e10, "fmt": "35B"},
                        "circulatingSupply": {"raw": 1.97e7, "fmt": "19.7M"},
                        "maxSupply": {"raw": 2.1e7, "fmt": "21M"},
                        "fiftyTwoWeekHigh": {"raw": 109000.0},
                        "fiftyTwoWeekLow": {"raw": 38500.0}
                    },
                    "price": {
                        "marketCap": {"raw": 1.19e12}
                    }
                }],
                "error": null
            }
        }"#;

        let envelope: QuoteSummaryEnvelope = serde_json::from_str(payload).unwrap();
        let metadata = envelope.into_metadata().unwrap();

        assert!((metadata.market_cap - 1.2e12).abs() < 1.0);
        assert_eq!(metadata.max_supply, Some(2.1e7));
        assert!((metadata.fifty_two_week_low - 38500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_metadata_missing_modules() {
        let payload = r#"{"quoteSummary": {"result": [{}], "error": null}}"#;
        let envelope: QuoteSummaryEnvelope = serde_json::from_str(payload).unwrap();
        assert!(envelope.into_metadata().is_none());
    }

    #[test]
    fn test_metadata_absent_max_supply_stays_none() {
        let payload = r#"{
            "quoteSummary": {
                "result": [{
                    "summaryDetail": {
                        "marketCap": {"raw": 5.0e9},
                        "circulatingSupply": {"raw": 1.0e8}
                    }
                }],
                "error": null
            }
        }"#;

        let envelope: QuoteSummaryEnvelope = serde_json::from_str(payload).unwrap();
        let metadata = envelope.into_metadata().unwrap();
        assert!(metadata.max_supply.is_none());
        assert!((metadata.volume_24h - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_metadata_empty_result() {
        let payload = r#"{"quoteSummary": {"result": null, "error": null}}"#;
        let envelope: QuoteSummaryEnvelope = serde_json::from_str(payload).unwrap();
        assert!(envelope.into_metadata().is_none());
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_price_history_live() {
        let client = YahooMarketClient::new(Duration::from_secs(10)).unwrap();
        let bars = client.price_history("BTC-USD").await.unwrap();
        assert!(!bars.is_empty());
        assert!(bars[0].close > 0.0);
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_asset_metadata_live() {
        let client = YahooMarketClient::new(Duration::from_secs(10)).unwrap();
        let metadata = client.asset_metadata("BTC-USD").await.unwrap();
        assert!(metadata.is_some());
    }
}
