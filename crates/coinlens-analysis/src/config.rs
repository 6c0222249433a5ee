//! Configuration for crypto analysis operations

use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for one analyzer instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Timeout applied to each provider request
    pub request_timeout: Duration,

    /// Cache TTL for fetched market data (bars + metadata)
    pub market_cache_ttl: Duration,

    /// Headlines requested from the primary news source
    pub max_primary_headlines: usize,

    /// Headlines taken from the fallback feed
    pub max_fallback_headlines: usize,

    /// Cap on the total collected headline count
    pub max_headlines: usize,

    /// Fallback kicks in when fewer valid primary items than this survive
    pub fallback_min_items: usize,

    /// Mean polarity above which sentiment reads Bullish (and below the
    /// negation of which it reads Bearish)
    pub sentiment_threshold: f64,

    /// Weight applied to the mean polarity in the confidence score
    pub sentiment_weight: f64,

    /// Requests per minute allowed against the fallback feed
    pub feed_rate_limit: u32,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(8),
            market_cache_ttl: Duration::from_secs(300),
            max_primary_headlines: 6,
            max_fallback_headlines: 5,
            max_headlines: 10,
            fallback_min_items: 2,
            sentiment_threshold: 0.1,
            sentiment_weight: 15.0,
            feed_rate_limit: 30,
        }
    }
}

impl AnalyzerConfig {
    /// Create a new configuration builder
    pub fn builder() -> AnalyzerConfigBuilder {
        AnalyzerConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.request_timeout.is_zero() {
            return Err(AnalysisError::ConfigError(
                "request_timeout must be non-zero".to_string(),
            ));
        }

        if self.max_primary_headlines == 0 || self.max_headlines == 0 {
            return Err(AnalysisError::ConfigError(
                "headline limits must be greater than 0".to_string(),
            ));
        }

        if self.max_headlines < self.max_primary_headlines {
            return Err(AnalysisError::ConfigError(
                "max_headlines must not be below max_primary_headlines".to_string(),
            ));
        }

        if !(0.0..1.0).contains(&self.sentiment_threshold) {
            return Err(AnalysisError::ConfigError(
                "sentiment_threshold must lie in [0, 1)".to_string(),
            ));
        }

        if self.sentiment_weight <= 0.0 {
            return Err(AnalysisError::ConfigError(
                "sentiment_weight must be positive".to_string(),
            ));
        }

        if self.feed_rate_limit == 0 {
            return Err(AnalysisError::ConfigError(
                "feed_rate_limit must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for AnalyzerConfig
#[derive(Debug, Default)]
pub struct AnalyzerConfigBuilder {
    request_timeout: Option<Duration>,
    market_cache_ttl: Option<Duration>,
    max_primary_headlines: Option<usize>,
    max_fallback_headlines: Option<usize>,
    max_headlines: Option<usize>,
    fallback_min_items: Option<usize>,
    sentiment_threshold: Option<f64>,
    sentiment_weight: Option<f64>,
    feed_rate_limit: Option<u32>,
}

impl AnalyzerConfigBuilder {
    /// Set the per-request timeout
    pub fn request_timeout(mut self, duration: Duration) -> Self {
        self.request_timeout = Some(duration);
        self
    }

    /// Set the market data cache TTL
    pub fn market_cache_ttl(mut self, duration: Duration) -> Self {
        self.market_cache_ttl = Some(duration);
        self
    }

    /// Set the primary headline limit
    pub fn max_primary_headlines(mut self, limit: usize) -> Self {
        self.max_primary_headlines = Some(limit);
        self
    }

    /// Set the fallback headline limit
    pub fn max_fallback_headlines(mut self, limit: usize) -> Self {
        self.max_fallback_headlines = Some(limit);
        self
    }

    /// Set the total headline cap
    pub fn max_headlines(mut self, limit: usize) -> Self {
        self.max_headlines = Some(limit);
        self
    }

    /// Set the fallback trigger threshold
    pub fn fallback_min_items(mut self, count: usize) -> Self {
        self.fallback_min_items = Some(count);
        self
    }

    /// Set the bullish/bearish category threshold
    pub fn sentiment_threshold(mut self, threshold: f64) -> Self {
        self.sentiment_threshold = Some(threshold);
        self
    }

    /// Set the sentiment contribution weight
    pub fn sentiment_weight(mut self, weight: f64) -> Self {
        self.sentiment_weight = Some(weight);
        self
    }

    /// Set the fallback feed rate limit (requests per minute)
    pub fn feed_rate_limit(mut self, per_minute: u32) -> Self {
        self.feed_rate_limit = Some(per_minute);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AnalyzerConfig> {
        let defaults = AnalyzerConfig::default();

        let config = AnalyzerConfig {
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
            market_cache_ttl: self.market_cache_ttl.unwrap_or(defaults.market_cache_ttl),
            max_primary_headlines: self
                .max_primary_headlines
                .unwrap_or(defaults.max_primary_headlines),
            max_fallback_headlines: self
                .max_fallback_headlines
                .unwrap_or(defaults.max_fallback_headlines),
            max_headlines: self.max_headlines.unwrap_or(defaults.max_headlines),
            fallback_min_items: self.fallback_min_items.unwrap_or(defaults.fallback_min_items),
            sentiment_threshold: self
                .sentiment_threshold
                .unwrap_or(defaults.sentiment_threshold),
            sentiment_weight: self.sentiment_weight.unwrap_or(defaults.sentiment_weight),
            feed_rate_limit: self.feed_rate_limit.unwrap_or(defaults.feed_rate_limit),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.max_primary_headlines, 6);
        assert_eq!(config.fallback_min_items, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = AnalyzerConfig::builder()
            .request_timeout(Duration::from_secs(5))
            .max_headlines(8)
            .sentiment_threshold(0.15)
            .build()
            .unwrap();

        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.max_headlines, 8);
        assert!((config.sentiment_threshold - 0.15).abs() < f64::EPSILON);
    }

    #[test]
    fn test_validation_zero_headlines() {
        let config = AnalyzerConfig {
            max_headlines: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_cap_below_primary() {
        let result = AnalyzerConfig::builder()
            .max_primary_headlines(6)
            .max_headlines(3)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_threshold_out_of_range() {
        let config = AnalyzerConfig {
            sentiment_threshold: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
