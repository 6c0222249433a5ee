//! Error types for crypto analysis operations

use thiserror::Error;

/// Crypto analysis specific errors
///
/// Only [`AnalysisError::DataUnavailable`] and [`AnalysisError::MetadataMissing`]
/// abort an analysis. News and indicator warm-up problems degrade locally and
/// never surface through this enum.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Ticker symbol was empty or unusable
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    /// Mandatory market data could not be retrieved
    #[error("No data for {symbol}: {reason}")]
    DataUnavailable {
        symbol: String,
        reason: String,
    },

    /// Asset metadata absent; a partial score is never produced
    #[error("No fundamental metadata for {symbol}")]
    MetadataMissing {
        symbol: String,
    },

    /// Market data provider error
    #[error("Provider error: {0}")]
    ProviderError(String),

    /// Network or HTTP error
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Technical indicator construction error
    #[error("Indicator error: {0}")]
    IndicatorError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type alias for analysis operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AnalysisError::InvalidSymbol("???".to_string());
        assert_eq!(err.to_string(), "Invalid symbol: ???");

        let err = AnalysisError::DataUnavailable {
            symbol: "BTC-USD".to_string(),
            reason: "empty price history".to_string(),
        };
        assert_eq!(err.to_string(), "No data for BTC-USD: empty price history");

        let err = AnalysisError::MetadataMissing {
            symbol: "DOGE-USD".to_string(),
        };
        assert_eq!(err.to_string(), "No fundamental metadata for DOGE-USD");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: AnalysisError = json_err.into();
        assert!(matches!(err, AnalysisError::JsonError(_)));
    }
}
