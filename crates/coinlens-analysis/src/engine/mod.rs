//! Analysis engine: pipeline orchestration and result types

pub mod analyzer;
pub mod report;

pub use analyzer::CoinAnalyzer;
pub use report::{
    Analysis, ConfidenceReport, FundamentalSnapshot, MarketSeries, NewsItem, SentimentCategory,
    SentimentSnapshot, TechnicalSnapshot, Trend,
};
