//! Scoring rules: trend/technical, fundamental, sentiment and aggregation

pub mod confidence;
pub mod fundamental;
pub mod sentiment;
pub mod technical;

pub use confidence::{BASE_SCORE, confidence_score};
pub use sentiment::SentimentModel;
