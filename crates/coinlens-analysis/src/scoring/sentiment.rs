//! Lexical headline sentiment
//!
//! A small crypto/finance lexicon scores each title in [-1, 1]; the
//! aggregate is the arithmetic mean over the titles that produced a score.
//! One unscorable title never aborts the batch.

use crate::api::Headline;
use crate::engine::report::{NewsItem, SentimentCategory, SentimentSnapshot};
use std::collections::HashSet;

/// Lexicon-based sentiment model for headline text
pub struct SentimentModel {
    positive_words: HashSet<&'static str>,
    negative_words: HashSet<&'static str>,
}

impl SentimentModel {
    /// Create a model with the built-in crypto/finance lexicon
    pub fn new() -> Self {
        Self {
            positive_words: Self::build_positive_lexicon(),
            negative_words: Self::build_negative_lexicon(),
        }
    }

    /// Polarity of one title in [-1, 1]
    ///
    /// Returns `None` when the title yields no tokens at all (the caller
    /// skips the item); a tokenizable title with no lexicon hits scores a
    /// flat 0.0.
    pub fn polarity(&self, title: &str) -> Option<f64> {
        let lower = title.to_lowercase();
        let tokens: Vec<&str> = lower
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .collect();

        if tokens.is_empty() {
            return None;
        }

        let positive = tokens
            .iter()
            .filter(|t| self.positive_words.contains(*t))
            .count();
        let negative = tokens
            .iter()
            .filter(|t| self.negative_words.contains(*t))
            .count();

        let matched = positive + negative;
        if matched == 0 {
            return Some(0.0);
        }

        Some((positive as f64 - negative as f64) / matched as f64)
    }

    /// Score a collected headline batch into a sentiment snapshot
    ///
    /// `NoData` is reported only when nothing was ever retrieved; a real
    /// batch that averages out flat stays `Neutral`.
    pub fn snapshot(&self, headlines: &[Headline], threshold: f64) -> SentimentSnapshot {
        if headlines.is_empty() {
            return SentimentSnapshot {
                score: 0.0,
                category: SentimentCategory::NoData,
                items: Vec::new(),
            };
        }

        let mut items = Vec::with_capacity(headlines.len());
        for headline in headlines {
            let Some(polarity) = self.polarity(&headline.title) else {
                tracing::debug!("skipping unscorable headline: {:?}", headline.title);
                continue;
            };
            items.push(NewsItem {
                title: headline.title.clone(),
                publisher: headline.publisher.clone(),
                link: headline.link.clone(),
                polarity,
            });
        }

        let score = if items.is_empty() {
            0.0
        } else {
            items.iter().map(|item| item.polarity).sum::<f64>() / items.len() as f64
        };

        let category = if score > threshold {
            SentimentCategory::Bullish
        } else if score < -threshold {
            SentimentCategory::Bearish
        } else {
            SentimentCategory::Neutral
        };

        SentimentSnapshot {
            score,
            category,
            items,
        }
    }

    fn build_positive_lexicon() -> HashSet<&'static str> {
        [
            // Price action
            "surge", "surges", "surged", "soar", "soars", "soared", "rally",
            "rallies", "rallied", "gain", "gains", "gained", "climb", "climbs",
            "climbed", "jump", "jumps", "jumped", "rebound", "rebounds",
            "recovery", "recovers", "breakout", "high", "highs", "momentum",
            "upside",
            // Market posture
            "bullish", "strong", "strength", "outperform", "outperforms",
            "record", "milestone", "optimism", "optimistic", "confidence",
            // Adoption and flows
            "adoption", "approval", "approved", "upgrade", "upgraded",
            "growth", "institutional", "accumulation", "partnership",
            "integration", "launch", "launches", "inflow", "inflows",
            "buy", "buying", "boost", "boosts", "boosted", "win", "wins",
            "profit", "profits", "breakthrough",
        ]
        .into_iter()
        .collect()
    }

    fn build_negative_lexicon() -> HashSet<&'static str> {
        [
            // Price action
            "crash", "crashes", "crashed", "plunge", "plunges", "plunged",
            "dump", "dumps", "dumped", "selloff", "slump", "slumps", "tumble",
            "tumbles", "tumbled", "drop", "drops", "dropped", "fall", "falls",
            "fell", "decline", "declines", "declined", "collapse", "collapsed",
            "low", "lows", "correction", "downturn",
            // Market posture
            "bearish", "weak", "weakness", "fear", "fears", "panic",
            "volatile", "volatility", "risk", "risks", "warning", "warns",
            "warned", "loss", "losses",
            // Security and regulation
            "hack", "hacked", "hacks", "exploit", "exploited", "scam",
            "fraud", "theft", "stolen", "breach", "lawsuit", "sue", "sues",
            "sued", "ban", "bans", "banned", "crackdown", "fine", "fined",
            "bankruptcy", "insolvency", "liquidation", "liquidations",
            "outflow", "outflows", "sell", "selling",
        ]
        .into_iter()
        .collect()
    }
}

impl Default for SentimentModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headline(title: &str) -> Headline {
        Headline {
            title: title.to_string(),
            publisher: "Wire".to_string(),
            link: "https://example.com".to_string(),
        }
    }

    #[test]
    fn test_positive_headline() {
        let model = SentimentModel::new();
        let polarity = model.polarity("Bitcoin surges to record high on ETF approval").unwrap();
        assert!(polarity > 0.0);
        assert!(polarity <= 1.0);
    }

    #[test]
    fn test_negative_headline() {
        let model = SentimentModel::new();
        let polarity = model.polarity("Exchange hack triggers panic selloff").unwrap();
        assert!(polarity < 0.0);
        assert!(polarity >= -1.0);
    }

    #[test]
    fn test_mixed_headline_between_extremes() {
        let model = SentimentModel::new();
        let polarity = model.polarity("Rally fades as lawsuit fears grow").unwrap();
        assert!(polarity > -1.0);
        assert!(polarity < 1.0);
    }

    #[test]
    fn test_no_lexicon_hit_is_flat_zero() {
        let model = SentimentModel::new();
        assert_eq!(model.polarity("Quarterly report published today"), Some(0.0));
    }

    #[test]
    fn test_tokenless_title_is_skipped() {
        let model = SentimentModel::new();
        assert!(model.polarity("").is_none());
        assert!(model.polarity("---  !!").is_none());
    }

    #[test]
    fn test_empty_batch_is_no_data() {
        let model = SentimentModel::new();
        let snap = model.snapshot(&[], 0.1);

        assert!((snap.score - 0.0).abs() < f64::EPSILON);
        assert_eq!(snap.category, SentimentCategory::NoData);
        assert!(snap.items.is_empty());
    }

    #[test]
    fn test_unscorable_item_skipped_not_fatal() {
        let model = SentimentModel::new();
        let batch = vec![
            headline("Bitcoin rally gains momentum"),
            headline("!!!"),
            headline("Network upgrade approved"),
        ];

        let snap = model.snapshot(&batch, 0.1);
        assert_eq!(snap.items.len(), 2);
        assert_eq!(snap.category, SentimentCategory::Bullish);
    }

    #[test]
    fn test_category_thresholds() {
        let model = SentimentModel::new();

        let bearish = model.snapshot(&[headline("Market crash deepens losses")], 0.1);
        assert_eq!(bearish.category, SentimentCategory::Bearish);

        let neutral = model.snapshot(&[headline("Committee schedules routine meeting")], 0.1);
        assert_eq!(neutral.category, SentimentCategory::Neutral);
        // Retrieved-but-flat is Neutral, never NoData
        assert_ne!(neutral.category, SentimentCategory::NoData);
    }

    #[test]
    fn test_score_is_mean_of_item_polarities() {
        let model = SentimentModel::new();
        let batch = vec![
            headline("Bitcoin surges on approval"),
            headline("Miners fear crackdown"),
        ];

        let snap = model.snapshot(&batch, 0.1);
        let expected =
            snap.items.iter().map(|i| i.polarity).sum::<f64>() / snap.items.len() as f64;
        assert!((snap.score - expected).abs() < 1e-12);
    }
}
