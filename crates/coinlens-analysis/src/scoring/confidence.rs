//! Confidence aggregation: one weighted pass over the three snapshots

use crate::engine::report::{FundamentalSnapshot, SentimentSnapshot, TechnicalSnapshot};
use crate::scoring::{fundamental, technical};

/// Neutral starting point before any delta is applied
pub const BASE_SCORE: f64 = 50.0;

/// Combine the three sub-scores into the final 0-100 confidence value
///
/// Sentiment contributes continuously (`mean polarity * weight`); the
/// thresholded Bullish/Bearish categories are display-only. Callers must
/// hold all three snapshots; a missing one is an "insufficient data"
/// condition decided before this point.
pub fn confidence_score(
    technical_snap: &TechnicalSnapshot,
    fundamental_snap: &FundamentalSnapshot,
    sentiment_snap: &SentimentSnapshot,
    sentiment_weight: f64,
) -> u8 {
    let mut score = BASE_SCORE;

    score += technical::score_deltas(technical_snap);
    score += fundamental::score_deltas(fundamental_snap);
    score += sentiment_snap.score * sentiment_weight;

    score.clamp(0.0, 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::report::{SentimentCategory, Trend};
    use crate::scoring::technical::classify_trend;

    fn technical(current_price: f64, rsi: f64, ema_50: f64, ema_200: f64) -> TechnicalSnapshot {
        TechnicalSnapshot {
            current_price,
            rsi,
            ema_50,
            ema_200,
            trend: classify_trend(current_price, ema_50, ema_200),
            support: 0.0,
            resistance: 0.0,
        }
    }

    fn fundamental(ratio: f64, range_position: f64, supply_percent: Option<f64>) -> FundamentalSnapshot {
        FundamentalSnapshot {
            market_cap: 1.0e9,
            volume: ratio * 1.0e9,
            volume_to_market_cap: ratio,
            circulating_supply: 0.0,
            max_supply: None,
            supply_percent,
            year_high: 100.0,
            year_low: 0.0,
            range_position,
        }
    }

    fn sentiment(score: f64) -> SentimentSnapshot {
        SentimentSnapshot {
            score,
            category: SentimentCategory::Neutral,
            items: Vec::new(),
        }
    }

    #[test]
    fn test_worked_scenario() {
        // Strong uptrend (+10) with close above EMA200 (+5), oversold RSI
        // (+10), liquid (+10) near the bottom of its range (+10), mildly
        // positive news (0.2 * 15 = +3): 50 + 48 = 98
        let tech = technical(105.0, 25.0, 100.0, 90.0);
        assert_eq!(tech.trend, Trend::StrongUptrend);

        let score = confidence_score(
            &tech,
            &fundamental(0.15, 15.0, None),
            &sentiment(0.2),
            15.0,
        );
        assert_eq!(score, 98);
    }

    #[test]
    fn test_clamps_to_100_on_overshoot() {
        let score = confidence_score(
            &technical(105.0, 25.0, 100.0, 90.0),
            &fundamental(0.15, 15.0, None),
            &sentiment(1.0),
            15.0,
        );
        assert_eq!(score, 100);
    }

    #[test]
    fn test_clamps_to_0_on_undershoot() {
        // -10 RSI, -15 downtrend, -5 ratio, -10 range, -5 supply, -15 news
        let score = confidence_score(
            &technical(80.0, 75.0, 90.0, 100.0),
            &fundamental(0.01, 95.0, Some(30.0)),
            &sentiment(-1.0),
            15.0,
        );
        assert_eq!(score, 0);
    }

    #[test]
    fn test_neutral_inputs_stay_at_base() {
        // RSI 50, weak trend, close below EMA200, mid-range ratio and band,
        // flat sentiment: no delta fires
        let score = confidence_score(
            &technical(95.0, 50.0, 110.0, 100.0),
            &fundamental(0.05, 50.0, Some(80.0)),
            &sentiment(0.0),
            15.0,
        );
        assert_eq!(score, 50);
    }

    #[test]
    fn test_score_always_in_range() {
        for rsi in [0.0, 25.0, 50.0, 65.0, 75.0, 100.0] {
            for ratio in [0.0, 0.01, 0.05, 0.5] {
                for news in [-1.0, -0.2, 0.0, 0.2, 1.0] {
                    let score = confidence_score(
                        &technical(80.0, rsi, 90.0, 100.0),
                        &fundamental(ratio, 95.0, Some(10.0)),
                        &sentiment(news),
                        15.0,
                    );
                    assert!(score <= 100);
                }
            }
        }
    }

    #[test]
    fn test_continuous_sentiment_weighting() {
        let base = confidence_score(
            &technical(95.0, 50.0, 110.0, 100.0),
            &fundamental(0.05, 50.0, None),
            &sentiment(0.0),
            15.0,
        );
        let nudged = confidence_score(
            &technical(95.0, 50.0, 110.0, 100.0),
            &fundamental(0.05, 50.0, None),
            &sentiment(0.09),
            15.0,
        );
        // Below the +-0.1 category boundary the score still moves
        assert_eq!(nudged, base + 1);
    }
}
