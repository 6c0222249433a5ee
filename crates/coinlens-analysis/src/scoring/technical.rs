//! Technical scoring: trend classification and score deltas

use crate::api::PriceBar;
use crate::engine::report::{TechnicalSnapshot, Trend};
use crate::indicators::{IndicatorSeries, rolling_resistance, rolling_support};

/// Classify the trend state for a (close, EMA50, EMA200) triple
///
/// The strict-uptrend checks run first; order matters so the strong states
/// are never shadowed by the looser `close > EMA200` rule.
pub fn classify_trend(close: f64, ema_50: f64, ema_200: f64) -> Trend {
    if close > ema_50 && ema_50 > ema_200 {
        Trend::StrongUptrend
    } else if close < ema_50 && ema_50 < ema_200 {
        Trend::StrongDowntrend
    } else if close > ema_200 {
        Trend::ModerateUptrend
    } else {
        Trend::WeakChoppy
    }
}

/// Build the technical snapshot for the latest bar
///
/// Returns `None` only for an empty bar sequence; warm-up gaps are handled
/// by the indicator fallbacks and never surface as errors.
pub fn technical_snapshot(
    bars: &[PriceBar],
    indicators: &IndicatorSeries,
) -> Option<TechnicalSnapshot> {
    let last = bars.last()?;
    let current_price = last.close;

    let rsi = indicators.latest_rsi();
    let ema_50 = indicators.latest_ema_50(current_price);
    let ema_200 = indicators.latest_ema_200(current_price);

    Some(TechnicalSnapshot {
        current_price,
        rsi,
        ema_50,
        ema_200,
        trend: classify_trend(current_price, ema_50, ema_200),
        support: rolling_support(bars)?,
        resistance: rolling_resistance(bars)?,
    })
}

/// Score deltas contributed by the technical snapshot
pub fn score_deltas(snapshot: &TechnicalSnapshot) -> f64 {
    let mut delta = 0.0;

    if snapshot.rsi < 30.0 {
        delta += 10.0;
    } else if snapshot.rsi > 70.0 {
        delta -= 10.0;
    } else if snapshot.rsi > 50.0 {
        delta += 2.0;
    }

    match snapshot.trend {
        Trend::StrongUptrend => delta += 10.0,
        Trend::StrongDowntrend => delta -= 15.0,
        Trend::ModerateUptrend | Trend::WeakChoppy => {}
    }

    if snapshot.current_price > snapshot.ema_200 {
        delta += 5.0;
    }

    delta
}
