//! Technical indicator series derived from a price history
//!
//! Values are computed close-by-close with the `ta` indicators and masked to
//! `None` inside each indicator's warm-up window, so callers can tell "not
//! enough history yet" apart from a real reading. The neutral substitutes
//! (RSI 50, EMA = current close) are applied only at the latest-value
//! accessors; undefined numerics never leave this module.

use crate::api::PriceBar;
use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};
use ta::Next;
use ta::indicators::{ExponentialMovingAverage, RelativeStrengthIndex};

/// RSI lookback period
pub const RSI_PERIOD: usize = 14;
/// Short EMA period
pub const EMA_SHORT_PERIOD: usize = 50;
/// Long EMA period
pub const EMA_LONG_PERIOD: usize = 200;
/// Trailing window for support/resistance
pub const RANGE_WINDOW: usize = 30;

/// Indicator sequences aligned index-for-index with the source bars
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSeries {
    pub rsi: Vec<Option<f64>>,
    pub ema_50: Vec<Option<f64>>,
    pub ema_200: Vec<Option<f64>>,
}

impl IndicatorSeries {
    /// Compute RSI(14), EMA(50) and EMA(200) over the closing prices
    ///
    /// Output length always equals the input length; leading entries are
    /// `None` until the respective warm-up window has passed.
    pub fn compute(bars: &[PriceBar]) -> Result<Self> {
        let mut rsi_ind = RelativeStrengthIndex::new(RSI_PERIOD)
            .map_err(|e| AnalysisError::IndicatorError(e.to_string()))?;
        let mut ema_short = ExponentialMovingAverage::new(EMA_SHORT_PERIOD)
            .map_err(|e| AnalysisError::IndicatorError(e.to_string()))?;
        let mut ema_long = ExponentialMovingAverage::new(EMA_LONG_PERIOD)
            .map_err(|e| AnalysisError::IndicatorError(e.to_string()))?;

        let mut rsi = Vec::with_capacity(bars.len());
        let mut ema_50 = Vec::with_capacity(bars.len());
        let mut ema_200 = Vec::with_capacity(bars.len());

        for (i, bar) in bars.iter().enumerate() {
            let r = rsi_ind.next(bar.close);
            let e50 = ema_short.next(bar.close);
            let e200 = ema_long.next(bar.close);

            // RSI needs `period` price changes; the EMAs need `period` closes
            rsi.push((i >= RSI_PERIOD).then_some(r));
            ema_50.push((i + 1 >= EMA_SHORT_PERIOD).then_some(e50));
            ema_200.push((i + 1 >= EMA_LONG_PERIOD).then_some(e200));
        }

        Ok(Self {
            rsi,
            ema_50,
            ema_200,
        })
    }

    pub fn len(&self) -> usize {
        self.rsi.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rsi.is_empty()
    }

    /// Latest RSI, substituting the neutral 50 inside the warm-up window
    pub fn latest_rsi(&self) -> f64 {
        self.rsi.last().copied().flatten().unwrap_or(50.0)
    }

    /// Latest EMA(50), substituting the current close inside warm-up
    pub fn latest_ema_50(&self, current_close: f64) -> f64 {
        self.ema_50.last().copied().flatten().unwrap_or(current_close)
    }

    /// Latest EMA(200), substituting the current close inside warm-up
    pub fn latest_ema_200(&self, current_close: f64) -> f64 {
        self.ema_200.last().copied().flatten().unwrap_or(current_close)
    }
}

/// Minimum `low` over the trailing range window (all bars when fewer)
pub fn rolling_support(bars: &[PriceBar]) -> Option<f64> {
    trailing(bars).map(|window| {
        window
            .iter()
            .map(|b| b.low)
            .fold(f64::INFINITY, f64::min)
    })
}

/// Maximum `high` over the trailing range window (all bars when fewer)
pub fn rolling_resistance(bars: &[PriceBar]) -> Option<f64> {
    trailing(bars).map(|window| {
        window
            .iter()
            .map(|b| b.high)
            .fold(f64::NEG_INFINITY, f64::max)
    })
}

fn trailing(bars: &[PriceBar]) -> Option<&[PriceBar]> {
    if bars.is_empty() {
        return None;
    }
    let start = bars.len().saturating_sub(RANGE_WINDOW);
    Some(&bars[start..])
}
