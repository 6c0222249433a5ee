//! Fundamental scoring: liquidity, supply emission and 52-week range rules

use crate::api::{AssetMetadata, PriceBar};
use crate::engine::report::FundamentalSnapshot;

/// Build the fundamental snapshot from the asset metadata
///
/// Returns `None` when metadata is entirely absent; the aggregator refuses
/// to produce a score in that case. The latest bar supplies the volume
/// fallback and the close used for the range position.
pub fn fundamental_snapshot(
    metadata: Option<&AssetMetadata>,
    latest_bar: Option<&PriceBar>,
) -> Option<FundamentalSnapshot> {
    let metadata = metadata?;

    let mut volume = metadata.volume_24h;
    if volume == 0.0 {
        if let Some(bar) = latest_bar {
            volume = bar.volume as f64;
        }
    }

    let volume_to_market_cap = if metadata.market_cap > 0.0 {
        volume / metadata.market_cap
    } else {
        0.0
    };

    // None means uncapped or unknown supply; distinct from 0%
    let supply_percent = match metadata.max_supply {
        Some(max) if max > 0.0 => Some(metadata.circulating_supply / max * 100.0),
        _ => None,
    };

    let close = latest_bar.map_or(0.0, |bar| bar.close);
    let range_position = range_position(close, metadata.fifty_two_week_high, metadata.fifty_two_week_low);

    Some(FundamentalSnapshot {
        market_cap: metadata.market_cap,
        volume,
        volume_to_market_cap,
        circulating_supply: metadata.circulating_supply,
        max_supply: metadata.max_supply,
        supply_percent,
        year_high: metadata.fifty_two_week_high,
        year_low: metadata.fifty_two_week_low,
        range_position,
    })
}

/// Percentage placement of the close inside the 52-week band
///
/// Degenerate bands (high <= low) collapse to the midpoint 50 rather than
/// producing a division artifact.
pub fn range_position(close: f64, year_high: f64, year_low: f64) -> f64 {
    if year_high > year_low {
        (close - year_low) / (year_high - year_low) * 100.0
    } else {
        50.0
    }
}

/// Score deltas contributed by the fundamental snapshot
pub fn score_deltas(snapshot: &FundamentalSnapshot) -> f64 {
    let mut delta = 0.0;

    if snapshot.volume_to_market_cap > 0.10 {
        delta += 10.0;
    } else if snapshot.volume_to_market_cap < 0.02 {
        delta -= 5.0;
    }

    if snapshot.range_position < 20.0 {
        delta += 10.0;
    } else if snapshot.range_position > 90.0 {
        delta -= 10.0;
    }

    // Large unreleased supply reads as emission pressure; unknown caps are
    // left unpenalized
    if let Some(percent) = snapshot.supply_percent {
        if percent < 50.0 {
            delta -= 5.0;
        }
    }

    delta
}
