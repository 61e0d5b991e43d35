//! Weighted aggregation of normalized scores into the composite signal.

use crate::report::{Horizon, IndicatorScores};

use super::weights::{
    COMPOSITE_BOLLINGER_WEIGHT, COMPOSITE_MACD_WEIGHT, COMPOSITE_MA_WEIGHT, COMPOSITE_OBV_WEIGHT,
    COMPOSITE_RSI_WEIGHT, COMPOSITE_STOCH_WEIGHT, MOMENTUM_INJECTION_WEIGHT,
};

/// Round to 2 decimals, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Weighted composite of the indicator breakdown.
///
/// The six non-momentum weights sum to 1.0. When the 1-week momentum score
/// exists it is injected at [`MOMENTUM_INJECTION_WEIGHT`] and the total is
/// divided by `1 + MOMENTUM_INJECTION_WEIGHT`; when it does not, neither
/// the term nor the divisor applies. Composites on either side of that
/// data-availability boundary are part of the score contract and must not
/// be renormalized (see DESIGN.md).
pub fn composite(indicators: &IndicatorScores) -> f64 {
    let mut total = indicators.moving_averages * COMPOSITE_MA_WEIGHT
        + indicators.rsi * COMPOSITE_RSI_WEIGHT
        + indicators.macd * COMPOSITE_MACD_WEIGHT
        + indicators.bollinger_bands * COMPOSITE_BOLLINGER_WEIGHT
        + indicators.stochastic * COMPOSITE_STOCH_WEIGHT
        + indicators.volume_momentum * COMPOSITE_OBV_WEIGHT;

    if let Some(&week) = indicators.price_momentum.get(&Horizon::OneWeek) {
        total += week * MOMENTUM_INJECTION_WEIGHT;
        total /= 1.0 + MOMENTUM_INJECTION_WEIGHT;
    }

    round2(total)
}
