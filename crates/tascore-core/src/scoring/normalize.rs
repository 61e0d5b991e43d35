//! Per-indicator normalization onto the bounded directional scale.
//!
//! Every function maps a raw indicator value into [-100, 100], where
//! negative leans buy and positive leans sell. Piecewise-linear rules and
//! clamp bounds come from [`super::weights`].

use crate::indicators::{MaDeviation, MacdSnapshot, ObvShift, StochSnapshot};

use super::weights::{
    BOLLINGER_SCORE_SCALE, MACD_CROSS_MAGNITUDE, MACD_MOMENTUM_BOUND, MACD_MOMENTUM_DAMPING,
    MA_DEVIATION_SCALE, MA_WINDOW_WEIGHTS, MOMENTUM_CHANGE_SCALE, OBV_CHANGE_SCALE,
    RSI_OVERBOUGHT, RSI_OVERSOLD, SCORE_MAX, SCORE_MIN, STOCH_CROSS_MAGNITUDE, STOCH_CROSS_WEIGHT,
    STOCH_LEVEL_WEIGHT, STOCH_OVERBOUGHT, STOCH_OVERSOLD,
};

/// Clamp onto the directional scale.
pub fn clamp_score(value: f64) -> f64 {
    value.clamp(SCORE_MIN, SCORE_MAX)
}

/// Weighted sum of clamped per-window MA deviation scores.
///
/// Missing windows contribute nothing and their weight is not
/// redistributed.
pub fn moving_averages(deviations: &[MaDeviation]) -> f64 {
    deviations
        .iter()
        .map(|deviation| {
            let weight = MA_WINDOW_WEIGHTS
                .iter()
                .find(|(window, _)| *window == deviation.window)
                .map_or(0.0, |(_, weight)| *weight);
            clamp_score(deviation.deviation_pct * MA_DEVIATION_SCALE) * weight
        })
        .sum()
}

/// Three-zone RSI map: oversold rises toward -100, overbought toward +100,
/// and the middle band spreads linearly over [-50, 50].
pub fn rsi(value: f64) -> f64 {
    if value < RSI_OVERSOLD {
        (RSI_OVERSOLD - value) / RSI_OVERSOLD * -SCORE_MAX
    } else if value > RSI_OVERBOUGHT {
        (value - RSI_OVERBOUGHT) / (SCORE_MAX - RSI_OVERBOUGHT) * SCORE_MAX
    } else {
        (value - RSI_OVERSOLD) / (RSI_OVERBOUGHT - RSI_OVERSOLD) * SCORE_MAX - SCORE_MAX / 2.0
    }
}

/// Fixed-magnitude cross component plus a bounded histogram rate-of-change
/// component, both signed bullish-negative.
///
/// A tie between MACD and signal takes the bearish branch, and a zero
/// histogram contributes no momentum.
pub fn macd(snapshot: &MacdSnapshot) -> f64 {
    let change = snapshot.histogram - snapshot.prev_histogram;
    let magnitude = snapshot.histogram.abs();

    if snapshot.macd > snapshot.signal {
        let momentum = if magnitude == 0.0 {
            0.0
        } else {
            (change / magnitude * 100.0 * -MACD_MOMENTUM_DAMPING).clamp(-MACD_MOMENTUM_BOUND, 0.0)
        };
        -MACD_CROSS_MAGNITUDE + momentum
    } else {
        let momentum = if magnitude == 0.0 {
            0.0
        } else {
            (change / magnitude * 100.0 * MACD_MOMENTUM_DAMPING).clamp(0.0, MACD_MOMENTUM_BOUND)
        };
        MACD_CROSS_MAGNITUDE + momentum
    }
}

/// %B centered on the mid-band: 0.5 scores 0, the bands score ±100.
pub fn bollinger(percent_b: f64) -> f64 {
    (percent_b - 0.5) * BOLLINGER_SCORE_SCALE
}

/// Blended stochastic score: three-zone %K level (70%) plus the %K/%D
/// cross direction (30%).
pub fn stochastic(snapshot: &StochSnapshot) -> f64 {
    let k = snapshot.percent_k;
    let level = if k < STOCH_OVERSOLD {
        (STOCH_OVERSOLD - k) / STOCH_OVERSOLD * -SCORE_MAX
    } else if k > STOCH_OVERBOUGHT {
        (k - STOCH_OVERBOUGHT) / (SCORE_MAX - STOCH_OVERBOUGHT) * SCORE_MAX
    } else {
        // mid-zone spreads over [-40, 40]
        (k - STOCH_OVERSOLD) / (STOCH_OVERBOUGHT - STOCH_OVERSOLD) * 80.0 - 40.0
    };

    let cross = if k > snapshot.percent_d {
        -STOCH_CROSS_MAGNITUDE
    } else {
        STOCH_CROSS_MAGNITUDE
    };

    level * STOCH_LEVEL_WEIGHT + cross * STOCH_CROSS_WEIGHT
}

/// Scaled OBV momentum; a zero prior OBV pins the score to the bound in
/// the direction of the change instead of dividing by zero.
pub fn obv(shift: &ObvShift) -> f64 {
    match shift.pct_change() {
        Some(change) => clamp_score(change * OBV_CHANGE_SCALE),
        None => {
            if shift.current > shift.prior {
                SCORE_MAX
            } else if shift.current < shift.prior {
                SCORE_MIN
            } else {
                0.0
            }
        }
    }
}

/// Scaled per-horizon price momentum.
pub fn price_momentum(pct_change: f64) -> f64 {
    clamp_score(pct_change * MOMENTUM_CHANGE_SCALE)
}
