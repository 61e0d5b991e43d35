//! Named scoring constants.
//!
//! Every scale factor, weight, and threshold the normalizer and aggregator
//! use lives here so the algorithm stays auditable per indicator. The
//! values are part of the score contract, quirks included (see
//! [`MA_WINDOW_WEIGHTS`] and [`MOMENTUM_INJECTION_WEIGHT`]).

/// Bounds every normalized and composite score clamps to.
pub const SCORE_MIN: f64 = -100.0;
pub const SCORE_MAX: f64 = 100.0;

/// Per-window weights for the moving-average deviation sum.
///
/// Windows skipped for lack of history simply drop their weight; the
/// remainder is NOT renormalized. Short histories therefore produce a
/// damped moving-average score, which is preserved as-is for
/// compatibility.
pub const MA_WINDOW_WEIGHTS: [(usize, f64); 4] =
    [(10, 0.15), (20, 0.25), (50, 0.30), (200, 0.30)];

/// Score points per percent of MA deviation (±10% fills the scale).
pub const MA_DEVIATION_SCALE: f64 = 10.0;

/// RSI three-zone thresholds.
pub const RSI_OVERSOLD: f64 = 30.0;
pub const RSI_OVERBOUGHT: f64 = 70.0;

/// Magnitude of the MACD/signal cross component.
pub const MACD_CROSS_MAGNITUDE: f64 = 50.0;
/// Bound on the MACD histogram rate-of-change component.
pub const MACD_MOMENTUM_BOUND: f64 = 50.0;
/// Damping applied to the histogram rate of change before bounding.
pub const MACD_MOMENTUM_DAMPING: f64 = 0.5;

/// Score points per unit of %B displacement from mid-band.
pub const BOLLINGER_SCORE_SCALE: f64 = 200.0;

/// Stochastic three-zone thresholds.
pub const STOCH_OVERSOLD: f64 = 20.0;
pub const STOCH_OVERBOUGHT: f64 = 80.0;
/// Magnitude of the %K/%D cross component.
pub const STOCH_CROSS_MAGNITUDE: f64 = 60.0;
/// Level vs. cross blend for the stochastic score.
pub const STOCH_LEVEL_WEIGHT: f64 = 0.7;
pub const STOCH_CROSS_WEIGHT: f64 = 0.3;

/// Score points per percent of OBV change (±20% fills the scale).
pub const OBV_CHANGE_SCALE: f64 = 5.0;

/// Score points per percent of price change (±10% fills the scale).
pub const MOMENTUM_CHANGE_SCALE: f64 = 10.0;

/// Composite weights for the six non-momentum indicators; sums to 1.0.
pub const COMPOSITE_MA_WEIGHT: f64 = 0.25;
pub const COMPOSITE_RSI_WEIGHT: f64 = 0.15;
pub const COMPOSITE_MACD_WEIGHT: f64 = 0.15;
pub const COMPOSITE_BOLLINGER_WEIGHT: f64 = 0.15;
pub const COMPOSITE_STOCH_WEIGHT: f64 = 0.15;
pub const COMPOSITE_OBV_WEIGHT: f64 = 0.15;

/// Extra weight for the 1-week momentum score when it is available.
///
/// The running total is divided by `1 + MOMENTUM_INJECTION_WEIGHT` after
/// the injection to restore unit weighting. When 1-week momentum is
/// unavailable neither the term nor the divisor applies, so composites
/// with and without a week of history sit on slightly different scales.
pub const MOMENTUM_INJECTION_WEIGHT: f64 = 0.15;
