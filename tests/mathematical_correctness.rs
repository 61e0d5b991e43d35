//! Mathematical correctness of the full scoring pipeline
//!
//! Expected values are hand-derived from the indicator definitions for
//! simple linear histories, checked to the engine's 2-decimal rounding.

use tascore_core::{engine, indicators, Horizon, SignalLabel};
use tascore_tests::ramp_series;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

// =============================================================================
// Full pipeline on a gentle rally: close_i = 100 + i, 40 bars
// =============================================================================

#[test]
fn gentle_rally_breakdown_matches_the_formulas() {
    let series = ramp_series("UP", 100.0, 1.0, 40);
    let report = engine::score(&series, None).expect("must score");

    // MA10 deviation 3.3457% and MA20 deviation 7.3359%, scaled by 10 and
    // weighted 0.15/0.25; 50- and 200-bar windows skipped.
    assert_close(report.indicators.moving_averages, 23.36);

    // All gains, no losses: RSI pins at 100 -> top of the sell scale.
    assert_close(report.indicators.rsi, 100.0);

    // MACD above signal (bullish cross -50); the histogram is easing so
    // the bullish momentum term clamps to zero.
    assert_close(report.indicators.macd, -50.0);

    // %B = 0.9014 -> (0.9014 - 0.5) * 200
    assert_close(report.indicators.bollinger_bands, 80.29);

    // %K = 93.33 against a flat %D: level 66.67 * 0.7 + cross 60 * 0.3
    assert_close(report.indicators.stochastic, 64.67);

    // OBV rises by one volume unit per bar: (39 - 34) / 34 * 100 * 5
    assert_close(report.indicators.volume_momentum, 73.53);

    // Momentum per horizon: pct change * 10, clamped
    assert_close(report.indicators.price_momentum[&Horizon::OneDay], 7.25);
    assert_close(report.indicators.price_momentum[&Horizon::OneWeek], 37.31);
    assert_close(report.indicators.price_momentum[&Horizon::OneMonth], 100.0);
    assert!(!report
        .indicators
        .price_momentum
        .contains_key(&Horizon::ThreeMonths));

    // Raw percentage changes reported alongside
    assert_close(report.price_changes[&Horizon::OneDay], 0.72);
    assert_close(report.price_changes[&Horizon::OneWeek], 3.73);
    assert_close(report.price_changes[&Horizon::OneMonth], 17.8);

    // Weighted composite with the 1-week injection and 1.15 divisor
    assert_close(report.composite_score, 44.97);
    assert_eq!(report.signal, SignalLabel::WeakSell);
}

// =============================================================================
// Full pipeline on the mirror selloff: close_i = 139 - i, 40 bars
// =============================================================================

#[test]
fn selloff_breakdown_mirrors_the_rally() {
    let series = ramp_series("DOWN", 139.0, -1.0, 40);
    let report = engine::score(&series, None).expect("must score");

    assert_close(report.indicators.moving_averages, -28.15);
    assert_close(report.indicators.rsi, -100.0);
    // Bearish cross +50 plus a small positive histogram-momentum term
    assert_close(report.indicators.macd, 53.64);
    assert_close(report.indicators.bollinger_bands, -80.29);
    assert_close(report.indicators.stochastic, -28.67);
    assert_close(report.indicators.volume_momentum, -73.53);

    assert_close(report.indicators.price_momentum[&Horizon::OneWeek], -47.62);

    assert_close(report.composite_score, -42.18);
    assert_eq!(report.signal, SignalLabel::WeakBuy);
}

// =============================================================================
// Calculator spot checks
// =============================================================================

#[test]
fn sma_matches_the_arithmetic_mean() {
    let values = [2.0, 4.0, 6.0, 8.0, 10.0];
    assert_eq!(indicators::sma(&values, 5), Some(6.0));
    assert_eq!(indicators::sma(&values, 2), Some(9.0));
}

#[test]
fn ema_of_a_constant_is_the_constant() {
    let values = vec![42.0; 50];
    let out = indicators::ema(&values, 12);
    assert!(out.iter().all(|&v| (v - 42.0).abs() < 1e-12));
}

#[test]
fn percent_change_is_relative_to_the_reference_close() {
    let closes: Vec<f64> = (0..30).map(|i| 100.0 + f64::from(i)).collect();
    // (129 / 124 - 1) * 100
    let change = indicators::pct_change(&closes, 5).expect("enough history");
    assert_close(change, 4.032_258_064_516_13);
}
