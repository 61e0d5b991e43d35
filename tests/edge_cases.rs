//! Edge cases around the engine's divide-by-zero guards and short histories

use tascore_core::{engine, Horizon, PricePoint, PriceSeries, SignalLabel, Symbol, TradingDate};
use tascore_tests::series_from_closes;
use time::Date;

/// Series where every bar is a single price: high == low == close.
fn pinned_series(symbol: &str, close: f64, len: usize) -> PriceSeries {
    let points = (0..len)
        .map(|i| {
            let date = Date::from_julian_day(2_460_000 + i as i32).expect("valid julian day");
            PricePoint::new(TradingDate::from_date(date), close, close, close, close, 1_000)
                .expect("valid point")
        })
        .collect();
    PriceSeries::new(Symbol::parse(symbol).expect("valid symbol"), points)
}

#[test]
fn zero_width_band_and_zero_range_guard_to_neutral() {
    // Given: 40 bars pinned at one price, so the Bollinger band has zero
    // width and the stochastic range is zero
    let series = pinned_series("PIN", 100.0, 40);

    // When: The engine scores it
    let report = engine::score(&series, None).expect("guards must hold");

    // Then: %B reads mid-band and %K mid-range instead of dividing by zero
    assert_eq!(report.indicators.bollinger_bands, 0.0);
    // level 0 at mid-range, bearish cross on the %K/%D tie
    assert_eq!(report.indicators.stochastic, 18.0);
    assert_eq!(report.indicators.rsi, 0.0);
    assert_eq!(report.signal, SignalLabel::Neutral);
    assert!(report.composite_score.is_finite());
}

#[test]
fn zero_prior_obv_clamps_instead_of_dividing() {
    // Given: Closes alternating around 100 so OBV oscillates through zero;
    // five days before the last bar OBV is exactly zero
    let closes: Vec<f64> = (0..70)
        .map(|i| if i % 2 == 0 { 99.0 } else { 101.0 })
        .collect();
    let series = series_from_closes("OSC", &closes);

    // When: The engine scores it
    let report = engine::score(&series, None).expect("guard must hold");

    // Then: The score pins to the bound in the direction of the change,
    // with no NaN or infinity anywhere
    assert_eq!(report.indicators.volume_momentum, 100.0);
    assert!(report.composite_score.is_finite());
    assert!((report.composite_score - 11.21).abs() < 1e-9);
}

#[test]
fn forty_bars_skip_the_long_moving_average_windows() {
    // Given: 40 bars, enough for the 10- and 20-bar windows only
    let closes: Vec<f64> = (0..40).map(|i| 100.0 + f64::from(i)).collect();
    let series = series_from_closes("SKIP", &closes);

    // When: The engine scores it
    let report = engine::score(&series, None).expect("must score");

    // Then: The MA score is the two-window weighted sum; the dropped 50/200
    // weights are not redistributed
    assert!((report.indicators.moving_averages - 23.36).abs() < 1e-9);

    // And the quarter horizon is absent rather than an error
    assert!(!report
        .indicators
        .price_momentum
        .contains_key(&Horizon::ThreeMonths));
    assert!(!report.price_changes.contains_key(&Horizon::ThreeMonths));
}

#[test]
fn seventy_bars_reach_the_mid_windows_and_quarter_horizon() {
    let closes: Vec<f64> = (0..70)
        .map(|i| if i % 2 == 0 { 99.0 } else { 101.0 })
        .collect();
    let series = series_from_closes("FULL", &closes);

    let report = engine::score(&series, None).expect("must score");

    // 10/20/50 windows all read a 1% deviation: 10 * (0.15 + 0.25 + 0.30)
    assert!((report.indicators.moving_averages - 7.0).abs() < 1e-9);

    // 70 bars clear the 63-day lookback
    assert!((report.indicators.price_momentum[&Horizon::ThreeMonths] - 20.2).abs() < 1e-9);
}

#[test]
fn balanced_chop_keeps_rsi_neutral() {
    // Given: Equal-magnitude alternating gains and losses
    let closes: Vec<f64> = (0..40)
        .map(|i| if i % 2 == 0 { 99.0 } else { 101.0 })
        .collect();
    let series = series_from_closes("CHOP", &closes);

    // When: The engine scores it
    let report = engine::score(&series, None).expect("must score");

    // Then: RSI reads 50 raw, the exact middle of the scale
    assert_eq!(report.indicators.rsi, 0.0);
}
