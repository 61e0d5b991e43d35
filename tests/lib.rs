// Shared series builders for behavior tests
use tascore_core::{PricePoint, PriceSeries, Symbol, TradingDate};
use time::Date;

/// Daily series with the given closes, oldest first. High/low straddle the
/// close by one point and volume is constant, so close-driven indicators
/// dominate.
pub fn series_from_closes(symbol: &str, closes: &[f64]) -> PriceSeries {
    let points = closes
        .iter()
        .enumerate()
        .map(|(index, &close)| {
            let date = Date::from_julian_day(2_460_000 + index as i32).expect("valid julian day");
            PricePoint::new(
                TradingDate::from_date(date),
                close,
                close + 1.0,
                close - 1.0,
                close,
                1_000_000,
            )
            .expect("valid point")
        })
        .collect();

    PriceSeries::new(Symbol::parse(symbol).expect("valid symbol"), points)
}

/// Linear ramp: `start + slope * i` for `len` bars.
pub fn ramp_series(symbol: &str, start: f64, slope: f64, len: usize) -> PriceSeries {
    let closes: Vec<f64> = (0..len).map(|i| start + slope * i as f64).collect();
    series_from_closes(symbol, &closes)
}

/// Flat series at a constant close.
pub fn flat_series(symbol: &str, close: f64, len: usize) -> PriceSeries {
    series_from_closes(symbol, &vec![close; len])
}
