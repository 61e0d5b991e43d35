//! Stochastic oscillator (%K/%D) over the high-low range.

use crate::PricePoint;

/// Lookback window for %K.
pub const STOCH_K_PERIOD: usize = 14;
/// Smoothing window for %D.
pub const STOCH_D_PERIOD: usize = 3;

/// Latest %K and its 3-period mean %D.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StochSnapshot {
    pub percent_k: f64,
    pub percent_d: f64,
}

/// Stochastic(14, 3) snapshot of the series tail.
///
/// %K compares the close to the 14-bar high/low range; a zero range (flat
/// window) reads 50, mid-range. %D averages %K over the last
/// [`STOCH_D_PERIOD`] bars, so the series must cover
/// `STOCH_K_PERIOD + STOCH_D_PERIOD - 1` points.
pub fn stochastic(points: &[PricePoint]) -> Option<StochSnapshot> {
    if points.len() < STOCH_K_PERIOD + STOCH_D_PERIOD - 1 {
        return None;
    }

    let mut k_values = [0.0; STOCH_D_PERIOD];
    for (slot, end) in (points.len() - STOCH_D_PERIOD..points.len()).enumerate() {
        k_values[slot] = percent_k(&points[..=end]);
    }

    let percent_d = k_values.iter().sum::<f64>() / STOCH_D_PERIOD as f64;
    Some(StochSnapshot {
        percent_k: k_values[STOCH_D_PERIOD - 1],
        percent_d,
    })
}

fn percent_k(points: &[PricePoint]) -> f64 {
    let window = &points[points.len() - STOCH_K_PERIOD..];
    let lowest_low = window.iter().map(|p| p.low).fold(f64::INFINITY, f64::min);
    let highest_high = window
        .iter()
        .map(|p| p.high)
        .fold(f64::NEG_INFINITY, f64::max);

    let range = highest_high - lowest_low;
    if range == 0.0 {
        return 50.0;
    }

    let close = points[points.len() - 1].close;
    100.0 * (close - lowest_low) / range
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TradingDate;
    use time::{Date, Month};

    fn point(day: u8, low: f64, high: f64, close: f64) -> PricePoint {
        let date = Date::from_calendar_date(2024, Month::January, day).expect("date");
        PricePoint::new(TradingDate::from_date(date), close, high, low, close, 1_000)
            .expect("point")
    }

    #[test]
    fn rising_series_reads_high_in_range() {
        // closes 1..=16, high = close + 1, low = close - 1
        let points: Vec<PricePoint> = (1..=16)
            .map(|i| point(i, f64::from(i) - 1.0, f64::from(i) + 1.0, f64::from(i)))
            .collect();
        let snapshot = stochastic(&points).expect("enough history");

        // window lows 2..15, highs 4..17 -> range 15, close 16
        assert!((snapshot.percent_k - 93.333_333_333_333_33).abs() < 1e-9);
        assert!((snapshot.percent_d - 93.333_333_333_333_33).abs() < 1e-9);
    }

    #[test]
    fn flat_series_reads_mid_range() {
        let points: Vec<PricePoint> = (1..=20).map(|i| point(i, 100.0, 100.0, 100.0)).collect();
        let snapshot = stochastic(&points).expect("enough history");
        assert_eq!(snapshot.percent_k, 50.0);
        assert_eq!(snapshot.percent_d, 50.0);
    }

    #[test]
    fn short_series_yields_none() {
        let points: Vec<PricePoint> = (1..=15).map(|i| point(i, 99.0, 101.0, 100.0)).collect();
        assert!(stochastic(&points).is_none());
    }
}
