//! Bollinger Bands and the %B position of the latest close.

/// Band window length.
pub const BOLLINGER_PERIOD: usize = 20;
/// Band half-width in standard deviations.
pub const BOLLINGER_STDDEV_MULT: f64 = 2.0;

/// %B location of the latest close within its 20-period, 2-sigma band.
///
/// 0 sits on the lower band, 1 on the upper, 0.5 at mid-band. A zero-width
/// band (flat window) reads 0.5 rather than dividing by zero. Returns `None`
/// when fewer than [`BOLLINGER_PERIOD`] closes are available.
pub fn percent_b(closes: &[f64]) -> Option<f64> {
    if closes.len() < BOLLINGER_PERIOD {
        return None;
    }

    let window = &closes[closes.len() - BOLLINGER_PERIOD..];
    let middle = window.iter().sum::<f64>() / BOLLINGER_PERIOD as f64;
    let stddev = sample_stddev(window, middle);

    let upper = middle + BOLLINGER_STDDEV_MULT * stddev;
    let lower = middle - BOLLINGER_STDDEV_MULT * stddev;
    let width = upper - lower;
    if width == 0.0 {
        return Some(0.5);
    }

    let current = closes[closes.len() - 1];
    Some((current - lower) / width)
}

/// Sample standard deviation (n-1 divisor) around a precomputed mean.
fn sample_stddev(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let sum_sq: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_window_reads_mid_band() {
        let closes = vec![100.0; 25];
        assert_eq!(percent_b(&closes), Some(0.5));
    }

    #[test]
    fn rising_window_reads_near_upper_band() {
        let closes: Vec<f64> = (0..20).map(|i| 100.0 + f64::from(i)).collect();
        let value = percent_b(&closes).expect("enough history");
        assert!((value - 0.901_448_270_996_045_2).abs() < 1e-9);
    }

    #[test]
    fn short_series_yields_none() {
        let closes = vec![100.0; 19];
        assert_eq!(percent_b(&closes), None);
    }

    #[test]
    fn stddev_uses_sample_divisor() {
        // [1..20]: sample stddev = sqrt(sum((v - 10.5)^2) / 19)
        let values: Vec<f64> = (1..=20).map(f64::from).collect();
        let mean = values.iter().sum::<f64>() / 20.0;
        assert!((sample_stddev(&values, mean) - 5.916_079_783_099_616).abs() < 1e-9);
    }
}
