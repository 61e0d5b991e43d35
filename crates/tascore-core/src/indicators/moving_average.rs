//! Simple moving averages and per-window deviation of the latest close.

/// Moving-average windows probed by the engine, shortest first.
pub const MA_WINDOWS: [usize; 4] = [10, 20, 50, 200];

/// Arithmetic mean of the last `window` values.
///
/// Returns `None` when the window is zero or longer than the available
/// history; short histories skip long windows rather than erroring.
pub fn sma(values: &[f64], window: usize) -> Option<f64> {
    if window == 0 || window > values.len() {
        return None;
    }
    let tail = &values[values.len() - window..];
    Some(tail.iter().sum::<f64>() / window as f64)
}

/// Deviation of the latest close from one moving-average window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaDeviation {
    pub window: usize,
    pub deviation_pct: f64,
}

/// Per-window percentage deviation of the latest close from its SMA.
///
/// Windows longer than the series are omitted from the result.
pub fn deviations(closes: &[f64]) -> Vec<MaDeviation> {
    let Some(&current) = closes.last() else {
        return Vec::new();
    };

    MA_WINDOWS
        .iter()
        .filter_map(|&window| {
            sma(closes, window).map(|ma| MaDeviation {
                window,
                deviation_pct: (current - ma) / ma * 100.0,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sma_averages_the_tail() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(sma(&values, 3), Some(4.0));
        assert_eq!(sma(&values, 5), Some(3.0));
    }

    #[test]
    fn sma_skips_oversized_window() {
        assert_eq!(sma(&[1.0, 2.0], 3), None);
        assert_eq!(sma(&[1.0, 2.0], 0), None);
    }

    #[test]
    fn deviations_skip_unavailable_windows() {
        let closes: Vec<f64> = (0..40).map(|i| 100.0 + f64::from(i)).collect();
        let result = deviations(&closes);

        let windows: Vec<usize> = result.iter().map(|d| d.window).collect();
        assert_eq!(windows, vec![10, 20]);

        // current = 139, MA10 = 134.5 -> (139 - 134.5) / 134.5 * 100
        let ma10 = &result[0];
        assert!((ma10.deviation_pct - 3.345_724_907_063_197).abs() < 1e-9);
    }

    #[test]
    fn deviations_on_empty_series_are_empty() {
        assert!(deviations(&[]).is_empty());
    }
}
