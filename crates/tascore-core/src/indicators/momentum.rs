//! Multi-horizon price momentum.

/// Percentage change of the latest close vs. `offset` trading days earlier.
///
/// Returns `None` when the series does not reach back that far; horizons
/// without enough history are skipped, not errors.
pub fn pct_change(closes: &[f64], offset: usize) -> Option<f64> {
    if offset == 0 || closes.len() <= offset {
        return None;
    }

    let current = closes[closes.len() - 1];
    let reference = closes[closes.len() - 1 - offset];
    Some((current / reference - 1.0) * 100.0)
}
