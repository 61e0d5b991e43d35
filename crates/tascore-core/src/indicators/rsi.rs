//! Relative Strength Index over day-over-day close deltas.

/// Rolling window length for gains/losses.
pub const RSI_PERIOD: usize = 14;

/// RSI over the last `period` close-to-close deltas.
///
/// Uses a simple rolling mean of gains and losses. Returns `None` when the
/// series is shorter than `period + 1` closes.
///
/// Degenerate windows are guarded rather than propagated as NaN: an
/// all-gain window reads 100 (maximal overbought), a window with neither
/// gains nor losses (flat price) reads 50 (neutral).
pub fn rsi(closes: &[f64], period: usize) -> Option<f64> {
    if period == 0 || closes.len() < period + 1 {
        return None;
    }

    let deltas = &closes[closes.len() - period - 1..];
    let mut gain_sum = 0.0;
    let mut loss_sum = 0.0;
    for pair in deltas.windows(2) {
        let delta = pair[1] - pair[0];
        if delta > 0.0 {
            gain_sum += delta;
        } else {
            loss_sum += -delta;
        }
    }

    let avg_gain = gain_sum / period as f64;
    let avg_loss = loss_sum / period as f64;

    if avg_loss == 0.0 {
        if avg_gain == 0.0 {
            return Some(50.0);
        }
        return Some(100.0);
    }

    let rs = avg_gain / avg_loss;
    Some(100.0 - 100.0 / (1.0 + rs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balanced_gains_and_losses_read_fifty() {
        // Alternating +1/-1 deltas: avg gain == avg loss -> RS = 1.
        let mut closes = vec![100.0];
        for i in 0..14 {
            let delta = if i % 2 == 0 { 1.0 } else { -1.0 };
            closes.push(closes.last().copied().unwrap() + delta);
        }
        let value = rsi(&closes, RSI_PERIOD).expect("enough history");
        assert!((value - 50.0).abs() < 1e-9);
    }

    #[test]
    fn all_gains_read_one_hundred() {
        let closes: Vec<f64> = (0..20).map(|i| 100.0 + f64::from(i)).collect();
        assert_eq!(rsi(&closes, RSI_PERIOD), Some(100.0));
    }

    #[test]
    fn flat_window_reads_neutral() {
        let closes = vec![100.0; 20];
        assert_eq!(rsi(&closes, RSI_PERIOD), Some(50.0));
    }

    #[test]
    fn short_series_yields_none() {
        let closes = vec![100.0; 14];
        assert_eq!(rsi(&closes, RSI_PERIOD), None);
    }
}
