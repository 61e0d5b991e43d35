//! Moving Average Convergence Divergence.

/// Fast EMA span for the MACD line.
pub const MACD_FAST_SPAN: usize = 12;
/// Slow EMA span for the MACD line.
pub const MACD_SLOW_SPAN: usize = 26;
/// EMA span of the signal line over the MACD series.
pub const MACD_SIGNAL_SPAN: usize = 9;

/// Recursive exponential moving average seeded at the first value.
///
/// `alpha = 2 / (span + 1)`, matching the conventional non-adjusted EMA
/// recurrence over the whole series.
pub fn ema(values: &[f64], span: usize) -> Vec<f64> {
    let alpha = 2.0 / (span as f64 + 1.0);
    let mut out = Vec::with_capacity(values.len());
    let mut prev: Option<f64> = None;
    for &value in values {
        let next = match prev {
            None => value,
            Some(prev) => alpha * value + (1.0 - alpha) * prev,
        };
        out.push(next);
        prev = Some(next);
    }
    out
}

/// Latest MACD line, signal line, and the last two histogram values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacdSnapshot {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
    pub prev_histogram: f64,
}

/// MACD(12, 26, 9) snapshot of the series tail.
///
/// Needs at least two closes so the histogram rate of change is defined.
pub fn macd(closes: &[f64]) -> Option<MacdSnapshot> {
    if closes.len() < 2 {
        return None;
    }

    let fast = ema(closes, MACD_FAST_SPAN);
    let slow = ema(closes, MACD_SLOW_SPAN);
    let macd_line: Vec<f64> = fast
        .iter()
        .zip(slow.iter())
        .map(|(fast, slow)| fast - slow)
        .collect();
    let signal_line = ema(&macd_line, MACD_SIGNAL_SPAN);

    let last = macd_line.len() - 1;
    let histogram = macd_line[last] - signal_line[last];
    let prev_histogram = macd_line[last - 1] - signal_line[last - 1];

    Some(MacdSnapshot {
        macd: macd_line[last],
        signal: signal_line[last],
        histogram,
        prev_histogram,
    })
}
