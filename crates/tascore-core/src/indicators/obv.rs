//! On-Balance Volume and its short-horizon momentum.

use crate::PricePoint;

/// Lookback, in trading days, for the OBV momentum comparison.
pub const OBV_LOOKBACK_DAYS: usize = 5;

/// Cumulative signed-volume series, one value per bar.
///
/// Each bar contributes its volume with the sign of the close-to-close
/// change; an unchanged close contributes zero. The first bar has no prior
/// close and anchors the series at zero.
pub fn on_balance_volume(points: &[PricePoint]) -> Vec<f64> {
    let mut out = Vec::with_capacity(points.len());
    let mut running = 0.0;
    for (index, point) in points.iter().enumerate() {
        if index > 0 {
            let delta = point.close - points[index - 1].close;
            if delta > 0.0 {
                running += point.volume as f64;
            } else if delta < 0.0 {
                running -= point.volume as f64;
            }
        }
        out.push(running);
    }
    out
}

/// Current OBV against its value [`OBV_LOOKBACK_DAYS`] trading days prior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObvShift {
    pub current: f64,
    pub prior: f64,
}

impl ObvShift {
    /// Percentage change of OBV over the lookback.
    ///
    /// `None` when the prior value is exactly zero; the normalizer maps
    /// that case to the score bound in the direction of the change instead
    /// of dividing by zero.
    pub fn pct_change(&self) -> Option<f64> {
        if self.prior == 0.0 {
            return None;
        }
        Some((self.current - self.prior) / self.prior.abs() * 100.0)
    }
}

/// OBV now vs. [`OBV_LOOKBACK_DAYS`] days ago.
///
/// Returns `None` when the series does not span the lookback.
pub fn obv_shift(points: &[PricePoint]) -> Option<ObvShift> {
    if points.len() < OBV_LOOKBACK_DAYS + 1 {
        return None;
    }

    let series = on_balance_volume(points);
    Some(ObvShift {
        current: series[series.len() - 1],
        prior: series[series.len() - 1 - OBV_LOOKBACK_DAYS],
    })
}
