//! Scoring engine: series validation and end-to-end score assembly.
//!
//! The engine is a pure, synchronous transformation from a price series to
//! a [`ScoreReport`]. It holds no state, performs no I/O, and is safely
//! reentrant across threads; scoring several symbols concurrently needs no
//! coordination beyond giving each call its own series.

use std::collections::BTreeMap;

use crate::indicators::{self, RSI_PERIOD};
use crate::report::{Horizon, IndicatorScores, ScoreReport, SignalLabel};
use crate::scoring::{self, normalize};
use crate::{PriceSeries, ScoreError, StockProfile};

/// Minimum bars required before any computation proceeds.
pub const MIN_SERIES_LEN: usize = 30;

/// Check the series meets the engine's invariants.
///
/// Fails with `InsufficientData` below [`MIN_SERIES_LEN`] bars and with
/// `InvalidSeries` when dates are not strictly ascending (duplicates
/// included). The series itself is never mutated.
pub fn validate_series(series: &PriceSeries) -> Result<(), ScoreError> {
    if series.len() < MIN_SERIES_LEN {
        return Err(
            ScoreError::insufficient_data(series.len(), MIN_SERIES_LEN)
                .with_symbol(series.symbol.clone()),
        );
    }

    for pair in series.points.windows(2) {
        if pair[1].date <= pair[0].date {
            return Err(ScoreError::invalid_series(format!(
                "dates must be strictly ascending, got {} then {}",
                pair[0].date, pair[1].date
            ))
            .with_symbol(series.symbol.clone()));
        }
    }

    Ok(())
}

/// Score a validated price series.
///
/// Computes the full indicator battery, normalizes each onto the bounded
/// directional scale, and aggregates the composite signal. Identical input
/// always produces an identical report.
pub fn score(
    series: &PriceSeries,
    profile: Option<&StockProfile>,
) -> Result<ScoreReport, ScoreError> {
    validate_series(series).map_err(|error| match profile {
        Some(profile) => error.with_profile(profile.clone()),
        None => error,
    })?;

    let closes = series.closes();
    let current_price = closes[closes.len() - 1];

    let ma_score = scoring::round2(normalize::moving_averages(&indicators::deviations(&closes)));

    let rsi_raw = indicators::rsi(&closes, RSI_PERIOD).ok_or_else(|| {
        computation_error("rsi", "window exceeds series length", series, profile)
    })?;
    let rsi_score = scoring::round2(normalize::rsi(rsi_raw));

    let macd_snapshot = indicators::macd(&closes).ok_or_else(|| {
        computation_error("macd", "window exceeds series length", series, profile)
    })?;
    let macd_score = scoring::round2(normalize::macd(&macd_snapshot));

    let percent_b = indicators::percent_b(&closes).ok_or_else(|| {
        computation_error("bollinger", "window exceeds series length", series, profile)
    })?;
    let bollinger_score = scoring::round2(normalize::bollinger(percent_b));

    let stoch_snapshot = indicators::stochastic(&series.points).ok_or_else(|| {
        computation_error("stochastic", "window exceeds series length", series, profile)
    })?;
    let stoch_score = scoring::round2(normalize::stochastic(&stoch_snapshot));

    let obv_shift = indicators::obv_shift(&series.points).ok_or_else(|| {
        computation_error("obv", "lookback exceeds series length", series, profile)
    })?;
    let obv_score = scoring::round2(normalize::obv(&obv_shift));

    let mut momentum_scores = BTreeMap::new();
    let mut price_changes = BTreeMap::new();
    for horizon in Horizon::ALL {
        if let Some(change) = indicators::pct_change(&closes, horizon.offset_bars()) {
            momentum_scores.insert(horizon, scoring::round2(normalize::price_momentum(change)));
            price_changes.insert(horizon, scoring::round2(change));
        }
    }

    let indicator_scores = IndicatorScores {
        moving_averages: ma_score,
        rsi: rsi_score,
        macd: macd_score,
        bollinger_bands: bollinger_score,
        stochastic: stoch_score,
        volume_momentum: obv_score,
        price_momentum: momentum_scores,
    };
    ensure_finite(&indicator_scores, series, profile)?;

    let composite_score = scoring::composite(&indicator_scores);
    if !composite_score.is_finite() {
        return Err(computation_error(
            "composite",
            "produced a non-finite value",
            series,
            profile,
        ));
    }

    Ok(ScoreReport {
        symbol: series.symbol.clone(),
        current_price,
        profile: profile.cloned(),
        composite_score,
        signal: SignalLabel::classify(composite_score),
        indicators: indicator_scores,
        price_changes,
    })
}

fn ensure_finite(
    scores: &IndicatorScores,
    series: &PriceSeries,
    profile: Option<&StockProfile>,
) -> Result<(), ScoreError> {
    let named = [
        ("moving_averages", scores.moving_averages),
        ("rsi", scores.rsi),
        ("macd", scores.macd),
        ("bollinger_bands", scores.bollinger_bands),
        ("stochastic", scores.stochastic),
        ("volume_momentum", scores.volume_momentum),
    ];

    for (stage, value) in named {
        if !value.is_finite() {
            return Err(computation_error(stage, "produced a non-finite value", series, profile));
        }
    }

    for value in scores.price_momentum.values() {
        if !value.is_finite() {
            return Err(computation_error(
                "price_momentum",
                "produced a non-finite value",
                series,
                profile,
            ));
        }
    }

    Ok(())
}

fn computation_error(
    stage: &'static str,
    detail: &'static str,
    series: &PriceSeries,
    profile: Option<&StockProfile>,
) -> ScoreError {
    let mut error = ScoreError::computation(stage, detail).with_symbol(series.symbol.clone());
    if let Some(profile) = profile {
        error = error.with_profile(profile.clone());
    }
    error
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PricePoint, ScoreErrorKind, Symbol, TradingDate};
    use time::Date;

    fn flat_series(len: usize) -> PriceSeries {
        let points = (0..len)
            .map(|i| {
                let date = Date::from_julian_day(2_460_000 + i as i32).expect("date");
                PricePoint::new(
                    TradingDate::from_date(date),
                    100.0,
                    100.0,
                    100.0,
                    100.0,
                    1_000,
                )
                .expect("point")
            })
            .collect();
        PriceSeries::new(Symbol::parse("TEST").expect("symbol"), points)
    }

    #[test]
    fn rejects_series_below_the_floor() {
        let error = score(&flat_series(29), None).expect_err("must fail");
        assert_eq!(error.kind(), ScoreErrorKind::InsufficientData);
        assert_eq!(error.symbol().map(Symbol::as_str), Some("TEST"));
    }

    #[test]
    fn accepts_exactly_thirty_bars() {
        let report = score(&flat_series(30), None).expect("must score");
        assert!(report.composite_score.abs() <= 100.0);
    }

    #[test]
    fn rejects_duplicate_dates() {
        let mut series = flat_series(30);
        series.points[5].date = series.points[4].date;
        let error = score(&series, None).expect_err("must fail");
        assert_eq!(error.kind(), ScoreErrorKind::InvalidSeries);
    }

    #[test]
    fn rejects_out_of_order_dates() {
        let mut series = flat_series(30);
        series.points.swap(3, 4);
        let error = validate_series(&series).expect_err("must fail");
        assert_eq!(error.kind(), ScoreErrorKind::InvalidSeries);
    }

    #[test]
    fn scoring_is_idempotent() {
        let series = flat_series(40);
        let first = score(&series, None).expect("must score");
        let second = score(&series, None).expect("must score");
        assert_eq!(first, second);
    }
}
