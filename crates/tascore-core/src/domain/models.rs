use serde::{Deserialize, Serialize};

use crate::{Symbol, TradingDate, ValidationError};

/// Single daily OHLCV bar.
///
/// Immutable once constructed; the engine never mutates price history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: TradingDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl PricePoint {
    pub fn new(
        date: TradingDate,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
    ) -> Result<Self, ValidationError> {
        validate_positive("open", open)?;
        validate_positive("high", high)?;
        validate_positive("low", low)?;
        validate_positive("close", close)?;

        if high < low {
            return Err(ValidationError::InvalidPointRange);
        }

        if open < low || open > high || close < low || close > high {
            return Err(ValidationError::InvalidPointBounds);
        }

        Ok(Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        })
    }
}

/// Chronological price history for one symbol.
///
/// The constructor is deliberately permissive; the scoring engine owns the
/// ordering and minimum-length checks so that violations surface as tagged
/// `ScoreError`s rather than construction panics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    pub symbol: Symbol,
    pub points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn new(symbol: Symbol, points: Vec<PricePoint>) -> Self {
        Self { symbol, points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Close-price column, oldest first.
    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.close).collect()
    }

    /// Most recent close, if any bars exist.
    pub fn last_close(&self) -> Option<f64> {
        self.points.last().map(|point| point.close)
    }
}

/// Basic instrument snapshot attached to a score report.
///
/// Everything here comes from the caller's data provider; the engine only
/// echoes it back so downstream rendering can show company context next to
/// the signal, including on failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StockProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pe_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dividend_yield: Option<f64>,
}

impl StockProfile {
    pub fn new(
        name: Option<String>,
        sector: Option<String>,
        market_cap: Option<f64>,
        pe_ratio: Option<f64>,
        dividend_yield: Option<f64>,
    ) -> Result<Self, ValidationError> {
        validate_optional_non_negative("market_cap", market_cap)?;
        validate_optional_finite("pe_ratio", pe_ratio)?;
        validate_optional_non_negative("dividend_yield", dividend_yield)?;

        Ok(Self {
            name,
            sector,
            market_cap,
            pe_ratio,
            dividend_yield,
        })
    }
}

fn validate_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    if value <= 0.0 {
        return Err(ValidationError::NonPositivePrice { field, value });
    }
    Ok(())
}

fn validate_optional_non_negative(
    field: &'static str,
    value: Option<f64>,
) -> Result<(), ValidationError> {
    if let Some(value) = value {
        if !value.is_finite() {
            return Err(ValidationError::NonFiniteValue { field });
        }
        if value < 0.0 {
            return Err(ValidationError::NegativeValue { field });
        }
    }
    Ok(())
}

fn validate_optional_finite(
    field: &'static str,
    value: Option<f64>,
) -> Result<(), ValidationError> {
    if let Some(value) = value {
        if !value.is_finite() {
            return Err(ValidationError::NonFiniteValue { field });
        }
    }
    Ok(())
}
