use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{StockProfile, Symbol};

/// Validation and contract errors exposed by `tascore-core`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol must start with an ASCII letter: '{ch}'")]
    SymbolInvalidStart { ch: char },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("date must be ISO YYYY-MM-DD: '{value}'")]
    InvalidDate { value: String },

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("field '{field}' must be positive, got {value}")]
    NonPositivePrice { field: &'static str, value: f64 },
    #[error("field '{field}' must be non-negative")]
    NegativeValue { field: &'static str },

    #[error("price point high must be >= low")]
    InvalidPointRange,
    #[error("price point open/close must be within high/low range")]
    InvalidPointBounds,

    #[error("request_id must be at least 8 characters")]
    InvalidRequestId,
    #[error("schema_version must match vMAJOR.MINOR.PATCH: '{value}'")]
    InvalidSchemaVersion { value: String },
    #[error("error code cannot be empty")]
    EmptyErrorCode,
    #[error("error message cannot be empty")]
    EmptyErrorMessage,
}

/// Categories of scoring failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreErrorKind {
    /// Fewer bars than the engine's minimum history floor.
    InsufficientData,
    /// Dates out of order or duplicated.
    InvalidSeries,
    /// A non-finite value escaped an indicator calculation.
    Computation,
}

/// Tagged scoring failure returned instead of a report.
///
/// Carries whatever partial context was available when the computation
/// stopped, so callers can still render the symbol and profile alongside
/// the error message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreError {
    kind: ScoreErrorKind,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    symbol: Option<Symbol>,
    #[serde(skip_serializing_if = "Option::is_none")]
    profile: Option<StockProfile>,
}

impl ScoreError {
    pub fn insufficient_data(len: usize, min: usize) -> Self {
        Self {
            kind: ScoreErrorKind::InsufficientData,
            message: format!("price series has {len} bars, need at least {min}"),
            symbol: None,
            profile: None,
        }
    }

    pub fn invalid_series(message: impl Into<String>) -> Self {
        Self {
            kind: ScoreErrorKind::InvalidSeries,
            message: message.into(),
            symbol: None,
            profile: None,
        }
    }

    pub fn computation(stage: &'static str, detail: impl Into<String>) -> Self {
        Self {
            kind: ScoreErrorKind::Computation,
            message: format!("computation failed in {stage}: {}", detail.into()),
            symbol: None,
            profile: None,
        }
    }

    pub fn with_symbol(mut self, symbol: Symbol) -> Self {
        self.symbol = Some(symbol);
        self
    }

    pub fn with_profile(mut self, profile: StockProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    pub const fn kind(&self) -> ScoreErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn symbol(&self) -> Option<&Symbol> {
        self.symbol.as_ref()
    }

    pub fn profile(&self) -> Option<&StockProfile> {
        self.profile.as_ref()
    }

    /// Stable machine-readable code for envelope errors.
    pub const fn code(&self) -> &'static str {
        match self.kind {
            ScoreErrorKind::InsufficientData => "score.insufficient_data",
            ScoreErrorKind::InvalidSeries => "score.invalid_series",
            ScoreErrorKind::Computation => "score.computation",
        }
    }
}

impl Display for ScoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ScoreError {}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Score(#[from] ScoreError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
