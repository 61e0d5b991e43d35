//! # Domain Models
//!
//! Canonical domain types for tascore price histories.
//!
//! ## Overview
//!
//! This module provides strongly-typed domain models with built-in validation.
//! All models are designed to be:
//!
//! - **Type-safe**: Invalid states are unrepresentable
//! - **Validated**: Construction validates per-point invariants
//! - **Serializable**: Full serde support for JSON
//!
//! ## Models
//!
//! | Type | Description |
//! |------|-------------|
//! | [`PricePoint`] | Daily OHLCV bar with calendar date |
//! | [`PriceSeries`] | Chronological bar collection for a symbol |
//! | [`StockProfile`] | Optional instrument snapshot (name, sector, ...) |
//! | [`Symbol`] | Validated stock symbol |
//! | [`TradingDate`] | ISO calendar date |
//!
//! ## Validation
//!
//! Per-point invariants are enforced at construction time:
//!
//! ```rust,ignore
//! use tascore_core::{PricePoint, TradingDate, ValidationError};
//!
//! let date = TradingDate::parse("2024-01-02")?;
//! let point = PricePoint::new(date, 100.0, 105.0, 95.0, 102.0, 1_000)?;
//!
//! // Invalid point (high < low) - returns ValidationError
//! let invalid = PricePoint::new(date, 100.0, 95.0, 105.0, 102.0, 1_000);
//! assert!(matches!(invalid, Err(ValidationError::InvalidPointRange)));
//! ```
//!
//! Series-level invariants (minimum length, strictly ascending dates) are
//! owned by the scoring engine; see [`crate::engine::validate_series`].

mod date;
mod models;
mod symbol;

pub use date::TradingDate;
pub use models::{PricePoint, PriceSeries, StockProfile};
pub use symbol::Symbol;
