//! # Tascore Core
//!
//! Technical indicator scoring engine and domain contracts for tascore.
//!
//! ## Overview
//!
//! This crate turns a chronological price history into a single bounded
//! directional signal with a per-indicator breakdown:
//!
//! - **Canonical domain models** for price points, series, and symbols
//! - **Pure indicator calculators** (moving averages, RSI, MACD, Bollinger
//!   Bands, stochastic oscillator, OBV, price momentum)
//! - **Bounded normalization** of each indicator onto [-100, 100], negative
//!   leaning buy, positive leaning sell
//! - **Composite aggregation** into one score with a seven-bucket label
//! - **Response envelope** with metadata and structured errors
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`domain`] | Domain models (PricePoint, PriceSeries, Symbol, ...) |
//! | [`engine`] | Series validation and end-to-end scoring |
//! | [`envelope`] | Response envelope with metadata |
//! | [`error`] | Core error types |
//! | [`indicators`] | Raw indicator calculators |
//! | [`report`] | Score report and signal label types |
//! | [`scoring`] | Normalization and composite aggregation |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tascore_core::{engine, PriceSeries, Symbol};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Price history comes from the caller's data provider
//!     let series = PriceSeries::new(Symbol::parse("AAPL")?, fetch_bars()?);
//!
//!     let report = engine::score(&series, None)?;
//!     println!("{}: {} ({})", report.symbol, report.composite_score, report.signal);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every computation path returns a tagged result; no panic crosses the
//! engine boundary:
//!
//! ```rust
//! use tascore_core::{ScoreError, ScoreErrorKind};
//!
//! fn handle_error(error: ScoreError) {
//!     match error.kind() {
//!         ScoreErrorKind::InsufficientData => {
//!             // Fetch a longer history and retry
//!         }
//!         ScoreErrorKind::InvalidSeries => {
//!             // Provider returned unsorted or duplicated bars
//!         }
//!         ScoreErrorKind::Computation => {
//!             // Render the message with whatever partial info survived
//!         }
//!     }
//! }
//! ```
//!
//! ## Concurrency
//!
//! The engine is purely functional: no shared state, no I/O, no suspension
//! points. Calls are safely reentrant across threads and scoring many
//! symbols is embarrassingly parallel from the caller's side.

pub mod domain;
pub mod engine;
pub mod envelope;
pub mod error;
pub mod indicators;
pub mod report;
pub mod scoring;

pub use domain::{PricePoint, PriceSeries, StockProfile, Symbol, TradingDate};
pub use engine::{score, validate_series, MIN_SERIES_LEN};
pub use envelope::{Envelope, EnvelopeError, EnvelopeMeta};
pub use error::{CoreError, ScoreError, ScoreErrorKind, ValidationError};
pub use report::{Horizon, IndicatorScores, ScoreReport, SignalLabel};
