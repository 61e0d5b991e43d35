//! # Scoring
//!
//! Maps raw indicator values onto the bounded directional scale and
//! aggregates them into the composite signal.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`weights`] | Named weights, scale factors, and thresholds |
//! | [`normalize`] | Per-indicator piecewise-linear score maps |
//! | [`composite`] | Weighted aggregation and rounding |
//!
//! Scores are negative for buy-leaning signals and positive for
//! sell-leaning ones throughout.

pub mod composite;
pub mod normalize;
pub mod weights;

pub use composite::{composite, round2};
