//! # Indicator Calculators
//!
//! Pure calculators for the classical technical indicators the engine
//! scores. Each operates on the tail of a validated series and returns raw
//! values; bounded directional scores are produced separately by
//! [`crate::scoring`].
//!
//! | Module | Indicator |
//! |--------|-----------|
//! | [`moving_average`] | SMA deviations for windows 10/20/50/200 |
//! | [`rsi`] | 14-period Relative Strength Index |
//! | [`macd`] | MACD(12, 26, 9) line, signal, histogram |
//! | [`bollinger`] | 20-period, 2-sigma bands and %B |
//! | [`stochastic`] | Stochastic(14, 3) %K/%D |
//! | [`obv`] | On-Balance Volume momentum |
//! | [`momentum`] | Multi-horizon price change |
//!
//! Calculators signal "not enough history" with `None`; only the engine's
//! 30-bar floor is a hard error.

pub mod bollinger;
pub mod macd;
pub mod momentum;
pub mod moving_average;
pub mod obv;
pub mod rsi;
pub mod stochastic;

pub use bollinger::{percent_b, BOLLINGER_PERIOD, BOLLINGER_STDDEV_MULT};
pub use macd::{ema, macd, MacdSnapshot, MACD_FAST_SPAN, MACD_SIGNAL_SPAN, MACD_SLOW_SPAN};
pub use momentum::pct_change;
pub use moving_average::{deviations, sma, MaDeviation, MA_WINDOWS};
pub use obv::{obv_shift, on_balance_volume, ObvShift, OBV_LOOKBACK_DAYS};
pub use rsi::{rsi, RSI_PERIOD};
pub use stochastic::{stochastic, StochSnapshot, STOCH_D_PERIOD, STOCH_K_PERIOD};
