//! Engine output types: per-indicator breakdown, composite signal, report.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{StockProfile, Symbol};

/// Price-momentum horizons, shortest first.
///
/// Offsets are trading days, so a week is 5 bars and a month 21.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Horizon {
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "1w")]
    OneWeek,
    #[serde(rename = "1m")]
    OneMonth,
    #[serde(rename = "3m")]
    ThreeMonths,
}

impl Horizon {
    pub const ALL: [Horizon; 4] = [
        Horizon::OneDay,
        Horizon::OneWeek,
        Horizon::OneMonth,
        Horizon::ThreeMonths,
    ];

    /// Lookback offset in trading days.
    pub const fn offset_bars(self) -> usize {
        match self {
            Horizon::OneDay => 1,
            Horizon::OneWeek => 5,
            Horizon::OneMonth => 21,
            Horizon::ThreeMonths => 63,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Horizon::OneDay => "1d",
            Horizon::OneWeek => "1w",
            Horizon::OneMonth => "1m",
            Horizon::ThreeMonths => "3m",
        }
    }
}

impl Display for Horizon {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discrete interpretation bucket for a composite score.
///
/// Negative scores lean buy, positive lean sell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalLabel {
    VeryStrongBuy,
    StrongBuy,
    WeakBuy,
    Neutral,
    WeakSell,
    StrongSell,
    VeryStrongSell,
}

impl SignalLabel {
    /// Bucket a composite score.
    pub fn classify(composite_score: f64) -> Self {
        if composite_score <= -80.0 {
            Self::VeryStrongBuy
        } else if composite_score <= -50.0 {
            Self::StrongBuy
        } else if composite_score <= -20.0 {
            Self::WeakBuy
        } else if composite_score < 20.0 {
            Self::Neutral
        } else if composite_score < 50.0 {
            Self::WeakSell
        } else if composite_score < 80.0 {
            Self::StrongSell
        } else {
            Self::VeryStrongSell
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VeryStrongBuy => "very strong buy",
            Self::StrongBuy => "strong buy",
            Self::WeakBuy => "weak buy",
            Self::Neutral => "neutral",
            Self::WeakSell => "weak sell",
            Self::StrongSell => "strong sell",
            Self::VeryStrongSell => "very strong sell",
        }
    }

    pub const fn is_buy(self) -> bool {
        matches!(self, Self::VeryStrongBuy | Self::StrongBuy | Self::WeakBuy)
    }

    pub const fn is_sell(self) -> bool {
        matches!(
            self,
            Self::WeakSell | Self::StrongSell | Self::VeryStrongSell
        )
    }
}

impl Display for SignalLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized per-indicator scores, each in [-100, 100].
///
/// Price momentum carries one score per horizon with enough history instead
/// of a single scalar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorScores {
    pub moving_averages: f64,
    pub rsi: f64,
    pub macd: f64,
    pub bollinger_bands: f64,
    pub stochastic: f64,
    pub volume_momentum: f64,
    pub price_momentum: BTreeMap<Horizon, f64>,
}

/// Full scoring result for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub symbol: Symbol,
    pub current_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<StockProfile>,
    pub composite_score: f64,
    pub signal: SignalLabel,
    pub indicators: IndicatorScores,
    /// Raw percentage change per horizon, for rendering alongside scores.
    pub price_changes: BTreeMap<Horizon, f64>,
}
