use serde_json::json;
use tascore_core::indicators::{
    BOLLINGER_PERIOD, BOLLINGER_STDDEV_MULT, MACD_FAST_SPAN, MACD_SIGNAL_SPAN, MACD_SLOW_SPAN,
    OBV_LOOKBACK_DAYS, RSI_PERIOD, STOCH_D_PERIOD, STOCH_K_PERIOD,
};
use tascore_core::scoring::weights::{
    BOLLINGER_SCORE_SCALE, COMPOSITE_BOLLINGER_WEIGHT, COMPOSITE_MACD_WEIGHT, COMPOSITE_MA_WEIGHT,
    COMPOSITE_OBV_WEIGHT, COMPOSITE_RSI_WEIGHT, COMPOSITE_STOCH_WEIGHT, MA_DEVIATION_SCALE,
    MA_WINDOW_WEIGHTS, MOMENTUM_CHANGE_SCALE, MOMENTUM_INJECTION_WEIGHT, OBV_CHANGE_SCALE,
    RSI_OVERBOUGHT, RSI_OVERSOLD, STOCH_OVERBOUGHT, STOCH_OVERSOLD,
};
use tascore_core::MIN_SERIES_LEN;

use crate::error::CliError;

use super::CommandResult;

pub fn run() -> Result<CommandResult, CliError> {
    let ma_windows: Vec<serde_json::Value> = MA_WINDOW_WEIGHTS
        .iter()
        .map(|(window, weight)| json!({ "window": window, "weight": weight }))
        .collect();

    let data = json!({
        "min_series_len": MIN_SERIES_LEN,
        "composite_weights": {
            "moving_averages": COMPOSITE_MA_WEIGHT,
            "rsi": COMPOSITE_RSI_WEIGHT,
            "macd": COMPOSITE_MACD_WEIGHT,
            "bollinger_bands": COMPOSITE_BOLLINGER_WEIGHT,
            "stochastic": COMPOSITE_STOCH_WEIGHT,
            "volume_momentum": COMPOSITE_OBV_WEIGHT,
            "week_momentum_injection": MOMENTUM_INJECTION_WEIGHT,
        },
        "moving_averages": {
            "window_weights": ma_windows,
            "deviation_scale": MA_DEVIATION_SCALE,
        },
        "rsi": {
            "period": RSI_PERIOD,
            "oversold": RSI_OVERSOLD,
            "overbought": RSI_OVERBOUGHT,
        },
        "macd": {
            "fast_span": MACD_FAST_SPAN,
            "slow_span": MACD_SLOW_SPAN,
            "signal_span": MACD_SIGNAL_SPAN,
        },
        "bollinger_bands": {
            "period": BOLLINGER_PERIOD,
            "stddev_mult": BOLLINGER_STDDEV_MULT,
            "score_scale": BOLLINGER_SCORE_SCALE,
        },
        "stochastic": {
            "k_period": STOCH_K_PERIOD,
            "d_period": STOCH_D_PERIOD,
        },
        "obv": {
            "lookback_days": OBV_LOOKBACK_DAYS,
            "change_scale": OBV_CHANGE_SCALE,
        },
        "price_momentum": {
            "change_scale": MOMENTUM_CHANGE_SCALE,
        },
    });

    Ok(CommandResult::ok(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_weights_sum_to_one_before_injection() {
        let result = run().expect("must run");
        let weights = &result.data["composite_weights"];

        let keys = [
            "moving_averages",
            "rsi",
            "macd",
            "bollinger_bands",
            "stochastic",
            "volume_momentum",
        ];
        let sum = keys
            .iter()
            .map(|key| weights[key].as_f64().expect("weight"))
            .sum::<f64>();
        assert!((sum - 1.0).abs() < 1e-9);
    }
}
