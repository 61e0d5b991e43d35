use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use serde_json::json;
use tascore_core::{
    engine, EnvelopeError, PricePoint, PriceSeries, StockProfile, Symbol, TradingDate,
};

use crate::cli::ScoreArgs;
use crate::error::CliError;

use super::CommandResult;

/// Raw bar as it appears in the input file; validated into domain types
/// before scoring.
#[derive(Debug, Deserialize)]
struct BarInput {
    date: String,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: u64,
}

pub fn run(args: &ScoreArgs) -> Result<CommandResult, CliError> {
    let symbol = Symbol::parse(&args.symbol)?;
    let profile = build_profile(args)?;

    let raw = read_bars(&args.bars)?;
    let bars: Vec<BarInput> = serde_json::from_str(&raw)
        .map_err(|error| CliError::Input(format!("failed to parse bars: {error}")))?;

    let points = bars
        .into_iter()
        .map(|bar| {
            let date = TradingDate::parse(&bar.date)?;
            PricePoint::new(date, bar.open, bar.high, bar.low, bar.close, bar.volume)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let series = PriceSeries::new(symbol.clone(), points);

    match engine::score(&series, profile.as_ref()) {
        Ok(report) => Ok(CommandResult::ok(serde_json::to_value(report)?)),
        Err(error) => {
            // Partial basic info still renders next to the error message.
            let data = json!({
                "symbol": symbol,
                "profile": error.profile().or(profile.as_ref()),
            });
            let envelope_error = EnvelopeError::new(error.code(), error.message())?;
            Ok(CommandResult::ok(data).with_error(envelope_error))
        }
    }
}

fn build_profile(args: &ScoreArgs) -> Result<Option<StockProfile>, CliError> {
    let has_any = args.name.is_some()
        || args.sector.is_some()
        || args.market_cap.is_some()
        || args.pe_ratio.is_some()
        || args.dividend_yield.is_some();
    if !has_any {
        return Ok(None);
    }

    let profile = StockProfile::new(
        args.name.clone(),
        args.sector.clone(),
        args.market_cap,
        args.pe_ratio,
        args.dividend_yield,
    )?;
    Ok(Some(profile))
}

fn read_bars(path: &Path) -> Result<String, CliError> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }

    Ok(std::fs::read_to_string(path)?)
}
