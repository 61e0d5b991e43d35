use serde_json::json;
use tascore_core::SignalLabel;

use crate::cli::ClassifyArgs;
use crate::error::CliError;

use super::CommandResult;

pub fn run(args: &ClassifyArgs) -> Result<CommandResult, CliError> {
    if !args.score.is_finite() {
        return Err(CliError::Input(String::from(
            "score must be a finite number",
        )));
    }

    let label = SignalLabel::classify(args.score);
    let mut result = CommandResult::ok(json!({
        "composite_score": args.score,
        "signal": label,
        "signal_text": label.as_str(),
    }));

    if !(-100.0..=100.0).contains(&args.score) {
        result = result.with_warning(format!(
            "score {} is outside the engine's [-100, 100] scale",
            args.score
        ));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_a_buy_score() {
        let result = run(&ClassifyArgs { score: -54.2 }).expect("must run");
        assert_eq!(result.data["signal"], "strong_buy");
        assert_eq!(result.data["signal_text"], "strong buy");
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn warns_on_out_of_scale_score() {
        let result = run(&ClassifyArgs { score: 240.0 }).expect("must run");
        assert_eq!(result.data["signal"], "very_strong_sell");
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn rejects_non_finite_score() {
        let error = run(&ClassifyArgs {
            score: f64::INFINITY,
        })
        .expect_err("must fail");
        assert!(matches!(error, CliError::Input(_)));
    }
}
