mod classify;
mod score;
mod weights;

use std::time::Instant;

use serde_json::Value;
use tascore_core::Envelope;

use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::metadata::Metadata;

const SCHEMA_VERSION: &str = "v1.0.0";

#[derive(Debug)]
pub struct CommandResult {
    pub data: Value,
    pub warnings: Vec<String>,
    pub errors: Vec<tascore_core::EnvelopeError>,
}

impl CommandResult {
    pub fn ok(data: Value) -> Self {
        Self {
            data,
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    pub fn with_error(mut self, error: tascore_core::EnvelopeError) -> Self {
        self.errors.push(error);
        self
    }
}

pub fn run(cli: &Cli) -> Result<Envelope<Value>, CliError> {
    let started = Instant::now();

    let command_result = match &cli.command {
        Command::Score(args) => score::run(args)?,
        Command::Classify(args) => classify::run(args)?,
        Command::Weights => weights::run()?,
    };

    let CommandResult {
        data,
        warnings,
        errors,
    } = command_result;

    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    let mut metadata = Metadata::new(elapsed_ms);
    for warning in warnings {
        metadata.push_warning(warning);
    }

    let meta = metadata.into_envelope_meta(SCHEMA_VERSION)?;
    Envelope::with_errors(meta, data, errors).map_err(CliError::from)
}
