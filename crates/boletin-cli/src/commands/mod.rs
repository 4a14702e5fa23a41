mod parse;
mod prices;
mod url;

use boletin_core::BulletinConfig;
use serde_json::Value;

use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::metadata::{Envelope, Metadata};

#[derive(Debug)]
pub struct CommandResult {
    pub data: Value,
    pub latency_ms: u64,
    pub attempts: Option<u32>,
}

impl CommandResult {
    pub fn ok(data: Value) -> Self {
        Self {
            data,
            latency_ms: 0,
            attempts: None,
        }
    }

    pub fn with_latency(mut self, latency_ms: u64) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = Some(attempts);
        self
    }
}

pub async fn run(cli: &Cli) -> Result<Envelope<Value>, CliError> {
    let command_result = match &cli.command {
        Command::Prices(args) => prices::run(args, resolve_config(cli)?).await?,
        Command::Url(args) => url::run(args, &resolve_config(cli)?)?,
        Command::Parse(args) => parse::run(args)?,
    };

    let CommandResult {
        data,
        latency_ms,
        attempts,
    } = command_result;

    Ok(Envelope {
        meta: Metadata::new(latency_ms, attempts),
        data,
    })
}

/// Environment configuration overlaid with command-line flags.
fn resolve_config(cli: &Cli) -> Result<BulletinConfig, CliError> {
    let mut config = BulletinConfig::from_env()?;
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url.as_str());
    }
    if let Some(max_attempts) = cli.max_attempts {
        config = config.with_max_attempts(max_attempts);
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config = config.with_request_timeout_ms(timeout_ms);
    }
    config.validate()?;
    Ok(config)
}

fn elapsed_ms(started: std::time::Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
