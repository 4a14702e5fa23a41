use std::sync::Arc;
use std::time::{Duration, Instant};

use boletin_core::{
    BulletinConfig, BulletinDate, BulletinRequest, BulletinService, FixedClock, ReqwestHttpClient,
};
use tracing::warn;

use crate::cli::PricesArgs;
use crate::error::CliError;

use super::{elapsed_ms, CommandResult};

pub async fn run(args: &PricesArgs, config: BulletinConfig) -> Result<CommandResult, CliError> {
    let request = BulletinRequest::from_raw(args.date.as_deref(), args.products.as_deref());
    if let (Some(raw), None) = (&args.date, request.target_date) {
        warn!(value = %raw, "date is not YYYYMMDD; using the latest business day");
    }

    let service = match &args.today {
        Some(raw) => {
            let today = BulletinDate::parse_ymd(raw)?;
            let http_client = Arc::new(ReqwestHttpClient::new(&config.user_agent));
            BulletinService::new(config, http_client, Arc::new(FixedClock(today)))
        }
        None => BulletinService::from_config(config),
    };

    let started = Instant::now();
    let lookup = match args.deadline_ms {
        Some(deadline_ms) => {
            tokio::time::timeout(Duration::from_millis(deadline_ms), service.lookup(&request))
                .await
                .map_err(|_| CliError::Deadline { deadline_ms })??
        }
        None => service.lookup(&request).await?,
    };

    let data = serde_json::to_value(&lookup.result)?;
    Ok(CommandResult::ok(data)
        .with_latency(elapsed_ms(started))
        .with_attempts(lookup.attempts))
}
