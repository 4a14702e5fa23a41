use boletin_core::{bulletin_url, BulletinConfig, BulletinDate, Clock, SystemClock};
use serde::Serialize;

use crate::cli::UrlArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct UrlResponseData {
    requested_date: BulletinDate,
    candidate_date: BulletinDate,
    url: String,
}

pub fn run(args: &UrlArgs, config: &BulletinConfig) -> Result<CommandResult, CliError> {
    let requested_date = match &args.date {
        Some(raw) => BulletinDate::parse_ymd(raw)?,
        None => SystemClock::with_offset_hours(config.utc_offset_hours).today(),
    };
    let candidate_date = requested_date.roll_back_to_weekday();

    let data = serde_json::to_value(UrlResponseData {
        requested_date,
        candidate_date,
        url: bulletin_url(config, candidate_date),
    })?;

    Ok(CommandResult::ok(data))
}
