use std::time::Instant;

use boletin_core::{extract_text, parse_document, PriceRow, ProductFilter};
use serde::Serialize;

use crate::cli::ParseArgs;
use crate::error::CliError;

use super::{elapsed_ms, CommandResult};

#[derive(Debug, Serialize)]
struct ParseResponseData {
    path: String,
    rows: Vec<PriceRow>,
}

#[derive(Debug, Serialize)]
struct TextResponseData {
    path: String,
    text: String,
}

pub fn run(args: &ParseArgs) -> Result<CommandResult, CliError> {
    let started = Instant::now();
    let bytes = std::fs::read(&args.path)?;
    let path = args.path.display().to_string();

    let data = if args.text {
        serde_json::to_value(TextResponseData {
            path,
            text: extract_text(&bytes)?,
        })?
    } else {
        let filter = ProductFilter::parse_csv(args.products.as_deref());
        serde_json::to_value(ParseResponseData {
            path,
            rows: parse_document(&bytes, &filter)?,
        })?
    };

    Ok(CommandResult::ok(data).with_latency(elapsed_ms(started)))
}
