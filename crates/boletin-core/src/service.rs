//! End-to-end `GetPrices` pipeline: locate, extract, parse, filter.
//!
//! Every call runs the full pipeline sequentially and keeps nothing
//! between calls, so concurrent callers need no coordination. Dropping the
//! returned future cancels the in-flight fetch.

use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use crate::clock::{Clock, SystemClock};
use crate::extractor::extract_text;
use crate::grammar::parse_rows;
use crate::http_client::{HttpClient, ReqwestHttpClient};
use crate::locator::BulletinLocator;
use crate::{
    BulletinConfig, BulletinError, BulletinRequest, BulletinResult, DocumentError, PriceRow,
    ProductFilter,
};

/// Price lookup service over the publisher's daily bulletins.
#[derive(Clone)]
pub struct BulletinService {
    locator: BulletinLocator,
    clock: Arc<dyn Clock>,
}

impl BulletinService {
    pub fn new(
        config: BulletinConfig,
        http_client: Arc<dyn HttpClient>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            locator: BulletinLocator::new(config, http_client),
            clock,
        }
    }

    /// Live service: reqwest transport and the configured local calendar.
    pub fn from_config(config: BulletinConfig) -> Self {
        let http_client = Arc::new(ReqwestHttpClient::new(&config.user_agent));
        let clock = Arc::new(SystemClock::with_offset_hours(config.utc_offset_hours));
        Self::new(config, http_client, clock)
    }

    pub fn locator(&self) -> &BulletinLocator {
        &self.locator
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Loosely-typed entry point mirroring the inbound API.
    ///
    /// `date_ymd` must be 8 digits to count; anything else means "latest
    /// business day". `product_names` is comma separated.
    pub async fn get_prices(
        &self,
        date_ymd: Option<&str>,
        product_names: Option<&str>,
    ) -> Result<BulletinResult, BulletinError> {
        let request = BulletinRequest::from_raw(date_ymd, product_names);
        self.get_prices_for(&request).await
    }

    pub async fn get_prices_for(
        &self,
        request: &BulletinRequest,
    ) -> Result<BulletinResult, BulletinError> {
        self.lookup(request).await.map(|lookup| lookup.result)
    }

    /// Same as [`get_prices_for`](Self::get_prices_for), also reporting how
    /// many dates were tried.
    pub async fn lookup(&self, request: &BulletinRequest) -> Result<PriceLookup, BulletinError> {
        let started = Instant::now();
        let seed = request.target_date.unwrap_or_else(|| self.clock.today());

        let resolved = self.locator.resolve_and_fetch(seed).await?;
        let rows = parse_document(resolved.raw_bytes(), &request.wanted_products).map_err(
            |source| BulletinError::Document {
                url: resolved.source_url().to_owned(),
                source,
            },
        )?;

        info!(
            used_date = %resolved.used_date(),
            attempts = resolved.attempts(),
            rows = rows.len(),
            filtered = !request.wanted_products.is_empty(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "bulletin prices resolved"
        );

        Ok(PriceLookup {
            result: BulletinResult {
                used_date: resolved.used_date(),
                source_url: resolved.source_url().to_owned(),
                rows,
            },
            attempts: resolved.attempts(),
        })
    }
}

/// A successful lookup with its walk-back cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceLookup {
    pub result: BulletinResult,
    pub attempts: u32,
}

/// Extract, parse and filter an in-memory document.
pub fn parse_document(bytes: &[u8], filter: &ProductFilter) -> Result<Vec<PriceRow>, DocumentError> {
    let text = extract_text(bytes)?;
    Ok(filter.retain(parse_rows(&text)))
}
