//! Finds the most recent published bulletin at or before a date.
//!
//! Publication happens on business days only and is sometimes late or
//! skipped, so the locator walks backward one day per failed fetch, never
//! landing on a weekend, until the attempt budget runs out. Every fetch
//! failure (transport error, non-2xx status, empty body) just moves the
//! search back a day; there is no delay between attempts.

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::http_client::{HttpClient, HttpError, HttpRequest};
use crate::{BulletinConfig, BulletinDate, BulletinError, ResolvedBulletin};

/// Deterministic document URL for a publication date.
///
/// `<base>/<uploads>/<YYYY>/<MM>/<prefix><YYYYMMDD>.pdf`
pub fn bulletin_url(config: &BulletinConfig, date: BulletinDate) -> String {
    let mut url = config.base_url.clone();
    if !config.uploads_path.is_empty() {
        url.push('/');
        url.push_str(&config.uploads_path);
    }
    url.push_str(&format!(
        "/{:04}/{:02}/{}{}.pdf",
        date.year(),
        date.month(),
        config.file_prefix,
        date.ymd()
    ));
    url
}

/// Backward date search over the publisher's upload directory.
#[derive(Clone)]
pub struct BulletinLocator {
    config: BulletinConfig,
    http_client: Arc<dyn HttpClient>,
}

impl BulletinLocator {
    pub fn new(config: BulletinConfig, http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            config,
            http_client,
        }
    }

    pub fn config(&self) -> &BulletinConfig {
        &self.config
    }

    pub fn url_for(&self, date: BulletinDate) -> String {
        bulletin_url(&self.config, date)
    }

    /// Fetches the newest retrievable bulletin at or before `seed`.
    ///
    /// # Errors
    ///
    /// [`BulletinError::NotFound`] when every attempt in the budget fails,
    /// naming the latest and earliest dates tried.
    pub async fn resolve_and_fetch(
        &self,
        seed: BulletinDate,
    ) -> Result<ResolvedBulletin, BulletinError> {
        let max_attempts = self.config.max_attempts.max(1);
        let mut seed = seed;
        let mut latest_tried: Option<BulletinDate> = None;
        let mut earliest_tried = seed;

        for attempt in 1..=max_attempts {
            let candidate = seed.roll_back_to_weekday();
            let url = self.url_for(candidate);
            debug!(attempt, date = %candidate, url = %url, "fetching bulletin");

            match self.fetch(&url).await {
                Ok(bytes) => {
                    info!(
                        attempt,
                        date = %candidate,
                        bytes = bytes.len(),
                        "bulletin retrieved"
                    );
                    return Ok(ResolvedBulletin::new(candidate, url, bytes, attempt));
                }
                Err(miss) => {
                    debug!(
                        attempt,
                        date = %candidate,
                        kind = miss.kind(),
                        reason = %miss,
                        "bulletin not available"
                    );
                }
            }

            latest_tried.get_or_insert(candidate);
            earliest_tried = candidate;
            seed = candidate.previous_day();
        }

        let latest = latest_tried.unwrap_or(earliest_tried);
        warn!(
            earliest = %earliest_tried,
            latest = %latest,
            attempts = max_attempts,
            "no bulletin found within attempt budget"
        );
        Err(BulletinError::NotFound {
            earliest: earliest_tried,
            latest,
            attempts: max_attempts,
        })
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchMiss> {
        let request = HttpRequest::get(url)
            .with_header("accept", "application/pdf")
            .with_timeout_ms(self.config.request_timeout_ms);

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(FetchMiss::Transport)?;

        if !response.is_success() {
            return Err(FetchMiss::Status(response.status));
        }
        if response.body.is_empty() {
            return Err(FetchMiss::EmptyBody);
        }
        Ok(response.body)
    }
}

/// Why one candidate date yielded no bulletin. All of them advance the search.
#[derive(Debug)]
enum FetchMiss {
    Transport(HttpError),
    Status(u16),
    EmptyBody,
}

impl FetchMiss {
    fn kind(&self) -> &'static str {
        match self {
            Self::Transport(error) => error.kind().as_str(),
            Self::Status(_) => "status",
            Self::EmptyBody => "empty_body",
        }
    }
}

impl Display for FetchMiss {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(error) => write!(f, "{error}"),
            Self::Status(status) => write!(f, "status {status}"),
            Self::EmptyBody => f.write_str("empty body"),
        }
    }
}
