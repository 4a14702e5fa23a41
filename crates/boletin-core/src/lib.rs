//! # Boletin Core
//!
//! Retrieval and extraction pipeline for the daily produce-market price
//! bulletin.
//!
//! The publisher uploads one PDF per business day to a predictable path but
//! never announces when (or whether) it did. This crate finds the newest
//! bulletin at or before a date, extracts its text, parses the price table
//! into [`PriceRow`]s, and filters them by product name.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`clock`] | "Today" for requests without a date |
//! | [`config`] | Publisher URL layout and fetch budget |
//! | [`domain`] | Dates, rows, presentations, variations |
//! | [`error`] | Error taxonomy |
//! | [`extractor`] | PDF bytes to per-page text |
//! | [`filter`] | Product-name prefix filter |
//! | [`grammar`] | Text to price rows |
//! | [`http_client`] | Transport seam (reqwest in production) |
//! | [`locator`] | Backward business-day search and fetch |
//! | [`service`] | End-to-end `GetPrices` |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use boletin_core::{BulletinConfig, BulletinService};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let service = BulletinService::from_config(BulletinConfig::from_env()?);
//! let result = service.get_prices(Some("20240105"), Some("papa,tomate")).await?;
//! for row in &result.rows {
//!     println!("{} {} {}", row.name, row.price_grade_extra, row.variation);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use boletin_core::BulletinError;
//!
//! fn describe(error: &BulletinError) -> String {
//!     match error {
//!         BulletinError::NotFound { earliest, latest, .. } => {
//!             format!("nothing published between {earliest} and {latest}")
//!         }
//!         BulletinError::Document { url, .. } => format!("corrupt document at {url}"),
//!         BulletinError::Validation(error) => error.to_string(),
//!     }
//! }
//! ```

pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod extractor;
pub mod filter;
pub mod grammar;
pub mod http_client;
pub mod locator;
pub mod service;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::BulletinConfig;
pub use domain::{
    normalize_product_name, BulletinDate, BulletinRequest, BulletinResult, Presentation,
    PriceRow, ResolvedBulletin, Variation,
};
pub use error::{BulletinError, DocumentError, ValidationError};
pub use extractor::extract_text;
pub use filter::ProductFilter;
pub use grammar::parse_rows;
pub use http_client::{
    HttpClient, HttpError, HttpErrorKind, HttpRequest, HttpResponse, ReqwestHttpClient,
};
pub use locator::{bulletin_url, BulletinLocator};
pub use service::{parse_document, BulletinService, PriceLookup};
