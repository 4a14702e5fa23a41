//! # Domain Models
//!
//! Value types shared by the locator, extractor, and filter.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`BulletinDate`] | Validated `YYYYMMDD` publication date |
//! | [`Presentation`] | Closed sale-unit vocabulary |
//! | [`Variation`] | Price trend keyword (`Estable`, `Bajo`, `Subió`) |
//! | [`PriceRow`] | One parsed bulletin row |
//! | [`BulletinRequest`] | Target date plus product allow-list |
//! | [`ResolvedBulletin`] | Fetched bytes with the date actually used |
//! | [`BulletinResult`] | Rows returned to the caller |
//!
//! Rows are plain values: created during one parse pass and dropped when
//! the request completes.

mod date;
mod models;
mod product;

pub use date::BulletinDate;
pub use models::{
    BulletinRequest, BulletinResult, Presentation, PriceRow, ResolvedBulletin, Variation,
};
pub use product::normalize_product_name;
