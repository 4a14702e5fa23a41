use thiserror::Error;

use crate::BulletinDate;

/// Validation errors for caller-supplied values and configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("date must be exactly 8 digits (YYYYMMDD): '{value}'")]
    DateFormat { value: String },
    #[error("'{value}' is not a valid calendar date")]
    DateOutOfRange { value: String },

    #[error("unknown presentation '{value}'")]
    UnknownPresentation { value: String },
    #[error("unknown variation '{value}', expected Estable, Bajo or Subió")]
    UnknownVariation { value: String },

    #[error("base url must start with http:// or https://: '{value}'")]
    InvalidBaseUrl { value: String },
    #[error("field '{field}' must be greater than zero")]
    NonPositive { field: &'static str },
    #[error("utc offset {hours}h is outside -23..=23")]
    InvalidUtcOffset { hours: i8 },
    #[error("environment variable {name} has invalid value '{value}'")]
    InvalidEnvValue { name: &'static str, value: String },
}

/// The fetched bytes are not a parseable document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("document could not be parsed: {message}")]
pub struct DocumentError {
    message: String,
}

impl DocumentError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Top-level error returned by the bulletin pipeline.
///
/// A request either yields a complete result or exactly one of these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BulletinError {
    #[error("no bulletin published between {earliest} and {latest} ({attempts} attempts)")]
    NotFound {
        earliest: BulletinDate,
        latest: BulletinDate,
        attempts: u32,
    },

    #[error("bulletin at {url} is unreadable: {source}")]
    Document {
        url: String,
        #[source]
        source: DocumentError,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl BulletinError {
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "bulletin.not_found",
            Self::Document { .. } => "bulletin.document",
            Self::Validation(_) => "bulletin.invalid_request",
        }
    }
}
