use boletin_core::{BulletinError, DocumentError, ValidationError};
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Bulletin(#[from] BulletinError),

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error("request exceeded deadline of {deadline_ms}ms")]
    Deadline { deadline_ms: u64 },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Bulletin(BulletinError::Validation(_)) => 2,
            Self::Bulletin(BulletinError::NotFound { .. }) => 3,
            Self::Bulletin(BulletinError::Document { .. }) => 4,
            Self::Document(_) => 4,
            Self::Serialization(_) => 5,
            Self::Deadline { .. } => 6,
            Self::Io(_) => 10,
        }
    }

    pub const fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "cli.invalid_argument",
            Self::Bulletin(error) => error.code(),
            Self::Document(_) => "bulletin.document",
            Self::Deadline { .. } => "cli.deadline_exceeded",
            Self::Serialization(_) => "cli.serialization",
            Self::Io(_) => "cli.io",
        }
    }
}
