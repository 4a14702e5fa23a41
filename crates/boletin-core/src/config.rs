//! Publisher location and fetch budget.
//!
//! Defaults describe the live publisher. Each field can be overridden from
//! the environment with [`BulletinConfig::from_env`]:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `BOLETIN_BASE_URL` | `base_url` |
//! | `BOLETIN_UPLOADS_PATH` | `uploads_path` |
//! | `BOLETIN_MAX_ATTEMPTS` | `max_attempts` |
//! | `BOLETIN_TIMEOUT_MS` | `request_timeout_ms` |
//! | `BOLETIN_UTC_OFFSET_HOURS` | `utc_offset_hours` |

use std::str::FromStr;

use crate::ValidationError;

pub const DEFAULT_BASE_URL: &str = "https://www.corabastos.com.co";
pub const DEFAULT_UPLOADS_PATH: &str = "wp-content/uploads";
pub const DEFAULT_FILE_PREFIX: &str = "Boletin_diario_";
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Settings for locating and fetching bulletins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulletinConfig {
    /// Scheme and host, without a trailing slash.
    pub base_url: String,
    pub uploads_path: String,
    pub file_prefix: String,
    /// Fetches tried before giving up, one calendar day apart.
    pub max_attempts: u32,
    pub request_timeout_ms: u64,
    pub user_agent: String,
    /// Offset of the publisher's local calendar from UTC.
    pub utc_offset_hours: i8,
}

impl Default for BulletinConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            uploads_path: String::from(DEFAULT_UPLOADS_PATH),
            file_prefix: String::from(DEFAULT_FILE_PREFIX),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            request_timeout_ms: 15_000,
            user_agent: format!("boletin/{}", env!("CARGO_PKG_VERSION")),
            utc_offset_hours: -5,
        }
    }
}

impl BulletinConfig {
    /// Defaults overlaid with `BOLETIN_*` environment variables.
    pub fn from_env() -> Result<Self, ValidationError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ValidationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("BOLETIN_BASE_URL") {
            config.base_url = value;
        }
        if let Some(value) = lookup("BOLETIN_UPLOADS_PATH") {
            config.uploads_path = value;
        }
        if let Some(value) = lookup("BOLETIN_MAX_ATTEMPTS") {
            config.max_attempts = parse_env("BOLETIN_MAX_ATTEMPTS", &value)?;
        }
        if let Some(value) = lookup("BOLETIN_TIMEOUT_MS") {
            config.request_timeout_ms = parse_env("BOLETIN_TIMEOUT_MS", &value)?;
        }
        if let Some(value) = lookup("BOLETIN_UTC_OFFSET_HOURS") {
            config.utc_offset_hours = parse_env("BOLETIN_UTC_OFFSET_HOURS", &value)?;
        }

        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self.normalize();
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_request_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.request_timeout_ms = timeout_ms;
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let has_scheme =
            self.base_url.starts_with("http://") || self.base_url.starts_with("https://");
        if !has_scheme || self.base_url.trim_end_matches('/').ends_with(':') {
            return Err(ValidationError::InvalidBaseUrl {
                value: self.base_url.clone(),
            });
        }
        if self.max_attempts == 0 {
            return Err(ValidationError::NonPositive {
                field: "max_attempts",
            });
        }
        if self.request_timeout_ms == 0 {
            return Err(ValidationError::NonPositive {
                field: "request_timeout_ms",
            });
        }
        if !(-23..=23).contains(&self.utc_offset_hours) {
            return Err(ValidationError::InvalidUtcOffset {
                hours: self.utc_offset_hours,
            });
        }
        Ok(())
    }

    fn normalize(&mut self) {
        let base = self.base_url.trim().trim_end_matches('/').to_owned();
        let uploads = self.uploads_path.trim().trim_matches('/').to_owned();
        self.base_url = base;
        self.uploads_path = uploads;
    }
}

fn parse_env<T: FromStr>(name: &'static str, value: &str) -> Result<T, ValidationError> {
    value
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidEnvValue {
            name,
            value: value.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_are_valid() {
        let config = BulletinConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_attempts, 5);
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = BulletinConfig::from_lookup(lookup_from(&[
            ("BOLETIN_BASE_URL", "http://localhost:8080/"),
            ("BOLETIN_UPLOADS_PATH", "/files/"),
            ("BOLETIN_MAX_ATTEMPTS", "3"),
            ("BOLETIN_TIMEOUT_MS", "2500"),
        ]))
        .expect("valid overrides");

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.uploads_path, "files");
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.request_timeout_ms, 2500);
    }

    #[test]
    fn rejects_unparseable_numbers() {
        let err = BulletinConfig::from_lookup(lookup_from(&[("BOLETIN_MAX_ATTEMPTS", "five")]))
            .expect_err("must fail");
        assert!(matches!(
            err,
            ValidationError::InvalidEnvValue {
                name: "BOLETIN_MAX_ATTEMPTS",
                ..
            }
        ));
    }

    #[test]
    fn rejects_zero_budget_and_bad_scheme() {
        let err = BulletinConfig::from_lookup(lookup_from(&[("BOLETIN_MAX_ATTEMPTS", "0")]))
            .expect_err("must fail");
        assert!(matches!(err, ValidationError::NonPositive { .. }));

        let err = BulletinConfig::default()
            .with_base_url("ftp://mirror")
            .validate()
            .expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidBaseUrl { .. }));
    }
}
