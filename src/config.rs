//! Runtime configuration.
//!
//! ## Environment Variables
//!
//! - `STYLEHUB_API_URL`: base URL of the seller API, e.g.
//!   `https://api.example.com`. Required. A `.env` file in the working
//!   directory is honoured.

use std::env::VarError;

use crate::error::ConfigError;

pub const API_URL_VAR: &str = "STYLEHUB_API_URL";

/// Where the seller API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    base_url: String,
}

impl Config {
    /// Validates and normalizes a base URL. Trailing slashes are dropped so
    /// endpoint paths can be appended directly.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = base_url.into();
        let trimmed = raw.trim().trim_end_matches('/');

        if trimmed.is_empty() {
            return Err(ConfigError::Missing(API_URL_VAR));
        }
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::Invalid(
                API_URL_VAR,
                format!("expected an http(s) URL, got {trimmed:?}"),
            ));
        }

        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// Loads the configuration, preferring an explicit override over the
    /// environment.
    pub fn load(override_url: Option<String>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        match override_url {
            Some(url) => Self::new(url),
            None => Self::from_var(std::env::var(API_URL_VAR)),
        }
    }

    fn from_var(value: Result<String, VarError>) -> Result<Self, ConfigError> {
        match value {
            Ok(url) => Self::new(url),
            Err(VarError::NotPresent) => Err(ConfigError::Missing(API_URL_VAR)),
            Err(VarError::NotUnicode(raw)) => Err(ConfigError::Invalid(
                API_URL_VAR,
                format!("not valid unicode: {raw:?}"),
            )),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_dropped() {
        let config = Config::new("https://shop.example/api//").unwrap();
        assert_eq!(config.base_url(), "https://shop.example/api");
    }

    #[test]
    fn blank_url_is_missing() {
        assert_eq!(Config::new("  "), Err(ConfigError::Missing(API_URL_VAR)));
    }

    #[test]
    fn non_http_url_is_rejected() {
        assert!(matches!(
            Config::new("ftp://shop.example"),
            Err(ConfigError::Invalid(API_URL_VAR, _))
        ));
    }

    #[test]
    fn unset_variable_is_missing() {
        assert_eq!(
            Config::from_var(Err(VarError::NotPresent)),
            Err(ConfigError::Missing(API_URL_VAR))
        );
    }

    #[cfg(unix)]
    #[test]
    fn non_unicode_variable_is_invalid() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(vec![b'h', 0xff, b'p']);
        assert!(matches!(
            Config::from_var(Err(VarError::NotUnicode(raw))),
            Err(ConfigError::Invalid(API_URL_VAR, _))
        ));
    }

    #[test]
    fn override_wins_over_environment() {
        let config = Config::load(Some("http://127.0.0.1:8080/".to_string())).unwrap();
        assert_eq!(config.base_url(), "http://127.0.0.1:8080");
    }
}
