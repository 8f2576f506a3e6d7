//! Server configuration.
//!
//! The only value read from the environment is the upstream base URL
//! (`FOOD_API_BASE_URL`). Everything else is a fixed default that tests can
//! override by building a `Config` directly.

use log::{info, warn};
use std::env;
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const UPSTREAM_BASE_URL_VAR: &str = "FOOD_API_BASE_URL";
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://6852821e0594059b23cdd834.mockapi.io/Food";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_BODY_LIMIT: usize = 1024 * 1024; // 1 MiB

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("FOOD_API_BASE_URL is not a valid URL ({value:?}): {source}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("FOOD_API_BASE_URL must use http or https, got {0:?}")]
    UnsupportedScheme(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Collection endpoint of the upstream API, without a trailing slash.
    pub upstream_base_url: Url,
    pub upstream_timeout: Duration,
    /// Maximum accepted request body, in bytes.
    pub body_limit: usize,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let base_url = env::var(UPSTREAM_BASE_URL_VAR).unwrap_or_else(|_| {
            info!("{UPSTREAM_BASE_URL_VAR} not set, using default: {DEFAULT_UPSTREAM_BASE_URL}");
            DEFAULT_UPSTREAM_BASE_URL.to_string()
        });

        Self::with_base_url(&base_url).inspect_err(|e| warn!("Invalid configuration: {e}"))
    }

    pub fn with_base_url(raw: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            upstream_base_url: parse_base_url(raw)?,
            upstream_timeout: DEFAULT_UPSTREAM_TIMEOUT,
            body_limit: DEFAULT_BODY_LIMIT,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let raw = raw.trim();
    let mut url = Url::parse(raw).map_err(|source| ConfigError::InvalidUrl {
        value: raw.to_string(),
        source,
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme(url.scheme().to_string()));
    }

    url.set_query(None);
    url.set_fragment(None);
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty();
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_url_is_accepted() {
        let config = Config::with_base_url(DEFAULT_UPSTREAM_BASE_URL).unwrap();
        assert_eq!(config.upstream_base_url.as_str(), DEFAULT_UPSTREAM_BASE_URL);
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.upstream_timeout, Duration::from_secs(10));
    }

    #[test]
    fn trailing_slash_and_query_are_dropped() {
        let config = Config::with_base_url(" http://localhost:3000/Food/?x=1 ").unwrap();
        assert_eq!(config.upstream_base_url.as_str(), "http://localhost:3000/Food");
    }

    #[test]
    fn non_web_urls_are_rejected() {
        assert!(matches!(
            Config::with_base_url("ftp://example.com/Food"),
            Err(ConfigError::UnsupportedScheme(scheme)) if scheme == "ftp"
        ));
        assert!(matches!(
            Config::with_base_url("not a url"),
            Err(ConfigError::InvalidUrl { .. })
        ));
    }
}
