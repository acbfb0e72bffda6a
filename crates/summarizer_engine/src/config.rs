use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Primary backend address.
pub const API_URL_ENV: &str = "SUMMARIZER_API_URL";
/// Optional overall timeout for a summarization request, in seconds.
pub const REQUEST_TIMEOUT_ENV: &str = "SUMMARIZER_REQUEST_TIMEOUT_SECS";

const DEFAULT_PRIMARY_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid backend url {value:?}: {reason}")]
    InvalidUrl { value: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSettings {
    pub connect_timeout: Duration,
    /// `None` leaves a hung request to the transport.
    pub request_timeout: Option<Duration>,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
        }
    }
}

/// Where to look for the summarization backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Probed first; also the address used when nothing answers.
    pub primary_url: String,
    pub fallback_host: String,
    pub fallback_base_port: u16,
    /// Number of consecutive ports probed, starting at `fallback_base_port`.
    pub fallback_count: u16,
    pub http: HttpSettings,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            primary_url: DEFAULT_PRIMARY_URL.to_string(),
            fallback_host: "localhost".to_string(),
            fallback_base_port: 8000,
            fallback_count: 10,
            http: HttpSettings::default(),
        }
    }
}

impl BackendConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from any key lookup. Blank values count as absent.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
        };

        let mut config = Self::default();
        if let Some(primary) = value(API_URL_ENV) {
            validate_url(&primary)?;
            config.primary_url = primary;
        }
        config.http.request_timeout = value(REQUEST_TIMEOUT_ENV)
            .and_then(|raw| raw.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);
        Ok(config)
    }
}

fn validate_url(value: &str) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidUrl {
        value: value.to_string(),
        reason,
    };
    let parsed = Url::parse(value).map_err(|err| invalid(err.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(invalid(format!("unsupported scheme {other}"))),
    }
}
