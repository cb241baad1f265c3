//! Environment-backed suite configuration.
//!
//! Every setting has a default, so an empty environment runs the suite
//! against the public service. Set-but-empty values count as unset; any
//! other value that does not parse is rejected.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

/// Base URL the suite targets when `PETSTORE_BASE_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "https://petstore.swagger.io/v2";

/// Fixture directory shipped with this crate.
pub const DEFAULT_FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures");

/// Environment keys read by [`SuiteConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuiteEnv {
    /// Service base URL, including any path prefix such as `/v2`.
    BaseUrl,
    /// Per-request timeout in whole seconds.
    TimeoutSeconds,
    /// Directory holding upload fixtures.
    FixturesDir,
}

impl SuiteEnv {
    /// All keys, in the order they are read.
    pub const ALL: [Self; 3] = [Self::BaseUrl, Self::TimeoutSeconds, Self::FixturesDir];

    /// Returns the environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BaseUrl => "PETSTORE_BASE_URL",
            Self::TimeoutSeconds => "PETSTORE_TIMEOUT_SECS",
            Self::FixturesDir => "PETSTORE_FIXTURES_DIR",
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable holds bytes that are not UTF-8.
    #[error("{var} must be valid UTF-8")]
    NotUnicode {
        /// Variable name.
        var: &'static str,
    },

    /// The base URL does not parse or is not an http(s) URL with a host.
    #[error("{var} is not a usable base URL '{value}': {message}")]
    InvalidBaseUrl {
        /// Variable name.
        var: &'static str,
        /// Rejected value.
        value: String,
        /// Why it was rejected.
        message: String,
    },

    /// The timeout is not a positive whole number.
    #[error("{var} must be a positive whole number of seconds, got '{value}'")]
    InvalidTimeout {
        /// Variable name.
        var: &'static str,
        /// Rejected value.
        value: String,
    },
}

/// Typed suite configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteConfig {
    /// Service base URL.
    pub base_url: Url,
    /// Per-request timeout. `None` keeps the transport default.
    pub timeout: Option<Duration>,
    /// Directory relative fixture paths resolve against.
    pub fixtures_dir: PathBuf,
}

impl SuiteConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is not valid UTF-8 or fails validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        for key in SuiteEnv::ALL {
            if matches!(std::env::var(key.as_str()), Err(std::env::VarError::NotUnicode(_))) {
                return Err(ConfigError::NotUnicode { var: key.as_str() });
            }
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns an error when a value fails validation.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: SuiteEnv| {
            lookup(key.as_str())
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let base_url = read(SuiteEnv::BaseUrl)
            .map_or_else(|| parse_base_url(DEFAULT_BASE_URL), |v| parse_base_url(&v))?;
        let timeout = read(SuiteEnv::TimeoutSeconds)
            .map(|v| parse_timeout(&v))
            .transpose()?;
        let fixtures_dir = read(SuiteEnv::FixturesDir)
            .map_or_else(|| PathBuf::from(DEFAULT_FIXTURES_DIR), PathBuf::from);

        Ok(Self {
            base_url,
            timeout,
            fixtures_dir,
        })
    }
}

fn parse_base_url(value: &str) -> Result<Url, ConfigError> {
    let invalid = |message: String| ConfigError::InvalidBaseUrl {
        var: SuiteEnv::BaseUrl.as_str(),
        value: value.to_string(),
        message,
    };

    let url = Url::parse(value).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }
    Ok(url)
}

fn parse_timeout(value: &str) -> Result<Duration, ConfigError> {
    match value.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout {
            var: SuiteEnv::TimeoutSeconds.as_str(),
            value: value.to_string(),
        }),
    }
}
