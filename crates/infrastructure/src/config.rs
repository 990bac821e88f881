//! Client configuration.
//!
//! Each setting is resolved in order: explicit override (command-line flag),
//! environment variable, built-in default.
//!
//! | setting | variable | default |
//! |---------|----------|---------|
//! | API base URL | `PATHFINDERS_API_URL` | `http://localhost:8000/api/` |
//! | request timeout | `PATHFINDERS_TIMEOUT_SECS` | `30` |
//! | session file | `PATHFINDERS_SESSION_FILE` | `<data dir>/pathfinders/session.json` |

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

/// Environment variable for the API base URL.
pub const API_URL_ENV: &str = "PATHFINDERS_API_URL";

/// Environment variable for the request timeout, in seconds.
pub const TIMEOUT_ENV: &str = "PATHFINDERS_TIMEOUT_SECS";

/// Environment variable for the session file path.
pub const SESSION_FILE_ENV: &str = "PATHFINDERS_SESSION_FILE";

/// API base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/";

/// Request timeout used when nothing else is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Error type for configuration resolution.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The API URL does not parse.
    #[error("invalid API URL {value:?}: {reason}")]
    InvalidUrl {
        /// Offending value.
        value: String,
        /// Parser message.
        reason: String,
    },

    /// The API URL is not http or https.
    #[error("unsupported API URL scheme {0:?}, expected http or https")]
    UnsupportedScheme(String),

    /// The timeout is not a positive whole number of seconds.
    #[error("invalid timeout {0:?}, expected a positive number of seconds")]
    InvalidTimeout(String),
}

/// Values given explicitly, typically from command-line flags.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// API base URL.
    pub api_url: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
    /// Session file path.
    pub session_file: Option<PathBuf>,
}

/// Resolved client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL the auth endpoints are joined onto; always ends with `/`.
    pub api_base_url: Url,
    /// Per-request timeout enforced by the HTTP client.
    pub request_timeout: Duration,
    /// File holding the persisted session.
    pub session_file: PathBuf,
}

impl ClientConfig {
    /// Resolves configuration from `overrides` and the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured value is malformed.
    pub fn resolve(overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        Self::resolve_with(overrides, |name| std::env::var(name).ok())
    }

    /// Resolves configuration using `lookup` in place of the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured value is malformed.
    pub fn resolve_with(
        overrides: ConfigOverrides,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let api_url = overrides
            .api_url
            .or_else(|| lookup(API_URL_ENV))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let timeout_secs = match overrides.timeout_secs {
            Some(secs) => secs,
            None => lookup(TIMEOUT_ENV).map_or(Ok(DEFAULT_TIMEOUT_SECS), |raw| {
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))
            })?,
        };
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(timeout_secs.to_string()));
        }

        let session_file = overrides
            .session_file
            .or_else(|| lookup(SESSION_FILE_ENV).map(PathBuf::from))
            .unwrap_or_else(Self::default_session_file);

        Ok(Self {
            api_base_url: parse_base_url(&api_url)?,
            request_timeout: Duration::from_secs(timeout_secs),
            session_file,
        })
    }

    /// Default session file location.
    ///
    /// Uses the platform data directory:
    /// - Linux: ~/.local/share/pathfinders/session.json
    /// - macOS: ~/Library/Application Support/pathfinders/session.json
    /// - Windows: %APPDATA%/pathfinders/session.json
    ///
    /// Falls back to `./.pathfinders/session.json`.
    #[must_use]
    pub fn default_session_file() -> PathBuf {
        dirs::data_dir().map_or_else(
            || PathBuf::from(".pathfinders").join("session.json"),
            |dir| dir.join("pathfinders").join("session.json"),
        )
    }
}

/// Parses the API base URL and makes sure its path ends with `/`.
fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidUrl {
        value: raw.to_string(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme(url.scheme().to_string()));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
