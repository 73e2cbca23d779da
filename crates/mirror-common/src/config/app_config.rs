//! Application configuration structs
//!
//! Loaded once at process start from environment variables (and `.env` if
//! present). Read-only afterwards.

use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Destination for mirrored presence events
pub const MIRROR_URL_VAR: &str = "API_MIRROR_URL";
/// Optional outbound request timeout, in seconds
pub const MIRROR_TIMEOUT_VAR: &str = "API_MIRROR_TIMEOUT_SECS";

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MirrorConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub mirror: MirrorTargetConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// Trigger ingress server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Mirror endpoint configuration
///
/// A missing URL is a recognized state: the handler logs and skips the call.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MirrorTargetConfig {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl MirrorTargetConfig {
    /// Configured destination URL, if any
    #[must_use]
    pub fn destination(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Whether a destination URL is configured
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.url.is_some()
    }

    /// Outbound request timeout; `None` leaves it to the client default
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

// Default value functions
fn default_app_name() -> String {
    "presence-mirror".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl MirrorConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a variable is set to an unusable value
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            app: AppSettings {
                name: var("APP_NAME").unwrap_or_else(default_app_name),
                env: var("APP_ENV")
                    .as_deref()
                    .and_then(Environment::parse)
                    .unwrap_or_default(),
            },
            server: ServerConfig {
                host: var("HOST").unwrap_or_else(default_host),
                port: var("PORT")
                    .map(parse_port)
                    .transpose()?
                    .unwrap_or_else(default_port),
            },
            mirror: MirrorTargetConfig {
                url: var(MIRROR_URL_VAR).map(|s| s.trim().to_string()),
                timeout_secs: var(MIRROR_TIMEOUT_VAR).map(parse_timeout).transpose()?,
            },
        })
    }
}

fn parse_port(raw: String) -> Result<u16, ConfigError> {
    let parsed = raw.trim().parse::<u16>();
    parsed.map_err(|_| ConfigError::InvalidValue("PORT", raw))
}

fn parse_timeout(raw: String) -> Result<u64, ConfigError> {
    let parsed = raw.trim().parse::<u64>();
    match parsed {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ConfigError::InvalidValue(MIRROR_TIMEOUT_VAR, raw)),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
