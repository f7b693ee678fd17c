//! Configuration loading and constants.
//!
//! Loads application configuration from TOML files and defines the fixed strings
//! the service answers with, the response cache policies, and default paths.
//! `AppConfig` is the root configuration struct containing all settings.

use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// Reply Template
// =============================================================================

/// Status message returned by the root endpoint
pub const STATUS_MESSAGE: &str = "Dave-PMEA is alive";

/// Text placed before the user's input in every reply
pub const REPLY_PREFIX: &str = "Improved reply: ";

/// Text placed after the user's input in every reply
pub const REPLY_SUFFIX: &str = " (Tip: give me your exact task + output target)";

/// Follow-up prompt returned alongside every reply
pub const NEXT_PROMPT: &str = "What should I improve next? Send your exact task + output target.";

// Response keys for the /dave endpoint
pub const DONE_KEY: &str = "✅ Done";
pub const NEXT_KEY: &str = "⏳ Next";
pub const ARCHIVE_KEY: &str = "🌌 Archive";

/// Number of log entries returned as the archive (one user/assistant pair)
pub const ARCHIVE_LEN: usize = 2;

// =============================================================================
// OpenAPI Document
// =============================================================================

pub const OPENAPI_TITLE: &str = "Dave-PMEA";
pub const OPENAPI_VERSION: &str = "0.1.0";
pub const OPENAPI_DESCRIPTION: &str = "OpenAPI for Dave-PMEA";

// =============================================================================
// HTTP Response Cache Control
// =============================================================================

/// OpenAPI document - fixed for the lifetime of the process
pub const HTTP_CACHE_OPENAPI_MAX_AGE: u32 = 300;

pub const CACHE_CONTROL_OPENAPI: &str =
    formatcp!("public, max-age={}", HTTP_CACHE_OPENAPI_MAX_AGE);

/// Stateful responses must never be served from a cache
pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "dave_pmea=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";
pub const DEFAULT_HTTP_PORT: u16 = 8000;

/// Seconds to wait for in-flight requests after a shutdown signal
pub const DEFAULT_SHUTDOWN_GRACE_SECS: u64 = 30;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// OpenAPI document settings
    #[serde(default)]
    pub openapi: OpenApiConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
    /// Grace period for connection draining on shutdown
    #[serde(default = "HttpServerConfig::default_shutdown_grace")]
    pub shutdown_grace_seconds: u64,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            shutdown_grace_seconds: Self::default_shutdown_grace(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }

    fn default_shutdown_grace() -> u64 {
        DEFAULT_SHUTDOWN_GRACE_SECS
    }
}

/// OpenAPI document configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpenApiConfig {
    /// Public base URL advertised in the document's `servers` list
    pub server_url: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }

    pub fn is_json(&self) -> bool {
        self.format == "json"
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Load from `path`, or fall back to defaults when the default path is absent.
    ///
    /// An explicitly chosen path that does not exist is still an error.
    pub fn load_or_default(path: &str) -> Result<Self, ConfigError> {
        if path == DEFAULT_CONFIG_PATH && !Path::new(path).exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;

        match config.logging.format.as_str() {
            "text" | "json" => {}
            other => {
                return Err(ConfigError::Validation(format!(
                    "Unknown logging.format '{}', expected \"text\" or \"json\"",
                    other
                )))
            }
        }

        if let Some(url) = &config.openapi.server_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::Validation(format!(
                    "openapi.server_url must be an http(s) URL, got '{}'",
                    url
                )));
            }
        }

        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
