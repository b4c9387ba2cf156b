//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub client: ClientConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Client-side configuration (backing store access and error policy)
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Address of the backing store; every request goes to this URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in milliseconds, `0` disables the timeout
    #[serde(default)]
    pub request_timeout_ms: u64,

    /// Show toggle failures in the error banner instead of only logging them
    #[serde(default)]
    pub surface_toggle_errors: bool,
}

fn default_base_url() -> String {
    "http://localhost:8080/".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_ms: 0,
            surface_toggle_errors: false,
        }
    }
}

impl ClientConfig {
    /// Create a client config pointing at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Configured timeout, if any
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_ms > 0).then(|| Duration::from_millis(self.request_timeout_ms))
    }
}

/// Backing store service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `pretty` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment.
    ///
    /// Defaults apply only when no file exists; a file that exists but cannot
    /// be read or parsed is an error.
    pub fn load_default() -> Result<Self, ConfigError> {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("todolist").join("config.toml")),
            Some(PathBuf::from("./todolist.toml")),
        ];

        Self::load_first(config_paths.into_iter().flatten())
    }

    /// Load the first existing file among `paths`
    fn load_first(paths: impl IntoIterator<Item = PathBuf>) -> Result<Self, ConfigError> {
        for path in paths {
            if path.exists() {
                let config = Self::load_with_env(&path)?;
                tracing::info!("Loaded config from {:?}", path);
                return Ok(config);
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Ok(Self::from_env())
    }

    /// Load from an explicit path when given, default locations otherwise
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_with_env(path),
            None => Self::load_default(),
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // Client overrides
        if let Some(url) = var("TODOLIST_BASE_URL") {
            self.client.base_url = url;
        }
        if let Some(timeout) = var("TODOLIST_REQUEST_TIMEOUT_MS") {
            if let Ok(ms) = timeout.parse() {
                self.client.request_timeout_ms = ms;
            }
        }
        if let Some(flag) = var("TODOLIST_SURFACE_TOGGLE_ERRORS") {
            if let Ok(surface) = flag.to_lowercase().parse() {
                self.client.surface_toggle_errors = surface;
            }
        }

        // Server overrides
        if let Some(host) = var("TODOLIST_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("TODOLIST_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        // Logging overrides
        if let Some(level) = var("TODOLIST_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("TODOLIST_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Todo List Configuration
#
# Environment variables override these settings:
# - TODOLIST_BASE_URL
# - TODOLIST_REQUEST_TIMEOUT_MS
# - TODOLIST_SURFACE_TOGGLE_ERRORS
# - TODOLIST_HOST
# - TODOLIST_PORT
# - TODOLIST_LOG_LEVEL
# - TODOLIST_LOG_FORMAT

[client]
# Backing store address
base_url = "http://localhost:8080/"

# Request timeout in milliseconds (0 = wait forever)
request_timeout_ms = 0

# Show toggle failures in the error banner (default: log only)
surface_toggle_errors = false

[server]
host = "0.0.0.0"
port = 8080

[logging]
# trace, debug, info, warn, error
level = "info"

# pretty or json
format = "pretty"
"#
    .to_string()
}
