//! Server configuration.

use auteur_error::{AuteurResult, ConfigError};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

/// Default wall-clock ceiling for one job, in seconds.
pub const DEFAULT_MAX_DURATION_SECS: u64 = 300;

/// Configuration for the HTTP boundary.
///
/// Values come from (lowest to highest precedence) defaults, a TOML file,
/// `AUTEUR_*` environment variables, then command-line flags.
///
/// # Examples
///
/// ```
/// use auteur_server::ServerConfig;
/// use std::time::Duration;
///
/// let config = ServerConfig::default();
/// assert_eq!(config.max_duration(), Duration::from_secs(300));
/// assert_eq!(config.bind_address(), "127.0.0.1:3000");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[serde(default, deny_unknown_fields)]
#[builder(default, pattern = "owned", setter(into))]
pub struct ServerConfig {
    /// Address the listener binds to
    bind_address: String,
    /// Ceiling on a whole job, in seconds
    max_duration_secs: u64,
    /// Emit JSON-formatted logs
    json_logs: bool,
    /// Log filter used when `RUST_LOG` is unset
    log_level: String,
    /// Export tracing spans to stdout through OpenTelemetry
    stdout_spans: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
            max_duration_secs: DEFAULT_MAX_DURATION_SECS,
            json_logs: false,
            log_level: "info".to_string(),
            stdout_spans: false,
        }
    }
}

impl ServerConfig {
    /// Creates a new config builder.
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load configuration from a TOML file; missing keys keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> AuteurResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from the process environment.
    ///
    /// Reads:
    /// - `AUTEUR_BIND_ADDRESS`
    /// - `AUTEUR_MAX_DURATION_SECS`
    /// - `AUTEUR_JSON_LOGS` (`true`/`false`/`1`/`0`)
    /// - `AUTEUR_STDOUT_SPANS` (`true`/`false`/`1`/`0`)
    pub fn with_env_overrides(self) -> AuteurResult<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> AuteurResult<Self> {
        if let Some(address) = lookup("AUTEUR_BIND_ADDRESS") {
            self.bind_address = address;
        }
        if let Some(secs) = lookup("AUTEUR_MAX_DURATION_SECS") {
            self.max_duration_secs = secs.trim().parse().map_err(|_| {
                ConfigError::new(format!("AUTEUR_MAX_DURATION_SECS is not a number: {}", secs))
            })?;
        }
        if let Some(flag) = lookup("AUTEUR_JSON_LOGS") {
            self.json_logs = parse_flag(&flag)
                .ok_or_else(|| ConfigError::new(format!("AUTEUR_JSON_LOGS is not a boolean: {}", flag)))?;
        }
        if let Some(flag) = lookup("AUTEUR_STDOUT_SPANS") {
            self.stdout_spans = parse_flag(&flag).ok_or_else(|| {
                ConfigError::new(format!("AUTEUR_STDOUT_SPANS is not a boolean: {}", flag))
            })?;
        }
        self.validate()?;
        Ok(self)
    }

    /// Check that the configuration can be served.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the ceiling is zero or the bind address
    /// is not a socket address.
    pub fn validate(&self) -> AuteurResult<()> {
        if self.max_duration_secs == 0 {
            return Err(ConfigError::new("max_duration_secs must be greater than zero").into());
        }
        self.socket_addr()?;
        Ok(())
    }

    /// Bind address parsed as a socket address.
    pub fn socket_addr(&self) -> AuteurResult<SocketAddr> {
        let address = self.bind_address.parse::<SocketAddr>().map_err(|e| {
            ConfigError::new(format!("Invalid bind address '{}': {}", self.bind_address, e))
        })?;
        Ok(address)
    }

    /// Ceiling on a whole job.
    pub fn max_duration(&self) -> Duration {
        Duration::from_secs(self.max_duration_secs)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
