//! Server configuration module
//!
//! Provides the configuration type for the social server and a builder used
//! by the loaders in `backend::server::config`.

use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use thiserror::Error;

/// Default listen port
pub const DEFAULT_PORT: u16 = 3001;

/// Default avatar service; the identity key is appended as the seed
pub const DEFAULT_AVATAR_BASE_URL: &str = "https://api.dicebear.com/7.x/initials/svg?seed=";

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listen address
    pub host: IpAddr,
    /// Listen port
    pub port: u16,
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
    /// Expose the identity dump under `/debug/identities`
    pub debug_endpoints: bool,
    /// Prefix of derived avatar references
    pub avatar_base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            log_filter: "info".to_string(),
            debug_endpoints: false,
            avatar_base_url: DEFAULT_AVATAR_BASE_URL.to_string(),
        }
    }
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Partial configuration as read from a TOML file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub log_filter: Option<String>,
    pub debug_endpoints: Option<bool>,
    pub avatar_base_url: Option<String>,
}

impl ConfigFile {
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::InvalidFile(e.to_string()))
    }
}

/// Builder for ServerConfig
///
/// Unset fields fall back to `ServerConfig::default()`. Later setters win, so
/// loaders apply sources from lowest to highest precedence.
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    host: Option<String>,
    port: Option<String>,
    log_filter: Option<String>,
    debug_endpoints: Option<bool>,
    avatar_base_url: Option<String>,
}

impl ServerConfigBuilder {
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the port from its textual form; parsed in `build`
    pub fn port(mut self, port: impl Into<String>) -> Self {
        self.port = Some(port.into());
        self
    }

    pub fn log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }

    pub fn debug_endpoints(mut self, enabled: bool) -> Self {
        self.debug_endpoints = Some(enabled);
        self
    }

    pub fn avatar_base_url(mut self, url: impl Into<String>) -> Self {
        self.avatar_base_url = Some(url.into());
        self
    }

    /// Apply every field present in a config file
    pub fn merge_file(mut self, file: ConfigFile) -> Self {
        if let Some(host) = file.host {
            self.host = Some(host);
        }
        if let Some(port) = file.port {
            self.port = Some(port.to_string());
        }
        if let Some(filter) = file.log_filter {
            self.log_filter = Some(filter);
        }
        if let Some(enabled) = file.debug_endpoints {
            self.debug_endpoints = Some(enabled);
        }
        if let Some(url) = file.avatar_base_url {
            self.avatar_base_url = Some(url);
        }
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let defaults = ServerConfig::default();

        let host = match self.host {
            Some(host) => host
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidHost(host))?,
            None => defaults.host,
        };
        let port = match self.port {
            Some(port) => port
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(port))?,
            None => defaults.port,
        };
        let log_filter = self.log_filter.unwrap_or(defaults.log_filter);
        if log_filter.trim().is_empty() {
            return Err(ConfigError::MissingValue("log_filter"));
        }

        Ok(ServerConfig {
            host,
            port,
            log_filter,
            debug_endpoints: self.debug_endpoints.unwrap_or(defaults.debug_endpoints),
            avatar_base_url: self.avatar_base_url.unwrap_or(defaults.avatar_base_url),
        })
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid host address: {0}")]
    InvalidHost(String),
    #[error("invalid port: {0}")]
    InvalidPort(String),
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid config file: {0}")]
    InvalidFile(String),
    #[error("cannot read config file {path}: {message}")]
    Unreadable { path: String, message: String },
}
