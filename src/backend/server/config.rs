/**
 * Server Configuration
 *
 * This module loads the `ServerConfig` the binary starts with.
 *
 * # Configuration Sources
 *
 * Lowest to highest precedence:
 * 1. Built-in defaults
 * 2. TOML file named by `XFSOCIAL_CONFIG`
 * 3. Environment variables (`SERVER_HOST`, `SERVER_PORT`, `RUST_LOG`,
 *    `XFSOCIAL_DEBUG_ENDPOINTS`, `AVATAR_BASE_URL`)
 *
 * A `.env` file in the working directory is loaded into the environment
 * first.
 */

use std::collections::HashMap;

use crate::shared::config::{ConfigFile, ServerConfig, ServerConfigBuilder};
use crate::shared::ConfigError;

/// Variable naming the optional TOML config file
pub const CONFIG_FILE_VAR: &str = "XFSOCIAL_CONFIG";

/// Load configuration from `.env`, the optional config file and the environment
pub fn load_config() -> Result<ServerConfig, ConfigError> {
    if let Ok(path) = dotenv::dotenv() {
        tracing::debug!("Loaded environment from {}", path.display());
    }
    let vars: HashMap<String, String> = std::env::vars().collect();
    load_config_from(&vars)
}

/// Resolve configuration from an explicit variable map
pub fn load_config_from(vars: &HashMap<String, String>) -> Result<ServerConfig, ConfigError> {
    let mut builder = ServerConfig::builder();

    if let Some(path) = vars.get(CONFIG_FILE_VAR) {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: path.clone(),
            message: e.to_string(),
        })?;
        builder = builder.merge_file(ConfigFile::parse(&text)?);
    }

    builder = apply_env(builder, vars)?;
    builder.build()
}

fn apply_env(
    mut builder: ServerConfigBuilder,
    vars: &HashMap<String, String>,
) -> Result<ServerConfigBuilder, ConfigError> {
    if let Some(host) = vars.get("SERVER_HOST") {
        builder = builder.host(host.as_str());
    }
    if let Some(port) = vars.get("SERVER_PORT") {
        builder = builder.port(port.as_str());
    }
    if let Some(filter) = vars.get("RUST_LOG") {
        builder = builder.log_filter(filter.as_str());
    }
    if let Some(flag) = vars.get("XFSOCIAL_DEBUG_ENDPOINTS") {
        builder = builder.debug_endpoints(parse_flag("XFSOCIAL_DEBUG_ENDPOINTS", flag)?);
    }
    if let Some(url) = vars.get("AVATAR_BASE_URL") {
        builder = builder.avatar_base_url(url.as_str());
    }
    Ok(builder)
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            name,
            value: value.to_string(),
        }),
    }
}
