//! Configuration module for the safety envelope.
//!
//! Provides configuration loading, validation, and environment variable
//! interpolation for the embedding application.
//!
//! # Usage
//!
//! ```rust,ignore
//! use dosing_guard::config::load_config;
//!
//! // Load from default path (config.yaml)
//! let config = load_config(None)?;
//!
//! // Load from custom path
//! let config = load_config(Some("custom/config.yaml"))?;
//! ```
//!
//! Note the limit tables themselves are NOT configurable; they are
//! compile-time constants in [`crate::domain::limits`]. Configuration
//! covers only the ambient pieces: which preference key holds the
//! risk-band setting, where the audit trail lives, and logging.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::profile::SETTING_PATIENT_PROFILE;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Risk-profile resolution configuration.
    #[serde(default)]
    pub profile: ProfileConfig,
    /// Audit trail configuration.
    #[serde(default)]
    pub audit: AuditConfig,
    /// Logging configuration.
    #[serde(default)]
    pub observability: LoggingConfig,
}

/// Risk-profile resolution configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Preference key under which the risk-band setting is stored.
    #[serde(default = "default_setting_key")]
    pub setting_key: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            setting_key: default_setting_key(),
        }
    }
}

/// Audit trail configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Enable the durable audit store.
    #[serde(default = "default_audit_enabled")]
    pub enabled: bool,
    /// Path of the local Turso database file.
    #[serde(default = "default_audit_db_path")]
    pub db_path: String,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: default_audit_enabled(),
            db_path: default_audit_db_path(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default tracing filter directive (overridden by `RUST_LOG`).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_setting_key() -> String {
    SETTING_PATIENT_PROFILE.to_string()
}

const fn default_audit_enabled() -> bool {
    true
}

fn default_audit_db_path() -> String {
    "dosing_guard_audit.db".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable
/// interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to "config.yaml".
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or
/// validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or("config.yaml");

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let mut result = input.to_string();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    for cap in re.captures_iter(input) {
        let Some(full_match) = cap.get(0) else {
            continue;
        };
        let Some(var_match) = cap.get(1) else {
            continue;
        };
        let full_match = full_match.as_str();
        let var_name = var_match.as_str();
        let default = cap.get(2).map(|m| m.as_str());

        let replacement = std::env::var(var_name)
            .ok()
            .or_else(|| default.map(str::to_string))
            .unwrap_or_default();

        result = result.replace(full_match, &replacement);
    }

    result
}

fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.profile.setting_key.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "profile.setting_key must not be empty".to_string(),
        ));
    }
    if config.audit.enabled && config.audit.db_path.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "audit.db_path must not be empty when the audit store is enabled".to_string(),
        ));
    }
    Ok(())
}
