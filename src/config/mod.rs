//! Configuration module for callfwd
//!
//! Provides layered configuration loading from files, environment variables, and defaults.
//!
//! # Configuration Precedence
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`CALLFWD_*`, plus the AXL credential trio)
//! 3. Configuration file (TOML)
//! 4. Default values (lowest priority)
//!
//! The AXL credentials deliberately keep the environment variable names the
//! service has always used in deployments: `CUCM_ADDRESS`, `AXL_USERNAME`,
//! `AXL_PASSWORD`.

pub mod axl;
pub mod error;
pub mod logging;
pub mod mapping;
pub mod server;

pub use axl::AxlConfig;
pub use error::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use mapping::MappingConfig;
pub use server::ServerConfig;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Unified configuration for the callfwd server.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CallfwdConfig {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Remote AXL session configuration
    pub axl: AxlConfig,
    /// Floor-to-extension mapping configuration
    pub mapping: MappingConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl CallfwdConfig {
    /// Load configuration from a TOML file.
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply environment variable overrides.
    ///
    /// Invalid values are silently ignored (defaults are kept).
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(port) = std::env::var("CALLFWD_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Ok(host) = std::env::var("CALLFWD_HOST") {
            self.server.host = host;
        }
        if let Ok(level) = std::env::var("CALLFWD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("CALLFWD_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }

        // AXL session settings keep their historical variable names.
        if let Ok(address) = std::env::var("CUCM_ADDRESS") {
            self.axl.address = address;
        }
        if let Ok(username) = std::env::var("AXL_USERNAME") {
            self.axl.username = username;
        }
        if let Ok(password) = std::env::var("AXL_PASSWORD") {
            self.axl.password = password;
        }

        self
    }

    /// Validate that every required field is populated.
    ///
    /// Called once before the AXL session bootstrap; a failure here is
    /// startup-fatal, the server must not begin listening.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.axl.address.is_empty() {
            return Err(ConfigError::MissingField(
                "axl.address (or CUCM_ADDRESS)".into(),
            ));
        }
        if self.axl.username.is_empty() {
            return Err(ConfigError::MissingField(
                "axl.username (or AXL_USERNAME)".into(),
            ));
        }
        if self.axl.password.is_empty() {
            return Err(ConfigError::MissingField(
                "axl.password (or AXL_PASSWORD)".into(),
            ));
        }
        if self.axl.timeout_seconds == 0 {
            return Err(ConfigError::Validation {
                field: "axl.timeout_seconds".into(),
                message: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}
