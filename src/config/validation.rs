//! Configuration validation module
//!
//! This module provides additional validation logic for configuration
//! beyond the basic validator crate validation.

use crate::config::AppConfig;
use crate::shared::error::AppError;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const JSONRPC_VERSIONS: [&str; 2] = ["1.0", "2.0"];

/// Configuration validator for additional validation logic
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the complete configuration
    pub fn validate_config(config: &AppConfig) -> crate::Result<()> {
        Self::validate_jsonrpc_version(&config.codec.jsonrpc_version)?;
        Self::validate_log_level(&config.logging.level)?;

        Ok(())
    }

    fn validate_jsonrpc_version(version: &str) -> crate::Result<()> {
        if !JSONRPC_VERSIONS.contains(&version) {
            return Err(AppError::Validation(
                format!("Unsupported JSON-RPC version: {}", version)
            ));
        }

        if version != "1.0" {
            tracing::warn!(version = %version, "Daemon dialect expects JSON-RPC 1.0 envelopes");
        }

        Ok(())
    }

    fn validate_log_level(level: &str) -> crate::Result<()> {
        if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
            return Err(AppError::Validation(
                format!("Invalid log level: {}", level)
            ));
        }

        Ok(())
    }
}
