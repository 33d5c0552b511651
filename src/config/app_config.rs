use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::shared::error::AppError;

/// Envelope codec configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CodecConfig {
    /// Version tag written into outgoing envelopes
    #[validate(length(min = 1, max = 8))]
    pub jsonrpc_version: String,

    /// Maximum accepted message size in bytes
    #[validate(range(min = 64, max = 10485760))] // 64B to 10MB
    pub max_message_size: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[validate(length(min = 1))]
    pub level: String,
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    /// Codec configuration
    #[validate(nested)]
    pub codec: CodecConfig,

    /// Logging configuration
    #[validate(nested)]
    pub logging: LoggingConfig,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            jsonrpc_version: crate::infrastructure::envelope::DEFAULT_JSONRPC_VERSION.to_string(),
            max_message_size: 1024 * 1024, // 1MB
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> crate::Result<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("Conf").required(false))
            .add_source(environment());

        Self::from_builder(builder)
    }

    /// Load configuration from a TOML document, on top of the defaults
    pub fn from_toml_str(toml: &str) -> crate::Result<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml));

        Self::from_builder(builder)
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> crate::Result<Self> {
        let defaults = AppConfig::default();
        let config = builder
            .set_default("codec.jsonrpc_version", defaults.codec.jsonrpc_version)?
            .set_default("codec.max_message_size", defaults.codec.max_message_size as u64)?
            .set_default("logging.level", defaults.logging.level)?
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build configuration: {}", e)))?;

        let config: AppConfig = config.try_deserialize()
            .map_err(|e| AppError::Config(format!("Failed to deserialize configuration: {}", e)))?;

        config.validate()
            .map_err(|e| AppError::Validation(format!("Configuration validation failed: {}", e)))?;
        crate::config::ConfigValidator::validate_config(&config)?;

        Ok(config)
    }
}

/// `STAKE_RPC__SECTION__KEY` overrides; values stay strings until deserialized
fn environment() -> config::Environment {
    config::Environment::with_prefix("STAKE_RPC").separator("__")
}
