//! Configuration management module
//!
//! This module handles loading and validating the codec and logging settings.

pub mod app_config;
pub mod validation;

pub use app_config::{AppConfig, CodecConfig, LoggingConfig};
pub use validation::ConfigValidator;
