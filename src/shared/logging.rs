//! Logging utilities module
//!
//! This module provides centralized logging functionality and utilities.

use tracing::{debug, warn};

use crate::shared::error::AppError;

/// Logging utilities for command marshaling
pub struct LoggingUtils;

impl LoggingUtils {
    /// Initialize logging with the specified level
    pub fn initialize(level: &str) -> crate::Result<()> {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level));

        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| AppError::Internal(format!("Failed to initialize logging: {}", e)))?;

        Ok(())
    }

    /// Log an encoded command
    pub fn log_encoded(method: &str, id: &str, size: usize) {
        debug!(
            method = %method,
            id = %id,
            size = %size,
            "Encoded RPC command"
        );
    }

    /// Log a decoded command
    pub fn log_decoded(method: &str, id: &str, size: usize) {
        debug!(
            method = %method,
            id = %id,
            size = %size,
            "Decoded RPC command"
        );
    }

    /// Log an encode failure
    pub fn log_encode_failure(method: &str, id: &str, error: &AppError) {
        warn!(
            method = %method,
            id = %id,
            error = %error,
            "Failed to encode RPC command"
        );
    }

    /// Log a decode failure
    pub fn log_decode_failure(method: &str, error: &AppError, size: usize) {
        warn!(
            method = %method,
            error = %error,
            size = %size,
            "Failed to decode RPC command"
        );
    }
}
