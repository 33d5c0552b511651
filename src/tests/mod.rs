//! Crate-level test suite
//!
//! This module covers:
//! - Fixtures shared by the wire-level tests
//! - Integration tests running commands through config, codec and reply decoding

pub mod fixtures;
pub mod integration;

/// Test configuration and utilities
pub mod config {
    use crate::config::AppConfig;
    use crate::shared::logging::LoggingUtils;
    use std::sync::Once;

    static INIT: Once = Once::new();

    /// Initialize test environment
    pub fn init() {
        INIT.call_once(|| {
            // Another harness may already own the global subscriber
            let _ = LoggingUtils::initialize("debug");
        });
    }

    /// Create test configuration
    pub fn test_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.codec.max_message_size = 4096;
        config.logging.level = "debug".to_string();
        config
    }
}

/// Test result types
pub type TestResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Test utilities and helpers
pub mod utils {
    use serde_json::Value;

    /// Create a test request envelope
    pub fn create_rpc_request(method: &str, params: Value, id: Value) -> Value {
        serde_json::json!({
            "jsonrpc": "1.0",
            "method": method,
            "params": params,
            "id": id
        })
    }

    /// Create a test reply envelope
    pub fn create_rpc_reply(result: Value, id: Value) -> Value {
        serde_json::json!({
            "result": result,
            "error": null,
            "id": id
        })
    }

    /// Create a test error reply envelope
    pub fn create_rpc_error(code: i64, message: &str, id: Value) -> Value {
        serde_json::json!({
            "result": null,
            "error": {
                "code": code,
                "message": message
            },
            "id": id
        })
    }
}
