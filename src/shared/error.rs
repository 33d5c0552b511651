//! Error handling module
//!
//! This module provides centralized error handling for command marshaling.

use thiserror::Error;
use serde_json::Value;

/// Application error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("JSON serialization error: {0}")]
    Json(String),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Malformed envelope: {0}")]
    EnvelopeMalformed(String),

    #[error("Too many optional arguments: at most {max} allowed, got {got}")]
    TooManyOptionalArguments { max: usize, got: usize },

    #[error("Invalid argument combination: {0}")]
    InvalidArgumentCombination(String),

    #[error("Wrong number of parameters for {method}: expected {min} to {max}, got {got}")]
    WrongParameterCount {
        method: String,
        min: usize,
        max: usize,
        got: usize,
    },

    #[error("parameter 'hash' must be a string: {0}")]
    InvalidHashParameter(String),

    #[error("second optional parameter 'verbose' must be a bool: {0}")]
    InvalidVerboseParameter(String),

    #[error("Amount must be finite, got {0}")]
    NonFiniteAmount(f64),

    #[error("Malformed scalar: {0}")]
    MalformedScalar(String),

    #[error("Invalid unsigned integer literal {input:?}: {reason}")]
    NumericOverflowOrSyntax { input: String, reason: String },

    #[error("Method mismatch: expected {expected}, got {got}")]
    MethodMismatch { expected: String, got: String },

    #[error("Message too large: {size} bytes exceeds limit of {limit} bytes")]
    RequestTooLarge { size: usize, limit: usize },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Convert to JSON-RPC error object
    pub fn to_jsonrpc_error(&self) -> Value {
        let (code, message) = match self {
            _ if self.is_invalid_params() => (-32602, format!("Invalid params: {}", self)),
            AppError::EnvelopeMalformed(_) | AppError::Json(_) => (-32700, "Parse error".to_string()),
            AppError::MethodMismatch { got, .. } => (-32601, format!("Method not found: {}", got)),
            AppError::Rpc { code, message } => (*code, message.clone()),
            AppError::RequestTooLarge { size, limit } => (-32600, format!("Request too large: {} bytes exceeds limit of {} bytes", size, limit)),
            _ => (-32603, "Internal error".to_string()),
        };

        serde_json::json!({
            "error": {
                "code": code,
                "message": message
            }
        })
    }

    /// Whether the error is reported as JSON-RPC invalid params (-32602)
    pub fn is_invalid_params(&self) -> bool {
        matches!(
            self,
            AppError::TooManyOptionalArguments { .. }
                | AppError::InvalidArgumentCombination(_)
                | AppError::WrongParameterCount { .. }
                | AppError::InvalidHashParameter(_)
                | AppError::InvalidVerboseParameter(_)
                | AppError::MalformedScalar(_)
                | AppError::NumericOverflowOrSyntax { .. }
        )
    }
}

/// Application result type
pub type AppResult<T> = Result<T, AppError>;

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_params_map_to_32602() {
        let err = AppError::WrongParameterCount {
            method: "getkernelstakemodifier".to_string(),
            min: 1,
            max: 2,
            got: 3,
        };
        let value = err.to_jsonrpc_error();
        assert_eq!(value["error"]["code"], -32602);
        assert!(err.is_invalid_params());
    }

    #[test]
    fn test_scalar_errors_are_invalid_params() {
        let errors = [
            AppError::MalformedScalar("expected a string".to_string()),
            AppError::NumericOverflowOrSyntax { input: "-1".to_string(), reason: "invalid syntax".to_string() },
        ];

        for err in errors {
            assert!(err.is_invalid_params(), "{}", err);
            assert_eq!(err.to_jsonrpc_error()["error"]["code"], -32602);
        }
    }

    #[test]
    fn test_envelope_errors_map_to_parse_error() {
        let err = AppError::EnvelopeMalformed("EOF while parsing".to_string());
        let value = err.to_jsonrpc_error();
        assert_eq!(value["error"]["code"], -32700);
        assert_eq!(value["error"]["message"], "Parse error");
        assert!(!err.is_invalid_params());
    }

    #[test]
    fn test_daemon_errors_keep_their_code() {
        let err = AppError::Rpc { code: -5, message: "Block not found".to_string() };
        let value = err.to_jsonrpc_error();
        assert_eq!(value["error"]["code"], -5);
        assert_eq!(value["error"]["message"], "Block not found");
    }

    #[test]
    fn test_hash_parameter_message_carries_detail() {
        let err = AppError::InvalidHashParameter("invalid type: integer `1`, expected a string".to_string());
        assert!(err.to_string().contains("must be a string"));
        assert!(err.to_string().contains("expected a string"));
    }
}
