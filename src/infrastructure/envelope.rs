//! JSON-RPC request envelope
//!
//! A `RawCmd` is the generic `{jsonrpc, id, method, params}` frame every
//! command is marshaled through. Parameters stay as raw JSON fragments until
//! a command decodes them by position.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::value::RawValue;

use crate::shared::error::{AppError, AppResult};

/// Version tag the daemon dialect expects
pub const DEFAULT_JSONRPC_VERSION: &str = "1.0";

/// Opaque request correlation token, echoed back verbatim by the daemon.
///
/// Only JSON scalars are accepted; objects and arrays fail to parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum RequestId {
    #[default]
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestId::Null => f.write_str("null"),
            RequestId::Bool(b) => write!(f, "{}", b),
            RequestId::Number(n) => write!(f, "{}", n),
            RequestId::String(s) => f.write_str(s),
        }
    }
}

impl From<u64> for RequestId {
    fn from(value: u64) -> Self {
        RequestId::Number(value.into())
    }
}

impl From<i64> for RequestId {
    fn from(value: i64) -> Self {
        RequestId::Number(value.into())
    }
}

impl From<i32> for RequestId {
    fn from(value: i32) -> Self {
        RequestId::Number(i64::from(value).into())
    }
}

impl From<bool> for RequestId {
    fn from(value: bool) -> Self {
        RequestId::Bool(value)
    }
}

impl From<&str> for RequestId {
    fn from(value: &str) -> Self {
        RequestId::String(value.to_string())
    }
}

impl From<String> for RequestId {
    fn from(value: String) -> Self {
        RequestId::String(value)
    }
}

impl<T: Into<RequestId>> From<Option<T>> for RequestId {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(RequestId::Null)
    }
}

/// Generic JSON-RPC request frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawCmd {
    /// JSON-RPC version
    #[serde(default = "default_jsonrpc_version")]
    pub jsonrpc: String,

    /// Request ID
    #[serde(default)]
    pub id: RequestId,

    /// Method name, empty when absent
    #[serde(default)]
    pub method: String,

    /// Undecoded positional parameters; `null` reads as none
    #[serde(default, deserialize_with = "null_as_empty")]
    pub params: Vec<Box<RawValue>>,
}

impl RawCmd {
    /// Create a new envelope
    pub fn new(id: RequestId, method: impl Into<String>, params: Vec<Box<RawValue>>) -> Self {
        Self {
            jsonrpc: default_jsonrpc_version(),
            id,
            method: method.into(),
            params,
        }
    }

    /// Override the version tag
    pub fn with_jsonrpc_version(mut self, version: impl Into<String>) -> Self {
        self.jsonrpc = version.into();
        self
    }

    /// Parse an envelope from raw bytes
    pub fn from_slice(bytes: &[u8]) -> AppResult<Self> {
        serde_json::from_slice(bytes).map_err(|e| AppError::EnvelopeMalformed(e.to_string()))
    }

    /// Serialize the envelope to bytes
    pub fn to_vec(&self) -> AppResult<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Number of positional parameters
    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    /// Decode the parameter at `index` as `T`.
    ///
    /// Returns `None` when the index is out of range.
    pub fn param<T: DeserializeOwned>(&self, index: usize) -> Option<Result<T, serde_json::Error>> {
        self.params
            .get(index)
            .map(|raw| serde_json::from_str(raw.get()))
    }
}

/// Encode a single parameter as a raw JSON fragment
pub fn to_param<T: Serialize + ?Sized>(value: &T) -> AppResult<Box<RawValue>> {
    Ok(serde_json::value::to_raw_value(value)?)
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Box<RawValue>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Box<RawValue>>>::deserialize(deserializer)?.unwrap_or_default())
}

fn default_jsonrpc_version() -> String {
    DEFAULT_JSONRPC_VERSION.to_string()
}
