//! JSON-RPC reply envelope

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::application::commands::GetKernelStakeModifierCmd;
use crate::domain::results::KernelStakeModifierReply;
use crate::infrastructure::envelope::RequestId;
use crate::shared::error::{AppError, AppResult};

/// JSON-RPC reply structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcReply {
    /// Result (for successful replies)
    #[serde(default)]
    pub result: Option<Box<RawValue>>,

    /// Error (for error replies)
    #[serde(default)]
    pub error: Option<RpcError>,

    /// Request ID
    #[serde(default)]
    pub id: RequestId,
}

/// JSON-RPC error structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcError {
    /// Error code
    pub code: i64,

    /// Error message
    pub message: String,
}

impl RpcReply {
    /// Parse a reply from raw bytes
    pub fn from_slice(bytes: &[u8]) -> AppResult<Self> {
        serde_json::from_slice(bytes).map_err(|e| AppError::EnvelopeMalformed(e.to_string()))
    }

    /// The raw result, or the daemon's error
    pub fn into_result(self) -> AppResult<Box<RawValue>> {
        if let Some(error) = self.error {
            return Err(AppError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        self.result
            .ok_or_else(|| AppError::EnvelopeMalformed("reply has neither result nor error".to_string()))
    }

    /// Decode the result as `T`
    pub fn decode_result<T: DeserializeOwned>(self) -> AppResult<T> {
        let raw = self.into_result()?;
        Ok(serde_json::from_str(raw.get())?)
    }

    /// Decode the result of a `getkernelstakemodifier` request
    pub fn decode_kernel_stake_modifier(
        self,
        cmd: &GetKernelStakeModifierCmd,
    ) -> AppResult<KernelStakeModifierReply> {
        let raw = self.into_result()?;
        KernelStakeModifierReply::from_result(&raw, cmd.verbose())
    }
}
