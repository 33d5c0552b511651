//! Result records returned by the daemon

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::domain::stake_modifier::StakeModifier;
use crate::shared::error::{AppError, AppResult};

/// Data returned by `getkernelstakemodifier` when the verbose flag is set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KernelStakeModifierResult {
    pub hash: String,

    #[serde(rename = "kernelstakemodifier")]
    pub kernel_stake_modifier: StakeModifier,
}

/// Data returned by `getdifficulty`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetDifficultyResult {
    #[serde(rename = "proof-of-work")]
    pub proof_of_work: f64,

    #[serde(rename = "proof-of-stake")]
    pub proof_of_stake: f64,

    #[serde(rename = "search-interval")]
    pub search_interval: i32,
}

/// Either shape a `getkernelstakemodifier` reply can take.
///
/// Which one the daemon sends depends on the request's verbose flag, so the
/// caller picks the branch rather than sniffing the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KernelStakeModifierReply {
    Verbose(KernelStakeModifierResult),
    Hex(String),
}

impl KernelStakeModifierReply {
    /// Decode a reply `result` for a request sent with the given verbose flag
    pub fn from_result(result: &RawValue, verbose: bool) -> AppResult<Self> {
        if verbose {
            let record: KernelStakeModifierResult = serde_json::from_str(result.get())
                .map_err(|e| AppError::MalformedScalar(format!("verbose result must be an object: {}", e)))?;
            return Ok(Self::Verbose(record));
        }

        let encoded: String = serde_json::from_str(result.get())
            .map_err(|e| AppError::MalformedScalar(format!("result must be a hex string: {}", e)))?;
        hex::decode(&encoded)
            .map_err(|e| AppError::MalformedScalar(format!("result is not valid hex: {}", e)))?;

        Ok(Self::Hex(encoded))
    }

    /// The structured record, if the reply was verbose
    pub fn verbose(&self) -> Option<&KernelStakeModifierResult> {
        match self {
            Self::Verbose(record) => Some(record),
            Self::Hex(_) => None,
        }
    }
}
