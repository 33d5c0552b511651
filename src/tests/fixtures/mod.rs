//! Test fixtures for wire-level tests

use serde_json::Value;

use crate::application::commands::{GetKernelStakeModifierCmd, KernelStakeModifierOptions};
use crate::tests::utils;

/// A block hash in the daemon's 64-hex-digit form
pub const BLOCK_HASH: &str = "000000000000000d2f3c8a52e8e9bda5a4bd0c1a3e64b4ecd8ed3b5ff3f1c7a8";

/// A verbose request for [`BLOCK_HASH`]
pub fn verbose_cmd(id: u64) -> GetKernelStakeModifierCmd {
    GetKernelStakeModifierCmd::new(id, BLOCK_HASH, KernelStakeModifierOptions::default())
        .expect("default options are valid")
}

/// A non-verbose request for [`BLOCK_HASH`]
pub fn terse_cmd(id: u64) -> GetKernelStakeModifierCmd {
    GetKernelStakeModifierCmd::new(id, BLOCK_HASH, KernelStakeModifierOptions::default().verbose(false))
        .expect("verbose=false alone is valid")
}

/// Request body with the given params
pub fn request_body(params: Value) -> Vec<u8> {
    utils::create_rpc_request("getkernelstakemodifier", params, serde_json::json!(1)).to_string().into_bytes()
}

/// Verbose daemon reply for [`BLOCK_HASH`]
pub fn verbose_reply(modifier: &str) -> Vec<u8> {
    utils::create_rpc_reply(
        serde_json::json!({"hash": BLOCK_HASH, "kernelstakemodifier": modifier}),
        serde_json::json!(1),
    )
    .to_string()
    .into_bytes()
}
