//! Typed RPC commands
//!
//! Every command converts to and from the generic [`RawCmd`] envelope. The
//! byte-level helpers are provided on top of that conversion.

pub mod kernel_stake_modifier;

pub use kernel_stake_modifier::{GetKernelStakeModifierCmd, KernelStakeModifierOptions};

use crate::infrastructure::envelope::{RawCmd, RequestId};
use crate::shared::error::AppResult;

/// A typed JSON-RPC command
pub trait Cmd: Sized {
    /// Wire method name
    const METHOD: &'static str;

    /// Correlation id echoed back by the daemon
    fn id(&self) -> &RequestId;

    fn method(&self) -> &'static str {
        Self::METHOD
    }

    /// Build the envelope for this command
    fn to_raw_cmd(&self) -> AppResult<RawCmd>;

    /// Rebuild the command from a parsed envelope
    fn from_raw_cmd(raw: &RawCmd) -> AppResult<Self>;

    /// Serialize the command to JSON bytes
    fn marshal(&self) -> AppResult<Vec<u8>> {
        self.to_raw_cmd()?.to_vec()
    }

    /// Parse a command from JSON bytes
    fn unmarshal(bytes: &[u8]) -> AppResult<Self> {
        Self::from_raw_cmd(&RawCmd::from_slice(bytes)?)
    }

    /// Parse `bytes` and adopt the result.
    ///
    /// `self` is left untouched when parsing fails.
    fn unmarshal_into(&mut self, bytes: &[u8]) -> AppResult<()> {
        *self = Self::unmarshal(bytes)?;
        Ok(())
    }
}
