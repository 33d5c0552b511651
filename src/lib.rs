//! Stake RPC JSON - typed JSON-RPC commands for proof-of-stake daemons
//!
//! This library marshals RPC commands to and from the daemon's JSON-RPC 1.0
//! envelope, including the scalar types that need non-default encodings.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;

#[cfg(test)]
mod tests;

pub use application::{Cmd, CommandCodec, GetKernelStakeModifierCmd, KernelStakeModifierOptions};
pub use crate::config::AppConfig;
pub use domain::{FloatAmount, KernelStakeModifierResult, StakeModifier};
pub use infrastructure::{RawCmd, RequestId, RpcReply};
pub use shared::error::{AppError, AppResult};

/// Application result type
pub type Result<T> = std::result::Result<T, shared::error::AppError>;
