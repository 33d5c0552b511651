//! Application layer - Typed commands and codec services
//!
//! This module contains the typed RPC commands and the services that
//! marshal them through the JSON-RPC envelope.

pub mod commands;
pub mod services;

pub use commands::{Cmd, GetKernelStakeModifierCmd, KernelStakeModifierOptions};
pub use services::CommandCodec;
