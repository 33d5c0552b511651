//! Infrastructure layer - Wire envelopes
//!
//! This module contains the generic JSON-RPC request and reply frames that
//! typed commands are marshaled through.

pub mod envelope;
pub mod reply;

pub use envelope::{RawCmd, RequestId};
pub use reply::{RpcError, RpcReply};
