//! Domain layer - Scalar types and result records
//!
//! This module contains the value types with custom wire encodings and the
//! records the daemon returns.

pub mod amount;
pub mod results;
pub mod stake_modifier;

pub use amount::FloatAmount;
pub use results::{GetDifficultyResult, KernelStakeModifierReply, KernelStakeModifierResult};
pub use stake_modifier::StakeModifier;
