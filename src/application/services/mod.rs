//! Application services - Orchestration of command marshaling

pub mod codec_service;

pub use codec_service::CommandCodec;
