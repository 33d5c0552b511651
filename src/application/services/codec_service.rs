//! Command codec service
//!
//! Wraps the per-command envelope conversion with the configured message
//! limits and structured logging.

use std::sync::Arc;

use crate::{
    application::commands::Cmd,
    config::CodecConfig,
    infrastructure::envelope::RawCmd,
    shared::{
        error::{AppError, AppResult},
        logging::LoggingUtils,
    },
};

/// Encodes and decodes typed commands
#[derive(Debug, Clone)]
pub struct CommandCodec {
    config: Arc<CodecConfig>,
}

impl CommandCodec {
    /// Create a new codec
    pub fn new(config: Arc<CodecConfig>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Serialize a command into envelope bytes
    pub fn encode<C: Cmd>(&self, cmd: &C) -> AppResult<Vec<u8>> {
        self.encode_checked(cmd)
            .inspect_err(|e| LoggingUtils::log_encode_failure(C::METHOD, &cmd.id().to_string(), e))
    }

    /// Parse envelope bytes into a command of type `C`.
    ///
    /// The envelope's method must match `C`.
    pub fn decode<C: Cmd>(&self, bytes: &[u8]) -> AppResult<C> {
        self.decode_checked(bytes)
            .inspect_err(|e| LoggingUtils::log_decode_failure(C::METHOD, e, bytes.len()))
    }

    /// Parse `bytes` and adopt the result, leaving `target` unchanged on failure
    pub fn decode_into<C: Cmd>(&self, target: &mut C, bytes: &[u8]) -> AppResult<()> {
        *target = self.decode(bytes)?;
        Ok(())
    }

    fn encode_checked<C: Cmd>(&self, cmd: &C) -> AppResult<Vec<u8>> {
        let bytes = cmd
            .to_raw_cmd()?
            .with_jsonrpc_version(self.config.jsonrpc_version.as_str())
            .to_vec()?;

        self.check_size(bytes.len())?;
        LoggingUtils::log_encoded(C::METHOD, &cmd.id().to_string(), bytes.len());

        Ok(bytes)
    }

    fn decode_checked<C: Cmd>(&self, bytes: &[u8]) -> AppResult<C> {
        self.check_size(bytes.len())?;

        let raw = RawCmd::from_slice(bytes)?;
        if raw.method != C::METHOD {
            return Err(AppError::MethodMismatch {
                expected: C::METHOD.to_string(),
                got: raw.method,
            });
        }

        let cmd = C::from_raw_cmd(&raw)?;
        LoggingUtils::log_decoded(C::METHOD, &raw.id.to_string(), bytes.len());

        Ok(cmd)
    }

    fn check_size(&self, size: usize) -> AppResult<()> {
        if size > self.config.max_message_size {
            return Err(AppError::RequestTooLarge {
                size,
                limit: self.config.max_message_size,
            });
        }
        Ok(())
    }
}

impl Default for CommandCodec {
    fn default() -> Self {
        Self::new(Arc::new(CodecConfig::default()))
    }
}
