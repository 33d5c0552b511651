//! `getkernelstakemodifier` command

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use super::Cmd;
use crate::infrastructure::envelope::{to_param, RawCmd, RequestId};
use crate::shared::error::{AppError, AppResult};

/// Most optional arguments the command accepts
const MAX_OPTIONAL_ARGS: usize = 2;

/// Optional arguments of `getkernelstakemodifier`.
///
/// Omitted fields take the daemon defaults: `verbose = true`,
/// `verbose_tx = false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KernelStakeModifierOptions {
    pub verbose: Option<bool>,
    pub verbose_tx: Option<bool>,
}

impl KernelStakeModifierOptions {
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    pub fn verbose_tx(mut self, verbose_tx: bool) -> Self {
        self.verbose_tx = Some(verbose_tx);
        self
    }

    /// Map a positional `[verbose, verbose_tx]` list onto named fields
    pub fn from_positional(args: &[bool]) -> AppResult<Self> {
        if args.len() > MAX_OPTIONAL_ARGS {
            return Err(AppError::TooManyOptionalArguments {
                max: MAX_OPTIONAL_ARGS,
                got: args.len(),
            });
        }

        Ok(Self {
            verbose: args.first().copied(),
            verbose_tx: args.get(1).copied(),
        })
    }
}

/// Request for the kernel stake modifier of a block
#[derive(Debug, Clone, PartialEq)]
pub struct GetKernelStakeModifierCmd {
    id: RequestId,
    hash: String,
    verbose: bool,
    verbose_tx: bool,
}

impl GetKernelStakeModifierCmd {
    /// Build a command, applying defaults for omitted options.
    ///
    /// `verbose_tx` requires `verbose`.
    pub fn new(
        id: impl Into<RequestId>,
        hash: impl Into<String>,
        options: KernelStakeModifierOptions,
    ) -> AppResult<Self> {
        let verbose = options.verbose.unwrap_or(true);
        let verbose_tx = options.verbose_tx.unwrap_or(false);

        if !verbose && verbose_tx {
            return Err(AppError::InvalidArgumentCombination(
                "verbose_tx requires verbose".to_string(),
            ));
        }

        Ok(Self {
            id: id.into(),
            hash: hash.into(),
            verbose,
            verbose_tx,
        })
    }

    /// Build a command from positional optional arguments `[verbose, verbose_tx]`
    pub fn from_positional(
        id: impl Into<RequestId>,
        hash: impl Into<String>,
        args: &[bool],
    ) -> AppResult<Self> {
        let options = KernelStakeModifierOptions::from_positional(args)?;
        Self::new(id, hash, options)
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn verbose_tx(&self) -> bool {
        self.verbose_tx
    }
}

impl Cmd for GetKernelStakeModifierCmd {
    const METHOD: &'static str = "getkernelstakemodifier";

    fn id(&self) -> &RequestId {
        &self.id
    }

    fn to_raw_cmd(&self) -> AppResult<RawCmd> {
        let mut params = Vec::with_capacity(MAX_OPTIONAL_ARGS);
        params.push(to_param(&self.hash)?);
        // verbose defaults to true on the daemon side
        if !self.verbose {
            params.push(to_param(&false)?);
        }
        // TODO: verbose_tx has no parameter slot until the daemon's positional layout for it is confirmed

        Ok(RawCmd::new(self.id.clone(), Self::METHOD, params))
    }

    fn from_raw_cmd(raw: &RawCmd) -> AppResult<Self> {
        let count = raw.param_count();
        let wrong_count = || AppError::WrongParameterCount {
            method: Self::METHOD.to_string(),
            min: 1,
            max: MAX_OPTIONAL_ARGS,
            got: count,
        };
        if !(1..=MAX_OPTIONAL_ARGS).contains(&count) {
            return Err(wrong_count());
        }

        let hash: String = raw
            .param(0)
            .transpose()
            .map_err(|e| AppError::InvalidHashParameter(e.to_string()))?
            .ok_or_else(wrong_count)?;

        let mut args = Vec::with_capacity(MAX_OPTIONAL_ARGS);
        if let Some(verbose) = raw.param::<bool>(1) {
            let verbose = verbose.map_err(|e| AppError::InvalidVerboseParameter(e.to_string()))?;
            args.push(verbose);
        }

        debug!(hash = %hash, optional_args = args.len(), "Parsed getkernelstakemodifier parameters");

        Self::from_positional(raw.id.clone(), hash, &args)
    }
}

impl Serialize for GetKernelStakeModifierCmd {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::Error;

        self.to_raw_cmd()
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GetKernelStakeModifierCmd {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        let raw = RawCmd::deserialize(deserializer)?;
        Self::from_raw_cmd(&raw).map_err(D::Error::custom)
    }
}
