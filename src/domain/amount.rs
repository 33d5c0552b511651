//! Fixed-precision currency amount

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;

use crate::shared::error::{AppError, AppResult};

/// A currency amount that always serializes with six fractional digits.
///
/// The JSON token is a bare number (`1.000000`), never quoted and never in
/// exponent notation.
///
/// Only the streaming writers (`serde_json::to_string`, `to_vec`, `to_writer`)
/// keep the six digits. Going through `serde_json::Value` (`json!`,
/// `to_value`) re-reads the token as an `f64`, so `1.000000` comes back out
/// as `1.0`. Build envelopes with [`crate::infrastructure::envelope::to_param`]
/// or the command encoders, which stay on the raw token.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct FloatAmount(pub f64);

impl FloatAmount {
    /// Digits written after the decimal point
    pub const DECIMALS: usize = 6;

    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Render the JSON token. NaN and infinities have no JSON form.
    pub fn encode(&self) -> AppResult<String> {
        if !self.0.is_finite() {
            return Err(AppError::NonFiniteAmount(self.0));
        }
        Ok(format!("{:.*}", Self::DECIMALS, self.0))
    }

    /// Parse a JSON number token
    pub fn decode(bytes: &[u8]) -> AppResult<Self> {
        serde_json::from_slice::<f64>(bytes)
            .map(Self)
            .map_err(|e| AppError::MalformedScalar(format!("amount must be a JSON number: {}", e)))
    }
}

impl From<f64> for FloatAmount {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for FloatAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.*}", Self::DECIMALS, self.0)
    }
}

impl Serialize for FloatAmount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::Error;

        let token = self.encode().map_err(S::Error::custom)?;
        // RawValue keeps the digits exactly as formatted
        let raw = RawValue::from_string(token).map_err(S::Error::custom)?;
        raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FloatAmount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        f64::deserialize(deserializer).map(Self)
    }
}
