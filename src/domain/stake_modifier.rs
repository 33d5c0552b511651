//! Stake modifier scalar
//!
//! A 64-bit value carried on the wire as a quoted decimal string so that
//! consumers with 53-bit numbers do not lose precision.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::shared::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct StakeModifier(pub u64);

impl StakeModifier {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// Render the quoted JSON token, e.g. `"42"`
    pub fn encode(&self) -> String {
        format!("\"{}\"", self.0)
    }

    /// Parse a quoted JSON token.
    ///
    /// Nothing is produced unless both the string token and the integer
    /// literal inside it are valid.
    pub fn decode(bytes: &[u8]) -> AppResult<Self> {
        let text: String = serde_json::from_slice(bytes)
            .map_err(|e| AppError::MalformedScalar(format!("stake modifier must be a JSON string: {}", e)))?;
        text.parse()
    }
}

impl From<u64> for StakeModifier {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for StakeModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StakeModifier {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_uint_literal(s).map(Self)
    }
}

impl Serialize for StakeModifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for StakeModifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        let text = String::deserialize(deserializer)?;
        text.parse().map_err(D::Error::custom)
    }
}

/// Parse an unsigned 64-bit literal, honoring `0x`, `0o`, `0b` and
/// leading-zero octal prefixes. Signs and separators are rejected.
fn parse_uint_literal(input: &str) -> AppResult<u64> {
    let (digits, radix) = match input.as_bytes() {
        [b'0', b'x' | b'X', ..] => (&input[2..], 16),
        [b'0', b'o' | b'O', ..] => (&input[2..], 8),
        [b'0', b'b' | b'B', ..] => (&input[2..], 2),
        [b'0', _, ..] => (&input[1..], 8),
        _ => (input, 10),
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(AppError::NumericOverflowOrSyntax {
            input: input.to_string(),
            reason: "invalid syntax".to_string(),
        });
    }

    u64::from_str_radix(digits, radix).map_err(|e| AppError::NumericOverflowOrSyntax {
        input: input.to_string(),
        reason: e.to_string(),
    })
}
