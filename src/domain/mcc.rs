//! Merchant category code value type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of digits in a merchant category code.
pub const MCC_LEN: usize = 4;

/// Why a string is not a valid [`Mcc`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MccError {
    /// The code is not exactly [`MCC_LEN`] characters long.
    #[error("must be exactly 4 characters")]
    WrongLength,
    /// The code contains a non-digit character.
    #[error("must contain only numeric characters")]
    NonNumeric,
}

/// A 4-digit merchant category code such as `"5812"`.
///
/// Only constructible through [`FromStr`], so every value held by the
/// domain is known to be well formed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Mcc(String);

impl Mcc {
    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Mcc {
    type Err = MccError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() != MCC_LEN {
            return Err(MccError::WrongLength);
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MccError::NonNumeric);
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for Mcc {
    type Error = MccError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Mcc> for String {
    fn from(mcc: Mcc) -> Self {
        mcc.0
    }
}

impl fmt::Display for Mcc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
