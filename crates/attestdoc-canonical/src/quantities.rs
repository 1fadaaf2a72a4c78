use std::fmt;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::validation::ValidationError;

/// Non-negative integer of arbitrary magnitude, carried as a canonical
/// decimal digit string (no sign, no leading zeros except `"0"` itself).
///
/// Values such as wei amounts routinely exceed the 53-bit safe-integer
/// range of JSON carriers, so this type never converts through a native
/// numeric representation. Parsing and formatting are its only interfaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Uint(String);

impl Uint {
    /// Parses a decimal digit string, normalizing leading zeros.
    ///
    /// Rejects empty input, signs, and any non-digit character.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::PatternMismatch {
                field: "uint",
                value,
            });
        }
        let trimmed = value.trim_start_matches('0');
        if trimmed.is_empty() {
            Ok(Self("0".to_string()))
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    /// The zero value.
    pub fn zero() -> Self {
        Self("0".to_string())
    }

    /// Canonical digit-string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for Uint {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for Uint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Uint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Uint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Uint::parse(raw).map_err(de::Error::custom)
    }
}
