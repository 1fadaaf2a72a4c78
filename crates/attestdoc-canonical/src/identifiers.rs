use std::fmt;

use chrono::{SecondsFormat, Utc};
use regex::Regex;
use serde::{Serialize, Serializer};

use crate::validation::ValidationError;

/// Fixed prefix of the attestation identifier namespace.
pub const ATTESTATION_PREFIX: &str = "onchain";

/// Fixed environment tag of the attestation identifier namespace.
pub const ENVIRONMENT_TAG: &str = "evm";

/// Fixed numeric chain identifier of the attestation identifier namespace.
pub const CHAIN_NUMERIC_ID: u64 = 11_155_111;

/// Schema identifier used when registering records with the ledger.
pub const LEDGER_SCHEMA_ID: &str = "0x268";

/// Derives the globally-namespaced attestation identifier from a
/// ledger-assigned attestation id.
///
/// The three fixed components are configuration constants, not derived
/// per-record. This derivation is the sole key by which an artifact is
/// matched to a ledger entry during verification.
pub fn full_attestation_id(attestation_id: &str) -> String {
    format!(
        "{}_{}_{}_{}",
        ATTESTATION_PREFIX, ENVIRONMENT_TAG, CHAIN_NUMERIC_ID, attestation_id
    )
}

/// Canonical 32-byte transaction hash.
///
/// Source input is a variable-length hex string; shorter inputs are
/// left-zero-padded to 32 bytes deterministically, longer inputs are
/// rejected, never truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TxHash([u8; 32]);

impl TxHash {
    /// Parses a hex string (optional `0x` prefix, 1..=64 nibbles) into the
    /// canonical left-zero-padded 32-byte form.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let digits = input.strip_prefix("0x").unwrap_or(input);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ValidationError::PatternMismatch {
                field: "transaction_hash",
                value: input.to_string(),
            });
        }
        if digits.len() > 64 {
            return Err(ValidationError::OutOfBounds {
                field: "transaction_hash",
                value: input.to_string(),
            });
        }

        let mut padded = String::with_capacity(64);
        for _ in 0..(64 - digits.len()) {
            padded.push('0');
        }
        padded.push_str(&digits.to_ascii_lowercase());

        let mut bytes = [0u8; 32];
        hex::decode_to_slice(&padded, &mut bytes).map_err(|_| {
            ValidationError::PatternMismatch {
                field: "transaction_hash",
                value: input.to_string(),
            }
        })?;
        Ok(Self(bytes))
    }

    /// Canonical bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Canonical `0x`-prefixed lowercase hex form (66 characters).
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for TxHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Target chain/environment for a record. Fixed enumerated set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    /// The Sepolia test network.
    Sepolia,
}

impl Network {
    /// Parses a network name from the fixed enumerated set.
    pub fn parse(name: &str) -> Result<Self, ValidationError> {
        match name {
            "sepolia" => Ok(Network::Sepolia),
            _ => Err(ValidationError::PatternMismatch {
                field: "network",
                value: name.to_string(),
            }),
        }
    }

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Network::Sepolia => "sepolia",
        }
    }

    /// Chain id as reported by wallets (`eth_chainId` hex form).
    pub fn wallet_chain_id(&self) -> &'static str {
        match self {
            Network::Sepolia => "0xaa36a7",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for Network {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// UTC RFC3339 timestamp with `Z` suffix. Provenance only; never part of
/// record identity or equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Timestamp(String);

impl Timestamp {
    /// Parses a validated timestamp from a string.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        let re = Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(\.\d{1,9})?Z$")
            .expect("invalid regex");
        if !re.is_match(&s) {
            return Err(ValidationError::PatternMismatch {
                field: "timestamp",
                value: s,
            });
        }
        Ok(Self(s))
    }

    /// Captures the current instant.
    pub fn now() -> Self {
        Self(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true))
    }
}

impl AsRef<str> for Timestamp {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
