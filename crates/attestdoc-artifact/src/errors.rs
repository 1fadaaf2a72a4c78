use attestdoc_canonical::{DecodeError, EncodeError};
use thiserror::Error;

/// Errors that can occur while producing an artifact.
#[derive(Error, Debug)]
pub enum EmbedError {
    /// The record has no ledger-assigned attestation id; embedding an
    /// incomplete record is refused.
    #[error("record is incomplete: attestation id has not been assigned")]
    IncompleteRecord,
    /// The canonical payload exceeds the subject frame bound.
    #[error("canonical payload size {size} exceeds maximum {max}")]
    PayloadTooLarge {
        /// Actual payload size in bytes.
        size: usize,
        /// Maximum allowed size in bytes.
        max: usize,
    },
    /// The canonical encoder failed.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Errors that can occur while recovering a record from artifact bytes.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The artifact container could not be parsed structurally.
    #[error("unreadable artifact: {0}")]
    UnreadableArtifact(String),
    /// The artifact carries no subject frame, or an empty one.
    #[error("no embedded payload found in artifact metadata")]
    NoEmbeddedPayload,
    /// The canonical codec rejected the embedded payload. Codec failures
    /// propagate unchanged.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
