//! Framed document artifact format for attestdoc invoices.
//!
//! An artifact carries two independent payloads: positioned text blocks that
//! render the invoice for humans, and exactly one subject frame holding the
//! canonical encoding of the attestation record. Only the subject frame is
//! authoritative; text blocks and doc-info tags are presentation and are
//! never reparsed.
//!
//! Extraction is a total function over untrusted bytes: every failure path
//! yields a discriminated [`ExtractError`], never a panic, and nothing in an
//! artifact is executed or evaluated beyond structural parsing and the
//! canonical codec.
//!
#![deny(missing_docs)]

/// Embedder: record to artifact bytes.
pub mod embed;
/// Error types for embed and extract operations.
pub mod errors;
/// Extractor: artifact bytes back to a record.
pub mod extract;
/// Header and frame structure of the artifact container.
pub mod frame;

pub use embed::{embed, DOC_AUTHOR, DOC_PRODUCER, DOC_TITLE, MAX_SUBJECT_SIZE};
pub use errors::{EmbedError, ExtractError};
pub use extract::{extract, extract_payload};
pub use frame::{ArtifactHeader, FrameHeader, FrameKind};
