//! Chain-readiness gating, collaborator interfaces, and verification for
//! attestdoc invoice attestations.
//!
//! This crate provides:
//! - The chain-readiness state machine gating ledger registration
//! - Opaque collaborator traits for the attestation ledger and the
//!   transaction source
//! - The registration flow producing complete attestation records
//! - The verifier composing extraction with a ledger lookup
//!
//! Core invariants:
//! - Registration is only attempted from the `Ready` state; any other state
//!   fails fast with no external calls
//! - A record is only produced after the registration call returns, so
//!   cancellation leaves no partial state
//! - Verification is total over untrusted bytes and yields a discriminated
//!   outcome the caller must branch on
//!
#![deny(missing_docs)]

/// Registration flow building complete records.
pub mod flow;
/// Collaborator traits for the ledger and transaction source.
pub mod ledger;
/// Chain-readiness state machine.
pub mod readiness;
/// Artifact verification against the ledger.
pub mod verifier;

pub use flow::{create_attestation, CreateError, InvoiceForm};
pub use ledger::{AttestationLedger, LedgerError, SourceError, TransactionDetails, TransactionSource};
pub use readiness::{ReadinessState, ReadinessTracker, SwitchOutcome};
pub use verifier::{verify, RejectReason, VerificationOutcome};
