//! Attestation verifier: extraction composed with a ledger lookup.

use std::fmt;

use attestdoc_artifact::{extract, ExtractError};
use attestdoc_canonical::AttestationRecord;

use crate::ledger::{AttestationLedger, LedgerError};

/// Outcome of verifying an artifact.
#[derive(Debug)]
pub enum VerificationOutcome {
    /// Extraction succeeded and the ledger holds a matching registration.
    Verified {
        /// The record reconstructed from the artifact.
        record: AttestationRecord,
    },
    /// The artifact was rejected; the reason is surfaced verbatim.
    Rejected(RejectReason),
}

impl VerificationOutcome {
    /// Whether the artifact verified.
    pub fn is_verified(&self) -> bool {
        matches!(self, VerificationOutcome::Verified { .. })
    }
}

/// Why an artifact failed verification.
#[derive(Debug)]
pub enum RejectReason {
    /// The embedded record could not be recovered; not a valid attestation
    /// document.
    Extract(ExtractError),
    /// Extraction succeeded but the ledger has no matching registration.
    NotRegistered,
    /// The ledger could not be consulted.
    LedgerUnavailable(String),
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::Extract(err) => write!(f, "not a valid attestation document: {}", err),
            RejectReason::NotRegistered => write!(f, "no matching ledger registration"),
            RejectReason::LedgerUnavailable(reason) => write!(f, "ledger unavailable: {}", reason),
        }
    }
}

/// Verifies an artifact against the ledger.
///
/// Runs the extractor; on any extraction error the outcome is `Rejected`
/// with the specific error kind. On success, issues a single ledger lookup
/// by the record's `full_attestation_id`. The outcome is `Verified` only if
/// the lookup returns a non-empty registration. The embedded `network` field
/// is trusted for display only; validity rests solely on the lookup.
pub fn verify(bytes: &[u8], ledger: &dyn AttestationLedger) -> VerificationOutcome {
    let record = match extract(bytes) {
        Ok(record) => record,
        Err(err) => return VerificationOutcome::Rejected(RejectReason::Extract(err)),
    };

    match ledger.lookup(&record.full_attestation_id) {
        Ok(Some(entry)) if !entry.is_null() => VerificationOutcome::Verified { record },
        Ok(_) => VerificationOutcome::Rejected(RejectReason::NotRegistered),
        Err(LedgerError::Unavailable(reason)) => {
            VerificationOutcome::Rejected(RejectReason::LedgerUnavailable(reason))
        }
    }
}
