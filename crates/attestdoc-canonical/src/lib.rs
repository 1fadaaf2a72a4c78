//! Canonical data model primitives for attestdoc invoice attestations.
//!
//! Every field that participates in the embedded canonical payload lives in
//! this crate: the record model, the digit-string integer type, the
//! transaction-hash and network newtypes, and the encode/decode codec.
//! Arbitrary-precision integers cross the serialization boundary as decimal
//! digit strings end-to-end; nothing in this crate routes a numeric field
//! through a float or a fixed-width integer.
//!
#![deny(missing_docs)]

/// Canonical payload codec (encode/decode) and its error taxonomy.
pub mod codec;
/// Core identifiers, namespace constants, and newtypes.
pub mod identifiers;
/// Digit-string integer quantities.
pub mod quantities;
/// Attestation record and pre-registration draft.
pub mod record;
/// Validation helpers used by canonical types.
pub mod validation;

pub use codec::{decode, encode, encode_at, DecodeError, EncodeError};
pub use identifiers::{
    full_attestation_id, Network, Timestamp, TxHash, ATTESTATION_PREFIX, CHAIN_NUMERIC_ID,
    ENVIRONMENT_TAG, LEDGER_SCHEMA_ID,
};
pub use quantities::Uint;
pub use record::{invoice_date_from_calendar, AttestationRecord, RecordDraft};
pub use validation::ValidationError;
