//! Opaque collaborator interfaces.
//!
//! The ledger and the transaction source are external network services; this
//! crate defines only their call shapes and failure surface, not their wire
//! formats. Both calls may suspend on a network round trip and are treated
//! as cancellable-by-timeout at the call site.

use attestdoc_canonical::{Network, TxHash, Uint};
use serde_json::Value;
use thiserror::Error;

/// Failure surface of the attestation ledger.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// The ledger is unreachable or returned no usable response.
    #[error("ledger unavailable: {0}")]
    Unavailable(String),
}

/// External attestation registration/query service.
pub trait AttestationLedger {
    /// Registers a record, returning the ledger-assigned attestation id.
    fn register(
        &mut self,
        schema_id: &str,
        indexing_value: &str,
        data: &Value,
    ) -> Result<String, LedgerError>;

    /// Looks up a registration by its namespaced identifier. `Ok(None)`
    /// means the identifier is not registered.
    fn lookup(&self, full_attestation_id: &str) -> Result<Option<Value>, LedgerError>;
}

/// Details read from an on-chain transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDetails {
    /// Transferred value in the smallest denomination.
    pub amount: Uint,
    /// Sender address; becomes the record's customer.
    pub from_address: String,
}

/// Failure surface of the transaction source.
#[derive(Error, Debug)]
pub enum SourceError {
    /// No transaction exists under the given hash on the given network.
    #[error("transaction not found")]
    NotFound,
    /// The source is unreachable.
    #[error("transaction source unavailable: {0}")]
    Unavailable(String),
}

/// External reader of blockchain transactions.
pub trait TransactionSource {
    /// Returns the amount and sender of the given transaction.
    fn lookup(&self, hash: &TxHash, network: Network) -> Result<TransactionDetails, SourceError>;
}
