//! Registration flow: collected form input plus transaction details become
//! a complete, ledger-registered attestation record.

use attestdoc_canonical::{
    invoice_date_from_calendar, AttestationRecord, Network, RecordDraft, TxHash, Uint,
    ValidationError, LEDGER_SCHEMA_ID,
};
use chrono::Utc;
use thiserror::Error;

use crate::ledger::{AttestationLedger, LedgerError, SourceError, TransactionSource};
use crate::readiness::ReadinessTracker;

/// Invoice fields as collected from the caller's form.
#[derive(Debug, Clone)]
pub struct InvoiceForm {
    /// Issuing business name.
    pub business_name: String,
    /// Funding transaction hash (variable-length hex input).
    pub transaction_hash: String,
    /// Calendar invoice date, `YYYY-MM-DD`.
    pub invoice_date: String,
    /// Product name.
    pub product_name: String,
    /// Product category.
    pub category: String,
    /// Quantity, decimal digit string.
    pub quantity: String,
    /// Target network.
    pub network: Network,
}

/// Errors from the registration flow.
#[derive(Error, Debug)]
pub enum CreateError {
    /// The readiness machine is not in `Ready`; no external call was made.
    #[error("network not ready: registration requires a connection to the target network")]
    NetworkNotReady,
    /// A form-level field failed validation, before any external call.
    #[error("invalid input: {0}")]
    Input(#[from] ValidationError),
    /// The transaction source failed or had no data.
    #[error("transaction lookup failed: {0}")]
    Transaction(#[from] SourceError),
    /// The ledger failed to register the record.
    #[error("ledger registration failed: {0}")]
    Ledger(#[from] LedgerError),
    /// The registration payload could not be serialized.
    #[error("registration payload serialization failed: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Creates a ledger-registered attestation record from form input.
///
/// Fails fast with [`CreateError::NetworkNotReady`] unless the tracker is
/// `Ready`, performing no external calls in that case. The record is only
/// produced after the registration call returns successfully; cancellation
/// at the call site leaves no partial state.
pub fn create_attestation(
    tracker: &ReadinessTracker,
    form: &InvoiceForm,
    source: &dyn TransactionSource,
    ledger: &mut dyn AttestationLedger,
) -> Result<AttestationRecord, CreateError> {
    if !tracker.is_ready() {
        return Err(CreateError::NetworkNotReady);
    }

    // Form-level validation before any external call.
    let transaction_hash = TxHash::parse(&form.transaction_hash)?;
    let invoice_date = invoice_date_from_calendar(&form.invoice_date)?;
    let quantity = Uint::parse(form.quantity.clone())?;

    let details = source.lookup(&transaction_hash, form.network)?;

    let draft = RecordDraft::new(
        &form.business_name,
        &form.transaction_hash,
        invoice_date,
        &details.from_address,
        &form.product_name,
        &form.category,
        quantity,
        details.amount,
        form.network,
    )?;

    let data = serde_json::to_value(&draft)?;
    let attestation_id = ledger.register(LEDGER_SCHEMA_ID, &indexing_value(), &data)?;

    Ok(draft.into_record(attestation_id))
}

/// Indexing value for ledger registration: `0x` + lowercase-hex unix
/// milliseconds at call time.
fn indexing_value() -> String {
    format!("0x{:x}", Utc::now().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexing_value_is_hex_timestamp() {
        let value = indexing_value();
        assert!(value.starts_with("0x"));
        assert!(i64::from_str_radix(&value[2..], 16).is_ok());
    }
}
