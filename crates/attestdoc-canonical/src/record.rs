use chrono::NaiveDate;
use serde::Serialize;

use crate::identifiers::{full_attestation_id, Network, TxHash};
use crate::quantities::Uint;
use crate::validation::ValidationError;

/// Complete attestation record: the canonical entity embedded into a
/// document artifact.
///
/// A record only exists in this form after ledger registration has assigned
/// `attestation_id`; `full_attestation_id` is always the derivation from
/// `attestation_id` and the fixed namespace constants, never stored
/// independently of it. Records decoded from an artifact are reconstructed
/// purely from the embedded payload and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttestationRecord {
    /// Issuing business, free text.
    pub business_name: String,
    /// Funding transaction hash, canonical 32 bytes.
    pub transaction_hash: TxHash,
    /// Invoice date as non-negative seconds since epoch.
    pub invoice_date: Uint,
    /// Counterparty address from the transaction lookup; not user-entered.
    pub customer: String,
    /// Product, free text.
    pub product_name: String,
    /// Product category, free text.
    pub category: String,
    /// Quantity sold.
    pub quantity: Uint,
    /// Transferred amount in the smallest denomination.
    pub amount: Uint,
    /// Target chain/environment.
    pub network: Network,
    /// Ledger-assigned attestation id.
    pub attestation_id: String,
    /// Derived namespaced identifier (`onchain_evm_11155111_<id>`).
    pub full_attestation_id: String,
}

impl AttestationRecord {
    /// Whether the record carries a ledger-assigned attestation id and is
    /// therefore eligible for embedding.
    pub fn is_complete(&self) -> bool {
        !self.attestation_id.is_empty()
    }
}

/// Pre-registration record shape, built from validated form input plus the
/// funding transaction's details.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordDraft {
    /// Issuing business, free text.
    pub business_name: String,
    /// Funding transaction hash, canonical 32 bytes.
    pub transaction_hash: TxHash,
    /// Invoice date as non-negative seconds since epoch.
    pub invoice_date: Uint,
    /// Counterparty address from the transaction lookup.
    pub customer: String,
    /// Product, free text.
    pub product_name: String,
    /// Product category, free text.
    pub category: String,
    /// Quantity sold.
    pub quantity: Uint,
    /// Transferred amount in the smallest denomination.
    pub amount: Uint,
    /// Target chain/environment.
    pub network: Network,
}

impl RecordDraft {
    /// Builds a validated draft. Free-text fields must be non-empty; the
    /// transaction hash is normalized to its canonical 32-byte form.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        business_name: &str,
        transaction_hash: &str,
        invoice_date: Uint,
        customer: &str,
        product_name: &str,
        category: &str,
        quantity: Uint,
        amount: Uint,
        network: Network,
    ) -> Result<Self, ValidationError> {
        non_empty(business_name, "business_name")?;
        non_empty(customer, "customer")?;
        non_empty(product_name, "product_name")?;
        non_empty(category, "category")?;
        let transaction_hash = TxHash::parse(transaction_hash)?;

        Ok(Self {
            business_name: business_name.to_string(),
            transaction_hash,
            invoice_date,
            customer: customer.to_string(),
            product_name: product_name.to_string(),
            category: category.to_string(),
            quantity,
            amount,
            network,
        })
    }

    /// Completes the draft with a ledger-assigned attestation id, deriving
    /// the namespaced identifier.
    pub fn into_record(self, attestation_id: impl Into<String>) -> AttestationRecord {
        let attestation_id = attestation_id.into();
        let full_attestation_id = full_attestation_id(&attestation_id);
        AttestationRecord {
            business_name: self.business_name,
            transaction_hash: self.transaction_hash,
            invoice_date: self.invoice_date,
            customer: self.customer,
            product_name: self.product_name,
            category: self.category,
            quantity: self.quantity,
            amount: self.amount,
            network: self.network,
            attestation_id,
            full_attestation_id,
        }
    }
}

/// Derives non-negative epoch seconds (midnight UTC) from a `YYYY-MM-DD`
/// calendar date.
pub fn invoice_date_from_calendar(date: &str) -> Result<Uint, ValidationError> {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
        ValidationError::PatternMismatch {
            field: "invoice_date",
            value: date.to_string(),
        }
    })?;
    let seconds = parsed
        .and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp())
        .unwrap_or(-1);
    if seconds < 0 {
        return Err(ValidationError::OutOfBounds {
            field: "invoice_date",
            value: date.to_string(),
        });
    }
    Ok(Uint::from(seconds as u64))
}

fn non_empty(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(ValidationError::Empty { field })
    } else {
        Ok(())
    }
}
