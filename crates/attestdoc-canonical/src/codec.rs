use canonical_json::to_string;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::identifiers::{full_attestation_id, Network, Timestamp, TxHash};
use crate::quantities::Uint;
use crate::record::AttestationRecord;

/// Fields that must be present in every canonical payload.
pub const REQUIRED_FIELDS: [&str; 11] = [
    "businessName",
    "transactionHash",
    "invoiceDate",
    "customer",
    "productName",
    "category",
    "quantity",
    "amount",
    "network",
    "attestationId",
    "fullAttestationId",
];

/// Error returned when a canonical payload cannot be produced.
#[derive(Debug, Error)]
#[error("encoding failed: {0}")]
pub struct EncodeError(pub String);

/// Error returned when decoding a canonical payload fails.
///
/// Every variant is recoverable: a bad payload yields a discriminated
/// outcome, never a fault.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The structural wrapper could not be parsed.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
    /// A required field is absent.
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    /// A numeric field contains non-digit characters, a sign, or is not a
    /// digit string at all.
    #[error("invalid numeric field {field}: {value}")]
    InvalidNumericField {
        /// Field name that failed re-hydration.
        field: &'static str,
        /// Offending value, as JSON text.
        value: String,
    },
    /// A non-numeric field fails its shape constraint (hash or network).
    #[error("invalid field {field}: {reason}")]
    InvalidField {
        /// Field name that failed validation.
        field: &'static str,
        /// Reason for rejection.
        reason: String,
    },
    /// `fullAttestationId` is not the derivation from `attestationId`.
    #[error("identifier mismatch: expected {expected}, found {found}")]
    IdentifierMismatch {
        /// The deterministic derivation from `attestationId`.
        expected: String,
        /// The value carried by the payload.
        found: String,
    },
}

/// Encodes a complete record into its canonical text form, capturing the
/// current instant as the provenance timestamp.
pub fn encode(record: &AttestationRecord) -> Result<String, EncodeError> {
    encode_at(record, &Timestamp::now())
}

/// Encodes a complete record with an explicit provenance timestamp.
///
/// The timestamp is informational only; it never participates in identity
/// checks and is ignored on decode. Output bytes are deterministic for a
/// given record and timestamp (RFC 8785 key ordering).
pub fn encode_at(record: &AttestationRecord, captured_at: &Timestamp) -> Result<String, EncodeError> {
    let mut value = serde_json::to_value(record).map_err(|err| EncodeError(err.to_string()))?;
    value["timestamp"] = Value::String(captured_at.as_ref().to_string());
    to_string(&value).map_err(|err| EncodeError(err.to_string()))
}

/// Decodes a canonical payload back into a record.
///
/// Unknown extra fields are tolerated and ignored. All eleven required
/// fields must be present, every arbitrary-precision field must be a
/// decimal digit string, and `fullAttestationId` must equal the
/// deterministic derivation from `attestationId`.
pub fn decode(text: &str) -> Result<AttestationRecord, DecodeError> {
    let value: Value =
        serde_json::from_str(text).map_err(|err| DecodeError::MalformedPayload(err.to_string()))?;
    let map = value
        .as_object()
        .ok_or_else(|| DecodeError::MalformedPayload("payload is not a JSON object".to_string()))?;

    // Presence first, so an absent field reports MissingField rather than a
    // type error.
    for name in REQUIRED_FIELDS {
        if !map.contains_key(name) {
            return Err(DecodeError::MissingField(name));
        }
    }

    let business_name = string_field(map, "businessName")?.to_string();
    let customer = string_field(map, "customer")?.to_string();
    let product_name = string_field(map, "productName")?.to_string();
    let category = string_field(map, "category")?.to_string();

    let transaction_hash =
        TxHash::parse(string_field(map, "transactionHash")?).map_err(|err| {
            DecodeError::InvalidField {
                field: "transactionHash",
                reason: err.to_string(),
            }
        })?;
    let network = Network::parse(string_field(map, "network")?).map_err(|err| {
        DecodeError::InvalidField {
            field: "network",
            reason: err.to_string(),
        }
    })?;

    let invoice_date = uint_field(map, "invoiceDate")?;
    let quantity = uint_field(map, "quantity")?;
    let amount = uint_field(map, "amount")?;

    let attestation_id = string_field(map, "attestationId")?.to_string();
    let found = string_field(map, "fullAttestationId")?.to_string();
    let expected = full_attestation_id(&attestation_id);
    if found != expected {
        return Err(DecodeError::IdentifierMismatch { expected, found });
    }

    Ok(AttestationRecord {
        business_name,
        transaction_hash,
        invoice_date,
        customer,
        product_name,
        category,
        quantity,
        amount,
        network,
        attestation_id,
        full_attestation_id: found,
    })
}

fn string_field<'a>(map: &'a Map<String, Value>, field: &'static str) -> Result<&'a str, DecodeError> {
    match map.get(field) {
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(other) => Err(DecodeError::MalformedPayload(format!(
            "field {} is not a string: {}",
            field, other
        ))),
        None => Err(DecodeError::MissingField(field)),
    }
}

fn uint_field(map: &Map<String, Value>, field: &'static str) -> Result<Uint, DecodeError> {
    // Digit strings only; a native JSON number here would already have lost
    // precision in transit.
    let raw = match map.get(field) {
        Some(Value::String(s)) => s.as_str(),
        Some(other) => {
            return Err(DecodeError::InvalidNumericField {
                field,
                value: other.to_string(),
            })
        }
        None => return Err(DecodeError::MissingField(field)),
    };
    Uint::parse(raw).map_err(|_| DecodeError::InvalidNumericField {
        field,
        value: raw.to_string(),
    })
}
