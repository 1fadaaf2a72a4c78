//! Output formatting utilities.

use attestdoc_canonical::AttestationRecord;

/// Formats a record as pretty JSON.
pub fn record_json(record: &AttestationRecord) -> String {
    serde_json::to_value(record)
        .and_then(|v| serde_json::to_string_pretty(&v))
        .unwrap_or_else(|_| "{}".to_string())
}

/// Prints a record as label/value rows.
pub fn print_record(record: &AttestationRecord) {
    let rows = [
        ("Business Name", record.business_name.clone()),
        ("Invoice Date", record.invoice_date.to_string()),
        ("Customer Address", record.customer.clone()),
        ("Product Name", record.product_name.clone()),
        ("Category", record.category.clone()),
        ("Quantity", record.quantity.to_string()),
        ("Amount", format!("{} wei", record.amount)),
        ("Transaction Hash", record.transaction_hash.to_hex()),
        ("Network", record.network.to_string()),
        ("Attestation ID", record.attestation_id.clone()),
        ("Full Attestation ID", record.full_attestation_id.clone()),
    ];

    for (label, value) in rows {
        println!("{:<20} {}", format!("{}:", label), value);
    }
}
