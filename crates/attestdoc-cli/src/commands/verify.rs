//! Verify command implementation.

use attestdoc_core::{verify, VerificationOutcome};
use serde_json::json;

use crate::ledger::FileLedger;

pub fn run(
    artifact: String,
    ledger_path: String,
    strict: bool,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = std::fs::read(&artifact)?;
    let ledger = FileLedger::open(&ledger_path)?;

    match verify(&bytes, &ledger) {
        VerificationOutcome::Verified { record } => {
            if json_output {
                let result = json!({
                    "verified": true,
                    "fullAttestationId": record.full_attestation_id,
                });
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("Verified: {}", record.full_attestation_id);
            }
        }
        VerificationOutcome::Rejected(reason) => {
            if json_output {
                let result = json!({
                    "verified": false,
                    "reason": reason.to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("Rejected: {}", reason);
            }
            if strict {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
