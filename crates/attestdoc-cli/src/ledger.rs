//! JSON-file-backed attestation ledger used to drive the flow locally.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use attestdoc_canonical::full_attestation_id;
use attestdoc_core::{AttestationLedger, LedgerError};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Default, Serialize, Deserialize)]
struct LedgerState {
    next_id: u64,
    entries: BTreeMap<String, Value>,
}

/// Attestation ledger persisted as a JSON file. Registration ids are
/// assigned from a decimal counter; entries are keyed by the namespaced
/// identifier.
pub struct FileLedger {
    path: PathBuf,
    state: LedgerState,
}

impl FileLedger {
    /// Opens an existing ledger file, or starts an empty ledger if the file
    /// does not exist yet.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, LedgerError> {
        let path = path.as_ref().to_path_buf();
        let state = if path.exists() {
            let raw = fs::read_to_string(&path)
                .map_err(|e| LedgerError::Unavailable(e.to_string()))?;
            serde_json::from_str(&raw)
                .map_err(|e| LedgerError::Unavailable(format!("corrupt ledger file: {}", e)))?
        } else {
            LedgerState::default()
        };
        Ok(Self { path, state })
    }

    fn persist(&self) -> Result<(), LedgerError> {
        let raw = serde_json::to_string_pretty(&self.state)
            .map_err(|e| LedgerError::Unavailable(e.to_string()))?;
        fs::write(&self.path, raw).map_err(|e| LedgerError::Unavailable(e.to_string()))
    }
}

impl AttestationLedger for FileLedger {
    fn register(
        &mut self,
        schema_id: &str,
        indexing_value: &str,
        data: &Value,
    ) -> Result<String, LedgerError> {
        self.state.next_id += 1;
        let id = self.state.next_id.to_string();
        self.state.entries.insert(
            full_attestation_id(&id),
            json!({
                "schemaId": schema_id,
                "indexingValue": indexing_value,
                "data": data,
            }),
        );
        self.persist()?;
        Ok(id)
    }

    fn lookup(&self, full_attestation_id: &str) -> Result<Option<Value>, LedgerError> {
        Ok(self.state.entries.get(full_attestation_id).cloned())
    }
}
