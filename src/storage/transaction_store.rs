//! Store adapter mediating reads and writes of the persisted transaction
//! collection. Append-only: no update or delete path exists.

use tracing::debug;

use crate::{errors::StoreError, ledger::Transaction};

use super::{KeyValueStore, Result};

/// Fixed storage key holding the serialized transaction list.
pub const TRANSACTIONS_KEY: &str = "@gofinances:transactions";

pub struct TransactionStore<S: KeyValueStore> {
    backend: S,
}

impl<S: KeyValueStore> TransactionStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Loads every persisted record in storage order. An absent key yields
    /// an empty list; invalid JSON or a malformed record fails the load.
    pub fn load_all(&self) -> Result<Vec<Transaction>> {
        let raw = match self.backend.get(TRANSACTIONS_KEY)? {
            Some(raw) => raw,
            None => return Ok(Vec::new()),
        };
        let records: Vec<Transaction> = serde_json::from_str(&raw)?;
        for record in &records {
            validate_record(record)?;
        }
        debug!(count = records.len(), "loaded transaction collection");
        Ok(records)
    }

    /// Appends `record` to the end of the collection and writes the whole
    /// document back. Single-writer usage is assumed; a failed write leaves
    /// the previously stored document intact.
    pub fn append_one(&self, record: Transaction) -> Result<()> {
        validate_record(&record)?;
        let mut records = self.load_all()?;
        records.push(record);
        let json = serde_json::to_string(&records)?;
        self.backend.set(TRANSACTIONS_KEY, &json)?;
        debug!(count = records.len(), "persisted transaction collection");
        Ok(())
    }
}

/// Shape checks applied at the store boundary, stricter than the wire format
/// itself: a malformed amount never reaches the formatting stage.
fn validate_record(record: &Transaction) -> Result<()> {
    if record.name.trim().is_empty() {
        return Err(StoreError::InvalidRecord(format!(
            "record {} has an empty name",
            record.id
        )));
    }
    if record.value().is_none() {
        return Err(StoreError::InvalidRecord(format!(
            "record {} amount `{}` is not a positive number",
            record.id, record.amount
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::TransactionKind;
    use crate::storage::JsonFileStore;
    use tempfile::tempdir;

    fn store_in(dir: &std::path::Path) -> TransactionStore<JsonFileStore> {
        TransactionStore::new(JsonFileStore::new(dir.to_path_buf()).unwrap())
    }

    #[test]
    fn empty_store_loads_as_empty_sequence() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn append_preserves_insertion_order() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());

        let first = Transaction::new("Salário", "1200.00", TransactionKind::Positive, "salary");
        let second = Transaction::new("Mercado", "89.90", TransactionKind::Negative, "food");
        store.append_one(first.clone()).unwrap();
        store.append_one(second.clone()).unwrap();

        let loaded = store.load_all().unwrap();
        assert_eq!(loaded, vec![first, second]);
    }

    #[test]
    fn corrupt_document_fails_with_decode_error() {
        let dir = tempdir().unwrap();
        let backend = JsonFileStore::new(dir.path().to_path_buf()).unwrap();
        backend.set(TRANSACTIONS_KEY, "not json").unwrap();

        let store = TransactionStore::new(backend);
        let err = store.load_all().expect_err("corrupt JSON must fail");
        assert!(matches!(err, StoreError::Decode(_)), "got {err:?}");
    }

    #[test]
    fn malformed_amount_is_rejected_at_the_boundary() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());

        let mut record = Transaction::new("Conta", "100.00", TransactionKind::Negative, "food");
        record.amount = "NaN".into();
        let err = store.append_one(record).expect_err("bad amount must fail");
        assert!(matches!(err, StoreError::InvalidRecord(_)), "got {err:?}");
        assert!(store.load_all().unwrap().is_empty());
    }
}
