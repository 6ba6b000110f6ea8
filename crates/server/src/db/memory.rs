use std::sync::RwLock;

use async_trait::async_trait;
use healthspeak_core::{Document, HistoryError, RecordId, StoredRecord};

use super::HistoryStore;

/// Process-local history store
#[derive(Default)]
pub struct MemoryHistoryStore {
    records: RwLock<Vec<StoredRecord>>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> HistoryError {
    HistoryError::StorageUnavailable("history lock poisoned".to_string())
}

#[async_trait]
impl HistoryStore for MemoryHistoryStore {
    async fn append(&self, document: Document) -> Result<RecordId, HistoryError> {
        let id = RecordId::new();
        let mut records = self.records.write().map_err(|_| poisoned())?;
        records.push(StoredRecord::new(id, document));
        Ok(id)
    }

    async fn list(&self) -> Result<Vec<StoredRecord>, HistoryError> {
        let records = self.records.read().map_err(|_| poisoned())?;
        Ok(records.clone())
    }

    async fn ping(&self) -> Result<(), HistoryError> {
        self.records.read().map(|_| ()).map_err(|_| poisoned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document(name: &str) -> Document {
        match json!({"documentName": name}) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[tokio::test]
    async fn test_list_returns_insertion_order() {
        let store = MemoryHistoryStore::new();
        assert!(store.list().await.unwrap().is_empty());

        let first = store.append(document("Lisinopril")).await.unwrap();
        let second = store.append(document("Amoxicillin")).await.unwrap();

        let records = store.list().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, first);
        assert_eq!(records[1].id, second);
        assert_eq!(records[1].body["documentName"], "Amoxicillin");
    }

    #[tokio::test]
    async fn test_identical_payloads_get_distinct_ids() {
        let store = MemoryHistoryStore::new();
        let a = store.append(document("Lisinopril")).await.unwrap();
        let b = store.append(document("Lisinopril")).await.unwrap();
        assert_ne!(a, b);
        assert_eq!(store.list().await.unwrap().len(), 2);
    }
}
