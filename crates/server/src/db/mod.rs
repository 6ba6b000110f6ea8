//! History record storage

mod memory;
mod postgres;

pub use memory::MemoryHistoryStore;
pub use postgres::{PgHistoryStore, create_pool};

use std::sync::Arc;

use async_trait::async_trait;
use healthspeak_core::{Document, HistoryError, RecordId, StoredRecord};

/// Document collection holding translation history.
///
/// Records are append-only: there is no update or delete.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Insert a document and return the identifier the store assigned to it
    async fn append(&self, document: Document) -> Result<RecordId, HistoryError>;

    /// Every stored record, in insertion order
    async fn list(&self) -> Result<Vec<StoredRecord>, HistoryError>;

    /// Check that the store is reachable
    async fn ping(&self) -> Result<(), HistoryError>;

    /// Release connections held by the store
    async fn close(&self) {}
}

/// Store handle shared by every request
pub type SharedStore = Arc<dyn HistoryStore>;
