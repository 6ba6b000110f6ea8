use async_trait::async_trait;
use deadpool_postgres::{Config, Pool, Runtime};
use healthspeak_core::{Document, HistoryError, RecordId, StoredRecord};
use serde_json::Value as JsonValue;
use tokio_postgres::NoTls;
use uuid::Uuid;

use super::HistoryStore;

const SCHEMA: &str = include_str!("schema.sql");

/// Create a connection pool from a database URL
pub fn create_pool(database_url: &str) -> Result<Pool, deadpool_postgres::CreatePoolError> {
    let mut cfg = Config::new();
    cfg.url = Some(database_url.to_string());
    cfg.create_pool(Some(Runtime::Tokio1), NoTls)
}

fn unavailable(err: impl std::fmt::Display) -> HistoryError {
    HistoryError::StorageUnavailable(err.to_string())
}

/// History store backed by a PostgreSQL JSONB table
#[derive(Clone)]
pub struct PgHistoryStore {
    pool: Pool,
}

impl PgHistoryStore {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    /// Build a pool for `database_url` and make sure the table exists
    pub async fn connect(database_url: &str) -> Result<Self, HistoryError> {
        let pool = create_pool(database_url).map_err(unavailable)?;
        let store = Self::new(pool);
        store.migrate().await?;
        Ok(store)
    }

    /// Create the history table if it is missing
    pub async fn migrate(&self) -> Result<(), HistoryError> {
        let client = self.pool.get().await.map_err(unavailable)?;
        client.batch_execute(SCHEMA).await.map_err(unavailable)
    }
}

#[async_trait]
impl HistoryStore for PgHistoryStore {
    async fn append(&self, document: Document) -> Result<RecordId, HistoryError> {
        let id = RecordId::new();
        let uuid = *id.as_uuid();
        let data = JsonValue::Object(document);
        let client = self.pool.get().await.map_err(unavailable)?;
        client
            .execute(
                "INSERT INTO history_records (id, data) VALUES ($1, $2)",
                &[&uuid, &data],
            )
            .await
            .map_err(unavailable)?;
        Ok(id)
    }

    async fn list(&self) -> Result<Vec<StoredRecord>, HistoryError> {
        let client = self.pool.get().await.map_err(unavailable)?;
        let rows = client
            .query("SELECT id, data FROM history_records ORDER BY seq", &[])
            .await
            .map_err(unavailable)?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            let id: Uuid = row.get(0);
            match row.get::<_, JsonValue>(1) {
                JsonValue::Object(body) => records.push(StoredRecord::new(id.into(), body)),
                _ => tracing::warn!(id = %id, "Skipping history row that is not a JSON object"),
            }
        }
        Ok(records)
    }

    async fn ping(&self) -> Result<(), HistoryError> {
        let client = self.pool.get().await.map_err(unavailable)?;
        client.query_one("SELECT 1", &[]).await.map_err(unavailable)?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close();
    }
}
