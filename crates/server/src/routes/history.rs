//! History record HTTP handlers

use axum::{Json, body::Bytes, extract::State};
use healthspeak_core::{
    Created, Data, Envelope, HistoryError, HistoryRecord, RecordId, StoredRecord, record,
};
use serde_json::Value as JsonValue;

use crate::error::AppError;
use crate::state::AppState;

const SAVE_FAILED: &str = "Failed to save history";
const FETCH_FAILED: &str = "Failed to fetch history";

/// POST /api/history - Store a history record
///
/// The body is read as raw bytes so that unparseable JSON takes the same
/// failure path as a storage error unless strict validation is enabled.
pub async fn append(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Envelope<Created>>, AppError> {
    match save(&state, &body).await {
        Ok(id) => {
            tracing::info!(id = %id, "History record saved");
            Ok(Json(Envelope::ok(Created { id })))
        }
        Err(HistoryError::MalformedRequestBody(msg)) if state.strict_validation => {
            tracing::warn!(error = %msg, "Rejected malformed history record");
            Err(AppError::BadRequest(msg))
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to save history");
            Err(AppError::Internal(SAVE_FAILED.to_string()))
        }
    }
}

async fn save(state: &AppState, body: &[u8]) -> Result<RecordId, HistoryError> {
    let value: JsonValue = serde_json::from_slice(body)
        .map_err(|e| HistoryError::MalformedRequestBody(e.to_string()))?;
    let document = record::into_document(value)?;

    if state.strict_validation {
        HistoryRecord::validate(&document)?;
    }

    state.store.append(document).await
}

/// GET /api/history - List every stored record
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Envelope<Data<Vec<StoredRecord>>>>, AppError> {
    let records = state.store.list().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to fetch history");
        AppError::Internal(FETCH_FAILED.to_string())
    })?;

    tracing::debug!(count = records.len(), "History listed");
    Ok(Json(Envelope::ok(Data { data: records })))
}
