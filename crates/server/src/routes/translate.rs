//! Prescription explanation endpoint

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use healthspeak_core::{Data, Envelope, PrescriptionExplanation};
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

/// Request body for translation
#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    text: String,
}

/// POST /api/translate - Explain a prescription in plain language
pub async fn translate(
    State(state): State<AppState>,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> Result<Json<Envelope<Data<PrescriptionExplanation>>>, AppError> {
    let Json(request) = payload?;

    let client = state
        .nlp
        .as_ref()
        .ok_or_else(|| AppError::ServiceUnavailable("GOOGLE_API_KEY not configured".to_string()))?;

    if request.text.trim().is_empty() {
        return Err(AppError::BadRequest("Prescription text is empty".to_string()));
    }

    let entities = client.analyze_entities(&request.text).await.map_err(|e| {
        tracing::error!(error = %e, "Entity extraction failed");
        AppError::BadGateway(e.to_string())
    })?;

    tracing::info!(entities = entities.len(), "Prescription analyzed");

    Ok(Json(Envelope::ok(Data {
        data: PrescriptionExplanation::from_entities(&entities),
    })))
}
