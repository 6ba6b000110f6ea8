//! Spoken summary endpoint

use axum::{Json, extract::rejection::JsonRejection};
use healthspeak_core::{DEFAULT_MAX_SENTENCES, Envelope, SpeechOptions, Utterance, speech};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

fn default_max_sentences() -> usize {
    DEFAULT_MAX_SENTENCES
}

/// Request body for summarization
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeRequest {
    text: String,
    #[serde(default = "default_max_sentences")]
    max_sentences: usize,
    #[serde(flatten)]
    speech: SpeechOptions,
}

/// Response body for summarization
#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    summary: String,
    utterance: Utterance,
}

/// POST /api/summarize - Shorten text and plan its playback
///
/// The utterance is played by the client's speech engine; the server only
/// decides the text, rate, pitch and voice.
pub async fn summarize(
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Result<Json<Envelope<SummarizeResponse>>, AppError> {
    let Json(request) = payload?;

    let utterance = speech::summary_utterance(&request.text, request.max_sentences, &request.speech);

    Ok(Json(Envelope::ok(SummarizeResponse {
        summary: utterance.text.clone(),
        utterance,
    })))
}
