//! Client for the language service's `documents:analyzeEntities` method

use healthspeak_core::Entity;
use serde::{Deserialize, Serialize};

const API_URL: &str = "https://language.googleapis.com/v1/documents:analyzeEntities";

/// NLP client failures
#[derive(Debug, thiserror::Error)]
pub enum NlpError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Language API error ({status}): {message}")]
    Api { status: u16, message: String },
}

/// Client for the cloud language service
#[derive(Clone)]
pub struct NlpClient {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeRequest<'a> {
    document: RequestDocument<'a>,
    encoding_type: &'static str,
}

#[derive(Serialize)]
struct RequestDocument<'a> {
    content: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct AnalyzeResponse {
    #[serde(default)]
    entities: Vec<Entity>,
}

/// Error detail returned by the service
#[derive(Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl NlpClient {
    /// Create a client for the public endpoint
    pub fn new(api_key: String) -> Self {
        Self::with_endpoint(api_key, API_URL.to_string())
    }

    /// Create a client that talks to a different endpoint (proxies, tests)
    pub fn with_endpoint(api_key: String, endpoint: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            endpoint,
        }
    }

    /// Extract entities from plain text
    pub async fn analyze_entities(&self, content: &str) -> Result<Vec<Entity>, NlpError> {
        let request = AnalyzeRequest {
            document: RequestDocument {
                content,
                kind: "PLAIN_TEXT",
            },
            encoding_type: "UTF8",
        };

        let response = self
            .http
            .post(&self.endpoint)
            .query(&[("key", &self.api_key)])
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ApiError>(&body) {
                Ok(api_err) => api_err.error.message,
                Err(_) => body,
            };
            return Err(NlpError::Api { status, message });
        }

        let parsed = response.json::<AnalyzeResponse>().await?;
        tracing::debug!(entities = parsed.entities.len(), "Entities extracted");
        Ok(parsed.entities)
    }
}
