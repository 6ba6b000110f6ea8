//! JSON response envelope shared by all `/api` endpoints
//!
//! Every response carries a boolean `success` flag next to its payload:
//! `{ "success": true, "id": ... }`, `{ "success": true, "data": ... }` or
//! `{ "success": false, "error": "..." }`.

use serde::{Deserialize, Serialize};

use crate::record::RecordId;

/// Response wrapper adding the `success` flag to a payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T> {
    pub success: bool,

    #[serde(flatten)]
    pub body: T,
}

impl<T> Envelope<T> {
    pub fn ok(body: T) -> Self {
        Self {
            success: true,
            body,
        }
    }
}

impl Envelope<Failure> {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            body: Failure {
                error: message.into(),
            },
        }
    }
}

/// Payload for a newly stored record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Created {
    pub id: RecordId,
}

/// Payload carrying result data
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Data<T> {
    pub data: T,
}

/// Payload for a failed request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Failure {
    pub error: String,
}
