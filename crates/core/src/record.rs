//! Translation history records

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value as JsonValue};
use uuid::Uuid;

use crate::error::HistoryError;

/// JSON object as stored in the history collection
pub type Document = Map<String, JsonValue>;

/// Key under which the store-assigned identifier is exposed
pub const ID_FIELD: &str = "_id";

/// Store-assigned record identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Generate a fresh identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for RecordId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for RecordId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::try_parse(s).map(Self)
    }
}

/// Processing status of a translated document.
///
/// The set is open: unknown strings are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecordStatus {
    Completed,
    Processing,
    Failed,
    Other(String),
}

impl From<String> for RecordStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Completed" => RecordStatus::Completed,
            "Processing" => RecordStatus::Processing,
            "Failed" => RecordStatus::Failed,
            _ => RecordStatus::Other(value),
        }
    }
}

impl From<RecordStatus> for String {
    fn from(status: RecordStatus) -> Self {
        match status {
            RecordStatus::Completed => "Completed".to_string(),
            RecordStatus::Processing => "Processing".to_string(),
            RecordStatus::Failed => "Failed".to_string(),
            RecordStatus::Other(value) => value,
        }
    }
}

/// Typed view of a history record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    pub document_type: String,
    pub document_name: String,
    pub date_translated: DateTime<FixedOffset>,
    pub status: RecordStatus,
    pub category: String,
}

impl HistoryRecord {
    /// Check a document against the record schema
    pub fn validate(document: &Document) -> Result<Self, HistoryError> {
        serde_json::from_value(JsonValue::Object(document.clone()))
            .map_err(|e| HistoryError::MalformedRequestBody(e.to_string()))
    }
}

/// Accept any JSON object as a document.
///
/// Anything other than an object is rejected. A caller-supplied `_id` is
/// dropped because identity belongs to the store.
pub fn into_document(value: JsonValue) -> Result<Document, HistoryError> {
    match value {
        JsonValue::Object(mut map) => {
            map.remove(ID_FIELD);
            Ok(map)
        }
        other => Err(HistoryError::MalformedRequestBody(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

/// A record as read back from the store
#[derive(Debug, Clone, PartialEq)]
pub struct StoredRecord {
    pub id: RecordId,
    pub body: Document,
}

impl StoredRecord {
    pub fn new(id: RecordId, mut body: Document) -> Self {
        body.remove(ID_FIELD);
        Self { id, body }
    }

    /// The submitted document with its `_id` attached
    pub fn to_document(&self) -> Document {
        let mut document = self.body.clone();
        document.insert(ID_FIELD.to_string(), JsonValue::String(self.id.to_string()));
        document
    }
}

impl Serialize for StoredRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_document().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn lisinopril() -> JsonValue {
        json!({
            "documentType": "Prescription",
            "documentName": "Lisinopril",
            "dateTranslated": "2024-01-01T00:00:00Z",
            "status": "Completed",
            "category": "Blood Pressure"
        })
    }

    #[test]
    fn test_validate_accepts_complete_record() {
        let document = into_document(lisinopril()).unwrap();
        let record = HistoryRecord::validate(&document).unwrap();
        assert_eq!(record.document_name, "Lisinopril");
        assert_eq!(record.status, RecordStatus::Completed);
    }

    #[test]
    fn test_validate_rejects_missing_field() {
        let mut document = into_document(lisinopril()).unwrap();
        document.remove("documentType");
        let err = HistoryRecord::validate(&document).unwrap_err();
        assert!(matches!(err, HistoryError::MalformedRequestBody(msg) if msg.contains("documentType")));
    }

    #[test]
    fn test_validate_rejects_bad_timestamp() {
        let mut document = into_document(lisinopril()).unwrap();
        document.insert("dateTranslated".into(), json!("yesterday"));
        assert!(HistoryRecord::validate(&document).is_err());
    }

    #[test]
    fn test_unknown_status_is_preserved() {
        let mut document = into_document(lisinopril()).unwrap();
        document.insert("status".into(), json!("Queued"));
        let record = HistoryRecord::validate(&document).unwrap();
        assert_eq!(record.status, RecordStatus::Other("Queued".into()));
        assert_eq!(serde_json::to_value(&record).unwrap()["status"], "Queued");
    }

    #[test]
    fn test_into_document_rejects_non_objects() {
        for value in [json!([1, 2]), json!("text"), json!(null), json!(3)] {
            assert!(matches!(
                into_document(value),
                Err(HistoryError::MalformedRequestBody(_))
            ));
        }
    }

    #[test]
    fn test_caller_id_is_discarded() {
        let document = into_document(json!({"_id": "mine", "category": "Antibiotics"})).unwrap();
        assert!(!document.contains_key(ID_FIELD));

        let id = RecordId::new();
        let stored = StoredRecord::new(id, document);
        let rendered = serde_json::to_value(&stored).unwrap();
        assert_eq!(rendered["_id"], id.to_string());
        assert_eq!(rendered["category"], "Antibiotics");
    }

    #[test]
    fn test_record_id_parses_its_display_form() {
        let id = RecordId::new();
        assert_eq!(id.to_string().parse::<RecordId>().unwrap(), id);
        assert!("not-an-id".parse::<RecordId>().is_err());
    }
}
