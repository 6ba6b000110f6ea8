//! healthspeak-core: Shared HealthSpeak domain types and logic
//!
//! This crate provides the pieces of HealthSpeak that need no I/O:
//! the extractive summarizer, history record types, the JSON response
//! envelope, speech playback control and the prescription explanation.

pub mod envelope;
pub mod error;
pub mod explanation;
pub mod record;
pub mod speech;
pub mod summarize;

pub use envelope::{Created, Data, Envelope, Failure};
pub use error::{HistoryError, SpeechError};
pub use explanation::{Entity, PrescriptionExplanation};
pub use record::{Document, HistoryRecord, RecordId, RecordStatus, StoredRecord};
pub use speech::{SpeechController, SpeechOptions, TextToSpeechEngine, Utterance};
pub use summarize::{DEFAULT_MAX_SENTENCES, Summarizer, summarize};
