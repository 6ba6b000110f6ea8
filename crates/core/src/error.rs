use thiserror::Error;

/// History store failures
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Malformed request body: {0}")]
    MalformedRequestBody(String),
}

/// Speech playback failures
#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("Speech synthesis is not supported on this platform")]
    Unsupported,

    #[error("Speech engine error: {0}")]
    Engine(String),
}
