//! Shared handler state

use crate::db::SharedStore;
use crate::nlp::NlpClient;

/// State handed to every route handler
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub nlp: Option<NlpClient>,
    pub strict_validation: bool,
}
