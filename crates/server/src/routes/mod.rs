pub mod health;
pub mod history;
pub mod metrics;
pub mod summarize;
pub mod translate;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Build `/api` routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/history", get(history::list).post(history::append))
        .route("/summarize", post(summarize::summarize))
        .route("/translate", post(translate::translate))
}
