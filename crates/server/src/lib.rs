//! healthspeak-server library crate
//!
//! Exposes `build_app`, `config` and the store backends for integration
//! tests. The actual binary entrypoint is in `main.rs`.

pub mod config;
pub mod db;
mod error;
mod middleware;
pub mod nlp;
mod routes;
mod state;

use std::sync::OnceLock;

use axum::{Extension, Router, middleware as axum_mw, routing::get};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use db::SharedStore;
use nlp::NlpClient;
use state::AppState;

pub use middleware::REQUEST_ID_HEADER;

static PROMETHEUS: OnceLock<PrometheusHandle> = OnceLock::new();

/// Handle to the process-wide Prometheus recorder, installed on first use.
///
/// Every router built in this process renders the same recorder, so
/// `/metrics` reflects requests served by any of them.
pub fn prometheus_handle() -> PrometheusHandle {
    PROMETHEUS
        .get_or_init(|| {
            let recorder = PrometheusBuilder::new().build_recorder();
            let handle = recorder.handle();
            if metrics::set_global_recorder(recorder).is_err() {
                tracing::warn!("A global metrics recorder was already installed");
            }
            handle
        })
        .clone()
}

/// Build the full application router with all routes and middleware.
///
/// The store is created by the caller and injected here so its lifecycle
/// (startup, shutdown) stays with the process rather than the router.
pub fn build_app(store: SharedStore, config: &Config) -> Router {
    // Create rate limiter
    let rate_limiter = middleware::create_rate_limiter(config.rate_limit_rps);

    // Create NLP client (None if GOOGLE_API_KEY not set)
    let nlp = config.google_api_key.as_ref().map(|key| match &config.nlp_api_url {
        Some(url) => NlpClient::with_endpoint(key.clone(), url.clone()),
        None => NlpClient::new(key.clone()),
    });

    let state = AppState {
        store,
        nlp,
        strict_validation: config.strict_validation,
    };

    // API routes (rate limited)
    let api_routes = Router::new()
        .nest("/api", routes::api_routes())
        .layer(axum_mw::from_fn(middleware::rate_limit_middleware))
        .layer(Extension(rate_limiter));

    let prometheus_handle = prometheus_handle();

    // Operational routes
    let public_routes = Router::new()
        .route("/health", get(routes::health::check))
        .route("/metrics", get(routes::metrics::get))
        .layer(Extension(prometheus_handle));

    // Build CORS layer
    let cors = if config.cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Build application
    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .with_state(state)
        .layer(axum_mw::from_fn(middleware::audit_middleware))
        .layer(axum_mw::from_fn(middleware::request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(axum_mw::from_fn(middleware::metrics_middleware))
}
