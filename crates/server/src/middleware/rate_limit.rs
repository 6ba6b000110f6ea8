//! Rate limiting middleware

use axum::{
    body::Body,
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use governor::{Quota, RateLimiter, clock::DefaultClock, state::InMemoryState};
use std::num::NonZeroU32;
use std::sync::Arc;

use crate::error::AppError;

/// Rate limiter state (shared across requests)
pub type SharedRateLimiter =
    Arc<RateLimiter<governor::state::NotKeyed, InMemoryState, DefaultClock>>;

/// Create a new rate limiter with specified requests per second
pub fn create_rate_limiter(requests_per_second: u32) -> SharedRateLimiter {
    let rps = NonZeroU32::new(requests_per_second).unwrap_or(NonZeroU32::MIN);
    Arc::new(RateLimiter::direct(Quota::per_second(rps)))
}

/// Rate limiting middleware
pub async fn rate_limit_middleware(request: Request<Body>, next: Next) -> Response {
    let limiter = request.extensions().get::<SharedRateLimiter>().cloned();

    if let Some(limiter) = limiter {
        if limiter.check().is_err() {
            tracing::warn!(path = %request.uri().path(), "Rate limit exceeded");
            return AppError::TooManyRequests(
                "Rate limit exceeded. Please try again later.".to_string(),
            )
            .into_response();
        }
    }

    next.run(request).await
}
