pub mod docs;
pub mod health;
pub mod search;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::middleware::{
    cors::api_cors,
    rate_limit::{rps_middleware, InboundRateLimiter},
};
use crate::AppState;

pub fn router(state: AppState, inbound_rps: u32) -> Router {
    let search_api = Router::new()
        .route("/search", post(search::search_jobs))
        .route("/batch-search", post(search::batch_search))
        .layer(axum::middleware::from_fn_with_state(
            InboundRateLimiter::new(inbound_rps),
            rps_middleware,
        ));

    Router::new()
        .route("/health", get(health::health))
        .route("/api-docs/openapi.json", get(docs::openapi_json))
        .merge(search_api)
        .with_state(state)
        .layer(api_cors())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(1024 * 1024))
}
