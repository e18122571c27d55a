use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

/// Browser clients may call the search API from any origin.
pub fn api_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .allow_origin(Any)
}
