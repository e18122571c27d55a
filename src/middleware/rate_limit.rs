use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

/// Fixed-window limiter for inbound search requests: at most `budget` requests
/// are admitted per `window`.
#[derive(Clone, Debug)]
pub struct InboundRateLimiter {
    budget: u32,
    window: Duration,
    admitted: Arc<Mutex<(Instant, u32)>>,
}

impl InboundRateLimiter {
    /// One-second window admitting `rps` requests. Zero is treated as one.
    pub fn new(rps: u32) -> Self {
        Self::with_window(rps, Duration::from_secs(1))
    }

    pub fn with_window(budget: u32, window: Duration) -> Self {
        Self {
            budget: budget.max(1),
            window,
            admitted: Arc::new(Mutex::new((Instant::now(), 0))),
        }
    }

    pub fn allow(&self) -> bool {
        self.allow_at(Instant::now())
    }

    fn allow_at(&self, now: Instant) -> bool {
        let mut admitted = self
            .admitted
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let (opened, count) = &mut *admitted;
        if now.saturating_duration_since(*opened) >= self.window {
            *opened = now;
            *count = 0;
        }
        let admit = *count < self.budget;
        if admit {
            *count += 1;
        }
        admit
    }
}

pub async fn rps_middleware(
    State(limiter): State<InboundRateLimiter>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if !limiter.allow() {
        tracing::warn!(path = %req.uri().path(), "Inbound rate limit exceeded");
        let body = Json(json!({
            "success": false,
            "error": "rate_limit_exceeded",
            "jobs": [],
        }));
        return (StatusCode::TOO_MANY_REQUESTS, body).into_response();
    }
    next.run(req).await
}
