//! Static file hit counter.
//!
//! The counter is owned by `AppState` and handed to the middleware
//! explicitly; there is no process-global state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

/// Number of requests served from `/app`.
#[derive(Debug, Default)]
pub struct HitCounter(AtomicU64);

impl HitCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.0.store(0, Ordering::Relaxed);
    }
}

/// Counts every request that passes through, then forwards it.
pub async fn count_hits(
    State(counter): State<Arc<HitCounter>>,
    request: Request,
    next: Next,
) -> Response {
    counter.increment();
    next.run(request).await
}
