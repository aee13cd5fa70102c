//! Cross-cutting request metrics.

use crate::app_state::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

/// Wraps every tracked route with request counting and latency timing.
///
/// The request counter is incremented before the handler runs; the elapsed
/// wall-clock time is recorded once it returns, whether the response is a
/// success or an error. The response itself passes through unchanged.
pub async fn track_metrics(State(state): State<AppState>, req: Request, next: Next) -> Response {
    // ---
    let endpoint = req.uri().path().to_owned();
    let method = req.method().to_string();

    state.metrics().record_request(&endpoint, &method);

    let start = Instant::now();
    let response = next.run(req).await;
    state.metrics().record_response_time(start, &endpoint);

    response
}
