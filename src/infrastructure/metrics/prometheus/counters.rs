use metrics::{counter, histogram};
use std::time::Instant;

/// Increment the request counter for an (endpoint, method) label pair.
///
/// The counter is created lazily on first observation per pair and is
/// never reset for the lifetime of the process.
pub fn increment_request_count(endpoint: &str, method: &str) {
    counter!(
        "voting_app_request_count",
        "endpoint" => endpoint.to_owned(),
        "method" => method.to_owned()
    )
    .increment(1);
}

/// Track response latency for an endpoint using a histogram.
pub fn track_response_time(start: Instant, endpoint: &str) {
    let elapsed = start.elapsed();
    histogram!("voting_app_response_time_seconds", "endpoint" => endpoint.to_owned())
        .record(elapsed);
}
