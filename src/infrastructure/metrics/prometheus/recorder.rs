use metrics::{describe_counter, describe_histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Latency buckets in seconds, matching the Prometheus client defaults.
const RESPONSE_TIME_BUCKETS: &[f64] = &[
    0.005, 0.01, 0.025, 0.05, 0.075, 0.1, 0.25, 0.5, 0.75, 1.0, 2.5, 5.0, 7.5, 10.0,
];

/// Initialize the Prometheus recorder globally and store the handle.
///
/// The recorder can only be installed once per process; repeat calls
/// (router rebuilt in tests) are a no-op.
pub fn init_metrics() {
    if HANDLE.get().is_some() {
        return;
    }

    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("voting_app_response_time_seconds".to_string()),
            RESPONSE_TIME_BUCKETS,
        )
        .expect("bucket list must not be empty")
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    describe_counter!(
        "voting_app_request_count",
        "Total number of HTTP requests by endpoint and method"
    );
    describe_histogram!(
        "voting_app_response_time_seconds",
        "Response time in seconds by endpoint"
    );

    HANDLE.set(handle).ok();
}

/// Render the current metrics in Prometheus text format.
pub fn render_metrics() -> String {
    HANDLE
        .get()
        .expect("metrics recorder not initialized")
        .render()
}
