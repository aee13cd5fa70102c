use std::sync::Arc;
use std::time::Instant;

/// Abstraction for application metrics (counters, histograms).
pub trait Metrics: Send + Sync + 'static {
    // ---
    /// Render current metrics in Prometheus text format.
    fn render(&self) -> String;

    /// Record one inbound request for an (endpoint, method) label pair.
    fn record_request(&self, endpoint: &str, method: &str);

    /// Record how long an endpoint took to produce its response.
    fn record_response_time(&self, start: Instant, endpoint: &str);
}

/// Type alias for any backend that implements Metrics.
pub type MetricsPtr = Arc<dyn Metrics>;
