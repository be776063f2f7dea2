//! Prometheus metrics for the API server.

use std::time::Instant;

use axum::body::Body;
use axum::extract::MatchedPath;
use axum::http::{Request, Response};
use axum::middleware::Next;
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

/// Initialize the Prometheus metrics recorder.
/// Returns a handle that can be used to render metrics.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

/// Metric names as constants for consistency.
pub mod names {
    // HTTP metrics
    pub const HTTP_REQUESTS_TOTAL: &str = "nca_http_requests_total";
    pub const HTTP_REQUEST_DURATION_SECONDS: &str = "nca_http_request_duration_seconds";
    pub const HTTP_REQUESTS_IN_FLIGHT: &str = "nca_http_requests_in_flight";

    // Auth metrics
    pub const AUTH_FAILURES_TOTAL: &str = "nca_auth_failures_total";

    // Processing metrics
    pub const VIDEOS_PROCESSED_TOTAL: &str = "nca_videos_processed_total";
    pub const PROCESSING_FAILURES_TOTAL: &str = "nca_processing_failures_total";
}

/// Label used for requests that did not match a route.
const UNMATCHED_PATH: &str = "unmatched";

/// Record an HTTP request.
pub fn record_http_request(method: &str, path: &str, status: u16, duration_secs: f64) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];

    counter!(names::HTTP_REQUESTS_TOTAL, &labels).increment(1);
    histogram!(names::HTTP_REQUEST_DURATION_SECONDS, &labels).record(duration_secs);
}

/// Record a rejected API key.
pub fn record_auth_failure(endpoint: &str) {
    let labels = [("endpoint", endpoint.to_string())];
    counter!(names::AUTH_FAILURES_TOTAL, &labels).increment(1);
}

/// Record a successfully processed video.
pub fn record_video_processed(processor: &str) {
    let labels = [("processor", processor.to_string())];
    counter!(names::VIDEOS_PROCESSED_TOTAL, &labels).increment(1);
}

/// Record a failed processing run.
pub fn record_processing_failure(processor: &str) {
    let labels = [("processor", processor.to_string())];
    counter!(names::PROCESSING_FAILURES_TOTAL, &labels).increment(1);
}

/// Metrics middleware for HTTP requests.
///
/// Paths are labelled by route template to keep cardinality bounded.
pub async fn metrics_middleware(request: Request<Body>, next: Next) -> Response<Body> {
    let method = request.method().to_string();
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| UNMATCHED_PATH.to_string());
    let start = Instant::now();

    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).increment(1.0);
    let response = next.run(request).await;
    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).decrement(1.0);

    let status = response.status().as_u16();
    let duration = start.elapsed().as_secs_f64();

    record_http_request(&method, &path, status, duration);

    response
}
