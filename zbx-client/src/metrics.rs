//! Client metrics definitions
//!
//! OpenTelemetry instruments recorded by [`RpcClient`](crate::RpcClient) when
//! observability is enabled through the builder.
//!
//! # Metrics Collected
//!
//! - **zbx.client.requests.total**: calls made, by method and status (counter)
//! - **zbx.client.request.duration**: round-trip latency in seconds (histogram)
//! - **zbx.client.errors.total**: failures, by error kind (counter)
//! - **zbx.client.requests.in_flight**: calls awaiting a response (up/down counter)

use opentelemetry::{
    global,
    metrics::{Counter, Histogram, Meter, UpDownCounter},
    KeyValue,
};

/// Client metrics for monitoring
pub struct ClientMetrics {
    /// Total number of requests sent
    pub requests_total: Counter<u64>,
    /// Request duration in seconds
    pub request_duration: Histogram<f64>,
    /// Total number of errors
    pub errors_total: Counter<u64>,
    /// Requests currently awaiting a response
    pub in_flight: UpDownCounter<i64>,
}

impl ClientMetrics {
    /// Create metrics on the global meter provider
    pub fn new(service_name: impl Into<String>) -> Self {
        let meter = global::meter_with_scope(
            opentelemetry::InstrumentationScope::builder(service_name.into()).build(),
        );
        Self::new_with_meter(&meter)
    }

    /// Create metrics on a specific meter
    pub fn new_with_meter(meter: &Meter) -> Self {
        Self {
            requests_total: meter
                .u64_counter("zbx.client.requests.total")
                .with_description("Total number of API calls sent")
                .build(),
            request_duration: meter
                .f64_histogram("zbx.client.request.duration")
                .with_description("API call round-trip time in seconds")
                .with_unit("s")
                .build(),
            errors_total: meter
                .u64_counter("zbx.client.errors.total")
                .with_description("Total number of failed API calls and transport errors")
                .build(),
            in_flight: meter
                .i64_up_down_counter("zbx.client.requests.in_flight")
                .with_description("API calls awaiting a response")
                .build(),
        }
    }

    /// Record a finished call
    pub fn record_request(&self, method: &str, status: &str, duration_secs: f64) {
        let attributes = &[
            KeyValue::new("method", method.to_string()),
            KeyValue::new("status", status.to_string()),
        ];
        self.requests_total.add(1, attributes);
        self.request_duration.record(duration_secs, attributes);
    }

    /// Record an error by kind
    pub fn record_error(&self, error_kind: &str) {
        self.errors_total
            .add(1, &[KeyValue::new("error_kind", error_kind.to_string())]);
    }

    /// A call started waiting for its response
    pub fn request_started(&self) {
        self.in_flight.add(1, &[]);
    }

    /// A call stopped waiting, whatever the outcome
    pub fn request_finished(&self) {
        self.in_flight.add(-1, &[]);
    }
}
