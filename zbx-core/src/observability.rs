//! Logging, tracing and metrics setup
//!
//! Library code in zbx only emits `tracing` events and spans. Whether they go
//! anywhere is up to the application, which can either install its own
//! subscriber or call [`init_observability`] once at startup.
//!
//! [`init_observability`] installs:
//!
//! - an `EnvFilter` built from `RUST_LOG`, falling back to the configured level
//! - a fmt layer writing JSON (default) or human-readable lines to stdout
//! - an OpenTelemetry span exporter (OTLP/gRPC) when traces are enabled
//! - a periodic OTLP metric reader when metrics are enabled
//!
//! ```rust,no_run
//! use zbx_core::ObservabilityConfig;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ObservabilityConfig::new("item-sync")
//!         .with_endpoint("http://localhost:4317")
//!         .with_traces(true)
//!         .with_log_level("debug");
//!
//!     zbx_core::init_observability(config).expect("Failed to init observability");
//!
//!     // ... talk to the API ...
//!
//!     zbx_core::shutdown_observability();
//! }
//! ```
//!
//! # Environment Variables
//!
//! - `OTEL_EXPORTER_OTLP_ENDPOINT`: collector endpoint
//! - `RUST_LOG`: filter directives (e.g. `info,zbx_client=debug`)

use opentelemetry::{global, KeyValue};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::metrics::SdkMeterProvider;
use opentelemetry_sdk::trace::SdkTracerProvider;
use opentelemetry_sdk::Resource;
use std::sync::OnceLock;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

static TRACER_PROVIDER: OnceLock<SdkTracerProvider> = OnceLock::new();
static METER_PROVIDER: OnceLock<SdkMeterProvider> = OnceLock::new();

/// Observability configuration
///
/// Exporting to a collector is opt-in: the defaults only set up local
/// structured logging, which is what a client library embedded in someone
/// else's tool usually wants.
///
/// # Defaults
///
/// - Service name: "zbx"
/// - Service version: the crate version
/// - OTLP endpoint: `$OTEL_EXPORTER_OTLP_ENDPOINT` or "http://localhost:4317"
/// - Traces and metrics export: off
/// - JSON logs: on
/// - Log level: `$RUST_LOG` or "info"
///
/// # Examples
///
/// ```rust
/// use zbx_core::ObservabilityConfig;
///
/// let config = ObservabilityConfig::new("zbx-inventory")
///     .with_endpoint("http://collector:4317")
///     .with_metrics(true)
///     .with_json_logs(false);
///
/// assert!(config.enable_metrics);
/// assert!(!config.enable_traces);
/// ```
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Service name attached to exported spans and metrics
    pub service_name: String,

    /// Service version attached to exported spans and metrics
    pub service_version: String,

    /// OTLP/gRPC collector endpoint
    pub otlp_endpoint: String,

    /// Export spans to the collector
    pub enable_traces: bool,

    /// Export metrics to the collector
    pub enable_metrics: bool,

    /// Write logs as JSON lines instead of human-readable text
    pub json_logs: bool,

    /// Fallback filter when `RUST_LOG` is unset ("error" ... "trace")
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: "zbx".to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            otlp_endpoint: std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
                .unwrap_or_else(|_| "http://localhost:4317".to_string()),
            enable_traces: false,
            enable_metrics: false,
            json_logs: true,
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }
}

impl ObservabilityConfig {
    /// Create a configuration with a custom service name
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    /// Set the OTLP collector endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.otlp_endpoint = endpoint.into();
        self
    }

    /// Set the fallback log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set the service version
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.service_version = version.into();
        self
    }

    /// Enable or disable span export
    pub fn with_traces(mut self, enable: bool) -> Self {
        self.enable_traces = enable;
        self
    }

    /// Enable or disable metric export
    pub fn with_metrics(mut self, enable: bool) -> Self {
        self.enable_metrics = enable;
        self
    }

    /// Choose JSON or human-readable log lines
    pub fn with_json_logs(mut self, enable: bool) -> Self {
        self.json_logs = enable;
        self
    }

    fn resource(&self) -> Resource {
        Resource::builder_empty()
            .with_attributes(vec![
                KeyValue::new(
                    opentelemetry_semantic_conventions::resource::SERVICE_NAME,
                    self.service_name.clone(),
                ),
                KeyValue::new(
                    opentelemetry_semantic_conventions::resource::SERVICE_VERSION,
                    self.service_version.clone(),
                ),
            ])
            .build()
    }
}

/// Install the global subscriber and, if enabled, OpenTelemetry exporters
///
/// Call once, at startup. Exporters need a Tokio runtime to be running.
///
/// # Errors
///
/// - a global `tracing` subscriber is already installed
/// - the log filter directive is invalid
/// - an OTLP exporter cannot be built
pub fn init_observability(config: ObservabilityConfig) -> Result<(), BoxError> {
    let tracer = if config.enable_traces {
        Some(init_tracer(&config)?)
    } else {
        None
    };

    if config.enable_metrics {
        init_metrics(&config)?;
    }

    init_tracing_subscriber(&config, tracer)?;

    tracing::info!(
        service_name = %config.service_name,
        otlp_endpoint = %config.otlp_endpoint,
        traces = config.enable_traces,
        metrics = config.enable_metrics,
        "Observability initialized"
    );

    Ok(())
}

fn init_tracer(config: &ObservabilityConfig) -> Result<opentelemetry_sdk::trace::Tracer, BoxError> {
    use opentelemetry::trace::TracerProvider as _;
    use opentelemetry_sdk::trace::{RandomIdGenerator, Sampler};

    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(config.otlp_endpoint.clone())
        .build()?;

    let provider = SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .with_resource(config.resource())
        .with_sampler(Sampler::ParentBased(Box::new(Sampler::AlwaysOn)))
        .with_id_generator(RandomIdGenerator::default())
        .build();

    // The subscriber layer needs a tracer before the provider goes global
    let tracer = provider.tracer(config.service_name.clone());
    global::set_tracer_provider(provider.clone());
    let _ = TRACER_PROVIDER.set(provider);

    Ok(tracer)
}

fn init_metrics(config: &ObservabilityConfig) -> Result<(), BoxError> {
    let exporter = opentelemetry_otlp::MetricExporter::builder()
        .with_tonic()
        .with_endpoint(config.otlp_endpoint.clone())
        .build()?;

    let reader = opentelemetry_sdk::metrics::PeriodicReader::builder(exporter)
        .with_interval(Duration::from_secs(30))
        .build();

    let provider = SdkMeterProvider::builder()
        .with_reader(reader)
        .with_resource(config.resource())
        .build();

    global::set_meter_provider(provider.clone());
    let _ = METER_PROVIDER.set(provider);
    Ok(())
}

fn init_tracing_subscriber(
    config: &ObservabilityConfig,
    tracer: Option<opentelemetry_sdk::trace::Tracer>,
) -> Result<(), BoxError> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.log_level))?;

    let telemetry_layer = tracer.map(|t| tracing_opentelemetry::layer().with_tracer(t));

    let json_layer = config.json_logs.then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_line_number(true)
            .json()
    });

    let text_layer = (!config.json_logs).then(|| tracing_subscriber::fmt::layer().with_target(true));

    tracing_subscriber::registry()
        .with(telemetry_layer)
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()?;

    Ok(())
}

/// Flush and shut down any installed OpenTelemetry providers
///
/// Safe to call more than once and when nothing was installed.
pub fn shutdown_observability() {
    if let Some(provider) = TRACER_PROVIDER.get() {
        if let Err(e) = provider.shutdown() {
            tracing::debug!(error = %e, "Tracer provider shutdown");
        }
    }

    if let Some(provider) = METER_PROVIDER.get() {
        if let Err(e) = provider.shutdown() {
            tracing::debug!(error = %e, "Meter provider shutdown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ObservabilityConfig::default();
        assert_eq!(config.service_name, "zbx");
        assert_eq!(config.service_version, env!("CARGO_PKG_VERSION"));
        assert!(!config.enable_traces);
        assert!(!config.enable_metrics);
        assert!(config.json_logs);
    }

    #[test]
    fn test_custom_config() {
        let config = ObservabilityConfig::new("item-sync")
            .with_endpoint("http://otel-collector:4317")
            .with_log_level("zbx_client=debug")
            .with_version("2.3.1")
            .with_traces(true)
            .with_metrics(true)
            .with_json_logs(false);

        assert_eq!(config.service_name, "item-sync");
        assert_eq!(config.otlp_endpoint, "http://otel-collector:4317");
        assert_eq!(config.log_level, "zbx_client=debug");
        assert_eq!(config.service_version, "2.3.1");
        assert!(config.enable_traces);
        assert!(config.enable_metrics);
        assert!(!config.json_logs);
    }

    #[test]
    fn test_local_only_init_then_second_init_fails() {
        let config = ObservabilityConfig::new("test-local").with_log_level("warn");

        assert!(init_observability(config.clone()).is_ok());
        // Global subscriber is already set
        assert!(init_observability(config).is_err());
    }

    #[test]
    fn test_shutdown_idempotent() {
        shutdown_observability();
        shutdown_observability();
    }
}
