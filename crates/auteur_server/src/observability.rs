//! Logging and tracing setup for the server binary.
//!
//! Structured logs go through `tracing-subscriber`; spans can additionally
//! be exported to stdout through OpenTelemetry for local inspection.

use crate::ServerConfig;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::{KeyValue, global};
use opentelemetry_sdk::{
    Resource,
    trace::{RandomIdGenerator, Sampler, TracerProvider},
};
use opentelemetry_stdout::SpanExporter;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Configuration for observability infrastructure.
#[derive(Debug, Clone, derive_setters::Setters)]
#[setters(prefix = "with_")]
pub struct ObservabilityConfig {
    /// Log level filter used when `RUST_LOG` is unset (e.g., "info", "debug")
    pub log_level: String,
    /// Enable JSON-formatted logs for production
    pub json_logs: bool,
    /// Export spans to stdout through OpenTelemetry
    pub stdout_spans: bool,
    /// Service name identifier
    pub service_name: String,
    /// Service version
    pub service_version: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
            stdout_spans: false,
            service_name: "auteur-server".to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl From<&ServerConfig> for ObservabilityConfig {
    fn from(config: &ServerConfig) -> Self {
        Self::default()
            .with_log_level(config.log_level().clone())
            .with_json_logs(*config.json_logs())
            .with_stdout_spans(*config.stdout_spans())
    }
}

/// Install the global tracing subscriber.
///
/// Sets up:
/// - An `EnvFilter` honouring `RUST_LOG`, falling back to `log_level`
/// - Human-readable or JSON formatted output
/// - Optional OpenTelemetry span export to stdout
///
/// # Errors
///
/// Returns an error if the filter is malformed or a subscriber is already installed.
pub fn init_observability(
    config: &ObservabilityConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.log_level))?;

    let fmt_layer = if config.json_logs {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    let telemetry_layer = if config.stdout_spans {
        let provider = TracerProvider::builder()
            .with_simple_exporter(SpanExporter::default())
            .with_id_generator(RandomIdGenerator::default())
            .with_sampler(Sampler::AlwaysOn)
            .with_resource(Resource::new(vec![
                KeyValue::new("service.name", config.service_name.clone()),
                KeyValue::new("service.version", config.service_version.clone()),
            ]))
            .build();
        let tracer = provider.tracer("auteur");
        global::set_tracer_provider(provider);
        Some(tracing_opentelemetry::layer().with_tracer(tracer))
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .with(telemetry_layer)
        .try_init()?;

    Ok(())
}

/// Flush pending spans before exit.
pub fn shutdown_observability() {
    global::shutdown_tracer_provider();
}
