use anyhow::{Result, anyhow};
use once_cell::sync::OnceCell;
use opentelemetry::trace::TracerProvider;
use opentelemetry_otlp::{Protocol, SpanExporter, WithExportConfig};
use opentelemetry_sdk::{self as sdk, Resource};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: OnceCell<()> = OnceCell::new();

const DEFAULT_FILTER: &str = "info,tower_http=warn";

/// Configuration for tracing initialization.
#[derive(Clone, Debug)]
pub struct ObsConfig {
    pub service_name: &'static str,
    pub env_filter: Option<String>,
    pub otlp_endpoint: Option<String>,
}

impl Default for ObsConfig {
    fn default() -> Self {
        Self {
            service_name: "employee-server",
            env_filter: None,
            otlp_endpoint: None,
        }
    }
}

impl ObsConfig {
    /// Explicit filter, then `RUST_LOG`, then the built-in default.
    fn resolve_filter(&self) -> String {
        self.env_filter
            .clone()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string())
    }

    fn resolve_otlp_endpoint(&self) -> Option<String> {
        self.otlp_endpoint
            .clone()
            .or_else(|| std::env::var("OTLP_ENDPOINT").ok())
            .filter(|e| !e.trim().is_empty())
    }
}

impl ObsConfig {
    /// OTLP/HTTP tracer, or `None` when no endpoint is configured.
    fn otlp_tracer(&self) -> Result<Option<sdk::trace::SdkTracer>> {
        let Some(endpoint) = self.resolve_otlp_endpoint() else {
            return Ok(None);
        };
        let exporter = SpanExporter::builder()
            .with_http()
            .with_protocol(Protocol::HttpBinary)
            .with_endpoint(endpoint)
            .build()?;
        let provider = sdk::trace::SdkTracerProvider::builder()
            .with_resource(
                Resource::builder()
                    .with_service_name(self.service_name)
                    .build(),
            )
            .with_batch_exporter(exporter)
            .build();
        Ok(Some(provider.tracer(self.service_name)))
    }
}

/// Install the fmt subscriber, plus span export when an OTLP endpoint is set.
/// Later calls are no-ops.
pub fn init_tracing(config: ObsConfig) -> Result<()> {
    INIT.get_or_try_init(|| {
        let env_filter = EnvFilter::try_new(config.resolve_filter())?;
        let otel_layer = config
            .otlp_tracer()?
            .map(|tracer| tracing_opentelemetry::layer().with_tracer(tracer));
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .with(otel_layer)
            .try_init()
            .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))
    })?;
    Ok(())
}
