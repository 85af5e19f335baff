//! Logging and OpenTelemetry metrics initialization.

#[cfg(feature = "metrics")]
use opentelemetry::{KeyValue, global};
#[cfg(feature = "metrics")]
use opentelemetry_otlp::{MetricExporter as OtlpExporter, WithExportConfig};
#[cfg(feature = "metrics")]
use opentelemetry_sdk::{
    Resource,
    metrics::{PeriodicReader, SdkMeterProvider},
};
#[cfg(feature = "metrics")]
use opentelemetry_stdout::MetricExporter as StdoutExporter;
#[cfg(feature = "metrics")]
use std::sync::Mutex;
#[cfg(feature = "metrics")]
use std::time::Duration;
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

/// Provider installed by [`init_metrics`], kept so it can be flushed on exit.
#[cfg(feature = "metrics")]
static METER_PROVIDER: Mutex<Option<SdkMeterProvider>> = Mutex::new(None);

/// Install the global `tracing` subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Events go to
/// stderr; with `json` set, as one JSON object per line.
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(json: bool) -> Result<(), String> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| format!("Failed to install tracing subscriber: {}", e))
}

/// Initialize OpenTelemetry metrics with OTLP or stdout export.
///
/// Checks the `OTEL_EXPORTER` environment variable:
/// - "otlp" -> OTLP exporter to `OTEL_EXPORTER_OTLP_ENDPOINT` (default: http://localhost:4318)
/// - "stdout" or unset -> stdout exporter
///
/// When the `metrics` feature is disabled, this function returns `Ok(())` immediately.
#[instrument(skip_all, fields(service_name))]
pub fn init_metrics(service_name: &'static str, export_interval_secs: u64) -> Result<(), String> {
    #[cfg(not(feature = "metrics"))]
    {
        let _ = export_interval_secs;
        info!(
            service_name = service_name,
            "Metrics feature disabled - skipping metrics initialization"
        );
        Ok(())
    }

    #[cfg(feature = "metrics")]
    {
        info!(
            service_name = service_name,
            export_interval_secs = export_interval_secs,
            "Initializing OpenTelemetry metrics"
        );

        let resource = Resource::builder_empty()
            .with_attributes([KeyValue::new("service.name", service_name)])
            .build();
        let interval = Duration::from_secs(export_interval_secs);

        let exporter_type = std::env::var("OTEL_EXPORTER").unwrap_or_else(|_| "stdout".to_string());
        info!(exporter_type = %exporter_type, "Selecting metrics exporter");

        let meter_provider = match exporter_type.as_str() {
            "otlp" => {
                let endpoint = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
                    .unwrap_or_else(|_| "http://localhost:4318".to_string());
                let exporter = OtlpExporter::builder()
                    .with_http()
                    .with_endpoint(&endpoint)
                    .with_timeout(Duration::from_secs(10))
                    .build()
                    .map_err(|e| format!("Failed to create OTLP exporter: {}", e))?;
                debug!(endpoint = %endpoint, "OTLP metric exporter created");

                SdkMeterProvider::builder()
                    .with_resource(resource)
                    .with_reader(PeriodicReader::builder(exporter).with_interval(interval).build())
                    .build()
            }
            _ => SdkMeterProvider::builder()
                .with_resource(resource)
                .with_reader(
                    PeriodicReader::builder(StdoutExporter::default())
                        .with_interval(interval)
                        .build(),
                )
                .build(),
        };

        global::set_meter_provider(meter_provider.clone());
        let mut slot = METER_PROVIDER
            .lock()
            .map_err(|e| format!("Meter provider lock poisoned: {}", e))?;
        *slot = Some(meter_provider);
        info!(service_name = service_name, "Meter provider registered globally");
        Ok(())
    }
}

/// Flush and shut down the provider installed by [`init_metrics`].
///
/// Does nothing when metrics were never initialized or the `metrics`
/// feature is disabled. Calling it twice is harmless.
#[instrument]
pub fn shutdown_metrics() -> Result<(), String> {
    #[cfg(not(feature = "metrics"))]
    {
        debug!("Metrics feature disabled - nothing to shut down");
        Ok(())
    }

    #[cfg(feature = "metrics")]
    {
        let provider = METER_PROVIDER
            .lock()
            .map_err(|e| format!("Meter provider lock poisoned: {}", e))?
            .take();

        let Some(provider) = provider else {
            debug!("No meter provider installed");
            return Ok(());
        };

        info!("Shutting down metrics provider");
        provider
            .shutdown()
            .map_err(|e| format!("Failed to shut down meter provider: {}", e))?;
        debug!("Metrics shutdown complete");
        Ok(())
    }
}
