//! Server command handler.

use easel_core::{init_metrics, shutdown_metrics};
use easel_error::{EaselResult, ServerError, ServerErrorKind};
use easel_server::EaselConfig;
use std::path::Path;
use tracing::{info, warn};

const METRICS_EXPORT_INTERVAL_SECS: u64 = 60;

/// Handle the `serve` command.
pub async fn handle_serve(config_path: Option<&Path>, port: Option<u16>) -> EaselResult<()> {
    let mut config = EaselConfig::load(config_path)?;
    match port {
        Some(0) => {
            return Err(ServerError::new(ServerErrorKind::Configuration(
                "--port must be between 1 and 65535".to_string(),
            ))
            .into());
        }
        Some(port) => config = config.with_port(port),
        None => {}
    }

    if let Err(e) = init_metrics("easel", METRICS_EXPORT_INTERVAL_SECS) {
        warn!(error = %e, "Continuing without metrics");
    }

    info!(address = %config.bind_address(), "Starting Easel server");
    let result = easel_server::serve(config).await;
    if let Err(e) = shutdown_metrics() {
        warn!(error = %e, "Metrics were not flushed");
    }
    result
}
