//! One-shot generation command handler.

use crate::cli::GenerateTarget;
use easel_core::GenerationResult;
use easel_error::{EaselResult, RetryableError};
use easel_server::{EaselConfig, build_pipeline};
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

/// Handle the `generate` command.
///
/// Runs the same pipeline the HTTP endpoints use. Upstream failures rerun
/// the whole pipeline up to `retries` more times with exponential backoff.
pub async fn handle_generate(
    config_path: Option<&Path>,
    target: &GenerateTarget,
    retries: usize,
) -> EaselResult<GenerationResult> {
    let config = EaselConfig::load(config_path)?;
    let pipeline = build_pipeline(&config)?;
    let use_case = target.use_case();
    let body = target.request_body();

    info!(use_case = %use_case, "Running one-shot generation");
    let mut attempt = 0;
    loop {
        match pipeline.run(use_case, &body).await {
            Ok(result) => return Ok(result),
            Err(e) if e.is_retryable() && attempt < retries => {
                let delay = backoff(&e, attempt);
                attempt += 1;
                warn!(
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    error = %e.kind,
                    "Retrying generation"
                );
                tokio::time::sleep(delay).await;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// Delay before retry number `attempt + 1`.
pub fn backoff(error: &impl RetryableError, attempt: usize) -> Duration {
    let (initial_ms, _, max_delay_secs) = error.retry_strategy_params();
    let factor = 2_u64.saturating_pow(u32::try_from(attempt).unwrap_or(u32::MAX));
    Duration::from_millis(initial_ms.saturating_mul(factor)).min(Duration::from_secs(max_delay_secs))
}
