//! Pipeline metrics.
//!
//! Available with the `metrics` feature.

#[cfg(feature = "metrics")]
use easel_error::PipelineError;
#[cfg(feature = "metrics")]
use opentelemetry::{
    KeyValue, global,
    metrics::{Counter, Histogram, Meter},
};

/// Request, failure and latency instruments for the generation endpoints.
///
/// Available with the `metrics` feature.
#[cfg(feature = "metrics")]
#[derive(Clone)]
pub struct PipelineMetrics {
    /// Meter handle kept alive for metric instruments
    _meter: Meter,
    /// Total generation requests
    pub requests: Counter<u64>,
    /// Failed generation requests, labelled by error kind
    pub failures: Counter<u64>,
    /// End-to-end pipeline duration in seconds
    pub duration: Histogram<f64>,
}

#[cfg(feature = "metrics")]
impl PipelineMetrics {
    /// Creates the instruments on the global meter.
    pub fn new() -> Self {
        let meter = global::meter("easel_pipeline");

        let requests = meter
            .u64_counter("pipeline.requests")
            .with_description("Total generation requests")
            .build();
        let failures = meter
            .u64_counter("pipeline.failures")
            .with_description("Failed generation requests")
            .build();
        let duration = meter
            .f64_histogram("pipeline.duration")
            .with_unit("seconds")
            .with_description("End-to-end pipeline duration")
            .build();

        Self {
            _meter: meter,
            requests,
            failures,
            duration,
        }
    }

    /// Records one finished request.
    pub fn record<T>(&self, use_case: &str, duration_secs: f64, outcome: &Result<T, PipelineError>) {
        let labels = [KeyValue::new("use_case", use_case.to_string())];
        self.requests.add(1, &labels);
        self.duration.record(duration_secs, &labels);

        if let Err(e) = outcome {
            self.failures.add(
                1,
                &[
                    KeyValue::new("use_case", use_case.to_string()),
                    KeyValue::new("kind", e.label()),
                ],
            );
        }
    }
}

#[cfg(feature = "metrics")]
impl Default for PipelineMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "metrics")]
impl std::fmt::Debug for PipelineMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineMetrics").finish_non_exhaustive()
    }
}
