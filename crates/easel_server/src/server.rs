//! Server startup and shutdown.

use crate::{AppState, EaselConfig, cors_layer, create_router};
use easel_error::{ConfigError, EaselError, ServerError, ServerErrorKind};
use easel_models::OpenAICompatibleClient;
use easel_pipeline::GenerationPipeline;
use std::sync::Arc;
use tracing::{error, info, instrument};

const PROVIDER_NAME: &str = "openrouter";

/// Builds the generation pipeline described by `config`.
///
/// # Errors
///
/// Returns `EaselError::Config` if the HTTP client cannot be built.
pub fn build_pipeline(config: &EaselConfig) -> Result<GenerationPipeline, EaselError> {
    let settings = config.client_settings()?;
    let client = OpenAICompatibleClient::new(settings, PROVIDER_NAME)
        .map_err(|e| ConfigError::new(format!("Failed to build the upstream client: {}", e)))?;

    Ok(
        GenerationPipeline::new(Arc::new(client), config.model_choice())
            .with_timeout(config.timeout())
            .with_policy(*config.generation().slide_policy()),
    )
}

/// Serves the API until Ctrl+C.
///
/// # Errors
///
/// Returns an error if the pipeline cannot be built, the address cannot be
/// bound, or the server loop fails.
#[instrument(skip_all, fields(address = %config.bind_address()))]
pub async fn serve(config: EaselConfig) -> Result<(), EaselError> {
    let pipeline = build_pipeline(&config)?;
    info!(
        outline_model = %config.generation().outline_model(),
        diagram_model = %config.generation().diagram_model(),
        policy = %pipeline.policy(),
        timeout_secs = config.timeout().as_secs(),
        "Pipeline ready"
    );

    let router = create_router(AppState::new(pipeline))
        .layer(cors_layer(config.server().cors_origin())?);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(|e| {
            ServerError::new(ServerErrorKind::Bind {
                address: address.clone(),
                message: e.to_string(),
            })
        })?;

    info!("Easel listening. Press Ctrl+C to stop.");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Serve(e.to_string())))?;

    info!("Easel stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            error!(error = %e, "Failed to listen for Ctrl+C; running until killed");
            std::future::pending::<()>().await;
        }
    }
}
