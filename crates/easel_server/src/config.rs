//! Layered service configuration.
//!
//! Sources, lowest priority first:
//!
//! 1. Built-in defaults (plus `OPENROUTER_API_KEY` as a fallback API key)
//! 2. An optional TOML file
//! 3. Environment variables prefixed `EASEL_`, with `__` between sections,
//!    e.g. `EASEL_UPSTREAM__API_KEY` or `EASEL_SERVER__PORT`

use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use derive_getters::Getters;
use easel_core::SlidePolicy;
use easel_error::ConfigError;
use easel_models::ClientSettings;
use easel_pipeline::ModelChoice;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Default listening port.
pub const DEFAULT_PORT: u16 = 5001;

/// Default model for slide outlines.
pub const DEFAULT_OUTLINE_MODEL: &str = "qwen/qwen2.5-vl-3b-instruct:free";

/// Default model for diagrams.
pub const DEFAULT_DIAGRAM_MODEL: &str = "openrouter/quasar-alpha";

/// Default `X-Title` sent with outline calls.
pub const DEFAULT_OUTLINE_TITLE: &str = "PPT Generator";

/// Default `X-Title` sent with diagram calls.
pub const DEFAULT_DIAGRAM_TITLE: &str = "Mermaid Generator";

const ENV_PREFIX: &str = "EASEL";
const FALLBACK_API_KEY_VAR: &str = "OPENROUTER_API_KEY";

/// Listening socket and CORS settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct ServerSettings {
    /// Interface to bind
    host: String,
    /// Port to bind
    port: u16,
    /// Allowed CORS origin, or `*` for any
    cors_origin: String,
}

/// Completion endpoint settings.
#[derive(Clone, Deserialize, Getters)]
pub struct UpstreamSettings {
    /// Chat completions URL
    base_url: String,
    /// Bearer token; required
    api_key: Option<String>,
    /// Request timeout in seconds; must be positive
    timeout_secs: u64,
    /// `HTTP-Referer` attribution header
    referer: String,
    /// `X-Title` attribution header when no per-use-case title applies
    title: String,
}

impl std::fmt::Debug for UpstreamSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamSettings")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .field("referer", &self.referer)
            .field("title", &self.title)
            .finish()
    }
}

/// Model and output-checking settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct GenerationSettings {
    /// Model for the outline endpoint
    outline_model: String,
    /// Model for the diagram endpoint
    diagram_model: String,
    /// `X-Title` for outline calls
    outline_title: String,
    /// `X-Title` for diagram calls
    diagram_title: String,
    /// How slide objects are checked
    slide_policy: SlidePolicy,
}

/// Complete service configuration.
///
/// # Examples
///
/// ```
/// use easel_server::EaselConfig;
///
/// let config = EaselConfig::from_toml(
///     r#"
///     [upstream]
///     api_key = "sk-test"
///     "#,
/// )
/// .unwrap();
///
/// assert_eq!(*config.server().port(), 5001);
/// assert_eq!(config.bind_address(), "0.0.0.0:5001");
/// ```
#[derive(Debug, Clone, Deserialize, Getters)]
pub struct EaselConfig {
    /// Listening socket
    server: ServerSettings,
    /// Completion endpoint
    upstream: UpstreamSettings,
    /// Models and output checking
    generation: GenerationSettings,
}

impl EaselConfig {
    /// Loads configuration from defaults, an optional TOML file and the
    /// environment.
    ///
    /// A file given explicitly must exist.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a source cannot be read, a value has the
    /// wrong type, or a required value is missing.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = defaults()?;

        if let Ok(key) = std::env::var(FALLBACK_API_KEY_VAR) {
            builder = builder
                .set_default("upstream.api_key", key)
                .map_err(layer_error)?;
        }

        if let Some(path) = path {
            info!(path = %path.display(), "Loading configuration file");
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        );

        finish(builder)
    }

    /// Builds configuration from defaults and TOML text only.
    ///
    /// # Errors
    ///
    /// Same as [`EaselConfig::load`].
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let builder = defaults()?.add_source(File::from_str(text, FileFormat::Toml));
        finish(builder)
    }

    /// `host:port` to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Replaces the configured port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.server.port = port;
        self
    }

    /// Upper bound for one model call.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.upstream.timeout_secs)
    }

    /// Models and attribution titles per use case.
    pub fn model_choice(&self) -> ModelChoice {
        ModelChoice::new(
            self.generation.outline_model.as_str(),
            self.generation.diagram_model.as_str(),
        )
        .with_titles(
            self.generation.outline_title.as_str(),
            self.generation.diagram_title.as_str(),
        )
    }

    /// Settings for the HTTP completion client.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the API key is missing.
    pub fn client_settings(&self) -> Result<ClientSettings, ConfigError> {
        let api_key = self
            .upstream
            .api_key
            .clone()
            .ok_or_else(missing_api_key)?;

        ClientSettings::builder()
            .api_key(api_key)
            .base_url(self.upstream.base_url.as_str())
            .timeout(self.timeout())
            .referer(self.upstream.referer.as_str())
            .title(self.upstream.title.as_str())
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid upstream settings: {}", e)))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match self.upstream.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => {}
            _ => return Err(missing_api_key()),
        }
        if self.upstream.timeout_secs == 0 {
            return Err(ConfigError::new(
                "upstream.timeout_secs must be greater than zero",
            ));
        }
        if self.generation.outline_model.trim().is_empty()
            || self.generation.diagram_model.trim().is_empty()
        {
            return Err(ConfigError::new("generation models must not be empty"));
        }
        Ok(())
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("server.host", "0.0.0.0")
        .and_then(|b| b.set_default("server.port", i64::from(DEFAULT_PORT)))
        .and_then(|b| b.set_default("server.cors_origin", "*"))
        .and_then(|b| {
            b.set_default(
                "upstream.base_url",
                "https://openrouter.ai/api/v1/chat/completions",
            )
        })
        .and_then(|b| b.set_default("upstream.timeout_secs", 60_i64))
        .and_then(|b| b.set_default("upstream.referer", "http://localhost:3000"))
        .and_then(|b| b.set_default("upstream.title", "Easel"))
        .and_then(|b| b.set_default("generation.outline_model", DEFAULT_OUTLINE_MODEL))
        .and_then(|b| b.set_default("generation.diagram_model", DEFAULT_DIAGRAM_MODEL))
        .and_then(|b| b.set_default("generation.outline_title", DEFAULT_OUTLINE_TITLE))
        .and_then(|b| b.set_default("generation.diagram_title", DEFAULT_DIAGRAM_TITLE))
        .and_then(|b| b.set_default("generation.slide_policy", "lenient"))
        .map_err(layer_error)
}

fn finish(builder: ConfigBuilder<DefaultState>) -> Result<EaselConfig, ConfigError> {
    let config: EaselConfig = builder
        .build()
        .and_then(Config::try_deserialize)
        .map_err(layer_error)?;
    config.validate()?;
    debug!(?config, "Configuration loaded");
    Ok(config)
}

#[track_caller]
fn layer_error(error: config::ConfigError) -> ConfigError {
    ConfigError::new(error.to_string())
}

#[track_caller]
fn missing_api_key() -> ConfigError {
    ConfigError::new(format!(
        "upstream.api_key is required (set {}_UPSTREAM__API_KEY or {})",
        ENV_PREFIX, FALLBACK_API_KEY_VAR
    ))
}
