//! Configuration layering tests.

use easel_core::{SlidePolicy, UseCase};
use easel_server::{
    DEFAULT_DIAGRAM_MODEL, DEFAULT_DIAGRAM_TITLE, DEFAULT_OUTLINE_MODEL, DEFAULT_OUTLINE_TITLE,
    DEFAULT_PORT, EaselConfig,
};
use std::path::Path;
use std::time::Duration;

#[test]
fn test_defaults_with_only_api_key() -> Result<(), Box<dyn std::error::Error>> {
    let config = EaselConfig::from_toml(
        r#"
        [upstream]
        api_key = "sk-test"
        "#,
    )?;

    assert_eq!(config.server().host(), "0.0.0.0");
    assert_eq!(*config.server().port(), DEFAULT_PORT);
    assert_eq!(config.server().cors_origin(), "*");
    assert_eq!(
        config.upstream().base_url(),
        "https://openrouter.ai/api/v1/chat/completions"
    );
    assert_eq!(config.timeout(), Duration::from_secs(60));
    assert_eq!(config.generation().outline_model(), DEFAULT_OUTLINE_MODEL);
    assert_eq!(config.generation().diagram_model(), DEFAULT_DIAGRAM_MODEL);
    assert_eq!(*config.generation().slide_policy(), SlidePolicy::Lenient);
    Ok(())
}

#[test]
fn test_titles_per_use_case() -> Result<(), Box<dyn std::error::Error>> {
    let config = EaselConfig::from_toml(
        r#"
        [upstream]
        api_key = "sk-test"
        "#,
    )?;
    let models = config.model_choice();
    assert_eq!(DEFAULT_OUTLINE_TITLE, "PPT Generator");
    assert_eq!(DEFAULT_DIAGRAM_TITLE, "Mermaid Generator");
    assert_eq!(models.title_for(UseCase::Outline), Some(DEFAULT_OUTLINE_TITLE));
    assert_eq!(models.title_for(UseCase::Diagram), Some(DEFAULT_DIAGRAM_TITLE));

    let config = EaselConfig::from_toml(
        r#"
        [upstream]
        api_key = "sk-test"

        [generation]
        diagram_title = "Flowchart Studio"
        "#,
    )?;
    let models = config.model_choice();
    assert_eq!(models.title_for(UseCase::Outline), Some(DEFAULT_OUTLINE_TITLE));
    assert_eq!(models.title_for(UseCase::Diagram), Some("Flowchart Studio"));
    Ok(())
}

#[test]
fn test_file_values_override_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let config = EaselConfig::from_toml(
        r#"
        [server]
        host = "127.0.0.1"
        port = 8080
        cors_origin = "https://slides.example.com"

        [upstream]
        api_key = "sk-test"
        timeout_secs = 15
        title = "Deck Builder"

        [generation]
        outline_model = "meta-llama/llama-3.3-70b-instruct"
        slide_policy = "strict"
        "#,
    )?;

    assert_eq!(config.bind_address(), "127.0.0.1:8080");
    assert_eq!(config.timeout(), Duration::from_secs(15));
    assert_eq!(*config.generation().slide_policy(), SlidePolicy::Strict);

    let models = config.model_choice();
    assert_eq!(models.outline(), "meta-llama/llama-3.3-70b-instruct");
    assert_eq!(models.diagram(), DEFAULT_DIAGRAM_MODEL);

    let settings = config.client_settings()?;
    assert_eq!(settings.api_key(), "sk-test");
    assert_eq!(settings.title(), "Deck Builder");
    assert_eq!(settings.referer(), "http://localhost:3000");
    assert_eq!(*settings.timeout(), Duration::from_secs(15));
    Ok(())
}

#[test]
fn test_missing_api_key_is_fatal() {
    let err = EaselConfig::from_toml("").expect_err("no api key");
    assert!(err.message.contains("upstream.api_key is required"));

    let err = EaselConfig::from_toml(
        r#"
        [upstream]
        api_key = "   "
        "#,
    )
    .expect_err("blank api key");
    assert!(err.message.contains("api_key"));
}

#[test]
fn test_zero_timeout_is_rejected() {
    let err = EaselConfig::from_toml(
        r#"
        [upstream]
        api_key = "sk-test"
        timeout_secs = 0
        "#,
    )
    .expect_err("zero timeout");
    assert!(err.message.contains("timeout_secs"));
}

#[test]
fn test_unknown_policy_is_rejected() {
    let result = EaselConfig::from_toml(
        r#"
        [upstream]
        api_key = "sk-test"

        [generation]
        slide_policy = "relaxed"
        "#,
    );
    assert!(result.is_err());
}

#[test]
fn test_explicit_file_must_exist() {
    let result = EaselConfig::load(Some(Path::new("/nonexistent/easel.toml")));
    assert!(result.is_err());
}

#[test]
fn test_port_override() -> Result<(), Box<dyn std::error::Error>> {
    let config = EaselConfig::from_toml(
        r#"
        [upstream]
        api_key = "sk-test"
        "#,
    )?
    .with_port(9000);
    assert_eq!(config.bind_address(), "0.0.0.0:9000");
    Ok(())
}

#[test]
fn test_debug_redacts_api_key() -> Result<(), Box<dyn std::error::Error>> {
    let config = EaselConfig::from_toml(
        r#"
        [upstream]
        api_key = "sk-very-secret"
        "#,
    )?;
    let rendered = format!("{:?}", config);
    assert!(!rendered.contains("sk-very-secret"));
    assert!(rendered.contains("<redacted>"));
    Ok(())
}
