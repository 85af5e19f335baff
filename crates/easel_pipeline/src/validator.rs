//! Request validation.
//!
//! Runs before any external call. Unrecognized fields are ignored so older
//! servers accept newer clients.

use easel_core::{
    Audience, DiagramRequest, GenerationRequest, MIN_REQUIREMENTS_LEN, OutlineRequest,
    RequestOption, SlideCount, Tone, UseCase,
};
use easel_error::PipelineError;
use serde_json::{Map, Value};
use std::str::FromStr;

/// Validates a request body for the given use case.
pub fn validate(use_case: UseCase, raw: &Value) -> Result<GenerationRequest, PipelineError> {
    match use_case {
        UseCase::Outline => validate_outline(raw).map(GenerationRequest::from),
        UseCase::Diagram => validate_diagram(raw).map(GenerationRequest::from),
    }
}

/// Validates an outline request body.
///
/// # Examples
///
/// ```
/// use easel_core::{SlideCount, Tone};
/// use easel_pipeline::validator::validate_outline;
/// use serde_json::json;
///
/// let request = validate_outline(&json!({
///     "requirements": "Create a presentation about solar energy benefits",
///     "slideCount": 4,
/// }))
/// .unwrap();
///
/// assert_eq!(*request.slide_count(), SlideCount::Four);
/// assert_eq!(*request.tone(), Tone::Persuasive);
/// ```
pub fn validate_outline(raw: &Value) -> Result<OutlineRequest, PipelineError> {
    let body = as_object(raw)?;
    let requirements = requirements(body)?;

    let slide_count =
        option::<SlideCount>(body, |v| whole_number(v).and_then(SlideCount::from_count))?;
    let tone = option::<Tone>(body, from_str_value)?;
    let audience = option::<Audience>(body, from_str_value)?;

    OutlineRequest::builder()
        .requirements(requirements)
        .slide_count(slide_count)
        .tone(tone)
        .audience(audience)
        .build()
        .map_err(|e| PipelineError::invalid_request(e.to_string()))
}

/// Validates a diagram request body.
pub fn validate_diagram(raw: &Value) -> Result<DiagramRequest, PipelineError> {
    let body = as_object(raw)?;
    Ok(DiagramRequest::new(requirements(body)?))
}

fn as_object(raw: &Value) -> Result<&Map<String, Value>, PipelineError> {
    raw.as_object()
        .ok_or_else(|| PipelineError::invalid_request("Request body must be a JSON object"))
}

fn requirements(body: &Map<String, Value>) -> Result<String, PipelineError> {
    match body.get("requirements").and_then(Value::as_str) {
        Some(text) if text.trim().chars().count() >= MIN_REQUIREMENTS_LEN => Ok(text.to_string()),
        _ => Err(PipelineError::invalid_request(format!(
            "Requirements must be a string with at least {} characters",
            MIN_REQUIREMENTS_LEN
        ))),
    }
}

/// Resolves one enumerated option: absent or `null` yields the default,
/// anything outside the allowed-set is rejected with the set named.
fn option<T: RequestOption>(
    body: &Map<String, Value>,
    parse: impl Fn(&Value) -> Option<T>,
) -> Result<T, PipelineError> {
    match body.get(T::KEY) {
        None | Some(Value::Null) => Ok(T::default()),
        Some(value) => parse(value).ok_or_else(|| {
            PipelineError::invalid_request(format!(
                "{} must be one of: {}",
                T::LABEL,
                T::allowed_list()
            ))
        }),
    }
}

fn from_str_value<T: FromStr>(value: &Value) -> Option<T> {
    value.as_str().and_then(|s| T::from_str(s).ok())
}

/// Non-negative integers, including integral floats such as `4.0`.
fn whole_number(value: &Value) -> Option<u64> {
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= u32::MAX as f64)
            .map(|f| f as u64)
    })
}
