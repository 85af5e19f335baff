//! Output shape validation.
//!
//! Turns normalized model text into a typed [`GenerationResult`], or explains
//! why it cannot: [`PipelineErrorKind::MalformedOutput`] when the text is not
//! in the expected encoding, [`PipelineErrorKind::ShapeMismatch`] when it is
//! but breaks the count or field rules.
//!
//! How missing slide fields are treated depends on [`SlidePolicy`]:
//!
//! - `Lenient` fills missing `title`, `layout` and `notes` with empty strings
//!   and a missing `content` with an empty list, and logs how many slides were
//!   degraded. Present fields of the wrong type are still rejected.
//! - `Strict` requires all four fields and 3 to 6 bullet points per slide.

use easel_core::{
    DiagramDescription, GenerationResult, OutputShape, Slide, SlideDeck, SlidePolicy,
};
use easel_error::{PipelineError, PipelineErrorKind};
use serde_json::{Map, Value};
use std::ops::RangeInclusive;
use tracing::{debug, warn};

/// Allowed number of bullet points per slide under the strict policy.
pub const BULLET_RANGE: RangeInclusive<usize> = 3..=6;

/// Validates normalized text against the expected shape.
pub fn validate_output(
    normalized: &str,
    shape: OutputShape,
) -> Result<GenerationResult, PipelineError> {
    match shape {
        OutputShape::SlideDeck { count, policy } => {
            validate_slide_deck(normalized, count, policy).map(GenerationResult::from)
        }
        OutputShape::Diagram => validate_diagram(normalized).map(GenerationResult::from),
    }
}

/// Validates a slide deck of exactly `count` slides.
///
/// # Examples
///
/// ```
/// use easel_core::SlidePolicy;
/// use easel_error::PipelineErrorKind;
/// use easel_pipeline::result::validate_slide_deck;
///
/// let err = validate_slide_deck("[{}, {}]", 4, SlidePolicy::Lenient).unwrap_err();
/// assert!(matches!(err.kind, PipelineErrorKind::ShapeMismatch { .. }));
/// assert!(err.to_string().contains("expected 4, got 2"));
/// ```
pub fn validate_slide_deck(
    normalized: &str,
    count: usize,
    policy: SlidePolicy,
) -> Result<SlideDeck, PipelineError> {
    let value: Value = serde_json::from_str(normalized).map_err(|e| {
        PipelineError::new(PipelineErrorKind::MalformedOutput {
            reason: format!("not valid JSON: {}", e),
            raw: normalized.to_string(),
        })
    })?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(PipelineError::new(PipelineErrorKind::MalformedOutput {
                reason: format!("expected a JSON array of slides, got {}", type_name(&other)),
                raw: normalized.to_string(),
            }));
        }
    };

    if items.len() != count {
        return Err(PipelineError::new(PipelineErrorKind::ShapeMismatch {
            expected: count.to_string(),
            actual: items.len().to_string(),
        }));
    }

    let mut slides = Vec::with_capacity(items.len());
    let mut degraded = 0;
    for (index, item) in items.iter().enumerate() {
        let (slide, was_degraded) = parse_slide(index + 1, item, policy)?;
        if was_degraded {
            degraded += 1;
        }
        slides.push(slide);
    }

    if degraded > 0 {
        warn!(
            degraded,
            total = slides.len(),
            "Accepted slides with missing fields"
        );
    }
    debug!(slides = slides.len(), ?policy, "Slide deck validated");

    Ok(SlideDeck::new(slides))
}

/// Validates a diagram description: any non-empty text is accepted.
pub fn validate_diagram(normalized: &str) -> Result<DiagramDescription, PipelineError> {
    if normalized.trim().is_empty() {
        return Err(PipelineError::new(PipelineErrorKind::MalformedOutput {
            reason: "diagram output is empty".to_string(),
            raw: normalized.to_string(),
        }));
    }
    Ok(DiagramDescription::new(normalized))
}

/// Parses one slide; `number` is 1-based. Returns whether any field was
/// filled in by the lenient policy.
fn parse_slide(
    number: usize,
    item: &Value,
    policy: SlidePolicy,
) -> Result<(Slide, bool), PipelineError> {
    let Some(object) = item.as_object() else {
        return Err(mismatch(
            format!("slide {} to be an object", number),
            type_name(item),
        ));
    };

    let mut degraded = false;
    let mut text_field = |name: &str| -> Result<String, PipelineError> {
        match field(object, name) {
            Some(Value::String(s)) => Ok(s.clone()),
            None => missing(number, name, policy, &mut degraded).map(|_| String::new()),
            Some(other) => Err(mismatch(
                format!("slide {} field `{}` to be a string", number, name),
                type_name(other),
            )),
        }
    };

    let title = text_field("title")?;
    let layout = text_field("layout")?;
    let notes = text_field("notes")?;

    let content = match field(object, "content") {
        Some(Value::Array(bullets)) => bullets
            .iter()
            .map(|bullet| {
                bullet.as_str().map(str::to_string).ok_or_else(|| {
                    mismatch(
                        format!("slide {} bullet points to be strings", number),
                        type_name(bullet),
                    )
                })
            })
            .collect::<Result<Vec<_>, _>>()?,
        None => {
            missing(number, "content", policy, &mut degraded)?;
            Vec::new()
        }
        Some(other) => {
            return Err(mismatch(
                format!("slide {} field `content` to be an array", number),
                type_name(other),
            ));
        }
    };

    if policy == SlidePolicy::Strict && !BULLET_RANGE.contains(&content.len()) {
        return Err(mismatch(
            format!(
                "slide {} to have {}-{} bullet points",
                number,
                BULLET_RANGE.start(),
                BULLET_RANGE.end()
            ),
            content.len().to_string(),
        ));
    }

    let slide = Slide::builder()
        .title(title)
        .content(content)
        .layout(layout)
        .notes(notes)
        .build()
        .map_err(|e| mismatch(format!("slide {} to be complete", number), e.to_string()))?;

    Ok((slide, degraded))
}

/// Present, non-null field value.
fn field<'a>(object: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    object.get(name).filter(|value| !value.is_null())
}

fn missing(
    number: usize,
    name: &str,
    policy: SlidePolicy,
    degraded: &mut bool,
) -> Result<(), PipelineError> {
    match policy {
        SlidePolicy::Lenient => {
            *degraded = true;
            Ok(())
        }
        SlidePolicy::Strict => Err(mismatch(
            format!("slide {} field `{}`", number, name),
            "missing",
        )),
    }
}

#[track_caller]
fn mismatch(expected: String, actual: impl Into<String>) -> PipelineError {
    PipelineError::new(PipelineErrorKind::ShapeMismatch {
        expected,
        actual: actual.into(),
    })
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
