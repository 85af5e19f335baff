//! Validated generation requests.

use crate::{Audience, OutputShape, SlideCount, SlidePolicy, Tone};
use derive_getters::Getters;
use serde::Serialize;

/// Minimum trimmed length of the requirement text, in characters.
pub const MIN_REQUIREMENTS_LEN: usize = 10;

/// The two generation use cases served by Easel.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum UseCase {
    /// Slide-deck outline
    Outline,
    /// Diagram description
    Diagram,
}

/// A validated request for a slide-deck outline.
///
/// # Examples
///
/// ```
/// use easel_core::{Audience, OutlineRequest, SlideCount, Tone};
///
/// let request = OutlineRequest::builder()
///     .requirements("Create a presentation about solar energy benefits")
///     .slide_count(SlideCount::Four)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.slide_count().get(), 4);
/// assert_eq!(*request.tone(), Tone::Persuasive);
/// assert_eq!(*request.audience(), Audience::GeneralPublic);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
#[serde(rename_all = "camelCase")]
pub struct OutlineRequest {
    /// Free-form description of the presentation
    requirements: String,
    /// Number of slides to generate
    #[builder(default)]
    slide_count: SlideCount,
    /// Tone of the presentation
    #[builder(default)]
    tone: Tone,
    /// Target audience
    #[builder(default)]
    audience: Audience,
}

impl OutlineRequest {
    /// Returns a builder for constructing an OutlineRequest.
    pub fn builder() -> OutlineRequestBuilder {
        OutlineRequestBuilder::default()
    }
}

/// A validated request for a diagram description.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Getters)]
pub struct DiagramRequest {
    /// Free-form description of the diagram
    requirements: String,
}

impl DiagramRequest {
    /// Creates a diagram request from already-validated requirement text.
    pub fn new(requirements: impl Into<String>) -> Self {
        Self {
            requirements: requirements.into(),
        }
    }
}

/// A validated generation request of either use case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, derive_more::From)]
#[serde(untagged)]
pub enum GenerationRequest {
    /// Slide-deck outline request
    Outline(OutlineRequest),
    /// Diagram description request
    Diagram(DiagramRequest),
}

impl GenerationRequest {
    /// The requirement text, exactly as validated.
    pub fn requirements(&self) -> &str {
        match self {
            GenerationRequest::Outline(request) => request.requirements(),
            GenerationRequest::Diagram(request) => request.requirements(),
        }
    }

    /// The use case this request belongs to.
    pub fn use_case(&self) -> UseCase {
        match self {
            GenerationRequest::Outline(_) => UseCase::Outline,
            GenerationRequest::Diagram(_) => UseCase::Diagram,
        }
    }

    /// The output shape the model answer must satisfy.
    pub fn expected_shape(&self, policy: SlidePolicy) -> OutputShape {
        match self {
            GenerationRequest::Outline(request) => OutputShape::SlideDeck {
                count: request.slide_count().get(),
                policy,
            },
            GenerationRequest::Diagram(_) => OutputShape::Diagram,
        }
    }
}
