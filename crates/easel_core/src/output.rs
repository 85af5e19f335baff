//! Model output and generation result types.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Raw text returned by the model, before any cleanup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct RawModelOutput {
    /// Text of the first completion choice
    text: String,
    /// Model that produced the text
    model: String,
}

impl RawModelOutput {
    /// Creates a new raw output.
    pub fn new(text: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            model: model.into(),
        }
    }

    /// Consumes the output, returning the text.
    pub fn into_text(self) -> String {
        self.text
    }
}

/// A single slide of an outline.
///
/// # Examples
///
/// ```
/// use easel_core::Slide;
///
/// let slide = Slide::builder()
///     .title("Why solar?")
///     .content(vec!["Cheap".to_string(), "Clean".to_string(), "Quiet".to_string()])
///     .layout("content")
///     .notes("Open with the cost curve.")
///     .build()
///     .unwrap();
///
/// assert_eq!(slide.content().len(), 3);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Getters,
    derive_builder::Builder,
)]
#[builder(setter(into), default)]
pub struct Slide {
    /// Slide title
    title: String,
    /// Bullet points, in order
    content: Vec<String>,
    /// Suggested layout tag (e.g. "title", "content", "comparison", "image")
    layout: String,
    /// Speaker notes
    notes: String,
}

impl Slide {
    /// Returns a builder for constructing a Slide.
    pub fn builder() -> SlideBuilder {
        SlideBuilder::default()
    }
}

/// An ordered outline of slides.
///
/// Serializes as `{ "slides": [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct SlideDeck {
    /// Slides in generation order
    slides: Vec<Slide>,
}

impl SlideDeck {
    /// Creates a deck from slides in order.
    pub fn new(slides: Vec<Slide>) -> Self {
        Self { slides }
    }

    /// Number of slides in the deck.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// True when the deck has no slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

/// Diagram source text in Mermaid syntax.
///
/// Serializes as `{ "mermaidCode": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct DiagramDescription {
    /// Non-empty diagram source
    #[serde(rename = "mermaidCode")]
    code: String,
}

impl DiagramDescription {
    /// Wraps diagram source text.
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

/// Successful outcome of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, derive_more::From)]
#[serde(untagged)]
pub enum GenerationResult {
    /// Slide-deck outline
    SlideDeck(SlideDeck),
    /// Diagram description
    Diagram(DiagramDescription),
}

/// How strictly slide objects are checked.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SlidePolicy {
    /// Missing fields degrade to empty values; wrong types are still rejected
    #[default]
    Lenient,
    /// All four fields required, with 3 to 6 bullet points
    Strict,
}

/// Output shape the model answer must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputShape {
    /// An array of exactly `count` slide objects
    SlideDeck {
        /// Required number of slides
        count: usize,
        /// Per-slide field policy
        policy: SlidePolicy,
    },
    /// Non-empty diagram text
    Diagram,
}
