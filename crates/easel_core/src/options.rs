//! Enumerated request options.
//!
//! Each option has a fixed allowed-set and a default used when the caller
//! leaves it out.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Display;
use strum::VariantArray;

/// A named, enumerated request parameter.
///
/// # Examples
///
/// ```
/// use easel_core::{RequestOption, Tone};
///
/// assert_eq!(Tone::KEY, "tone");
/// assert_eq!(Tone::allowed_list(), "persuasive, professional, casual");
/// assert_eq!(Tone::default(), Tone::Persuasive);
/// ```
pub trait RequestOption: Copy + Default + Display + strum::VariantArray + 'static {
    /// Field name in the request body
    const KEY: &'static str;
    /// Human label used in validation messages
    const LABEL: &'static str;

    /// Comma-separated rendering of the allowed-set, in declaration order.
    fn allowed_list() -> String {
        Self::VARIANTS
            .iter()
            .map(|variant| variant.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Number of slides in a generated outline.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    strum::Display,
    strum::EnumString,
    strum::VariantArray,
)]
pub enum SlideCount {
    #[strum(serialize = "4")]
    Four,
    #[default]
    #[strum(serialize = "6")]
    Six,
    #[strum(serialize = "8")]
    Eight,
}

impl SlideCount {
    /// Number of slides as an integer.
    pub fn get(self) -> usize {
        match self {
            SlideCount::Four => 4,
            SlideCount::Six => 6,
            SlideCount::Eight => 8,
        }
    }

    /// Looks up the option matching an integer, if it is in the allowed-set.
    pub fn from_count(count: u64) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.get() as u64 == count)
    }
}

impl RequestOption for SlideCount {
    const KEY: &'static str = "slideCount";
    const LABEL: &'static str = "Slide count";
}

impl Serialize for SlideCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.get() as u64)
    }
}

impl<'de> Deserialize<'de> for SlideCount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let count = u64::deserialize(deserializer)?;
        Self::from_count(count).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "{} must be one of: {}",
                Self::LABEL,
                Self::allowed_list()
            ))
        })
    }
}

/// Tone of the generated presentation.
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
    strum::VariantArray,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Tone {
    #[default]
    Persuasive,
    Professional,
    Casual,
}

impl RequestOption for Tone {
    const KEY: &'static str = "tone";
    const LABEL: &'static str = "Tone";
}

/// Audience the presentation is written for.
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
    strum::VariantArray,
)]
pub enum Audience {
    #[default]
    #[serde(rename = "general public")]
    #[strum(serialize = "general public")]
    GeneralPublic,
    #[serde(rename = "executives")]
    #[strum(serialize = "executives")]
    Executives,
    #[serde(rename = "students")]
    #[strum(serialize = "students")]
    Students,
}

impl RequestOption for Audience {
    const KEY: &'static str = "audience";
    const LABEL: &'static str = "Audience";
}
