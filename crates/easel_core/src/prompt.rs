//! Rendered prompts.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// System and user instructions sent to the model.
///
/// Derived deterministically from a [`crate::GenerationRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct PromptPayload {
    /// Fixed instruction template with the resolved options filled in
    system_instruction: String,
    /// The caller's requirement text, unmodified
    user_instruction: String,
}

impl PromptPayload {
    /// Creates a new prompt payload.
    pub fn new(system_instruction: impl Into<String>, user_instruction: impl Into<String>) -> Self {
        Self {
            system_instruction: system_instruction.into(),
            user_instruction: user_instruction.into(),
        }
    }
}
