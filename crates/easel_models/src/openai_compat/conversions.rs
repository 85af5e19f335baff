//! Type conversions between Easel and OpenAI formats.

use crate::openai_compat::{ChatMessage, ChatRequest, ChatResponse, ModelError};
use easel_core::{PromptPayload, RawModelOutput};

/// Converts a prompt payload to a two-message chat request.
pub fn to_chat_request(prompt: &PromptPayload, model: &str) -> Result<ChatRequest, ModelError> {
    let messages = vec![
        ChatMessage::system(prompt.system_instruction().as_str()),
        ChatMessage::user(prompt.user_instruction().as_str()),
    ];

    ChatRequest::builder()
        .model(model)
        .messages(messages)
        .build()
        .map_err(|e| ModelError::Builder(format!("Failed to build request: {}", e)))
}

/// Extracts the text of the first choice.
///
/// The model identifier reported by the provider wins over the requested one.
pub fn from_chat_response(
    response: ChatResponse,
    requested_model: &str,
) -> Result<RawModelOutput, ModelError> {
    let model = response
        .model
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| requested_model.to_string());

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ModelError::ResponseParsing("No choices in response".to_string()))?;

    let text = choice.message.content.ok_or(ModelError::EmptyResponse)?;

    Ok(RawModelOutput::new(text, model))
}
