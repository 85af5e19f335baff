//! Generic OpenAI-compatible API client.
//!
//! Works with any endpoint that follows the OpenAI chat completions format,
//! including OpenRouter.

mod client;
mod conversions;
mod dto;

pub use client::{ClientSettings, ClientSettingsBuilder, OpenAICompatibleClient};
pub use dto::{ChatMessage, ChatRequest, ChatResponse, ModelError};
