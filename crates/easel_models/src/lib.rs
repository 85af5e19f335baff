//! LLM provider integration for Easel.
//!
//! [`CompletionDriver`] is the seam the generation pipeline calls through;
//! [`OpenAICompatibleClient`] implements it for any endpoint that speaks the
//! OpenAI chat completions format (OpenRouter by default).

mod driver;
mod openai_compat;

pub use driver::CompletionDriver;
pub use openai_compat::{
    ChatMessage, ChatRequest, ChatResponse, ClientSettings, ClientSettingsBuilder, ModelError,
    OpenAICompatibleClient,
};
