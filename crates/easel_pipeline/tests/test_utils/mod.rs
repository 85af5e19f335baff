//! Test utilities for pipeline tests.
//!
//! Provides a scripted completion driver that records every call.

#![allow(dead_code)]

use async_trait::async_trait;
use easel_core::{PromptPayload, RawModelOutput};
use easel_models::{CompletionDriver, ModelError};
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

/// What the scripted driver does on its next call.
#[derive(Debug, Clone)]
pub enum Scripted {
    /// Answer with this text
    Respond(String),
    /// Fail with this error
    Fail(ModelError),
    /// Sleep, then answer with this text
    Stall(Duration, String),
}

/// A completion driver that replays a script and records calls.
#[derive(Debug, Default)]
pub struct ScriptedDriver {
    script: Mutex<VecDeque<Scripted>>,
    calls: Mutex<Vec<(PromptPayload, String)>>,
    titles: Mutex<Vec<Option<String>>>,
}

impl ScriptedDriver {
    /// Creates a driver that plays `steps` in order.
    pub fn new(steps: impl IntoIterator<Item = Scripted>) -> Self {
        Self {
            script: Mutex::new(steps.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
            titles: Mutex::new(Vec::new()),
        }
    }

    /// Creates a driver that answers once with `text`.
    pub fn responding(text: impl Into<String>) -> Self {
        Self::new([Scripted::Respond(text.into())])
    }

    /// Number of calls received so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("calls lock").len()
    }

    /// All calls received so far.
    pub fn calls(&self) -> Vec<(PromptPayload, String)> {
        self.calls.lock().expect("calls lock").clone()
    }

    /// Attribution titles passed with each call so far.
    pub fn titles(&self) -> Vec<Option<String>> {
        self.titles.lock().expect("titles lock").clone()
    }
}

#[async_trait]
impl CompletionDriver for ScriptedDriver {
    async fn complete(
        &self,
        prompt: &PromptPayload,
        model: &str,
    ) -> Result<RawModelOutput, ModelError> {
        self.calls
            .lock()
            .expect("calls lock")
            .push((prompt.clone(), model.to_string()));

        let step = self
            .script
            .lock()
            .expect("script lock")
            .pop_front()
            .unwrap_or_else(|| Scripted::Fail(ModelError::Http("script exhausted".to_string())));

        match step {
            Scripted::Respond(text) => Ok(RawModelOutput::new(text, model)),
            Scripted::Fail(error) => Err(error),
            Scripted::Stall(delay, text) => {
                tokio::time::sleep(delay).await;
                Ok(RawModelOutput::new(text, model))
            }
        }
    }

    async fn complete_titled(
        &self,
        prompt: &PromptPayload,
        model: &str,
        title: Option<&str>,
    ) -> Result<RawModelOutput, ModelError> {
        self.titles
            .lock()
            .expect("titles lock")
            .push(title.map(str::to_string));
        self.complete(prompt, model).await
    }

    fn provider_name(&self) -> &str {
        "scripted"
    }
}

/// A well-formed slide object.
pub fn slide_json(n: usize) -> Value {
    json!({
        "title": format!("Slide {}", n),
        "content": ["First point", "Second point", "Third point"],
        "layout": "content",
        "notes": format!("Speaker note for slide {}.", n)
    })
}

/// A JSON array of `count` well-formed slides, as text.
pub fn slides_text(count: usize) -> String {
    Value::Array((1..=count).map(slide_json).collect()).to_string()
}
