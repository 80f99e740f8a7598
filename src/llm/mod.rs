//! Language model boundary.
//!
//! Services talk to the model through [`CompletionProvider`]: one prompt in,
//! one completion string out. Nothing is streamed.

mod openai;

pub use openai::OpenAICompletion;

use crate::error::Result;
use async_trait::async_trait;

/// A JSON schema the completion should conform to.
#[derive(Debug, Clone)]
pub struct OutputSchema {
    /// Schema name reported to the provider.
    pub name: String,
    pub schema: serde_json::Value,
}

/// A single completion request.
#[derive(Debug, Clone, Default)]
pub struct CompletionRequest {
    pub prompt: String,
    /// Ask the provider for structured output. Providers that cannot honor it
    /// return free text and callers must cope.
    pub schema: Option<OutputSchema>,
    /// Ask for any JSON object, without a schema.
    pub json_object: bool,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Self::default()
        }
    }

    pub fn with_schema(mut self, schema: OutputSchema) -> Self {
        self.schema = Some(schema);
        self
    }

    pub fn with_json_object(mut self) -> Self {
        self.json_object = true;
        self
    }
}

/// Trait for completion providers.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Submit one request and return the completion text.
    async fn complete(&self, request: CompletionRequest) -> Result<String>;

    /// Model identifier, for logging.
    fn model(&self) -> &str;
}
