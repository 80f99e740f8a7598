//! Chat completions against an OpenAI-compatible API.

use super::{CompletionProvider, CompletionRequest};
use crate::config::LlmSettings;
use crate::error::{Result, VidsumError};
use crate::openai::create_client;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequest,
    CreateChatCompletionRequestArgs, ResponseFormat, ResponseFormatJsonSchema,
};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Completion provider backed by `async-openai`.
pub struct OpenAICompletion {
    client: async_openai::Client<async_openai::config::OpenAIConfig>,
    model: String,
    temperature: f32,
}

impl OpenAICompletion {
    /// Build a provider from explicit settings. Fails if the API key is missing.
    pub fn from_settings(settings: &LlmSettings) -> Result<Self> {
        Ok(Self {
            client: create_client(settings)?,
            model: settings.model.clone(),
            temperature: settings.temperature,
        })
    }
}

/// Turn a request into a single-message chat request, with the response
/// format set from its schema or JSON mode.
fn build_chat_request(
    model: &str,
    temperature: f32,
    request: CompletionRequest,
) -> Result<CreateChatCompletionRequest> {
    let message: ChatCompletionRequestMessage = ChatCompletionRequestUserMessageArgs::default()
        .content(request.prompt)
        .build()
        .map_err(|e| VidsumError::Llm(e.to_string()))?
        .into();

    let mut builder = CreateChatCompletionRequestArgs::default();
    builder
        .model(model)
        .messages(vec![message])
        .temperature(temperature);

    if let Some(schema) = request.schema {
        builder.response_format(ResponseFormat::JsonSchema {
            json_schema: ResponseFormatJsonSchema {
                description: None,
                name: schema.name,
                schema: Some(schema.schema),
                strict: Some(true),
            },
        });
    } else if request.json_object {
        builder.response_format(ResponseFormat::JsonObject);
    }

    builder
        .build()
        .map_err(|e| VidsumError::Llm(e.to_string()))
}

#[async_trait]
impl CompletionProvider for OpenAICompletion {
    #[instrument(skip(self, request), fields(model = %self.model, prompt_len = request.prompt.len()))]
    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        let chat_request = build_chat_request(&self.model, self.temperature, request)?;

        let response = self
            .client
            .chat()
            .create(chat_request)
            .await
            .map_err(|e| VidsumError::OpenAI(format!("Failed to generate completion: {}", e)))?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| VidsumError::Llm("Empty response from LLM".to_string()))?;

        debug!("Received completion of {} chars", content.len());
        Ok(content)
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::summary_schema;

    #[test]
    fn test_requires_api_key() {
        let settings = LlmSettings {
            api_key_env: "VIDSUM_UNSET_KEY_FOR_PROVIDER_TEST".to_string(),
            ..LlmSettings::default()
        };
        assert!(matches!(
            OpenAICompletion::from_settings(&settings),
            Err(VidsumError::Config(_))
        ));
    }

    #[test]
    fn test_plain_request_has_no_response_format() {
        let request =
            build_chat_request("gpt-4o-mini", 0.3, CompletionRequest::new("hello")).unwrap();
        assert_eq!(request.model, "gpt-4o-mini");
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.temperature, Some(0.3));
        assert!(request.response_format.is_none());
    }

    #[test]
    fn test_schema_becomes_strict_json_schema() {
        let request = build_chat_request(
            "m",
            0.0,
            CompletionRequest::new("p").with_schema(summary_schema()),
        )
        .unwrap();

        match request.response_format {
            Some(ResponseFormat::JsonSchema { json_schema }) => {
                assert_eq!(json_schema.name, "video_summary");
                assert_eq!(json_schema.strict, Some(true));
                let schema = json_schema.schema.unwrap();
                assert_eq!(schema["required"][0], "overview");
            }
            other => panic!("unexpected response format: {:?}", other),
        }
    }

    #[test]
    fn test_json_object_mode() {
        let request =
            build_chat_request("m", 0.0, CompletionRequest::new("p").with_json_object()).unwrap();
        assert!(matches!(
            request.response_format,
            Some(ResponseFormat::JsonObject)
        ));
    }
}
