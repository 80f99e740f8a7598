//! Questions about a single video, answered from its transcript.

use crate::config::Prompts;
use crate::error::{Result, VidsumError};
use crate::llm::{CompletionProvider, CompletionRequest};
use crate::youtube::Transcript;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::instrument;

/// The model's answer, unparsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerResult {
    pub answer: String,
}

pub struct QaService {
    llm: Arc<dyn CompletionProvider>,
    prompts: Prompts,
}

impl QaService {
    pub fn new(llm: Arc<dyn CompletionProvider>, prompts: Prompts) -> Self {
        Self { llm, prompts }
    }

    fn build_prompt(&self, transcript: &Transcript, question: &str) -> String {
        let instruction = self.prompts.render_custom(&self.prompts.qa.instruction);
        format!(
            "{}\nTranscript: {}\nQuestion: {}",
            instruction,
            transcript.text(),
            question
        )
    }

    #[instrument(skip(self, transcript), fields(video_id = %transcript.video_id))]
    pub async fn answer(&self, transcript: &Transcript, question: &str) -> Result<AnswerResult> {
        let question = question.trim();
        if question.is_empty() {
            return Err(VidsumError::InvalidInput("question must not be empty".to_string()));
        }

        let answer = self
            .llm
            .complete(CompletionRequest::new(self.build_prompt(transcript, question)))
            .await?;

        Ok(AnswerResult { answer })
    }
}
