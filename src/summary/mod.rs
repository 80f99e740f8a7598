//! Two-part video summaries.
//!
//! The model is asked for a JSON object first. Providers that ignore the
//! schema, or return something unparseable, fall back to [`split_completion`].

mod splitter;

pub use splitter::{split_completion, DETAILED_MARKER, OVERVIEW_LABEL};

use crate::config::Prompts;
use crate::error::Result;
use crate::llm::{CompletionProvider, CompletionRequest, OutputSchema};
use crate::youtube::Transcript;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// A short overview plus a long-form summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub overview: String,
    pub detailed_summary: String,
}

/// Schema for structured summary completions.
pub fn summary_schema() -> OutputSchema {
    OutputSchema {
        name: "video_summary".to_string(),
        schema: serde_json::json!({
            "type": "object",
            "properties": {
                "overview": {
                    "type": "string",
                    "description": "Concise bullet-point summary of the key highlights"
                },
                "detailed_summary": {
                    "type": "string",
                    "description": "Thorough paragraph-style summary of the whole video"
                }
            },
            "required": ["overview", "detailed_summary"],
            "additionalProperties": false
        }),
    }
}

/// Summarizes transcripts with a language model.
pub struct SummaryService {
    llm: Arc<dyn CompletionProvider>,
    prompts: Prompts,
    structured_output: bool,
}

impl SummaryService {
    pub fn new(llm: Arc<dyn CompletionProvider>, prompts: Prompts, structured_output: bool) -> Self {
        Self {
            llm,
            prompts,
            structured_output,
        }
    }

    /// Instruction followed directly by the transcript text.
    fn build_prompt(&self, transcript: &Transcript) -> String {
        let instruction = self.prompts.render_custom(&self.prompts.summary.instruction);
        format!("{}{}", instruction, transcript.text())
    }

    #[instrument(skip(self, transcript), fields(video_id = %transcript.video_id, model = %self.llm.model()))]
    pub async fn summarize(&self, transcript: &Transcript) -> Result<SummaryResult> {
        let mut request = CompletionRequest::new(self.build_prompt(transcript));
        if self.structured_output {
            request = request.with_schema(summary_schema());
        }

        let completion = self.llm.complete(request).await?;

        if self.structured_output {
            if let Ok(result) = serde_json::from_str::<SummaryResult>(completion.trim()) {
                info!("Summary parsed from structured completion");
                return Ok(SummaryResult {
                    overview: result.overview.trim().to_string(),
                    detailed_summary: result.detailed_summary.trim().to_string(),
                });
            }
            debug!("Completion is not a summary object, splitting on marker");
        }

        Ok(split_completion(&completion))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VidsumError;
    use crate::llm::testing::StubCompletion;
    use crate::youtube::{CaptionFragment, VideoId};

    fn transcript() -> Transcript {
        Transcript::new(
            VideoId::parse("https://youtu.be/dQw4w9WgXcQ").unwrap(),
            vec![
                CaptionFragment::new("never gonna"),
                CaptionFragment::new("give you up"),
            ],
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_structured_completion_used_directly() {
        let llm = StubCompletion::replying(&[r#"{"overview": " o ", "detailed_summary": "d"}"#]);
        let service = SummaryService::new(Arc::new(llm.clone()), Prompts::default(), true);

        let result = service.summarize(&transcript()).await.unwrap();
        assert_eq!(result.overview, "o");
        assert_eq!(result.detailed_summary, "d");

        let requests = llm.requests.lock().unwrap();
        assert_eq!(requests[0].schema.as_ref().map(|s| s.name.as_str()), Some("video_summary"));
    }

    #[tokio::test]
    async fn test_free_text_falls_back_to_marker_split() {
        let llm = StubCompletion::replying(&["**Overview:** short **Detailed Summary:** long"]);
        let service = SummaryService::new(Arc::new(llm), Prompts::default(), true);

        let result = service.summarize(&transcript()).await.unwrap();
        assert_eq!(result.overview, "short");
        assert_eq!(result.detailed_summary, "long");
    }

    #[tokio::test]
    async fn test_unstructured_mode_sends_no_schema() {
        let llm = StubCompletion::replying(&["A **Detailed Summary:** B"]);
        let service = SummaryService::new(Arc::new(llm.clone()), Prompts::default(), false);

        service.summarize(&transcript()).await.unwrap();

        let prompts = llm.prompts();
        assert!(prompts[0].starts_with(&Prompts::default().summary.instruction));
        assert!(prompts[0].ends_with("never gonna give you up"));
        assert!(llm.requests.lock().unwrap()[0].schema.is_none());
    }

    #[tokio::test]
    async fn test_llm_failure_propagates() {
        let service = SummaryService::new(
            Arc::new(StubCompletion::failing("quota exceeded")),
            Prompts::default(),
            true,
        );
        assert!(matches!(
            service.summarize(&transcript()).await,
            Err(VidsumError::Llm(_))
        ));
    }
}
