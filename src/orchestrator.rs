//! Request pipeline for vidsum.
//!
//! Every operation parses the link, fetches the transcript, then makes its
//! model call(s) in sequence. The whole pipeline runs under one deadline;
//! on expiry the in-flight future is dropped, cancelling any pending request.

use crate::config::{Prompts, Settings};
use crate::error::{Result, VidsumError};
use crate::export::{ExportContent, PdfExporter, QaPair};
use crate::llm::{CompletionProvider, OpenAICompletion};
use crate::mindmap::{MindMapNode, MindMapService};
use crate::qa::{AnswerResult, QaService};
use crate::summary::{SummaryResult, SummaryService};
use crate::youtube::{Transcript, TranscriptApiFetcher, TranscriptFetcher, VideoId};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument};

/// The main orchestrator for the vidsum pipeline.
pub struct Orchestrator {
    fetcher: Arc<dyn TranscriptFetcher>,
    summary: SummaryService,
    qa: QaService,
    mindmap: MindMapService,
    request_timeout: Duration,
}

impl Orchestrator {
    /// Create an orchestrator backed by YouTube captions and the configured LLM endpoint.
    pub fn new(settings: &Settings) -> Result<Self> {
        let prompts = Prompts::load(
            settings.prompts.custom_dir.as_deref(),
            Some(&settings.prompts.variables),
        )?;

        info!("Using model {}", settings.llm.model);
        let llm: Arc<dyn CompletionProvider> =
            Arc::new(OpenAICompletion::from_settings(&settings.llm)?);
        let fetcher: Arc<dyn TranscriptFetcher> =
            Arc::new(TranscriptApiFetcher::new(&settings.transcript)?);

        Ok(Self::with_components(settings, prompts, fetcher, llm))
    }

    /// Create an orchestrator with custom components.
    pub fn with_components(
        settings: &Settings,
        prompts: Prompts,
        fetcher: Arc<dyn TranscriptFetcher>,
        llm: Arc<dyn CompletionProvider>,
    ) -> Self {
        Self {
            fetcher,
            summary: SummaryService::new(
                llm.clone(),
                prompts.clone(),
                settings.llm.structured_output,
            ),
            qa: QaService::new(llm.clone(), prompts.clone()),
            mindmap: MindMapService::new(llm, prompts),
            request_timeout: settings.server.request_timeout(),
        }
    }

    async fn with_deadline<T>(&self, fut: impl Future<Output = Result<T>>) -> Result<T> {
        tokio::time::timeout(self.request_timeout, fut)
            .await
            .map_err(|_| VidsumError::Timeout(self.request_timeout.as_secs()))?
    }

    async fn fetch_transcript(&self, link: &str) -> Result<Transcript> {
        let video_id = VideoId::parse(link)?;
        self.fetcher.fetch(&video_id).await
    }

    /// Fetch the transcript for a link.
    #[instrument(skip(self))]
    pub async fn transcript(&self, link: &str) -> Result<Transcript> {
        self.with_deadline(self.fetch_transcript(link)).await
    }

    /// Fetch the transcript and summarize it.
    #[instrument(skip(self))]
    pub async fn summarize(&self, link: &str) -> Result<SummaryResult> {
        self.with_deadline(async {
            let transcript = self.fetch_transcript(link).await?;
            self.summary.summarize(&transcript).await
        })
        .await
    }

    /// Fetch the transcript and answer a question about it.
    #[instrument(skip(self))]
    pub async fn ask(&self, link: &str, question: &str) -> Result<AnswerResult> {
        if question.trim().is_empty() {
            return Err(VidsumError::InvalidInput("question must not be empty".to_string()));
        }

        self.with_deadline(async {
            let transcript = self.fetch_transcript(link).await?;
            self.qa.answer(&transcript, question).await
        })
        .await
    }

    /// Fetch the transcript and build a topic tree.
    #[instrument(skip(self))]
    pub async fn mindmap(&self, link: &str) -> Result<MindMapNode> {
        self.with_deadline(async {
            let transcript = self.fetch_transcript(link).await?;
            self.mindmap.build(&transcript).await
        })
        .await
    }

    /// Summarize, optionally answer a question, and render everything as PDF.
    ///
    /// Any failure fails the whole export; no partial document is produced.
    #[instrument(skip(self))]
    pub async fn export(
        &self,
        link: &str,
        question: Option<&str>,
        include_transcript: bool,
    ) -> Result<Vec<u8>> {
        let question = question.map(str::trim).filter(|q| !q.is_empty());

        self.with_deadline(async {
            let transcript = self.fetch_transcript(link).await?;
            let summary = self.summary.summarize(&transcript).await?;
            let qa = match question {
                Some(q) => Some(QaPair {
                    question: q.to_string(),
                    answer: self.qa.answer(&transcript, q).await?,
                }),
                None => None,
            };

            let content = ExportContent {
                transcript,
                summary,
                qa,
                include_transcript,
            };
            tokio::task::spawn_blocking(move || PdfExporter::new().export(&content))
                .await
                .map_err(|e| VidsumError::Export(format!("render task failed: {}", e)))?
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::testing::StubCompletion;
    use crate::youtube::testing::{HangingFetcher, StubFetcher};

    fn orchestrator(fetcher: StubFetcher, llm: StubCompletion) -> Orchestrator {
        Orchestrator::with_components(
            &Settings::default(),
            Prompts::default(),
            Arc::new(fetcher),
            Arc::new(llm),
        )
    }

    const LINK: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

    #[tokio::test]
    async fn test_summarize_pipeline() {
        let fetcher = StubFetcher::with_text(&["Hello", "world"]);
        let llm = StubCompletion::replying(&["A **Detailed Summary:** B"]);
        let orch = orchestrator(fetcher.clone(), llm.clone());

        let result = orch.summarize(LINK).await.unwrap();
        assert_eq!(result.overview, "A");
        assert_eq!(result.detailed_summary, "B");
        assert_eq!(fetcher.calls.lock().unwrap()[0].as_str(), "dQw4w9WgXcQ");
        assert!(llm.prompts()[0].ends_with("Hello world"));
    }

    #[tokio::test]
    async fn test_invalid_link_skips_fetch() {
        let fetcher = StubFetcher::with_text(&["unused"]);
        let orch = orchestrator(fetcher.clone(), StubCompletion::default());

        let result = orch.transcript("https://example.com").await;
        assert!(matches!(result, Err(VidsumError::InvalidInput(_))));
        assert!(fetcher.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_transcript_failure_never_reaches_llm() {
        let llm = StubCompletion::replying(&["unused"]);
        let orch = orchestrator(StubFetcher::failing("captions disabled"), llm.clone());

        let result = orch.ask(LINK, "What?").await;
        assert!(matches!(result, Err(VidsumError::Transcript(_))));
        assert!(llm.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_export_with_question_calls_llm_twice() {
        let llm = StubCompletion::replying(&["A **Detailed Summary:** B", "forty-two"]);
        let orch = orchestrator(StubFetcher::with_text(&["text"]), llm.clone());

        let bytes = tokio_test::assert_ok!(orch.export(LINK, Some("Meaning?"), false).await);
        assert!(bytes.starts_with(b"%PDF"));
        assert_eq!(llm.prompts().len(), 2);
    }

    #[tokio::test]
    async fn test_export_fails_whole_request_on_qa_error() {
        // One reply only: the summary succeeds and the answer call fails.
        let llm = StubCompletion::replying(&["A **Detailed Summary:** B"]);
        let orch = orchestrator(StubFetcher::with_text(&["text"]), llm);

        tokio_test::assert_err!(orch.export(LINK, Some("Meaning?"), false).await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline() {
        let mut settings = Settings::default();
        settings.server.request_timeout_secs = 5;
        let orch = Orchestrator::with_components(
            &settings,
            Prompts::default(),
            Arc::new(HangingFetcher),
            Arc::new(StubCompletion::default()),
        );

        assert!(matches!(
            orch.transcript(LINK).await,
            Err(VidsumError::Timeout(5))
        ));
    }
}
