//! YouTube video identification and transcript retrieval.
//!
//! Retrieval goes through the [`TranscriptFetcher`] trait so the HTTP layer and
//! services can be exercised without network access.

mod transcript_api;
mod video_id;

pub use transcript_api::TranscriptApiFetcher;
pub use video_id::VideoId;

use crate::error::{Result, VidsumError};
use async_trait::async_trait;
use serde::Serialize;

/// One caption cue's text. Timing is dropped once fragments are ordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaptionFragment {
    pub text: String,
}

impl CaptionFragment {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Collapse whitespace runs; `None` if nothing is left.
    pub(crate) fn from_raw(raw: &str) -> Option<Self> {
        let text = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        if text.is_empty() {
            None
        } else {
            Some(Self { text })
        }
    }
}

/// Caption text for a video, in spoken order.
#[derive(Debug, Clone, Serialize)]
pub struct Transcript {
    pub video_id: VideoId,
    pub fragments: Vec<CaptionFragment>,
}

impl Transcript {
    /// Build a transcript. A transcript without any caption text is an error.
    pub fn new(video_id: VideoId, fragments: Vec<CaptionFragment>) -> Result<Self> {
        let transcript = Self {
            video_id,
            fragments,
        };
        if transcript.text().trim().is_empty() {
            return Err(VidsumError::Transcript(format!(
                "no caption text for video {}",
                transcript.video_id
            )));
        }
        Ok(transcript)
    }

    /// Fragments joined with single spaces.
    pub fn text(&self) -> String {
        self.fragments
            .iter()
            .map(|f| f.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Trait for transcript sources.
#[async_trait]
pub trait TranscriptFetcher: Send + Sync {
    /// Fetch the transcript for a video.
    async fn fetch(&self, video_id: &VideoId) -> Result<Transcript>;
}

#[cfg(test)]
pub(crate) mod testing {
    //! Canned fetchers for service and router tests.

    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    pub struct StubFetcher {
        fragments: Vec<String>,
        fail_with: Option<String>,
        pub calls: Arc<Mutex<Vec<VideoId>>>,
    }

    impl StubFetcher {
        pub fn with_text(fragments: &[&str]) -> Self {
            Self {
                fragments: fragments.iter().map(|f| f.to_string()).collect(),
                ..Self::default()
            }
        }

        pub fn failing(msg: &str) -> Self {
            Self {
                fail_with: Some(msg.to_string()),
                ..Self::default()
            }
        }
    }

    #[async_trait]
    impl TranscriptFetcher for StubFetcher {
        async fn fetch(&self, video_id: &VideoId) -> Result<Transcript> {
            self.calls.lock().unwrap().push(video_id.clone());
            if let Some(msg) = &self.fail_with {
                return Err(VidsumError::Transcript(msg.clone()));
            }
            Transcript::new(
                video_id.clone(),
                self.fragments.iter().map(CaptionFragment::new).collect(),
            )
        }
    }

    /// Never answers within any reasonable deadline.
    pub struct HangingFetcher;

    #[async_trait]
    impl TranscriptFetcher for HangingFetcher {
        async fn fetch(&self, _video_id: &VideoId) -> Result<Transcript> {
            tokio::time::sleep(std::time::Duration::from_secs(3600)).await;
            Err(VidsumError::Transcript("unreachable".to_string()))
        }
    }
}
