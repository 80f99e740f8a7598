//! Transcript retrieval through YouTube's caption tracks.

use super::{CaptionFragment, Transcript, TranscriptFetcher, VideoId};
use crate::config::TranscriptSettings;
use crate::error::{Result, VidsumError};
use async_trait::async_trait;
use tracing::{debug, info, instrument};
use yt_transcript_rs::api::YouTubeTranscriptApi;

/// Fetches manual or auto-generated captions with `yt_transcript_rs`.
pub struct TranscriptApiFetcher {
    api: YouTubeTranscriptApi,
    languages: Vec<String>,
}

impl TranscriptApiFetcher {
    pub fn new(settings: &TranscriptSettings) -> Result<Self> {
        let api = YouTubeTranscriptApi::new(None, None, None).map_err(|e| {
            VidsumError::Transcript(format!("failed to initialize transcript client: {}", e))
        })?;

        Ok(Self {
            api,
            languages: settings.languages.clone(),
        })
    }
}

/// One fragment per caption snippet, in order. Blank snippets are dropped.
pub(crate) fn fragments_from_snippets<'a>(
    snippets: impl IntoIterator<Item = &'a str>,
) -> Vec<CaptionFragment> {
    snippets
        .into_iter()
        .filter_map(CaptionFragment::from_raw)
        .collect()
}

#[async_trait]
impl TranscriptFetcher for TranscriptApiFetcher {
    #[instrument(skip(self), fields(video_id = %video_id))]
    async fn fetch(&self, video_id: &VideoId) -> Result<Transcript> {
        let languages: Vec<&str> = self.languages.iter().map(String::as_str).collect();

        info!("Fetching captions");
        let fetched = self
            .api
            .fetch_transcript(video_id.as_str(), &languages, false)
            .await
            .map_err(|e| VidsumError::Transcript(e.to_string()))?;
        debug!(
            "Got {} snippets in {} (generated: {})",
            fetched.snippets.len(),
            fetched.language_code,
            fetched.is_generated
        );

        let fragments = fragments_from_snippets(fetched.snippets.iter().map(|s| s.text.as_str()));
        Transcript::new(video_id.clone(), fragments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_fragment_per_snippet() {
        let fragments = fragments_from_snippets(["Hello", "  big\nworld ", "", "again"]);
        assert_eq!(
            fragments,
            vec![
                CaptionFragment::new("Hello"),
                CaptionFragment::new("big world"),
                CaptionFragment::new("again"),
            ]
        );
    }

    #[test]
    fn test_blank_snippets_make_an_empty_transcript() {
        let video = VideoId::parse("https://youtu.be/dQw4w9WgXcQ").unwrap();
        let fragments = fragments_from_snippets(["\n", " "]);
        assert!(matches!(
            Transcript::new(video, fragments),
            Err(VidsumError::Transcript(_))
        ));
    }

    #[test]
    fn test_uses_configured_languages() {
        let settings = TranscriptSettings {
            languages: vec!["de".to_string(), "en".to_string()],
        };
        let fetcher = TranscriptApiFetcher::new(&settings).unwrap();
        assert_eq!(fetcher.languages, vec!["de", "en"]);
    }
}
