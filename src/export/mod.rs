//! PDF export of a video's summary and Q&A.

mod layout;
mod pdf;

pub use layout::{paginate, wrap_text, Block, PageGeometry, PlacedLine, TextStyle};
pub use pdf::render_pdf;

use crate::error::Result;
use crate::qa::AnswerResult;
use crate::summary::SummaryResult;
use crate::youtube::Transcript;
use tracing::instrument;

/// Attachment name used by the HTTP layer and the CLI default.
pub const EXPORT_FILENAME: &str = "youtube_summary.pdf";

pub const DOCUMENT_TITLE: &str = "YouTube Video Summary";

/// A question together with its answer.
#[derive(Debug, Clone)]
pub struct QaPair {
    pub question: String,
    pub answer: AnswerResult,
}

/// Everything that goes into an exported document.
#[derive(Debug, Clone)]
pub struct ExportContent {
    pub transcript: Transcript,
    pub summary: SummaryResult,
    pub qa: Option<QaPair>,
    /// Append the full transcript after the Q&A section.
    pub include_transcript: bool,
}

impl ExportContent {
    /// Title, Summary, Detailed Summary and Q&A sections as styled blocks.
    pub fn blocks(&self) -> Vec<Block> {
        let mut blocks = vec![
            Block::new(TextStyle::Title, DOCUMENT_TITLE),
            Block::new(TextStyle::Meta, self.transcript.video_id.watch_url()),
            Block::new(
                TextStyle::Meta,
                format!("Generated {}", chrono::Utc::now().format("%Y-%m-%d %H:%M UTC")),
            ),
            Block::new(TextStyle::Heading, "Summary"),
            Block::new(TextStyle::Body, or_placeholder(&self.summary.overview)),
            Block::new(TextStyle::Heading, "Detailed Summary"),
            Block::new(TextStyle::Body, or_placeholder(&self.summary.detailed_summary)),
            Block::new(TextStyle::Heading, "Q&A"),
        ];

        match &self.qa {
            Some(qa) => {
                blocks.push(Block::new(TextStyle::Body, format!("Q: {}", qa.question)));
                blocks.push(Block::new(TextStyle::Body, format!("A: {}", qa.answer.answer.trim())));
            }
            None => blocks.push(Block::new(TextStyle::Body, "No question was asked.")),
        }

        if self.include_transcript {
            blocks.push(Block::new(TextStyle::Heading, "Transcript"));
            blocks.push(Block::new(TextStyle::Body, self.transcript.text()));
        }

        blocks
    }
}

fn or_placeholder(text: &str) -> &str {
    if text.trim().is_empty() {
        "Not available."
    } else {
        text
    }
}

/// Renders [`ExportContent`] on A4 pages.
pub struct PdfExporter {
    geometry: PageGeometry,
}

impl PdfExporter {
    pub fn new() -> Self {
        Self {
            geometry: PageGeometry::a4(),
        }
    }

    #[instrument(skip(self, content), fields(video_id = %content.transcript.video_id))]
    pub fn export(&self, content: &ExportContent) -> Result<Vec<u8>> {
        render_pdf(DOCUMENT_TITLE, &content.blocks(), &self.geometry)
    }
}

impl Default for PdfExporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::youtube::{CaptionFragment, VideoId};

    fn content(qa: Option<QaPair>, include_transcript: bool) -> ExportContent {
        ExportContent {
            transcript: Transcript::new(
                VideoId::parse("https://youtu.be/dQw4w9WgXcQ").unwrap(),
                vec![CaptionFragment::new("hello"), CaptionFragment::new("world")],
            )
            .unwrap(),
            summary: SummaryResult {
                overview: "- a point".to_string(),
                detailed_summary: String::new(),
            },
            qa,
            include_transcript,
        }
    }

    fn headings(blocks: &[Block]) -> Vec<&str> {
        blocks
            .iter()
            .filter(|b| matches!(b.style, TextStyle::Title | TextStyle::Heading))
            .map(|b| b.text.as_str())
            .collect()
    }

    #[test]
    fn test_four_sections() {
        let blocks = content(None, false).blocks();
        assert_eq!(
            headings(&blocks),
            vec![DOCUMENT_TITLE, "Summary", "Detailed Summary", "Q&A"]
        );
        assert!(blocks.iter().any(|b| b.text == "Not available."));
        assert!(blocks.iter().any(|b| b.text == "No question was asked."));
    }

    #[test]
    fn test_qa_and_transcript_appendix() {
        let qa = QaPair {
            question: "Why?".to_string(),
            answer: AnswerResult {
                answer: "Because.\n".to_string(),
            },
        };
        let blocks = content(Some(qa), true).blocks();
        assert!(blocks.iter().any(|b| b.text == "Q: Why?"));
        assert!(blocks.iter().any(|b| b.text == "A: Because."));
        assert_eq!(headings(&blocks).last(), Some(&"Transcript"));
        assert_eq!(blocks.last().map(|b| b.text.as_str()), Some("hello world"));
    }

    #[test]
    fn test_export_is_pdf() {
        let bytes = PdfExporter::new().export(&content(None, true)).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
