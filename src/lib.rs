//! vidsum - YouTube transcript summaries
//!
//! Turns a YouTube link into a caption transcript and asks a language model
//! to summarize it, answer questions about it, or sketch a topic tree. The
//! results can be exported as a PDF report.
//!
//! # Architecture
//!
//! - `config` - Settings and prompt templates
//! - `youtube` - Video id extraction and caption retrieval
//! - `llm` - Chat completion provider abstraction
//! - `summary` - Overview and detailed summary generation
//! - `qa` - Question answering over a transcript
//! - `mindmap` - Topic tree generation
//! - `export` - PDF report layout and rendering
//! - `orchestrator` - Per-request pipeline with deadlines
//! - `cli` - Command line interface and HTTP server
//!
//! # Example
//!
//! ```rust,no_run
//! use vidsum::config::Settings;
//! use vidsum::orchestrator::Orchestrator;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let orchestrator = Orchestrator::new(&settings)?;
//!
//!     let summary = orchestrator
//!         .summarize("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
//!         .await?;
//!     println!("{}", summary.overview);
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod llm;
pub mod mindmap;
pub mod openai;
pub mod orchestrator;
pub mod qa;
pub mod summary;
pub mod youtube;

pub use error::{Result, VidsumError};
