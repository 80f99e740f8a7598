//! Configuration module for vidsum.
//!
//! Handles loading and managing application settings and prompt templates.

mod prompts;
mod settings;

pub use prompts::{MindMapPrompts, Prompts, QaPrompts, SummaryPrompts};
pub use settings::{
    GeneralSettings, LlmSettings, PromptSettings, ServerSettings, Settings, TranscriptSettings,
};
