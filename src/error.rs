//! Error types for vidsum.

use thiserror::Error;

/// Library-level error type for vidsum operations.
#[derive(Error, Debug)]
pub enum VidsumError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Transcript unavailable: {0}")]
    Transcript(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("OpenAI API error: {0}")]
    OpenAI(String),

    #[error("PDF export failed: {0}")]
    Export(String),

    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl VidsumError {
    /// Whether the error was caused by the caller's input rather than an upstream fault.
    pub fn is_client_error(&self) -> bool {
        matches!(self, VidsumError::InvalidInput(_))
    }
}

/// Result type alias for vidsum operations.
pub type Result<T> = std::result::Result<T, VidsumError>;
