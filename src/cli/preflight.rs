//! Pre-flight checks before operations that fetch captions or call the LLM.
//!
//! Validates that required configuration is available before starting
//! operations that would otherwise fail midway.

use crate::config::Settings;
use crate::error::Result;

/// Requirements for different operations.
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    /// Transcript retrieval needs usable transcript settings.
    Transcript,
    /// Summaries, answers, mind maps and exports also need an API key.
    Llm,
}

/// Run pre-flight checks for the given operation.
pub fn check(operation: Operation, settings: &Settings) -> Result<()> {
    settings.validate()?;
    if let Operation::Llm = operation {
        settings.llm.api_key()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VidsumError;

    #[test]
    fn test_transcript_check_needs_no_api_key() {
        let mut settings = Settings::default();
        settings.llm.api_key_env = "VIDSUM_PREFLIGHT_UNSET_KEY".to_string();
        assert!(check(Operation::Transcript, &settings).is_ok());
    }

    #[test]
    fn test_llm_check_wants_api_key() {
        let mut settings = Settings::default();
        settings.llm.api_key_env = "VIDSUM_PREFLIGHT_UNSET_KEY".to_string();
        assert!(matches!(
            check(Operation::Llm, &settings),
            Err(VidsumError::Config(_))
        ));
    }

    #[test]
    fn test_empty_languages_fail_transcript_check() {
        let mut settings = Settings::default();
        settings.transcript.languages.clear();
        assert!(matches!(
            check(Operation::Transcript, &settings),
            Err(VidsumError::Config(_))
        ));
    }
}
