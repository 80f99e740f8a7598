//! Export command implementation.

use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::Settings;
use crate::orchestrator::Orchestrator;
use anyhow::Result;

/// Run the export command.
pub async fn run_export(
    link: &str,
    question: Option<String>,
    output: &str,
    with_transcript: bool,
    settings: Settings,
) -> Result<()> {
    if let Err(e) = preflight::check(Operation::Llm, &settings) {
        Output::error(&format!("{}", e));
        Output::info("Run 'vidsum doctor' for detailed diagnostics.");
        return Err(e.into());
    }

    let orchestrator = Orchestrator::new(&settings)?;

    let spinner = Output::spinner("Summarizing and rendering PDF...");
    let result = orchestrator
        .export(link, question.as_deref(), with_transcript)
        .await;
    spinner.finish_and_clear();

    let bytes = match result {
        Ok(bytes) => bytes,
        Err(e) => {
            Output::error(&format!("Export failed: {}", e));
            return Err(e.into());
        }
    };

    let path = Settings::expand_path(output);
    std::fs::write(&path, &bytes)?;
    Output::success(&format!(
        "Exported {} ({} KiB)",
        path.display(),
        bytes.len().div_ceil(1024)
    ));

    Ok(())
}
