//! Summarize command implementation.

use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::Settings;
use crate::orchestrator::Orchestrator;
use anyhow::Result;

/// Run the summarize command.
pub async fn run_summarize(link: &str, json: bool, settings: Settings) -> Result<()> {
    if let Err(e) = preflight::check(Operation::Llm, &settings) {
        Output::error(&format!("{}", e));
        Output::info("Run 'vidsum doctor' for detailed diagnostics.");
        return Err(e.into());
    }

    let orchestrator = Orchestrator::new(&settings)?;

    let spinner = Output::spinner("Fetching transcript and summarizing...");
    let result = orchestrator.summarize(link).await;
    spinner.finish_and_clear();

    match result {
        Ok(summary) if json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Ok(summary) => {
            Output::section("Overview", &summary.overview);
            Output::section("Detailed Summary", &summary.detailed_summary);
        }
        Err(e) => {
            Output::error(&format!("Failed to summarize: {}", e));
            return Err(e.into());
        }
    }

    Ok(())
}
