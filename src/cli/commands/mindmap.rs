//! Mind map command implementation.

use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::Settings;
use crate::orchestrator::Orchestrator;
use anyhow::Result;

/// Run the mindmap command, printing the tree as JSON.
pub async fn run_mindmap(link: &str, settings: Settings) -> Result<()> {
    if let Err(e) = preflight::check(Operation::Llm, &settings) {
        Output::error(&format!("{}", e));
        return Err(e.into());
    }

    let orchestrator = Orchestrator::new(&settings)?;

    let spinner = Output::spinner("Building mind map...");
    let tree = orchestrator.mindmap(link).await;
    spinner.finish_and_clear();

    println!("{}", serde_json::to_string_pretty(&tree?)?);
    Ok(())
}
