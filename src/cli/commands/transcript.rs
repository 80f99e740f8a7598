//! Transcript command implementation.

use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::Settings;
use crate::youtube::{TranscriptApiFetcher, TranscriptFetcher, VideoId};
use anyhow::Result;

/// Run the transcript command. Needs no API key.
pub async fn run_transcript(link: &str, output: Option<String>, settings: Settings) -> Result<()> {
    if let Err(e) = preflight::check(Operation::Transcript, &settings) {
        Output::error(&format!("{}", e));
        Output::info("Run 'vidsum doctor' for detailed diagnostics.");
        return Err(e.into());
    }

    let video_id = VideoId::parse(link)?;
    let fetcher = TranscriptApiFetcher::new(&settings.transcript)?;

    let spinner = Output::spinner("Fetching captions...");
    let transcript = fetcher.fetch(&video_id).await;
    spinner.finish_and_clear();
    let text = transcript?.text();

    match output {
        Some(path) if path != "-" => {
            let path = Settings::expand_path(&path);
            std::fs::write(&path, &text)?;
            Output::success(&format!("Wrote transcript for {} to {}", video_id, path.display()));
        }
        _ => println!("{}", text),
    }

    Ok(())
}
