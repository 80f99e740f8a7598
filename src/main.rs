//! vidsum CLI entry point.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use vidsum::cli::{commands, Cli, Commands};
use vidsum::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config_path = Settings::resolve_config_path(cli.config.as_deref());
    let settings = Settings::load_from(Some(&config_path))?;

    // Initialize logging
    let log_level = match cli.verbose {
        0 => settings.general.log_level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| {
                format!("vidsum={},tower_http={}", log_level, log_level)
            }),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match &cli.command {
        Commands::Serve { host, port } => {
            let host = host.clone().unwrap_or_else(|| settings.server.host.clone());
            let port = port.unwrap_or(settings.server.port);
            commands::run_serve(&host, port, settings).await?;
        }

        Commands::Transcript { link, output } => {
            commands::run_transcript(link, output.clone(), settings).await?;
        }

        Commands::Summarize { link, json } => {
            commands::run_summarize(link, *json, settings).await?;
        }

        Commands::Ask { link, question } => {
            commands::run_ask(link, question, settings).await?;
        }

        Commands::Mindmap { link } => {
            commands::run_mindmap(link, settings).await?;
        }

        Commands::Export {
            link,
            question,
            output,
            with_transcript,
        } => {
            commands::run_export(link, question.clone(), output, *with_transcript, settings)
                .await?;
        }

        Commands::Doctor => {
            commands::run_doctor(&settings, &config_path)?;
        }

        Commands::Config { action } => {
            commands::run_config(action, &settings, &config_path, &mut std::io::stdout())?;
        }
    }

    Ok(())
}
