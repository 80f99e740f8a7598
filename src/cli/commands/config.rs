//! Config command implementation.

use crate::cli::{ConfigAction, Output};
use crate::config::Settings;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Run the config command against the file selected by `--config`.
pub fn run_config(
    action: &ConfigAction,
    settings: &Settings,
    config_path: &Path,
    out: &mut impl Write,
) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let toml_str =
                toml::to_string_pretty(settings).context("Failed to serialize config")?;
            writeln!(out, "# {}", config_path.display())?;
            writeln!(out, "{}", toml_str)?;
        }

        ConfigAction::Edit => {
            if !config_path.exists() {
                settings.save_to(&config_path.to_path_buf())?;
                Output::info(&format!("Wrote current settings to {}", config_path.display()));
            }

            let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vim".to_string());
            Output::info(&format!("Opening {} in {}...", config_path.display(), editor));

            match std::process::Command::new(&editor).arg(config_path).status() {
                Ok(s) if s.success() => match Settings::load_from(Some(&config_path.to_path_buf())) {
                    Ok(_) => Output::success("Config saved."),
                    Err(e) => Output::warning(&format!("Saved config does not load: {}", e)),
                },
                Ok(_) => Output::warning("Editor exited with non-zero status."),
                Err(e) => {
                    Output::error(&format!("Failed to open editor: {}", e));
                    Output::info(&format!("Config file is at: {}", config_path.display()));
                }
            }
        }

        ConfigAction::Path => {
            writeln!(out, "{}", config_path.display())?;
        }
    }

    Ok(())
}
