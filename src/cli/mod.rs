//! CLI module for vidsum.

pub mod commands;
mod output;
pub mod preflight;

pub use output::Output;

use clap::{Parser, Subcommand};

/// vidsum - YouTube transcript summaries
///
/// Fetches a video's captions and asks a language model to summarize them,
/// answer questions about them, or export everything as a PDF.
#[derive(Parser, Debug)]
#[command(name = "vidsum")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Host to bind to (defaults to server.host)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (defaults to server.port)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print a video's transcript
    Transcript {
        /// YouTube video URL
        link: String,

        /// Write the transcript to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Summarize a video
    Summarize {
        /// YouTube video URL
        link: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Ask a question about a video
    Ask {
        /// YouTube video URL
        link: String,

        /// The question to ask
        question: String,
    },

    /// Print a topic tree for a video as JSON
    Mindmap {
        /// YouTube video URL
        link: String,
    },

    /// Export summary and Q&A as a PDF
    Export {
        /// YouTube video URL
        link: String,

        /// Question to answer in the Q&A section
        #[arg(short, long)]
        question: Option<String>,

        /// Output file
        #[arg(short, long, default_value = crate::export::EXPORT_FILENAME)]
        output: String,

        /// Append the full transcript
        #[arg(long)]
        with_transcript: bool,
    },

    /// Check system requirements and configuration
    Doctor,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Open configuration file in editor
    Edit,

    /// Show configuration file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_export_defaults() {
        let cli = Cli::parse_from(["vidsum", "export", "https://youtu.be/dQw4w9WgXcQ"]);
        match cli.command {
            Commands::Export {
                output,
                question,
                with_transcript,
                ..
            } => {
                assert_eq!(output, "youtube_summary.pdf");
                assert!(question.is_none());
                assert!(!with_transcript);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::parse_from(["vidsum", "-vv", "serve", "--port", "8080", "-c", "x.toml"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config.as_deref(), Some("x.toml"));
        assert!(matches!(cli.command, Commands::Serve { port: Some(8080), host: None }));
    }
}
