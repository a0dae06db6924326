//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormat> for interview_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => interview_domain::OutputFormat::Text,
            OutputFormat::Json => interview_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for mock-interview
#[derive(Parser, Debug)]
#[command(name = "mock-interview")]
#[command(author, version, about = "Mock interview practice - questions, scoring and progress")]
#[command(long_about = r#"
Mock Interview serves interview questions, scores free-text answers and
tracks each user's progress.

Answers are scored on two axes:
1. Keywords: how many of the question's expected keywords appear (0-10)
2. Confidence: sentiment polarity of the answer, remapped to 0-10

Configuration files are loaded from (in priority order):
1. INTERVIEW_* environment variables (e.g. INTERVIEW_SERVER__PORT=9000)
2. --config <path>     Explicit config file
3. ./interview.toml    Project-level config
4. ~/.config/mock-interview/config.toml   Global config

Example:
  mock-interview serve --port 8080
  mock-interview question --id g2
  mock-interview evaluate --question g2 "REST exposes resources over HTTP endpoints"
  mock-interview submit --user 1 --question g2 "REST exposes resources over HTTP endpoints"
  mock-interview progress --user 1 -o json
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (defaults to the configured format, then text)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the HTTP API
    Serve {
        /// Interface to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Show a random question, or a specific one with --id
    Question {
        /// Question id (e.g. g2, hr1, a3)
        #[arg(long)]
        id: Option<String>,
    },

    /// List every question in the catalog
    Questions,

    /// Show today's question for a user
    Daily {
        /// User id
        #[arg(short, long)]
        user: u64,
    },

    /// Score an answer without saving it
    Evaluate {
        /// Question id
        #[arg(short, long)]
        question: String,

        /// Keywords to score against instead of the question's own (repeatable)
        #[arg(short, long = "keyword", value_name = "KEYWORD")]
        keywords: Vec<String>,

        /// The answer text
        answer: String,
    },

    /// Score an answer and save it to the user's progress
    Submit {
        /// User id
        #[arg(short, long)]
        user: u64,

        /// Question id
        #[arg(short, long)]
        question: String,

        /// The answer text
        answer: String,
    },

    /// Show a user's streak, points and past answers
    Progress {
        /// User id
        #[arg(short, long)]
        user: u64,
    },
}
