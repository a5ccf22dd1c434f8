//! CLI parse: clap types for ai-bridge. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ai-bridge CLI - campaign content generation with a local fallback engine
#[derive(Parser)]
#[command(name = "ai-bridge")]
#[command(about = "Campaign content generation with a deterministic local fallback")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Fixed seed for the local engine (overrides configuration)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print structured results as JSON
    #[arg(long, default_value = "false")]
    pub json: bool,

    /// Enable verbose logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show which backend serves generation calls
    Status,
    /// Print the resolved configuration as TOML
    Config,
    /// Generate a titled speech
    Speech {
        /// Speech topic
        #[arg(long)]
        topic: String,
        /// Comma-separated keywords
        #[arg(long)]
        keywords: Option<String>,
    },
    /// Generate structured meeting minutes
    Minutes {
        /// Free-form meeting notes
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Generate a prioritized task plan
    Tasks {
        /// Goal the plan should serve
        #[arg(long, default_value = "")]
        goal: String,
    },
    /// Generate an object matching a JSON shape file
    Object {
        /// Path to the shape definition (JSON)
        #[arg(long)]
        shape: PathBuf,
        /// Prompt text
        #[arg(long)]
        prompt: String,
    },
    /// Generate free text
    Text {
        /// Prompt text
        #[arg(long)]
        prompt: String,
    },
    /// Interactive conversation (type /sair to leave)
    Chat {
        /// Optional system instruction for the session
        #[arg(long)]
        system: Option<String>,
    },
}

/// Split a comma-separated keyword argument, dropping blanks.
pub fn parse_keyword_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|list| {
        list.split(',')
            .map(str::trim)
            .filter(|keyword| !keyword.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
