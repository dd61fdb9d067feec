//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Search command arguments.
#[derive(Debug, Args)]
pub struct SearchCommand {
    /// Recipe name prefix (case-insensitive); omit to match everything
    #[arg(default_value = "")]
    pub prefix: String,
}

/// Show command arguments.
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Exact recipe name
    pub name: String,
}

/// BMI command arguments.
///
/// Values are taken as text so that unparseable input is reported the same
/// way the interactive shell reports it.
#[derive(Debug, Args)]
pub struct BmiCommand {
    /// Weight in kilograms
    #[arg(short, long, allow_hyphen_values = true)]
    pub weight: String,

    /// Height in feet
    #[arg(short = 'H', long, allow_hyphen_values = true)]
    pub height: String,
}

/// Suggest command arguments.
#[derive(Debug, Args)]
pub struct SuggestCommand {
    /// Diet category: gain, lose or balance
    pub category: String,
}

/// Shell command arguments.
#[derive(Debug, Args)]
pub struct ShellCommand {
    /// Name to greet at startup
    #[arg(short, long)]
    pub name: Option<String>,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,
    },
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Plain,
    /// JSON output
    Json,
}
