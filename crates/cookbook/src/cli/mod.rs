//! Command-line interface for cookbook.
//!
//! This module provides the CLI structure, the renderer for session view
//! models, the one-shot command handlers, and the interactive shell.

mod commands;
pub mod handlers;
pub mod render;
pub mod shell;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    BmiCommand, ConfigCommand, OutputFormat, SearchCommand, ShellCommand, ShowCommand,
    SuggestCommand,
};
pub use render::Renderer;

/// cookbook - Recipe catalog with BMI-based diet suggestions
///
/// Search, add and remove recipes, and get recipe suggestions for gaining,
/// losing or keeping weight.
#[derive(Debug, Parser)]
#[command(name = "cookbook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all recipe names
    List,

    /// Search recipes by name prefix
    Search(SearchCommand),

    /// Show one recipe's details
    Show(ShowCommand),

    /// Calculate BMI and suggest recipes
    Bmi(BmiCommand),

    /// List suggested recipes for a diet category
    Suggest(SuggestCommand),

    /// Start an interactive session
    Shell(ShellCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::Verbosity;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_cli_name() {
        assert_eq!(Cli::command().get_name(), "cookbook");
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(parse(&["cookbook", "list"]).verbosity(), Verbosity::Normal);
        assert_eq!(parse(&["cookbook", "-v", "list"]).verbosity(), Verbosity::Verbose);
        assert_eq!(parse(&["cookbook", "-vv", "list"]).verbosity(), Verbosity::Trace);
        assert_eq!(parse(&["cookbook", "-q", "-v", "list"]).verbosity(), Verbosity::Quiet);
    }

    #[test]
    fn test_parse_search_without_prefix() {
        let cli = parse(&["cookbook", "search"]);
        let Command::Search(cmd) = cli.command else {
            panic!("expected search command");
        };
        assert_eq!(cmd.prefix, "");
    }

    #[test]
    fn test_parse_show_with_spaces() {
        let cli = parse(&["cookbook", "show", "Pasta Carbonara"]);
        let Command::Show(cmd) = cli.command else {
            panic!("expected show command");
        };
        assert_eq!(cmd.name, "Pasta Carbonara");
    }

    #[test]
    fn test_parse_bmi_keeps_text() {
        let cli = parse(&["cookbook", "bmi", "-w", "seventy", "-H", "-5.9"]);
        let Command::Bmi(cmd) = cli.command else {
            panic!("expected bmi command");
        };
        assert_eq!(cmd.weight, "seventy");
        assert_eq!(cmd.height, "-5.9");
    }

    #[test]
    fn test_parse_format_and_config() {
        let cli = parse(&["cookbook", "-c", "/tmp/cookbook.toml", "list", "--format", "json"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/cookbook.toml")));
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_parse_shell_name() {
        let cli = parse(&["cookbook", "shell", "--name", "Ada"]);
        let Command::Shell(cmd) = cli.command else {
            panic!("expected shell command");
        };
        assert_eq!(cmd.name.as_deref(), Some("Ada"));
    }

    #[test]
    fn test_parse_config_validate() {
        let cli = parse(&["cookbook", "config", "validate"]);
        assert!(matches!(
            cli.command,
            Command::Config(ConfigCommand::Validate { file: None })
        ));
    }

    #[test]
    fn test_parse_config_validate_file_with_short_format() {
        let cli = parse(&[
            "cookbook", "config", "validate", "--file", "cookbook.toml", "-f", "json",
        ]);
        assert_eq!(cli.format, Some(OutputFormat::Json));
        let Command::Config(ConfigCommand::Validate { file }) = cli.command else {
            panic!("expected config validate command");
        };
        assert_eq!(file, Some(PathBuf::from("cookbook.toml")));
    }
}
