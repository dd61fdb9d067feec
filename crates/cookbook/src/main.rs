//! `cookbook` - CLI for the recipe catalog
//!
//! This binary provides one-shot commands over a freshly seeded catalog and an
//! interactive shell for sessions that add, remove and undo.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use cookbook::cli::{handlers, shell, Cli, Command, ConfigCommand, Renderer};
use cookbook::{init_logging, session, Config, Session};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // A broken file must reach the validator, so validate before loading.
    if let Command::Config(ConfigCommand::Validate { file }) = &cli.command {
        let stdout = io::stdout();
        let mut renderer = Renderer::new(stdout.lock(), cli.format.unwrap_or_default());
        let status = validate(file.clone(), cli.config.clone(), &mut renderer)?;
        renderer.into_inner().flush()?;
        return Ok(status);
    }

    // Load configuration
    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;
    let format = cli.format.unwrap_or(config.output.format);

    let stdout = io::stdout();
    let mut renderer = Renderer::new(stdout.lock(), format);
    let mut session = Session::new(&config);

    let status = match cli.command {
        Command::List => renderer.names(&session.list()).map(|()| ExitCode::SUCCESS),
        Command::Search(cmd) => renderer
            .search(&session.search(&cmd.prefix))
            .map(|()| ExitCode::SUCCESS),
        Command::Show(cmd) => {
            let view = session.show(&cmd.name);
            let code = exit_code(view.is_some());
            renderer.recipe(&cmd.name, view.as_ref()).map(|()| code)
        }
        Command::Bmi(cmd) => {
            handlers::bmi(&session, &cmd.weight, &cmd.height, &mut renderer).map(exit_code)
        }
        Command::Suggest(cmd) => renderer
            .suggestions(&session::suggest(&cmd.category))
            .map(|()| ExitCode::SUCCESS),
        Command::Shell(cmd) => {
            if let Some(name) = cmd.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
                renderer.message(&format!("Smart Cookbook - Welcome {name}"))?;
            }
            let stdin = io::stdin();
            shell::run(
                &mut session,
                stdin.lock(),
                &mut renderer,
                &config.session.prompt,
            )
            .map(|()| ExitCode::SUCCESS)
        }
        Command::Config(ConfigCommand::Show) => {
            renderer.config(&config).map(|()| ExitCode::SUCCESS)
        }
        Command::Config(ConfigCommand::Path) => renderer
            .message(&Config::default_config_path().display().to_string())
            .map(|()| ExitCode::SUCCESS),
        Command::Config(ConfigCommand::Validate { file }) => {
            validate(file, cli.config.clone(), &mut renderer)
        }
    }?;

    renderer.into_inner().flush()?;
    Ok(status)
}

/// Validate `--file`, falling back to `--config` and then the default path.
fn validate<W: Write>(
    file: Option<PathBuf>,
    config: Option<PathBuf>,
    renderer: &mut Renderer<W>,
) -> cookbook::Result<ExitCode> {
    let path = file.or(config).unwrap_or_else(Config::default_config_path);
    handlers::validate_config(&path, renderer).map(exit_code)
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
