//! Interactive line-oriented session.
//!
//! Each input line is one command: a verb followed by free text. Recipe
//! names may contain spaces, so arguments are taken as the rest of the line
//! rather than split into words.

use std::io::{BufRead, Write};

use tracing::debug;

use super::handlers;
use super::render::Renderer;
use crate::error::Result;
use crate::session::{self, Session};

/// Help text listing every shell command.
pub const HELP: &str = "\
Commands:
  search [PREFIX]             search recipes by name prefix
  show NAME                   show a recipe's ingredients
  add NAME | ING, ING, ...    add a recipe
  remove NAME                 remove the first recipe with this name
  list                        list all recipes
  bmi WEIGHT_KG HEIGHT_FT     calculate BMI and suggest recipes
  suggest CATEGORY            suggestions for gain, lose or balance
  history                     show recent searches
  undo                        revert the last add or remove
  help                        show this help
  quit                        leave the session";

/// One parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellLine {
    /// `search [PREFIX]`
    Search(String),
    /// `show NAME`
    Show(String),
    /// `add NAME | INGREDIENTS`
    Add {
        /// Recipe name.
        name: String,
        /// Comma-separated ingredients.
        ingredients: String,
    },
    /// `remove NAME`
    Remove(String),
    /// `list`
    List,
    /// `bmi WEIGHT HEIGHT`
    Bmi {
        /// Weight text in kilograms.
        weight: String,
        /// Height text in feet.
        height: String,
    },
    /// `suggest CATEGORY`
    Suggest(String),
    /// `history`
    History,
    /// `undo`
    Undo,
    /// `help`
    Help,
    /// `quit` or `exit`
    Quit,
}

impl ShellLine {
    /// Parse a line of input.
    ///
    /// Blank lines yield `Ok(None)`. Unknown verbs and missing arguments
    /// yield a usage message.
    ///
    /// # Errors
    ///
    /// Returns a message describing the expected usage.
    pub fn parse(line: &str) -> std::result::Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));

        let parsed = match verb.to_lowercase().as_str() {
            "search" => Self::Search(rest.to_string()),
            "show" => Self::Show(required(rest, "show NAME")?),
            "add" => {
                let (name, ingredients) = rest.split_once('|').unwrap_or((rest, ""));
                Self::Add {
                    name: required(name.trim(), "add NAME | ING, ING, ...")?,
                    ingredients: ingredients.trim().to_string(),
                }
            }
            "remove" => Self::Remove(required(rest, "remove NAME")?),
            "list" => Self::List,
            "bmi" => {
                let mut values = rest.split_whitespace();
                match (values.next(), values.next(), values.next()) {
                    (Some(weight), Some(height), None) => Self::Bmi {
                        weight: weight.to_string(),
                        height: height.to_string(),
                    },
                    _ => return Err("usage: bmi WEIGHT_KG HEIGHT_FT".to_string()),
                }
            }
            "suggest" => Self::Suggest(required(rest, "suggest CATEGORY")?),
            "history" => Self::History,
            "undo" => Self::Undo,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(format!("unknown command '{other}'; type 'help'")),
        };
        Ok(Some(parsed))
    }
}

fn required(text: &str, usage: &str) -> std::result::Result<String, String> {
    if text.is_empty() {
        Err(format!("usage: {usage}"))
    } else {
        Ok(text.to_string())
    }
}

/// Run the session until `quit` or end of input.
///
/// Rejected BMI input and usage mistakes are reported and the loop carries
/// on; only I/O failures end it early.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run<R, W>(
    session: &mut Session,
    input: R,
    renderer: &mut Renderer<W>,
    prompt: &str,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    renderer.prompt(prompt)?;
    for line in input.lines() {
        let line = line?;
        match ShellLine::parse(&line) {
            Ok(Some(ShellLine::Quit)) => break,
            Ok(Some(command)) => execute(session, command, renderer)?,
            Ok(None) => {}
            Err(usage) => {
                debug!("Rejected shell line '{}'", line);
                renderer.message(&usage)?;
            }
        }
        renderer.prompt(prompt)?;
    }
    Ok(())
}

/// Apply one command to the session and render its result.
///
/// # Errors
///
/// Returns an error if writing output fails.
pub fn execute<W: Write>(
    session: &mut Session,
    command: ShellLine,
    renderer: &mut Renderer<W>,
) -> Result<()> {
    match command {
        ShellLine::Search(prefix) => renderer.search(&session.search(&prefix)),
        ShellLine::Show(name) => renderer.recipe(&name, session.show(&name).as_ref()),
        ShellLine::Add { name, ingredients } => renderer.change(&session.add(&name, &ingredients)),
        ShellLine::Remove(name) => renderer.change(&session.remove(&name)),
        ShellLine::List => renderer.names(&session.list()),
        ShellLine::Bmi { weight, height } => {
            handlers::bmi(session, &weight, &height, renderer).map(|_| ())
        }
        ShellLine::Suggest(category) => renderer.suggestions(&session::suggest(&category)),
        ShellLine::History => renderer.history(&session.history()),
        ShellLine::Undo => renderer.undo(session.undo().as_ref()),
        ShellLine::Help => renderer.message(HELP),
        ShellLine::Quit => Ok(()),
    }
}
