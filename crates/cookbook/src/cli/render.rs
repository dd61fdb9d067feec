//! Rendering of session view models as plain text or JSON.

use std::io::Write;

use serde::Serialize;
use serde_json::json;

use super::OutputFormat;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::session::view::INVALID_INPUT_MESSAGE;
use crate::session::{BmiView, ChangeView, RecipeView, SearchView, SuggestionView};

/// Writes view models to an output stream in the chosen format.
#[derive(Debug)]
pub struct Renderer<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> Renderer<W> {
    /// Create a renderer over `out`.
    #[must_use]
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    /// The format this renderer writes.
    #[must_use]
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Consume the renderer and return the underlying writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write raw text with no trailing newline, plain mode only.
    pub(crate) fn prompt(&mut self, prompt: &str) -> Result<()> {
        if self.format == OutputFormat::Plain && !prompt.is_empty() {
            write!(self.out, "{prompt}")?;
            self.out.flush()?;
        }
        Ok(())
    }

    /// Write an informational line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn message(&mut self, text: &str) -> Result<()> {
        match self.format {
            OutputFormat::Plain => writeln!(self.out, "{text}")?,
            OutputFormat::Json => self.json(&json!({ "message": text }))?,
        }
        Ok(())
    }

    /// Render search results and the search history.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn search(&mut self, view: &SearchView) -> Result<()> {
        if self.format == OutputFormat::Json {
            return self.json(view);
        }
        if view.matches.is_empty() {
            writeln!(self.out, "No recipes match \"{}\".", view.query)?;
        } else {
            writeln!(self.out, "Results for \"{}\":", view.query)?;
            for name in &view.matches {
                writeln!(self.out, "  {name}")?;
            }
        }
        writeln!(self.out, "Search History: {}", view.history.join(", "))?;
        Ok(())
    }

    /// Render a list of recipe names.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn names(&mut self, names: &[String]) -> Result<()> {
        if self.format == OutputFormat::Json {
            return self.json(&names);
        }
        if names.is_empty() {
            writeln!(self.out, "No recipes.")?;
        }
        for name in names {
            writeln!(self.out, "{name}")?;
        }
        Ok(())
    }

    /// Render one recipe, or a not-found notice for `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn recipe(&mut self, name: &str, view: Option<&RecipeView>) -> Result<()> {
        match (self.format, view) {
            (OutputFormat::Json, _) => self.json(&view)?,
            (OutputFormat::Plain, Some(recipe)) => {
                writeln!(
                    self.out,
                    "{} ({}, {} min)",
                    recipe.name, recipe.cuisine, recipe.cooking_time_minutes
                )?;
                writeln!(self.out, "Ingredients: {}", recipe.ingredients_line())?;
            }
            (OutputFormat::Plain, None) => {
                writeln!(self.out, "No recipe named '{}'.", name.trim())?;
            }
        }
        Ok(())
    }

    /// Render the outcome of an add, remove or undo.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn change(&mut self, view: &ChangeView) -> Result<()> {
        if self.format == OutputFormat::Json {
            return self.json(view);
        }
        match view {
            ChangeView::Added { recipe } => writeln!(self.out, "Added '{}'.", recipe.name)?,
            ChangeView::Removed { recipe } => writeln!(self.out, "Removed '{}'.", recipe.name)?,
            ChangeView::UndidAdd { recipe } => {
                writeln!(self.out, "Undid add of '{}'.", recipe.name)?;
            }
            ChangeView::UndidRemove { recipe } => {
                writeln!(self.out, "Restored '{}'.", recipe.name)?;
            }
            ChangeView::Unchanged { reason } => writeln!(self.out, "Nothing changed: {reason}.")?,
        }
        Ok(())
    }

    /// Render the result of an undo request.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn undo(&mut self, view: Option<&ChangeView>) -> Result<()> {
        match (self.format, view) {
            (_, Some(change)) => self.change(change),
            (OutputFormat::Json, None) => self.json(&json!({ "outcome": "nothing_to_undo" })),
            (OutputFormat::Plain, None) => {
                writeln!(self.out, "Nothing to undo.")?;
                Ok(())
            }
        }
    }

    /// Render a BMI result with advice and suggestions.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn bmi(&mut self, view: &BmiView) -> Result<()> {
        if self.format == OutputFormat::Json {
            return self.json(view);
        }
        writeln!(self.out, "BMI: {}", view.bmi_display())?;
        writeln!(self.out, "{}", view.advice)?;
        self.suggestion_lines(&view.suggestions)
    }

    /// Render suggestions for a category.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn suggestions(&mut self, view: &SuggestionView) -> Result<()> {
        if self.format == OutputFormat::Json {
            return self.json(view);
        }
        if view.suggestions.is_empty() {
            writeln!(self.out, "No suggestions for category '{}'.", view.category)?;
            return Ok(());
        }
        self.suggestion_lines(&view.suggestions)
    }

    /// Render the search history.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn history(&mut self, history: &[String]) -> Result<()> {
        if self.format == OutputFormat::Json {
            return self.json(&history);
        }
        writeln!(self.out, "Search History: {}", history.join(", "))?;
        Ok(())
    }

    /// Render rejected BMI input as a user-facing message.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn invalid_input(&mut self, err: &Error) -> Result<()> {
        match self.format {
            OutputFormat::Plain => {
                writeln!(self.out, "Invalid input: {INVALID_INPUT_MESSAGE} ({err})")?;
            }
            OutputFormat::Json => self.json(&json!({
                "error": "invalid_input",
                "message": INVALID_INPUT_MESSAGE,
                "detail": err.to_string(),
            }))?,
        }
        Ok(())
    }

    /// Render the effective configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn config(&mut self, config: &Config) -> Result<()> {
        if self.format == OutputFormat::Json {
            return self.json(config);
        }
        writeln!(self.out, "Current Configuration")?;
        writeln!(self.out, "=====================")?;
        writeln!(self.out)?;
        writeln!(self.out, "[Catalog]")?;
        writeln!(self.out, "  Seed samples:       {}", config.catalog.seed_samples)?;
        writeln!(
            self.out,
            "  Default time (min): {}",
            config.catalog.default_cooking_time_minutes
        )?;
        writeln!(self.out, "  Default cuisine:    {}", config.catalog.default_cuisine)?;
        writeln!(self.out)?;
        writeln!(self.out, "[Session]")?;
        writeln!(self.out, "  History limit:      {}", config.session.history_limit)?;
        writeln!(self.out, "  Prompt:             {:?}", config.session.prompt)?;
        writeln!(self.out)?;
        writeln!(self.out, "[Output]")?;
        writeln!(self.out, "  Format:             {:?}", config.output.format)?;
        Ok(())
    }

    fn suggestion_lines(&mut self, suggestions: &[String]) -> Result<()> {
        writeln!(self.out, "Suggested Recipes:")?;
        for name in suggestions {
            writeln!(self.out, "  {name}")?;
        }
        Ok(())
    }

    fn json<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.out, value)?;
        writeln!(self.out)?;
        Ok(())
    }
}
