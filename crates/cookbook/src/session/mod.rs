//! Interactive session state and the handlers that act on it.
//!
//! A [`Session`] owns the recipe store together with the search history and
//! the undo stack. Each handler takes raw user text, applies it to the store,
//! and hands back a view model from [`view`]. Nothing here knows how the
//! result is displayed.
//!
//! ```
//! use cookbook::{Config, Session};
//!
//! let mut session = Session::new(&Config::default());
//! let found = session.search("pa");
//! assert_eq!(found.matches, ["Pasta Carbonara"]);
//! ```

mod history;
mod undo;
pub mod view;

use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, info};

pub use history::SearchHistory;
pub use undo::{UndoAction, UndoStack};
pub use view::{BmiView, ChangeView, RecipeView, SearchView, SuggestionView};

use crate::bmi;
use crate::config::{CatalogConfig, Config};
use crate::error::Result;
use crate::recipe::Recipe;
use crate::store::RecipeStore;
use crate::suggestions;

/// Store plus per-session bookkeeping.
#[derive(Debug, Clone)]
pub struct Session {
    store: RecipeStore,
    history: SearchHistory,
    undo: UndoStack,
    defaults: CatalogConfig,
}

impl Session {
    /// Start a session, seeding the store unless configuration says not to.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let store = if config.catalog.seed_samples {
            RecipeStore::with_samples()
        } else {
            RecipeStore::new()
        };
        Self::with_store(store, config)
    }

    /// Start a session over an existing store.
    #[must_use]
    pub fn with_store(store: RecipeStore, config: &Config) -> Self {
        Self {
            store,
            history: SearchHistory::new(config.session.history_limit),
            undo: UndoStack::new(),
            defaults: config.catalog.clone(),
        }
    }

    /// The underlying store.
    #[must_use]
    pub fn store(&self) -> &RecipeStore {
        &self.store
    }

    /// Search by name prefix and record the query in the history.
    pub fn search(&mut self, query: &str) -> SearchView {
        let query = query.trim();
        let matches = self.store.search_by_prefix(query);
        debug!("Search '{}' matched {} recipes", query, matches.len());
        self.history.record(query);
        SearchView {
            query: query.to_string(),
            matches,
            history: self.history.to_vec(),
        }
    }

    /// Details of the first recipe with exactly this name.
    #[must_use]
    pub fn show(&self, name: &str) -> Option<RecipeView> {
        self.store.get_by_name(name.trim()).map(RecipeView::from)
    }

    /// Add a recipe built from a name and a comma-separated ingredient list.
    ///
    /// A blank name leaves the store alone. Cooking time and cuisine come
    /// from the catalog defaults.
    pub fn add(&mut self, name: &str, ingredients_text: &str) -> ChangeView {
        let name = name.trim();
        if name.is_empty() {
            return ChangeView::Unchanged {
                reason: "recipe name is empty".to_string(),
            };
        }

        let recipe = Recipe::new(
            name,
            split_ingredients(ingredients_text),
            self.defaults.default_cooking_time_minutes,
            self.defaults.default_cuisine.as_str(),
        );
        let view = RecipeView::from(&recipe);
        self.store.add(recipe.clone());
        self.undo.push(UndoAction::Added { recipe });
        info!("Added recipe '{}'", name);
        ChangeView::Added { recipe: view }
    }

    /// Remove the first recipe with exactly this name.
    pub fn remove(&mut self, name: &str) -> ChangeView {
        let name = name.trim();
        match self.store.remove_indexed(name) {
            Some((index, recipe)) => {
                let view = RecipeView::from(&recipe);
                self.undo.push(UndoAction::Removed { recipe, index });
                info!("Removed recipe '{}'", name);
                ChangeView::Removed { recipe: view }
            }
            None => ChangeView::Unchanged {
                reason: format!("no recipe named '{name}'"),
            },
        }
    }

    /// All recipe names in store order.
    #[must_use]
    pub fn list(&self) -> Vec<String> {
        self.store.list_all()
    }

    /// Compute BMI from user-entered text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNumericInput`](crate::Error::InvalidNumericInput)
    /// if either value is not a number. The session is not modified.
    pub fn assess_bmi(&self, weight_text: &str, height_text: &str) -> Result<BmiView> {
        let report = bmi::assess(weight_text, height_text)?;
        debug!("BMI {:.2} -> {}", report.bmi, report.category);
        Ok(BmiView::from(report))
    }

    /// Search history, newest first.
    #[must_use]
    pub fn history(&self) -> Vec<String> {
        self.history.to_vec()
    }

    /// Revert the most recent add or remove.
    ///
    /// Returns `None` when there is nothing left to undo.
    pub fn undo(&mut self) -> Option<ChangeView> {
        let action = self.undo.pop()?;
        let recipe = RecipeView::from(action.recipe());
        let view = match &action {
            UndoAction::Added { .. } => ChangeView::UndidAdd { recipe },
            UndoAction::Removed { .. } => ChangeView::UndidRemove { recipe },
        };
        action.revert(&mut self.store);
        info!("Reverted last change");
        Some(view)
    }
}

/// Suggestions for a category key such as `gain`, `lose` or `balance`.
#[must_use]
pub fn suggest(category: &str) -> SuggestionView {
    let category = category.trim();
    SuggestionView {
        category: category.to_string(),
        suggestions: view::owned(suggestions::suggestions_for(category)),
    }
}

/// Split a comma-separated ingredient list, dropping blank entries.
fn split_ingredients(text: &str) -> Vec<String> {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    let separator = SEPARATOR.get_or_init(|| Regex::new(r"\s*,\s*").expect("valid separator"));
    separator
        .split(text.trim())
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}
