//! View models returned by session handlers.
//!
//! These are plain data: the CLI renders them as text or JSON, and any other
//! front end can do the same without touching the store.

use serde::Serialize;

use crate::bmi::{BmiReport, DietCategory};
use crate::recipe::Recipe;

/// Message shown when BMI input cannot be parsed.
pub const INVALID_INPUT_MESSAGE: &str = "Please enter valid numbers for weight and height.";

/// Result of a prefix search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchView {
    /// The query as it was recorded.
    pub query: String,
    /// Matching recipe names, in store order.
    pub matches: Vec<String>,
    /// Search history after recording this query, newest first.
    pub history: Vec<String>,
}

/// A single recipe's details.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeView {
    /// Recipe name.
    pub name: String,
    /// Ingredient names in order.
    pub ingredients: Vec<String>,
    /// Cooking time in minutes.
    pub cooking_time_minutes: u32,
    /// Cuisine label.
    pub cuisine: String,
}

impl RecipeView {
    /// Ingredients joined for display.
    #[must_use]
    pub fn ingredients_line(&self) -> String {
        self.ingredients.join(", ")
    }
}

impl From<&Recipe> for RecipeView {
    fn from(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name().to_string(),
            ingredients: recipe.ingredients().to_vec(),
            cooking_time_minutes: recipe.cooking_time_minutes(),
            cuisine: recipe.cuisine().to_string(),
        }
    }
}

/// What happened to the store after a mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ChangeView {
    /// A recipe was added.
    Added {
        /// The new recipe.
        recipe: RecipeView,
    },
    /// A recipe was removed.
    Removed {
        /// The removed recipe.
        recipe: RecipeView,
    },
    /// An add was reverted.
    UndidAdd {
        /// The recipe taken back out.
        recipe: RecipeView,
    },
    /// A remove was reverted.
    UndidRemove {
        /// The recipe put back.
        recipe: RecipeView,
    },
    /// Nothing matched, so nothing changed.
    Unchanged {
        /// Why nothing changed.
        reason: String,
    },
}

/// BMI result with advice and suggestions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BmiView {
    /// The computed BMI.
    pub bmi: f64,
    /// Diet category.
    pub category: DietCategory,
    /// Advice text for the category.
    pub advice: String,
    /// Suggested recipes for the category.
    pub suggestions: Vec<String>,
}

impl BmiView {
    /// BMI formatted to two decimals.
    #[must_use]
    pub fn bmi_display(&self) -> String {
        format!("{:.2}", self.bmi)
    }
}

impl From<BmiReport> for BmiView {
    fn from(report: BmiReport) -> Self {
        Self {
            bmi: report.bmi,
            category: report.category,
            advice: report.category.advice().to_string(),
            suggestions: owned(report.category.suggestions()),
        }
    }
}

/// Suggestions for an arbitrary category key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestionView {
    /// The category that was looked up.
    pub category: String,
    /// Suggested recipe names, empty for unknown categories.
    pub suggestions: Vec<String>,
}

pub(crate) fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(ToString::to_string).collect()
}
