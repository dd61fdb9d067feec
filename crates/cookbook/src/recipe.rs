//! The recipe record.

use serde::{Deserialize, Serialize};

/// A named dish with its ingredients, cooking time and cuisine.
///
/// Recipes are immutable once built. The name is the only identity a recipe
/// has, but nothing enforces uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    name: String,
    ingredients: Vec<String>,
    cooking_time_minutes: u32,
    cuisine: String,
}

impl Recipe {
    /// Create a new recipe.
    #[must_use]
    pub fn new<I, S>(
        name: impl Into<String>,
        ingredients: I,
        cooking_time_minutes: u32,
        cuisine: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            ingredients: ingredients.into_iter().map(Into::into).collect(),
            cooking_time_minutes,
            cuisine: cuisine.into(),
        }
    }

    /// The recipe name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ingredient names, in the order they were given.
    #[must_use]
    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    /// Cooking time in minutes.
    #[must_use]
    pub fn cooking_time_minutes(&self) -> u32 {
        self.cooking_time_minutes
    }

    /// Cuisine label.
    #[must_use]
    pub fn cuisine(&self) -> &str {
        &self.cuisine
    }

    /// Check whether the name starts with `prefix`, ignoring case.
    #[must_use]
    pub fn name_starts_with_ignore_case(&self, prefix: &str) -> bool {
        self.name.to_lowercase().starts_with(&prefix.to_lowercase())
    }
}
