//! In-memory recipe store.
//!
//! Recipes are kept in insertion order. Every lookup is a linear scan, which
//! is plenty for a catalog of a few hundred entries. Names are not unique;
//! name-based operations act on the first match.

use tracing::debug;

use crate::recipe::Recipe;

/// Ordered, in-memory collection of recipes.
#[derive(Debug, Clone, Default)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
}

impl RecipeStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with [`sample_recipes`].
    #[must_use]
    pub fn with_samples() -> Self {
        let mut store = Self::new();
        for recipe in sample_recipes() {
            store.add(recipe);
        }
        store
    }

    /// Append a recipe to the end of the store.
    pub fn add(&mut self, recipe: Recipe) {
        debug!("Adding recipe '{}'", recipe.name());
        self.recipes.push(recipe);
    }

    /// Remove and return the first recipe whose name matches exactly.
    ///
    /// Returns `None` and leaves the store untouched if nothing matches.
    pub fn remove(&mut self, name: &str) -> Option<Recipe> {
        self.remove_indexed(name).map(|(_, recipe)| recipe)
    }

    /// Like [`remove`](Self::remove), but also reports where the recipe was.
    pub fn remove_indexed(&mut self, name: &str) -> Option<(usize, Recipe)> {
        let index = self.position(name)?;
        let recipe = self.recipes.remove(index);
        debug!("Removed recipe '{}' at index {}", name, index);
        Some((index, recipe))
    }

    /// Remove the most recently inserted recipe with this exact name.
    pub fn remove_last_named(&mut self, name: &str) -> Option<Recipe> {
        let index = self.recipes.iter().rposition(|r| r.name() == name)?;
        Some(self.recipes.remove(index))
    }

    /// Insert a recipe at `index`, clamped to the end of the store.
    pub fn insert_at(&mut self, index: usize, recipe: Recipe) {
        let index = index.min(self.recipes.len());
        debug!("Inserting recipe '{}' at index {}", recipe.name(), index);
        self.recipes.insert(index, recipe);
    }

    /// Names of all recipes whose name starts with `prefix`, ignoring case.
    ///
    /// An empty prefix matches every recipe.
    #[must_use]
    pub fn search_by_prefix(&self, prefix: &str) -> Vec<String> {
        self.recipes
            .iter()
            .filter(|r| r.name_starts_with_ignore_case(prefix))
            .map(|r| r.name().to_string())
            .collect()
    }

    /// First recipe whose name matches exactly.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.name() == name)
    }

    /// All recipe names in store order.
    #[must_use]
    pub fn list_all(&self) -> Vec<String> {
        self.recipes.iter().map(|r| r.name().to_string()).collect()
    }

    /// Iterate over the recipes in store order.
    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    /// Number of recipes in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Check if the store holds no recipes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.recipes.iter().position(|r| r.name() == name)
    }
}

impl FromIterator<Recipe> for RecipeStore {
    fn from_iter<T: IntoIterator<Item = Recipe>>(iter: T) -> Self {
        Self {
            recipes: iter.into_iter().collect(),
        }
    }
}

/// The recipes a fresh catalog starts with.
#[must_use]
pub fn sample_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new(
            "Pasta Carbonara",
            ["Spaghetti", "Eggs", "Bacon", "Cheese", "Black Pepper"],
            20,
            "Italian",
        ),
        Recipe::new(
            "Caesar Salad",
            ["Lettuce", "Croutons", "Parmesan", "Caesar Dressing"],
            10,
            "American",
        ),
        Recipe::new(
            "Chicken Curry",
            ["Chicken", "Curry Powder", "Tomatoes", "Onion", "Garlic"],
            45,
            "Indian",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(name: &str) -> Recipe {
        Recipe::new(name, ["Salt"], 5, "Test")
    }

    fn store_of(names: &[&str]) -> RecipeStore {
        names.iter().map(|n| recipe(n)).collect()
    }

    #[test]
    fn test_list_all_preserves_add_order() {
        let mut store = RecipeStore::new();
        for name in ["Soup", "Bread", "Apple Pie", "Bread"] {
            store.add(recipe(name));
        }
        assert_eq!(store.list_all(), ["Soup", "Bread", "Apple Pie", "Bread"]);
    }

    #[test]
    fn test_remove_from_empty_store() {
        let mut store = RecipeStore::new();
        assert!(store.remove("Soup").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_missing_name_leaves_store_unchanged() {
        let mut store = store_of(&["Soup", "Bread"]);
        assert!(store.remove("Cake").is_none());
        assert!(store.remove("soup").is_none());
        assert_eq!(store.list_all(), ["Soup", "Bread"]);
    }

    #[test]
    fn test_remove_first_of_duplicates() {
        let mut store = RecipeStore::new();
        store.add(Recipe::new("Stew", ["Beef"], 90, "Irish"));
        store.add(recipe("Bread"));
        store.add(Recipe::new("Stew", ["Lamb"], 80, "Irish"));

        let removed = store.remove("Stew").unwrap();
        assert_eq!(removed.ingredients(), ["Beef"]);
        assert_eq!(store.list_all(), ["Bread", "Stew"]);
        assert_eq!(store.get_by_name("Stew").unwrap().ingredients(), ["Lamb"]);
    }

    #[test]
    fn test_remove_indexed_reports_position() {
        let mut store = store_of(&["A", "B", "C"]);
        let (index, removed) = store.remove_indexed("B").unwrap();
        assert_eq!(index, 1);
        assert_eq!(removed.name(), "B");
        assert_eq!(store.list_all(), ["A", "C"]);
    }

    #[test]
    fn test_remove_last_named() {
        let mut store = store_of(&["A", "B", "A"]);
        store.remove_last_named("A").unwrap();
        assert_eq!(store.list_all(), ["A", "B"]);
        assert!(store.remove_last_named("Z").is_none());
    }

    #[test]
    fn test_insert_at_clamps_to_end() {
        let mut store = store_of(&["A", "C"]);
        store.insert_at(1, recipe("B"));
        store.insert_at(99, recipe("D"));
        assert_eq!(store.list_all(), ["A", "B", "C", "D"]);
    }

    #[test]
    fn test_search_empty_prefix_matches_all() {
        let store = store_of(&["Soup", "Bread", "Salad"]);
        assert_eq!(store.search_by_prefix(""), ["Soup", "Bread", "Salad"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let store = RecipeStore::with_samples();
        assert_eq!(store.search_by_prefix("pa"), ["Pasta Carbonara"]);
        assert_eq!(store.search_by_prefix("C"), ["Caesar Salad", "Chicken Curry"]);
        assert!(store.search_by_prefix("curry").is_empty());
    }

    #[test]
    fn test_get_by_name_is_exact() {
        let store = RecipeStore::with_samples();
        assert_eq!(
            store.get_by_name("Chicken Curry").unwrap().cuisine(),
            "Indian"
        );
        assert!(store.get_by_name("chicken curry").is_none());
        assert!(store.get_by_name("Chicken").is_none());
    }

    #[test]
    fn test_with_samples() {
        let store = RecipeStore::with_samples();
        assert_eq!(store.len(), 3);
        assert_eq!(
            store.list_all(),
            ["Pasta Carbonara", "Caesar Salad", "Chicken Curry"]
        );
    }
}
