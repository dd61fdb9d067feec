//! Undo stack for store mutations.

use crate::recipe::Recipe;
use crate::store::RecipeStore;

/// A store mutation that can be reverted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoAction {
    /// A recipe was appended to the store.
    Added {
        /// The recipe that was added.
        recipe: Recipe,
    },
    /// A recipe was removed from the store.
    Removed {
        /// The recipe that was removed.
        recipe: Recipe,
        /// Where it sat in the store before removal.
        index: usize,
    },
}

impl UndoAction {
    /// The recipe this action touched.
    #[must_use]
    pub fn recipe(&self) -> &Recipe {
        match self {
            Self::Added { recipe } | Self::Removed { recipe, .. } => recipe,
        }
    }

    /// Apply the inverse of this action to `store`.
    ///
    /// Actions must be reverted newest first for the store to end up in its
    /// earlier state.
    pub fn revert(self, store: &mut RecipeStore) {
        match self {
            Self::Added { recipe } => {
                store.remove_last_named(recipe.name());
            }
            Self::Removed { recipe, index } => store.insert_at(index, recipe),
        }
    }
}

/// Mutations in the order they happened, newest last.
#[derive(Debug, Clone, Default)]
pub struct UndoStack {
    actions: Vec<UndoAction>,
}

impl UndoStack {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a mutation.
    pub fn push(&mut self, action: UndoAction) {
        self.actions.push(action);
    }

    /// Take the newest mutation off the stack.
    pub fn pop(&mut self) -> Option<UndoAction> {
        self.actions.pop()
    }

    /// Number of recorded mutations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Check if there is nothing to undo.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
