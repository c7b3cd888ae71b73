//! The working set of recipes to plan together.

use crate::models::Recipe;

/// Insertion-ordered set of full recipes, unique by ID.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionSet {
    recipes: Vec<Recipe>,
}

impl SelectionSet {
    /// An empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a recipe with `id` is selected.
    pub fn contains(&self, id: &str) -> bool {
        self.recipes.iter().any(|r| r.id == id)
    }

    /// Appends `recipe` unless its ID is already present. Returns whether it
    /// was added.
    pub fn insert(&mut self, recipe: Recipe) -> bool {
        if self.contains(&recipe.id) {
            return false;
        }
        self.recipes.push(recipe);
        true
    }

    /// Removes and returns the recipe with `id`, if present.
    pub fn remove(&mut self, id: &str) -> Option<Recipe> {
        let position = self.recipes.iter().position(|r| r.id == id)?;
        Some(self.recipes.remove(position))
    }

    /// Empties the selection.
    pub fn clear(&mut self) {
        self.recipes.clear();
    }

    /// The recipe with `id`, if selected.
    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Selected recipes in insertion order.
    pub fn as_slice(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Iterator over the selected recipes in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }

    /// Number of selected recipes.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl<'a> IntoIterator for &'a SelectionSet {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
