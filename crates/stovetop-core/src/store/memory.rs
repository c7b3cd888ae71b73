//! In-memory recipe collection.

use std::path::Path;

use async_trait::async_trait;
use log::debug;

use super::RecipeStore;
use crate::{
    error::{KitchenError, Result},
    models::{Recipe, RecipeSummary},
};

/// Recipe collection held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    recipes: Vec<Recipe>,
}

impl MemoryStore {
    /// Creates a store over the given recipes.
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// Loads a JSON array of recipes from disk.
    ///
    /// # Errors
    ///
    /// Returns `KitchenError::Configuration` if the file cannot be read and
    /// `KitchenError::Serialization` if it is not a recipe array.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path).await.map_err(|e| {
            KitchenError::configuration(format!(
                "Cannot read recipes file '{}': {e}",
                path.display()
            ))
        })?;
        let recipes: Vec<Recipe> = serde_json::from_str(&text)?;
        debug!("Loaded {} recipes from {}", recipes.len(), path.display());
        Ok(Self::new(recipes))
    }

    /// Number of recipes held.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the store holds no recipes.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

#[async_trait]
impl RecipeStore for MemoryStore {
    async fn list(&self) -> Result<Vec<RecipeSummary>> {
        let mut summaries: Vec<RecipeSummary> =
            self.recipes.iter().map(RecipeSummary::from).collect();
        summaries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(summaries)
    }

    async fn get(&self, id: &str) -> Result<Recipe> {
        self.recipes
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| KitchenError::not_found(id))
    }
}
