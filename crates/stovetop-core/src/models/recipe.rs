//! Recipe model definitions.

use serde::{Deserialize, Serialize};

/// One ingredient line of a recipe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ingredient {
    /// Ingredient name
    pub item: String,
    /// Free-text amount ("200g", "2 tbsp")
    pub amount: String,
}

/// One instruction of a recipe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeStep {
    /// Instruction text
    pub instruction: String,
    /// Duration in minutes
    pub duration_minutes: f64,
    /// Whether the step occupies a stove
    pub requires_stove: bool,
}

/// A complete recipe as stored in the recipe collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    /// Opaque unique identifier (the document ID)
    #[serde(default)]
    pub id: String,

    /// Dish name
    pub name: String,

    /// Optional variation label ("Restaurant Style")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variation: Option<String>,

    /// Category ("Main", "Dal", ...)
    #[serde(default)]
    pub category: String,

    /// Ordered ingredient list
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,

    /// Ordered instructions
    #[serde(default)]
    pub steps: Vec<RecipeStep>,
}

impl Recipe {
    /// Number of steps that occupy a stove.
    pub fn stove_steps(&self) -> usize {
        self.steps.iter().filter(|s| s.requires_stove).count()
    }

    /// Sum of all step durations in minutes.
    pub fn total_minutes(&self) -> f64 {
        self.steps.iter().map(|s| s.duration_minutes).sum()
    }
}

/// Lightweight projection of a recipe used by the search index.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecipeSummary {
    /// Recipe ID; an empty ID marks a summary that cannot be fetched
    #[serde(default)]
    pub id: String,
    /// Dish name
    #[serde(default)]
    pub name: String,
    /// Optional variation label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variation: Option<String>,
    /// Category
    #[serde(default)]
    pub category: String,
}

impl RecipeSummary {
    /// Case-insensitive substring match on name or variation.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self
                .variation
                .as_deref()
                .is_some_and(|v| v.to_lowercase().contains(needle))
    }
}

impl From<&Recipe> for RecipeSummary {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.clone(),
            name: recipe.name.clone(),
            variation: recipe.variation.clone(),
            category: recipe.category.clone(),
        }
    }
}
