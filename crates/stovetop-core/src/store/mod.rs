//! Read-only access to the recipe collection.
//!
//! [`RecipeStore`] is the seam between the kitchen and wherever recipes
//! live. Two implementations ship with the crate:
//!
//! - [`FirestoreStore`]: the remote document store, over the Firestore REST
//!   API.
//! - [`MemoryStore`]: an in-memory collection, loadable from a JSON file for
//!   offline sessions and tests.
//!
//! Every call is a fresh round trip; caching is the caller's business (see
//! [`crate::search::DishSearch`]).

use async_trait::async_trait;

use crate::{
    error::Result,
    models::{Recipe, RecipeSummary},
};

pub mod firestore;
pub mod memory;
pub mod value;

pub use firestore::{FirestoreConfig, FirestoreStore};
pub use memory::MemoryStore;

/// Read operations against a recipe collection.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Lists recipe summaries ordered by name ascending.
    ///
    /// # Errors
    ///
    /// Returns `KitchenError::StoreUnavailable` if the collection cannot be
    /// reached.
    async fn list(&self) -> Result<Vec<RecipeSummary>>;

    /// Fetches one full recipe.
    ///
    /// # Errors
    ///
    /// Returns `KitchenError::NotFound` if no record has that ID and
    /// `KitchenError::StoreUnavailable` on transport failure.
    async fn get(&self, id: &str) -> Result<Recipe>;
}
