//! Builder for creating and configuring Kitchen instances.

use std::sync::Arc;

use log::info;

use super::Kitchen;
use crate::{
    config::{Config, StoreSettings},
    error::{KitchenError, Result},
    generation::{GeminiClient, PlanGenerator},
    store::{FirestoreStore, MemoryStore, RecipeStore},
};

/// Builder for creating and configuring Kitchen instances.
///
/// Explicit collaborators passed with [`with_store`](Self::with_store) or
/// [`with_generator`](Self::with_generator) take precedence over the ones
/// described by a [`Config`].
#[derive(Default)]
pub struct KitchenBuilder {
    store: Option<Arc<dyn RecipeStore>>,
    generator: Option<Arc<dyn PlanGenerator>>,
    config: Option<Config>,
}

impl KitchenBuilder {
    /// Creates a new builder with nothing configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `store` for the recipe index and full recipes.
    pub fn with_store(mut self, store: Arc<dyn RecipeStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Uses `generator` to produce plans.
    pub fn with_generator(mut self, generator: Arc<dyn PlanGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Opens the store and generator described by `config`.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the configured kitchen.
    ///
    /// # Errors
    ///
    /// Returns `KitchenError::Configuration` if no store or generator is
    /// available, if a client cannot be created, or if a recipes file cannot
    /// be read. Returns `KitchenError::Serialization` if a recipes file is
    /// not a recipe array.
    pub async fn build(self) -> Result<Kitchen> {
        let (store_settings, generation) = match self.config {
            Some(config) => (Some(config.store), Some(config.generation)),
            None => (None, None),
        };

        let store = match (self.store, store_settings) {
            (Some(store), _) => store,
            (None, Some(settings)) => Self::open_store(settings).await?,
            (None, None) => return Err(KitchenError::configuration("No recipe store configured")),
        };

        let generator: Arc<dyn PlanGenerator> = match (self.generator, generation) {
            (Some(generator), _) => generator,
            (None, Some(generation)) => {
                let client = GeminiClient::new(generation)?;
                info!("Plans will be generated with {}", client.model());
                Arc::new(client)
            }
            (None, None) => return Err(KitchenError::configuration("No plan generator configured")),
        };

        Ok(Kitchen::new(store, generator))
    }

    async fn open_store(settings: StoreSettings) -> Result<Arc<dyn RecipeStore>> {
        match settings {
            StoreSettings::Firestore(config) => {
                info!("Reading recipes from Firestore project {}", config.project_id);
                Ok(Arc::new(FirestoreStore::new(config)?))
            }
            StoreSettings::File(path) => {
                info!("Reading recipes from {}", path.display());
                Ok(Arc::new(MemoryStore::load(&path).await?))
            }
        }
    }
}
