//! The session controller tying search, selection and generation together.
//!
//! [`Kitchen`] owns every piece of session state: the dish search, the
//! selected recipes, the last generated plan and the one user-visible error
//! message. Each operation takes `&mut self`, so at most one recipe fetch and
//! one generation are in flight per session.
//!
//! # Lifecycle
//!
//! ```text
//!            add / remove                     generate (ok)
//!   ┌──────────────────────────┐     ┌──────────────────────────┐
//!   │        Selecting         │────▶│        Reviewing         │
//!   │ (search, selection list) │◀────│      (plan display)      │
//!   └──────────────────────────┘     └──────────────────────────┘
//!                                               reset
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use stovetop_core::{
//!     kitchen::{AddOutcome, KitchenBuilder},
//!     models::{Recipe, RecipeSummary},
//!     store::MemoryStore,
//!     PlanGenerator,
//! };
//!
//! # struct NoPlans;
//! # #[async_trait::async_trait]
//! # impl PlanGenerator for NoPlans {
//! #     async fn generate(&self, _: &[Recipe]) -> stovetop_core::Result<stovetop_core::models::CookingPlan> {
//! #         Err(stovetop_core::KitchenError::generation("offline"))
//! #     }
//! # }
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = MemoryStore::new(vec![Recipe {
//!     id: "dal".to_string(),
//!     name: "Dal Tadka".to_string(),
//!     variation: None,
//!     category: "Dal".to_string(),
//!     ingredients: vec![],
//!     steps: vec![],
//! }]);
//!
//! let mut kitchen = KitchenBuilder::new()
//!     .with_store(Arc::new(store))
//!     .with_generator(Arc::new(NoPlans))
//!     .build()
//!     .await?;
//!
//! kitchen.load_index().await;
//! let summary = kitchen.search("dal")[0].clone();
//! assert_eq!(kitchen.add_recipe(&summary).await?, AddOutcome::Added);
//! assert_eq!(kitchen.add_recipe(&summary).await?, AddOutcome::AlreadySelected);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use log::{debug, error, info};

use crate::{
    error::{KitchenError, Result},
    generation::PlanGenerator,
    models::{GeneratedPlan, Recipe, RecipeSummary},
    search::{DishSearch, IndexState},
    selection::SelectionSet,
    store::RecipeStore,
};

pub mod builder;


pub use builder::KitchenBuilder;

/// Shown when a selected dish cannot be fetched.
pub const LOAD_DISH_FAILED: &str = "Could not load dish details. Please check connection.";
/// Shown when generation is requested with nothing selected.
pub const EMPTY_SELECTION: &str = "Please select at least one dish.";
/// Shown when the generative service fails.
pub const GENERATION_FAILED: &str = "Failed to generate plan. Please try again.";

/// Result of asking to add a dish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The recipe was fetched and appended
    Added,
    /// A recipe with this ID was already selected; nothing changed
    AlreadySelected,
    /// The summary carried no ID; nothing changed
    MissingId,
}

/// Which view the session is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Building the selection
    Selecting,
    /// A plan is available to review
    Reviewing,
}

/// Session controller.
pub struct Kitchen {
    store: Arc<dyn RecipeStore>,
    generator: Arc<dyn PlanGenerator>,
    search: DishSearch,
    selection: SelectionSet,
    plan: Option<GeneratedPlan>,
    loading_recipe: bool,
    generating: bool,
    error: Option<String>,
}

impl Kitchen {
    pub(crate) fn new(store: Arc<dyn RecipeStore>, generator: Arc<dyn PlanGenerator>) -> Self {
        Self {
            store,
            generator,
            search: DishSearch::new(),
            selection: SelectionSet::new(),
            plan: None,
            loading_recipe: false,
            generating: false,
            error: None,
        }
    }

    /// Fetches the recipe index into the dish search. Never fails; see
    /// [`IndexState::Unavailable`].
    pub async fn load_index(&mut self) -> &IndexState {
        self.search.load(self.store.as_ref()).await
    }

    /// Updates the search query and returns the visible suggestions.
    pub fn search(&mut self, query: &str) -> &[RecipeSummary] {
        self.search.set_query(query)
    }

    /// Closes the suggestion list, keeping the query.
    pub fn dismiss_suggestions(&mut self) {
        self.search.dismiss();
    }

    /// Picks the suggestion at `position` (0-based) and adds it.
    ///
    /// # Errors
    ///
    /// Returns `KitchenError::Validation` if no suggestion is visible at that
    /// position, or whatever [`Kitchen::add_recipe`] returns.
    pub async fn pick_suggestion(&mut self, position: usize) -> Result<(RecipeSummary, AddOutcome)> {
        let summary = self.search.select(position).ok_or_else(|| {
            KitchenError::validation(format!("No suggestion at position {}", position + 1))
        })?;
        let outcome = self.add_recipe(&summary).await?;
        Ok((summary, outcome))
    }

    /// Fetches the full recipe for `summary` and appends it to the selection.
    ///
    /// Summaries without an ID and recipes already selected are ignored.
    ///
    /// # Errors
    ///
    /// Returns the store error if the fetch fails; the session error message
    /// is set and the selection is left unchanged.
    pub async fn add_recipe(&mut self, summary: &RecipeSummary) -> Result<AddOutcome> {
        if summary.id.is_empty() {
            self.loading_recipe = false;
            return Ok(AddOutcome::MissingId);
        }
        if self.selection.contains(&summary.id) {
            self.loading_recipe = false;
            return Ok(AddOutcome::AlreadySelected);
        }

        self.error = None;
        self.loading_recipe = true;
        debug!("Fetching recipe {} for selection", summary.id);
        let fetched = self.store.get(&summary.id).await;
        self.loading_recipe = false;

        match fetched {
            Ok(recipe) => {
                self.selection.insert(recipe);
                Ok(AddOutcome::Added)
            }
            Err(e) => {
                error!("Failed to load recipe {}: {e}", summary.id);
                self.error = Some(LOAD_DISH_FAILED.to_string());
                Err(e)
            }
        }
    }

    /// Removes the selected recipe with `id`, if any.
    pub fn remove_recipe(&mut self, id: &str) -> Option<Recipe> {
        self.selection.remove(id)
    }

    /// Asks the generator for a plan covering every selected recipe.
    ///
    /// # Errors
    ///
    /// Returns `KitchenError::Validation` without contacting anything when
    /// the selection is empty, or the generator's error on failure. Either
    /// way the session error message is set and the previous plan is kept.
    pub async fn generate_plan(&mut self) -> Result<&GeneratedPlan> {
        if self.selection.is_empty() {
            self.error = Some(EMPTY_SELECTION.to_string());
            return Err(KitchenError::validation(EMPTY_SELECTION));
        }

        self.error = None;
        self.generating = true;
        info!("Generating plan for {} dishes", self.selection.len());
        let generated = self.generator.generate(self.selection.as_slice()).await;
        self.generating = false;

        match generated {
            Ok(plan) => {
                debug!("Plan received with {} timeline entries", plan.timeline.len());
                Ok(&*self.plan.insert(GeneratedPlan::now(plan)))
            }
            Err(e) => {
                error!("Plan generation failed: {e}");
                self.error = Some(GENERATION_FAILED.to_string());
                Err(e)
            }
        }
    }

    /// Clears the selection, the plan and the error message.
    pub fn reset(&mut self) {
        self.selection.clear();
        self.plan = None;
        self.error = None;
    }

    /// Fetches a recipe without touching the selection.
    ///
    /// # Errors
    ///
    /// Returns the store error unchanged.
    pub async fn fetch_recipe(&self, id: &str) -> Result<Recipe> {
        self.store.get(id).await
    }

    /// Current view.
    pub fn mode(&self) -> Mode {
        if self.plan.is_some() {
            Mode::Reviewing
        } else {
            Mode::Selecting
        }
    }

    /// Whether a generate request would reach the generator.
    pub fn can_generate(&self) -> bool {
        !self.selection.is_empty() && !self.loading_recipe && !self.generating
    }

    /// The selected recipes.
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// The last generated plan, if any.
    pub fn plan(&self) -> Option<&GeneratedPlan> {
        self.plan.as_ref()
    }

    /// The current user-visible error message.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a recipe fetch is in flight.
    pub fn is_loading_recipe(&self) -> bool {
        self.loading_recipe
    }

    /// Whether a generation request is in flight.
    pub fn is_generating(&self) -> bool {
        self.generating
    }

    /// The dish search state.
    pub fn dish_search(&self) -> &DishSearch {
        &self.search
    }

    /// Visible suggestions.
    pub fn suggestions(&self) -> &[RecipeSummary] {
        self.search.suggestions()
    }
}
