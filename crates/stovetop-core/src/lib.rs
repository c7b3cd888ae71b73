//! Core library for the Stovetop cooking planner.
//!
//! A user picks several dishes from a remote recipe collection and asks for a
//! single cooking timeline for one cook working three stoves. This crate
//! holds everything except the terminal front end:
//!
//! - [`store`]: reading the recipe index and full recipes
//! - [`search`]: filtering the cached index as the user types
//! - [`selection`]: the working set of chosen recipes
//! - [`generation`]: asking the generative service for a plan
//! - [`kitchen`]: the session controller wiring the above together
//! - [`display`]: [`std::fmt::Display`] implementations producing markdown
//!
//! # Display Architecture
//!
//! Domain models implement `Display` directly, and the wrappers in
//! [`display`] format lists and status lines. The CLI renders the resulting
//! markdown in the terminal, and the MCP server returns it as tool output.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use stovetop_core::{ConfigLoader, KitchenBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConfigLoader::new()
//!     .with_recipes_file(Some("recipes.json"))
//!     .load()?;
//!
//! let mut kitchen = KitchenBuilder::new().with_config(config).build().await?;
//! kitchen.load_index().await;
//!
//! for summary in kitchen.search("paneer") {
//!     println!("{summary}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod generation;
pub mod kitchen;
pub mod models;
pub mod params;
pub mod search;
pub mod selection;
pub mod store;

// Re-export commonly used types
pub use config::{Config, ConfigLoader, StoreSettings};
pub use display::{LocalDateTime, Minutes, OperationStatus, SelectedDishes, Suggestions};
pub use error::{KitchenError, Result};
pub use generation::{GeminiClient, GeminiConfig, PlanGenerator};
pub use kitchen::{AddOutcome, Kitchen, KitchenBuilder, Mode};
pub use models::{CookingPlan, GeneratedPlan, Ingredient, PlanStep, Recipe, RecipeStep, RecipeSummary};
pub use params::{DishId, DishQuery};
pub use search::{DishSearch, IndexState, SearchPhase};
pub use selection::SelectionSet;
pub use store::{FirestoreConfig, FirestoreStore, MemoryStore, RecipeStore};
