//! Data models for recipes and cooking plans.
//!
//! Recipes come from the remote recipe collection and are immutable once
//! fetched. Cooking plans come wholesale from the generative service and are
//! treated as opaque. Display implementations for these models live in
//! [`crate::display`] so that data and presentation stay apart.
//!
//! All wire names are camelCase (`durationMinutes`, `timeStart`, ...) and all
//! minute quantities are plain JSON numbers held as `f64`.
//!
//! # Examples
//!
//! ```rust
//! use stovetop_core::models::{Recipe, RecipeSummary};
//!
//! let recipe: Recipe = serde_json::from_str(r#"{
//!     "id": "a",
//!     "name": "Paneer Butter Masala",
//!     "category": "Main",
//!     "ingredients": [{ "item": "Paneer", "amount": "200g" }],
//!     "steps": [{ "instruction": "Simmer gravy", "durationMinutes": 15, "requiresStove": true }]
//! }"#).unwrap();
//!
//! let summary = RecipeSummary::from(&recipe);
//! assert_eq!(summary.name, "Paneer Butter Masala");
//! ```

pub mod plan;
pub mod recipe;


pub use plan::{CookingPlan, GeneratedPlan, PlanStep};
pub use recipe::{Ingredient, Recipe, RecipeStep, RecipeSummary};
