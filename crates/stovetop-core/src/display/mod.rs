//! Display formatting for recipes, selections and cooking plans.
//!
//! Domain models implement [`std::fmt::Display`] here, away from their
//! definitions, and a handful of wrapper types cover collections and status
//! lines. Everything formats as markdown so the CLI can render it richly or
//! print it verbatim.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Display impls & │    │   Formatted     │
//! │ (Recipe, Plan)  │───▶│    wrappers     │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`plan`]: the plan renderer (timeline sorted by start, prep checklist)
//! - [`recipe`]: full recipe and single suggestion formatting
//! - [`collections`]: suggestion lists and the selected-dish list
//! - [`status`]: one-line operation feedback
//! - [`format`]: minute and timestamp helpers
//!
//! ```rust
//! use stovetop_core::{
//!     display::Minutes,
//!     models::{CookingPlan, PlanStep},
//! };
//!
//! let plan = CookingPlan {
//!     total_time: 20.0,
//!     prep_summary: vec!["Rinse dal".to_string()],
//!     timeline: vec![PlanStep {
//!         time_start: 0.0,
//!         time_end: 20.0,
//!         action: "Boil dal".to_string(),
//!         dish_name: "Dal".to_string(),
//!         is_stove_active: true,
//!         stove_number: None,
//!     }],
//! };
//! let output = plan.to_string();
//! assert!(output.contains("Stove active"));
//! assert_eq!(Minutes(20.0).to_string(), "20");
//! ```

pub mod collections;
pub mod format;
pub mod plan;
pub mod recipe;
pub mod status;

pub use collections::{SelectedDishes, Suggestions};
pub use format::{LocalDateTime, Minutes};
pub use status::OperationStatus;
