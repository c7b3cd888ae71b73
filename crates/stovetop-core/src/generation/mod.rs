//! Cooking plan generation.
//!
//! The scheduling itself (how to interleave steps across three stoves and
//! one cook) happens entirely inside an external generative-language
//! service. This module only formats the request and reads the reply:
//!
//! - [`prompt`]: turns the selected recipes into the instruction text
//! - [`schema`]: the fixed JSON shape the reply must follow
//! - [`gemini`]: the HTTP client for the Gemini `generateContent` endpoint
//!
//! Nothing here checks that the returned plan is feasible.

use async_trait::async_trait;

use crate::{
    error::{GenerationResultExt, KitchenError, Result},
    models::{CookingPlan, Recipe},
};

pub mod gemini;
pub mod prompt;
pub mod schema;

pub use gemini::{GeminiClient, GeminiConfig};

/// Produces a combined cooking plan for a set of recipes.
#[async_trait]
pub trait PlanGenerator: Send + Sync {
    /// Requests a plan covering every recipe in `recipes`.
    ///
    /// # Errors
    ///
    /// Returns `KitchenError::Generation` if the service call fails or the
    /// reply does not match the declared shape.
    async fn generate(&self, recipes: &[Recipe]) -> Result<CookingPlan>;
}

/// Parses the raw reply text as a [`CookingPlan`].
pub fn parse_plan(text: &str) -> Result<CookingPlan> {
    let text = text.trim();
    if text.is_empty() {
        return Err(KitchenError::generation("Service returned an empty reply"));
    }
    serde_json::from_str(text).generation_context("Reply does not match the plan schema")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plan_trims_whitespace() {
        let plan = parse_plan(
            "\n  {\"totalTime\": 12, \"prepSummary\": [], \"timeline\": []}  \n",
        )
        .unwrap();
        assert_eq!(plan.total_time, 12.0);
    }

    #[test]
    fn test_parse_plan_keeps_inverted_ranges() {
        let plan = parse_plan(
            r#"{"totalTime": 10, "prepSummary": [], "timeline": [
                {"timeStart": 10, "timeEnd": 5, "action": "Fry", "dishName": "Dal",
                 "isStoveActive": true}
            ]}"#,
        )
        .unwrap();
        assert_eq!(plan.timeline[0].time_start, 10.0);
        assert_eq!(plan.timeline[0].time_end, 5.0);
    }

    #[test]
    fn test_parse_plan_rejects_empty_and_garbage() {
        assert!(matches!(
            parse_plan("   "),
            Err(KitchenError::Generation { .. })
        ));
        assert!(matches!(
            parse_plan("Here is your plan!"),
            Err(KitchenError::Generation { .. })
        ));
        assert!(matches!(
            parse_plan(r#"{"totalTime": 10}"#),
            Err(KitchenError::Generation { .. })
        ));
    }
}
