//! Prompt construction for plan generation.

use serde::Serialize;

use crate::{display::Minutes, error::Result, models::Recipe};

/// Compact per-recipe view embedded in the prompt.
#[derive(Debug, Serialize)]
struct PromptRecipe<'a> {
    name: &'a str,
    steps: String,
}

impl<'a> From<&'a Recipe> for PromptRecipe<'a> {
    fn from(recipe: &'a Recipe) -> Self {
        let steps = recipe
            .steps
            .iter()
            .map(|s| {
                format!(
                    "{} ({}m, Stove: {})",
                    s.instruction,
                    Minutes(s.duration_minutes),
                    s.requires_stove
                )
            })
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            name: &recipe.name,
            steps,
        }
    }
}

/// Builds the instruction text for a combined plan over `recipes`.
pub fn build_prompt(recipes: &[Recipe]) -> Result<String> {
    let summary: Vec<PromptRecipe<'_>> = recipes.iter().map(PromptRecipe::from).collect();
    let recipes_json = serde_json::to_string(&summary)?;

    Ok(format!(
        "Analyze these recipes and create a combined, highly efficient cooking plan for ONE person with THREE gas stoves.

Recipes: {recipes_json}

Constraints:
1. Maximum 3 stoves can be used at any given time.
2. Only 1 person is cooking. They can only do one manual task (chopping, stirring, cleaning) at a time, but items can cook on the stove unattended if it's a simmer/boil step.
3. Parallelize as much as possible (e.g., chop vegetables for Dish B while Dish A is simmering on a stove).
4. Provide a sequential timeline of actions.

Return the plan in the specified JSON format."
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecipeStep;

    fn recipe(name: &str, steps: Vec<RecipeStep>) -> Recipe {
        Recipe {
            id: name.to_lowercase(),
            name: name.to_string(),
            variation: None,
            category: String::new(),
            ingredients: vec![],
            steps,
        }
    }

    fn step(instruction: &str, minutes: f64, stove: bool) -> RecipeStep {
        RecipeStep {
            instruction: instruction.to_string(),
            duration_minutes: minutes,
            requires_stove: stove,
        }
    }

    #[test]
    fn test_prompt_lists_steps_with_duration_and_stove() {
        let prompt = build_prompt(&[recipe(
            "Dal",
            vec![step("Rinse dal", 5.0, false), step("Boil dal", 20.0, true)],
        )])
        .unwrap();

        assert!(prompt.contains(
            r#"[{"name":"Dal","steps":"Rinse dal (5m, Stove: false), Boil dal (20m, Stove: true)"}]"#
        ));
        assert!(prompt.contains("Maximum 3 stoves"));
        assert!(prompt.contains("Only 1 person is cooking"));
    }

    #[test]
    fn test_prompt_keeps_fractional_minutes_and_order() {
        let prompt = build_prompt(&[
            recipe("Rice", vec![step("Steam", 12.5, true)]),
            recipe("Raita", vec![]),
        ])
        .unwrap();

        assert!(prompt.contains("Steam (12.5m, Stove: true)"));
        let rice = prompt.find("\"Rice\"").unwrap();
        let raita = prompt.find("\"Raita\"").unwrap();
        assert!(rice < raita);
        assert!(prompt.contains(r#"{"name":"Raita","steps":""}"#));
    }
}
