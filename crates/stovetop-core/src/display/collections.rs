//! Collection wrapper types for suggestion lists and the selected dishes.

use std::fmt;

use crate::models::{Recipe, RecipeSummary};

/// Numbered suggestion list, as shown under the search box.
///
/// Positions start at 1 so they can be typed back to pick a dish.
pub struct Suggestions<'a>(pub &'a [RecipeSummary]);

impl fmt::Display for Suggestions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No matching dishes.");
        }
        for (i, summary) in self.0.iter().enumerate() {
            writeln!(f, "{}. {summary}", i + 1)?;
        }
        Ok(())
    }
}

/// The working set of dishes to plan together.
///
/// # Examples
///
/// ```rust
/// use stovetop_core::display::SelectedDishes;
///
/// let output = SelectedDishes(&[]).to_string();
/// assert_eq!(output, "No dishes selected yet.\n");
/// ```
pub struct SelectedDishes<'a>(pub &'a [Recipe]);

impl fmt::Display for SelectedDishes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No dishes selected yet.");
        }

        writeln!(f, "## Dishes to Prepare ({} selected)", self.0.len())?;
        writeln!(f)?;
        for (i, recipe) in self.0.iter().enumerate() {
            writeln!(
                f,
                "{}. **{}** - {} steps (id: {})",
                i + 1,
                recipe.name,
                recipe.steps.len(),
                recipe.id
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str, name: &str) -> RecipeSummary {
        RecipeSummary {
            id: id.to_string(),
            name: name.to_string(),
            variation: Some("Home Style".to_string()),
            category: String::new(),
        }
    }

    #[test]
    fn test_suggestions_are_numbered_from_one() {
        let items = [summary("a", "Aloo Gobi"), summary("b", "Baingan Bharta")];
        let output = Suggestions(&items).to_string();
        assert!(output.starts_with("1. **Aloo Gobi** - Home Style (id: a)\n"));
        assert!(output.contains("2. **Baingan Bharta**"));
    }

    #[test]
    fn test_empty_suggestions() {
        assert_eq!(Suggestions(&[]).to_string(), "No matching dishes.\n");
    }

    #[test]
    fn test_selected_dishes_lists_step_counts() {
        let recipes = [Recipe {
            id: "dal".to_string(),
            name: "Dal Tadka".to_string(),
            variation: None,
            category: String::new(),
            ingredients: vec![],
            steps: vec![],
        }];
        let output = SelectedDishes(&recipes).to_string();
        assert!(output.contains("## Dishes to Prepare (1 selected)"));
        assert!(output.contains("1. **Dal Tadka** - 0 steps (id: dal)"));
    }
}
