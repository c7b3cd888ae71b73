//! Display implementations for recipes and recipe summaries.

use std::fmt;

use super::format::Minutes;
use crate::models::{Recipe, RecipeSummary};

/// Label shown when a recipe has no variation.
pub const DEFAULT_VARIATION: &str = "Classic Style";

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.variation {
            Some(variation) => writeln!(f, "# {} ({variation})", self.name)?,
            None => writeln!(f, "# {}", self.name)?,
        }
        writeln!(f)?;

        writeln!(f, "- ID: {}", self.id)?;
        if !self.category.is_empty() {
            writeln!(f, "- Category: {}", self.category)?;
        }
        writeln!(
            f,
            "- Steps: {} ({} on stove, {} min total)",
            self.steps.len(),
            self.stove_steps(),
            Minutes(self.total_minutes())
        )?;

        if !self.ingredients.is_empty() {
            writeln!(f, "\n## Ingredients")?;
            writeln!(f)?;
            for ingredient in &self.ingredients {
                writeln!(f, "- {}: {}", ingredient.item, ingredient.amount)?;
            }
        }

        if self.steps.is_empty() {
            writeln!(f, "\nNo steps in this recipe.")?;
        } else {
            writeln!(f, "\n## Steps")?;
            writeln!(f)?;
            for (i, step) in self.steps.iter().enumerate() {
                let stove = if step.requires_stove { ", stove" } else { "" };
                writeln!(
                    f,
                    "{}. {} ({} min{stove})",
                    i + 1,
                    step.instruction,
                    Minutes(step.duration_minutes)
                )?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for RecipeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "**{}** - {}",
            self.name,
            self.variation.as_deref().unwrap_or(DEFAULT_VARIATION)
        )?;
        if !self.category.is_empty() {
            write!(f, " [{}]", self.category.to_uppercase())?;
        }
        write!(f, " (id: {})", self.id)
    }
}
