//! Plan renderer.
//!
//! Pure presentation of a [`CookingPlan`]. The only thing it does to the data
//! is order the timeline by start minute (stable for ties); inconsistent
//! entries such as a step ending before it starts are shown as received.

use std::fmt;

use jiff::Timestamp;

use super::format::{LocalDateTime, Minutes};
use crate::models::{CookingPlan, GeneratedPlan, PlanStep};

/// Label shown for an active stove the service did not number (absent, 0 or NaN).
pub const UNNUMBERED_STOVE: &str = "active";

fn fmt_plan(
    plan: &CookingPlan,
    generated_at: Option<&Timestamp>,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    writeln!(f, "# Chef's Efficient Plan")?;
    writeln!(f)?;
    writeln!(f, "Optimized for 1 cook & 3 stoves")?;
    writeln!(f)?;
    writeln!(f, "- **Total Duration**: {} mins", Minutes(plan.total_time))?;
    if let Some(ts) = generated_at {
        writeln!(f, "- **Generated**: {}", LocalDateTime(ts))?;
    }

    writeln!(f, "\n## Early Prep Checklist")?;
    writeln!(f)?;
    if plan.prep_summary.is_empty() {
        writeln!(f, "Nothing to prep ahead.")?;
    } else {
        for (i, item) in plan.prep_summary.iter().enumerate() {
            writeln!(f, "{}. {item}", i + 1)?;
        }
    }

    writeln!(f, "\n## Cooking Sequence")?;
    writeln!(f)?;
    let timeline = plan.sorted_timeline();
    if timeline.is_empty() {
        writeln!(f, "No timeline entries.")?;
    }
    for step in timeline {
        write!(f, "{step}")?;
    }

    Ok(())
}

impl fmt::Display for PlanStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {} - {} min | {}",
            Minutes(self.time_start),
            Minutes(self.time_end),
            self.dish_name.to_uppercase()
        )?;
        writeln!(f)?;
        writeln!(f, "{}", self.action)?;
        writeln!(f)?;

        if self.is_stove_active {
            match self.stove_number {
                Some(n) if n != 0.0 && !n.is_nan() => writeln!(f, "- Stove {}", Minutes(n))?,
                _ => writeln!(f, "- Stove {UNNUMBERED_STOVE}")?,
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for CookingPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_plan(self, None, f)
    }
}

impl fmt::Display for GeneratedPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_plan(&self.plan, Some(&self.generated_at), f)
    }
}
