//! Cooking plan model returned by the generative service.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Combined timeline for all selected dishes.
///
/// Produced wholesale by the plan generator. Nothing here is validated: a
/// step ending before it starts is kept exactly as received.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CookingPlan {
    /// Total minutes from start to finish
    pub total_time: f64,
    /// High-level prep to do before anything else
    pub prep_summary: Vec<String>,
    /// Timeline entries, in whatever order the service returned them
    pub timeline: Vec<PlanStep>,
}

/// One entry of the cooking timeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanStep {
    /// Start minute
    pub time_start: f64,
    /// End minute
    pub time_end: f64,
    /// What the cook does
    pub action: String,
    /// Dish this entry belongs to
    pub dish_name: String,
    /// Whether a stove is busy during this entry
    pub is_stove_active: bool,
    /// Stove slot, when the service named one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stove_number: Option<f64>,
}

impl CookingPlan {
    /// Timeline sorted by start time; entries with equal start keep their
    /// original relative order.
    pub fn sorted_timeline(&self) -> Vec<&PlanStep> {
        let mut steps: Vec<&PlanStep> = self.timeline.iter().collect();
        steps.sort_by(|a, b| a.time_start.total_cmp(&b.time_start));
        steps
    }
}

/// A plan together with the moment it was received.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPlan {
    /// The plan as returned by the service
    pub plan: CookingPlan,
    /// When the reply arrived (UTC)
    pub generated_at: Timestamp,
}

impl GeneratedPlan {
    /// Stamp a freshly received plan with the current time.
    pub fn now(plan: CookingPlan) -> Self {
        Self {
            plan,
            generated_at: Timestamp::now(),
        }
    }
}
