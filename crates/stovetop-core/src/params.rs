//! Parameter structures shared by the CLI and the MCP server.
//!
//! These carry no framework derives beyond serde; JSON schema support is
//! enabled with the `schema` feature for interfaces that need it.
//!
//! ```ignore
//! // In the MCP server
//! #[derive(Deserialize, JsonSchema)]
//! #[serde(transparent)]
//! struct SearchRequest(stovetop_core::params::DishQuery);
//! ```

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::RecipeSummary;

/// Parameters for searching the recipe index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DishQuery {
    /// Text matched case-insensitively against dish names and variations
    pub query: String,
}

/// Parameters for operations on a single dish.
///
/// Used by add_dish and remove_dish.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DishId {
    /// The recipe ID, as shown in search results
    pub id: String,
}

impl DishId {
    /// A summary carrying only this ID, enough to request the full recipe.
    pub fn to_summary(&self) -> RecipeSummary {
        RecipeSummary {
            id: self.id.trim().to_string(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dish_id_to_summary_trims() {
        let summary = DishId { id: " dal ".to_string() }.to_summary();
        assert_eq!(summary.id, "dal");
        assert!(summary.name.is_empty());
    }

    #[test]
    fn test_dish_query_deserializes() {
        let params: DishQuery = serde_json::from_str(r#"{"query": "paneer"}"#).unwrap();
        assert_eq!(params.query, "paneer");
    }
}
