//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use stovetop_core::{
    display::{OperationStatus, SelectedDishes, Suggestions},
    params as core, AddOutcome, IndexState, Kitchen,
};
use tokio::sync::Mutex;

use super::errors::to_mcp_error;
use crate::cli::INDEX_UNAVAILABLE;

/// Generic MCP wrapper for core parameter types with serde integration
///
/// Provides JSON deserialization and schema generation for any core parameter
/// type without a dedicated wrapper struct per tool.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type DishQuery = McpParams<core::DishQuery>;
pub type DishId = McpParams<core::DishId>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text_result(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    kitchen: Arc<Mutex<Kitchen>>,
}

impl McpHandlers {
    pub fn new(kitchen: Arc<Mutex<Kitchen>>) -> Self {
        Self { kitchen }
    }

    pub async fn search_dishes(&self, Parameters(params): Parameters<DishQuery>) -> McpResult {
        debug!("search_dishes: {:?}", params);

        let mut kitchen = self.kitchen.lock().await;
        if matches!(kitchen.dish_search().index(), IndexState::Loading) {
            kitchen.load_index().await;
        }
        if matches!(kitchen.dish_search().index(), IndexState::Unavailable) {
            return Ok(text_result(
                OperationStatus::failure(format!("{INDEX_UNAVAILABLE}; no dishes can be found."))
                    .to_string(),
            ));
        }

        let query = params.as_ref().query.trim();
        let suggestions = Suggestions(kitchen.search(query)).to_string();
        Ok(text_result(format!("# Dishes matching '{query}'\n\n{suggestions}")))
    }

    pub async fn add_dish(&self, Parameters(params): Parameters<DishId>) -> McpResult {
        debug!("add_dish: {:?}", params);

        let summary = params.as_ref().to_summary();
        let mut kitchen = self.kitchen.lock().await;
        let outcome = kitchen
            .add_recipe(&summary)
            .await
            .map_err(|e| to_mcp_error("Could not load dish details", &e))?;

        let status = match outcome {
            AddOutcome::Added => {
                let name = kitchen
                    .selection()
                    .get(&summary.id)
                    .map_or(summary.id.as_str(), |r| r.name.as_str());
                OperationStatus::success(format!(
                    "Added {name}. {} dishes selected.",
                    kitchen.selection().len()
                ))
            }
            AddOutcome::AlreadySelected => {
                OperationStatus::notice(format!("'{}' is already selected.", summary.id))
            }
            AddOutcome::MissingId => {
                return Err(ErrorData::invalid_params("id must not be empty", None));
            }
        };
        Ok(text_result(status.to_string()))
    }

    pub async fn remove_dish(&self, Parameters(params): Parameters<DishId>) -> McpResult {
        debug!("remove_dish: {:?}", params);

        let id = params.as_ref().id.trim();
        let status = match self.kitchen.lock().await.remove_recipe(id) {
            Some(recipe) => OperationStatus::success(format!("Removed {}.", recipe.name)),
            None => OperationStatus::notice(format!("No selected dish has ID '{id}'.")),
        };
        Ok(text_result(status.to_string()))
    }

    pub async fn list_selected(&self) -> McpResult {
        let kitchen = self.kitchen.lock().await;
        Ok(text_result(SelectedDishes(kitchen.selection().as_slice()).to_string()))
    }

    pub async fn generate_plan(&self) -> McpResult {
        let mut kitchen = self.kitchen.lock().await;
        let plan = kitchen
            .generate_plan()
            .await
            .map(|plan| plan.to_string())
            .map_err(|e| to_mcp_error("Failed to generate plan", &e))?;
        Ok(text_result(plan))
    }

    pub async fn show_plan(&self) -> McpResult {
        let kitchen = self.kitchen.lock().await;
        match kitchen.plan() {
            Some(plan) => Ok(text_result(plan.to_string())),
            None => Ok(text_result(
                OperationStatus::notice(
                    "No plan has been generated yet. Add dishes, then call generate_plan.",
                )
                .to_string(),
            )),
        }
    }

    pub async fn reset(&self) -> McpResult {
        self.kitchen.lock().await.reset();
        Ok(text_result(OperationStatus::success("Started over. Dishes and plan cleared.").to_string()))
    }
}
