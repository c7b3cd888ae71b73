//! MCP server implementation for Stovetop
//!
//! This module implements the Model Context Protocol server, letting an AI
//! assistant drive the same planning session a user drives interactively.
//! Tool calls are serialized through a mutex around the single kitchen.

use std::sync::Arc;

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use stovetop_core::Kitchen;
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};

pub mod errors;
pub mod handlers;

pub use handlers::{DishId, DishQuery, McpResult};

const INSTRUCTIONS: &str = r#"Stovetop plans a combined cooking timeline for several dishes, for one cook working three stoves.

## Workflow
1. Find dishes with `search_dishes` (matches names and variations, case-insensitive). Each result shows its ID.
2. Add dishes by ID with `add_dish`; check the list with `list_selected` and drop dishes with `remove_dish`.
3. Call `generate_plan` to get the timeline: total duration, an early prep checklist, and the cooking sequence with stove assignments.
4. Use `show_plan` to see the last plan again, and `reset` to start over.

Generation is delegated to an external model and can take a while. Plans are not validated for feasibility."#;

/// MCP server for Stovetop
#[derive(Clone)]
pub struct StovetopMcpServer {
    kitchen: Arc<Mutex<Kitchen>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl StovetopMcpServer {
    /// Create a new Stovetop MCP server
    pub fn new(kitchen: Kitchen) -> Self {
        Self {
            kitchen: Arc::new(Mutex::new(kitchen)),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.kitchen.clone())
    }

    #[tool(
        name = "search_dishes",
        description = "Search the recipe collection by dish name or variation (case-insensitive substring). Returns a numbered list with each dish's variation, category and ID. Use the ID with add_dish."
    )]
    async fn search_dishes(&self, params: Parameters<DishQuery>) -> McpResult {
        self.handlers().search_dishes(params).await
    }

    #[tool(
        name = "add_dish",
        description = "Add a dish to the selection by its recipe ID. Adding a dish that is already selected changes nothing. Fails if no recipe has that ID."
    )]
    async fn add_dish(&self, params: Parameters<DishId>) -> McpResult {
        self.handlers().add_dish(params).await
    }

    #[tool(
        name = "remove_dish",
        description = "Remove a dish from the selection by its recipe ID. Removing a dish that is not selected changes nothing."
    )]
    async fn remove_dish(&self, params: Parameters<DishId>) -> McpResult {
        self.handlers().remove_dish(params).await
    }

    #[tool(
        name = "list_selected",
        description = "List the dishes currently selected for planning, in the order they were added, with their step counts and IDs."
    )]
    async fn list_selected(&self) -> McpResult {
        self.handlers().list_selected().await
    }

    #[tool(
        name = "generate_plan",
        description = "Generate a combined cooking timeline for every selected dish, optimized for one cook and three stoves. Requires at least one selected dish. Replaces any previous plan."
    )]
    async fn generate_plan(&self) -> McpResult {
        self.handlers().generate_plan().await
    }

    #[tool(
        name = "show_plan",
        description = "Show the most recently generated cooking plan, if any."
    )]
    async fn show_plan(&self) -> McpResult {
        self.handlers().show_plan().await
    }

    #[tool(
        name = "reset",
        description = "Start over: clear the selected dishes and the current plan."
    )]
    async fn reset(&self) -> McpResult {
        self.handlers().reset().await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for StovetopMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "stovetop".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: StovetopMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Stovetop MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use stovetop_core::{
        models::{CookingPlan, Recipe},
        KitchenBuilder, MemoryStore, PlanGenerator,
    };

    use super::*;

    struct NoPlans;

    #[async_trait::async_trait]
    impl PlanGenerator for NoPlans {
        async fn generate(&self, _: &[Recipe]) -> stovetop_core::Result<CookingPlan> {
            Err(stovetop_core::KitchenError::generation("offline"))
        }
    }

    #[tokio::test]
    async fn test_server_exposes_session_tools() {
        let kitchen = KitchenBuilder::new()
            .with_store(Arc::new(MemoryStore::default()))
            .with_generator(Arc::new(NoPlans))
            .build()
            .await
            .unwrap();
        let server = StovetopMcpServer::new(kitchen);

        let mut names: Vec<String> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        names.sort();
        assert_eq!(
            names,
            [
                "add_dish",
                "generate_plan",
                "list_selected",
                "remove_dish",
                "reset",
                "search_dishes",
                "show_plan"
            ]
        );

        let info = server.get_info();
        assert_eq!(info.server_info.name, "stovetop");
        assert!(info.instructions.unwrap_or_default().contains("search_dishes"));
    }
}
