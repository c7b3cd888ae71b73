//! Stovetop CLI Application
//!
//! Command-line interface for the multi-dish cooking planner.

mod args;
mod cli;
mod mcp;
mod renderer;
mod session;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, StovetopMcpServer};
use renderer::TerminalRenderer;
use stovetop_core::{ConfigLoader, KitchenBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        recipes_file,
        model,
        config_file,
        no_color,
        command,
    } = Args::parse();

    let config = ConfigLoader::new()
        .with_recipes_file(recipes_file)
        .with_model(model)
        .with_config_file(config_file)
        .load()
        .context("Failed to load configuration")?;

    let kitchen = KitchenBuilder::new()
        .with_config(config)
        .build()
        .await
        .context("Failed to initialize kitchen")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Stovetop started");

    match command.unwrap_or(Session) {
        Session => Cli::new(kitchen, renderer).session().await,
        Menu => Cli::new(kitchen, renderer).menu().await,
        Search { query } => Cli::new(kitchen, renderer).search(&query).await,
        Show { id } => Cli::new(kitchen, renderer).show(&id).await,
        Plan { ids } => Cli::new(kitchen, renderer).plan(&ids).await,
        Serve => {
            info!("Starting Stovetop MCP server");
            run_stdio_server(StovetopMcpServer::new(kitchen))
                .await
                .context("MCP server failed")
        }
    }
}
