use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Plan a combined cooking timeline for one cook and three stoves
///
/// Pick dishes from the recipe collection, then let the generative service
/// interleave their steps into a single timeline. Without a subcommand an
/// interactive session starts. The `serve` subcommand exposes the same session
/// to AI assistants over MCP (Model Context Protocol).
#[derive(Parser)]
#[command(version, about, name = "stovetop")]
pub struct Args {
    /// Read recipes from a local JSON file instead of Firestore
    #[arg(long, global = true)]
    pub recipes_file: Option<PathBuf>,

    /// Generation model. Defaults to $GEMINI_MODEL or gemini-3-pro-preview
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Path to a JSON config file. Defaults to
    /// $XDG_CONFIG_HOME/stovetop/config.json
    #[arg(long, global = true)]
    pub config_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Stovetop CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive planning session (the default)
    Session,
    /// List every dish in the recipe collection
    #[command(alias = "ls")]
    Menu,
    /// Find dishes whose name or variation contains QUERY
    #[command(alias = "s")]
    Search {
        /// Text to look for, case-insensitively
        query: String,
    },
    /// Show a full recipe with ingredients and steps
    Show {
        /// Recipe ID, as printed by `menu` or `search`
        id: String,
    },
    /// Generate a cooking plan for the given dishes
    Plan {
        /// Recipe IDs, in the order they should be listed
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Start the MCP server
    Serve,
}
