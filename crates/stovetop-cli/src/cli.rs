//! One-shot command handlers.
//!
//! Each handler drives the [`Kitchen`] through a single operation and renders
//! the result with the same `Display` implementations the MCP server returns,
//! so scripted output and assistant output stay identical.

use anyhow::{bail, Context, Result};
use log::debug;
use stovetop_core::{
    display::{OperationStatus, Suggestions},
    kitchen::GENERATION_FAILED,
    params::DishId,
    AddOutcome, IndexState, Kitchen, KitchenError,
};

use crate::{renderer::TerminalRenderer, session::Session};

/// Message used when the recipe index cannot be fetched.
pub const INDEX_UNAVAILABLE: &str = "The recipe index could not be loaded";

pub struct Cli {
    kitchen: Kitchen,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(kitchen: Kitchen, renderer: TerminalRenderer) -> Self {
        Self { kitchen, renderer }
    }

    /// Hands control to the interactive session.
    pub async fn session(self) -> Result<()> {
        Session::new(self.kitchen, self.renderer).run().await
    }

    /// Lists the whole recipe index.
    pub async fn menu(mut self) -> Result<()> {
        let entries = match self.kitchen.load_index().await {
            IndexState::Ready(entries) => entries,
            IndexState::Loading | IndexState::Unavailable => bail!(INDEX_UNAVAILABLE),
        };

        let output = format!("# Menu ({} dishes)\n\n{}", entries.len(), Suggestions(entries));
        self.renderer.render(&output)
    }

    /// Shows the dishes matching `query`.
    pub async fn search(mut self, query: &str) -> Result<()> {
        if matches!(self.kitchen.load_index().await, IndexState::Unavailable) {
            bail!(INDEX_UNAVAILABLE);
        }

        let output = Suggestions(self.kitchen.search(query)).to_string();
        self.renderer.render(&output)
    }

    /// Shows one full recipe.
    pub async fn show(self, id: &str) -> Result<()> {
        let recipe = self
            .kitchen
            .fetch_recipe(id)
            .await
            .with_context(|| format!("Could not load dish '{id}'"))?;
        self.renderer.render(&recipe.to_string())
    }

    /// Selects `ids` in order and generates a plan for them.
    pub async fn plan(mut self, ids: &[String]) -> Result<()> {
        for id in ids {
            let summary = DishId { id: id.clone() }.to_summary();
            let outcome = self
                .kitchen
                .add_recipe(&summary)
                .await
                .with_context(|| format!("Could not add dish '{id}'"))?;

            match outcome {
                AddOutcome::Added => debug!("Selected {id}"),
                AddOutcome::AlreadySelected => self.renderer.render_status(
                    &OperationStatus::notice(format!("'{id}' was listed more than once")),
                )?,
                AddOutcome::MissingId => {
                    self.renderer.render_status(&OperationStatus::notice("Skipped an empty ID"))?
                }
            }
        }

        let plan = match self.kitchen.generate_plan().await {
            Ok(plan) => plan.to_string(),
            Err(e @ KitchenError::Validation { .. }) => return Err(e.into()),
            Err(e) => return Err(anyhow::Error::new(e).context(GENERATION_FAILED)),
        };
        self.renderer.render(&plan)
    }
}
