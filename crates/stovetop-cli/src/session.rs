//! Interactive planning session.
//!
//! A line-oriented loop over stdin that plays the part of the search box,
//! the selected-dish list, the generate button and the plan view. The session
//! ends on `quit` or end of input.

use std::{io::Write, str::FromStr};

use anyhow::{Context, Result};
use log::info;
use stovetop_core::{
    display::{OperationStatus, SelectedDishes, Suggestions},
    AddOutcome, IndexState, Kitchen, KitchenError, Mode,
};
use tokio::io::{stdin, AsyncBufReadExt, BufReader};

use crate::{cli::INDEX_UNAVAILABLE, renderer::TerminalRenderer};

const HELP: &str = "## Commands

- `search <text>` or `/<text>`: find dishes by name or variation
- `pick <n>`: add suggestion number n to your dishes
- `remove <n|id>`: drop a selected dish by position or ID
- `dishes`: show the dishes to prepare
- `close`: hide the suggestion list
- `generate`: create the cooking plan
- `plan`: show the current plan again
- `reset`: start over
- `help`: show this list
- `quit`: leave
";

/// One parsed line of session input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Search(String),
    /// 1-based suggestion number
    Pick(usize),
    /// Position (1-based) or recipe ID
    Remove(String),
    Dishes,
    Close,
    Generate,
    Plan,
    Reset,
    Help,
    Quit,
}

impl FromStr for SessionCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if let Some(query) = line.strip_prefix('/') {
            return Ok(Self::Search(query.trim().to_string()));
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "search" | "find" => Ok(Self::Search(rest.to_string())),
            "pick" | "add" => match rest.parse::<usize>() {
                Ok(n) if n > 0 => Ok(Self::Pick(n)),
                _ => Err("pick expects a suggestion number, e.g. 'pick 1'".to_string()),
            },
            "remove" | "rm" if !rest.is_empty() => Ok(Self::Remove(rest.to_string())),
            "remove" | "rm" => Err("remove expects a dish number or ID".to_string()),
            "dishes" | "list" => Ok(Self::Dishes),
            "close" => Ok(Self::Close),
            "generate" | "gen" => Ok(Self::Generate),
            "plan" => Ok(Self::Plan),
            "reset" => Ok(Self::Reset),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            _ => Err(format!(
                "Unknown command '{word}'. Type 'help' for the list of commands."
            )),
        }
    }
}

/// Interactive session over one [`Kitchen`].
pub struct Session {
    kitchen: Kitchen,
    renderer: TerminalRenderer,
}

impl Session {
    pub fn new(kitchen: Kitchen, renderer: TerminalRenderer) -> Self {
        Self { kitchen, renderer }
    }

    /// Runs until `quit` or end of input.
    pub async fn run(mut self) -> Result<()> {
        self.renderer
            .render("# Stovetop\n\nPlan several dishes for 1 cook & 3 stoves. Type `help` for commands.\n")?;

        if matches!(self.kitchen.load_index().await, IndexState::Unavailable) {
            self.renderer.render_status(&OperationStatus::failure(format!(
                "{INDEX_UNAVAILABLE}; searches will find nothing."
            )))?;
        }

        let mut lines = BufReader::new(stdin()).lines();
        loop {
            self.prompt()?;
            let Some(line) = lines.next_line().await.context("Failed to read input")? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<SessionCommand>() {
                Ok(SessionCommand::Quit) => break,
                Ok(command) => self.execute(command).await?,
                Err(message) => self.renderer.render_status(&OperationStatus::failure(message))?,
            }
        }

        info!("Session ended");
        Ok(())
    }

    fn prompt(&self) -> Result<()> {
        let marker = match self.kitchen.mode() {
            Mode::Selecting => "dishes",
            Mode::Reviewing => "plan",
        };
        print!("{marker}> ");
        std::io::stdout().flush().context("Failed to write prompt")
    }

    /// Applies one command and renders its outcome.
    pub async fn execute(&mut self, command: SessionCommand) -> Result<()> {
        match command {
            SessionCommand::Search(query) => self.search(&query),
            SessionCommand::Pick(n) => self.pick(n).await,
            SessionCommand::Remove(target) => self.remove(&target),
            SessionCommand::Dishes => self.show_dishes(),
            SessionCommand::Close => {
                self.kitchen.dismiss_suggestions();
                self.renderer
                    .render_status(&OperationStatus::notice("Suggestions closed."))
            }
            SessionCommand::Generate => self.generate().await,
            SessionCommand::Plan => match self.kitchen.plan() {
                Some(plan) => self.renderer.render(&plan.to_string()),
                None => self.renderer.render_status(&OperationStatus::notice(
                    "No plan yet. Select dishes and type 'generate'.",
                )),
            },
            SessionCommand::Reset => {
                self.kitchen.reset();
                self.renderer.render_status(&OperationStatus::success(
                    "Started over. Dishes and plan cleared.",
                ))
            }
            SessionCommand::Help => self.renderer.render(HELP),
            SessionCommand::Quit => Ok(()),
        }
    }

    fn search(&mut self, query: &str) -> Result<()> {
        let suggestions = self.kitchen.search(query);
        if query.is_empty() {
            return self
                .renderer
                .render_status(&OperationStatus::notice("Search cleared."));
        }
        self.renderer.render(&Suggestions(suggestions).to_string())
    }

    async fn pick(&mut self, n: usize) -> Result<()> {
        let status = match self.kitchen.pick_suggestion(n - 1).await {
            Ok((summary, AddOutcome::Added)) => {
                OperationStatus::success(format!("Added {}", summary.name))
            }
            Ok((summary, AddOutcome::AlreadySelected)) => {
                OperationStatus::notice(format!("{} is already on your list", summary.name))
            }
            Ok((_, AddOutcome::MissingId)) => {
                OperationStatus::notice("That dish has no ID and cannot be added")
            }
            Err(KitchenError::Validation { reason }) => OperationStatus::failure(reason),
            Err(e) => OperationStatus::failure(self.user_message(&e)),
        };

        self.renderer.render_status(&status)?;
        if !status.is_failure() {
            self.show_dishes()?;
        }
        Ok(())
    }

    fn remove(&mut self, target: &str) -> Result<()> {
        let selection = self.kitchen.selection();
        let id = match target.parse::<usize>() {
            Ok(n) if (1..=selection.len()).contains(&n) => selection.as_slice()[n - 1].id.clone(),
            _ => target.to_string(),
        };

        let status = match self.kitchen.remove_recipe(&id) {
            Some(recipe) => OperationStatus::success(format!("Removed {}", recipe.name)),
            None => OperationStatus::notice(format!("No selected dish matches '{target}'")),
        };
        self.renderer.render_status(&status)
    }

    fn show_dishes(&self) -> Result<()> {
        self.renderer
            .render(&SelectedDishes(self.kitchen.selection().as_slice()).to_string())
    }

    async fn generate(&mut self) -> Result<()> {
        if self.kitchen.can_generate() {
            self.renderer.render_status(&OperationStatus::notice(format!(
                "Planning {} dishes...",
                self.kitchen.selection().len()
            )))?;
        }

        match self.kitchen.generate_plan().await.map(|plan| plan.to_string()) {
            Ok(plan) => self.renderer.render(&plan),
            Err(e) => {
                let status = OperationStatus::failure(self.user_message(&e));
                self.renderer.render_status(&status)
            }
        }
    }

    fn user_message(&self, error: &KitchenError) -> String {
        self.kitchen
            .error()
            .map_or_else(|| error.to_string(), str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<SessionCommand, String> {
        line.parse()
    }

    #[test]
    fn test_slash_is_search() {
        assert_eq!(parse("/paneer"), Ok(SessionCommand::Search("paneer".to_string())));
        assert_eq!(parse("  / dal  "), Ok(SessionCommand::Search("dal".to_string())));
        assert_eq!(parse("/"), Ok(SessionCommand::Search(String::new())));
    }

    #[test]
    fn test_search_keeps_inner_spaces() {
        assert_eq!(
            parse("search butter masala"),
            Ok(SessionCommand::Search("butter masala".to_string()))
        );
    }

    #[test]
    fn test_pick_requires_positive_number() {
        assert_eq!(parse("pick 2"), Ok(SessionCommand::Pick(2)));
        assert!(parse("pick 0").is_err());
        assert!(parse("pick one").is_err());
        assert!(parse("pick").is_err());
    }

    #[test]
    fn test_remove_accepts_position_or_id() {
        assert_eq!(parse("remove 1"), Ok(SessionCommand::Remove("1".to_string())));
        assert_eq!(parse("rm dal-tadka"), Ok(SessionCommand::Remove("dal-tadka".to_string())));
        assert!(parse("remove").is_err());
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        assert_eq!(parse("GENERATE"), Ok(SessionCommand::Generate));
        assert_eq!(parse("Dishes"), Ok(SessionCommand::Dishes));
        assert_eq!(parse("exit"), Ok(SessionCommand::Quit));
        assert_eq!(parse("?"), Ok(SessionCommand::Help));
    }

    #[test]
    fn test_unknown_command() {
        let err = parse("bake 3").unwrap_err();
        assert!(err.contains("Unknown command 'bake'"));
    }
}
