//! Terminal rendering module for rich markdown output
//!
//! This module provides terminal rendering capabilities using termimad
//! for rich markdown display with optional fallback to plain text.

use std::io::{self, Write};

use anyhow::Result;
use stovetop_core::display::{status::StatusKind, OperationStatus};
use termimad::{crossterm::style::Color, MadSkin};

const RESET: &str = "\x1b[0m";

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        if self.rich_enabled {
            for line in markdown.lines() {
                if line.starts_with('#') {
                    writeln!(out, "\x1b[34m{line}{RESET}")?;
                } else {
                    writeln!(out, "{}", self.skin.inline(line))?;
                }
            }
        } else {
            write!(out, "{markdown}")?;
        }
        out.flush()?;
        Ok(())
    }

    /// Render a one-line operation status, colored by kind
    pub fn render_status(&self, status: &OperationStatus) -> Result<()> {
        let mut out = io::stdout().lock();
        if self.rich_enabled {
            write!(out, "{}{status}{RESET}", status_color(status.kind))?;
        } else {
            write!(out, "{status}")?;
        }
        out.flush()?;
        Ok(())
    }
}

fn status_color(kind: StatusKind) -> &'static str {
    match kind {
        StatusKind::Success => "\x1b[32m",
        StatusKind::Notice => "\x1b[33m",
        StatusKind::Error => "\x1b[31m",
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
    }

    #[test]
    fn test_default_is_rich() {
        assert!(TerminalRenderer::default().rich_enabled);
    }

    #[test]
    fn test_status_colors_differ() {
        assert_ne!(status_color(StatusKind::Success), status_color(StatusKind::Error));
        assert_ne!(status_color(StatusKind::Notice), status_color(StatusKind::Error));
    }
}
