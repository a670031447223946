//! Styled terminal output for the CLI.

use std::fmt::Display;

use console::{Term, style};
use sneat_business::table::Page;

/// Terminal output helper for consistent styled output.
pub struct Output {
    term: Term,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    /// Create a new output helper writing to stdout.
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    /// Print a success message with a green checkmark.
    pub fn success(&self, message: impl Display) {
        drop(
            self.term
                .write_line(&format!("{} {}", style("✓").green().bold(), message)),
        );
    }

    /// Print a plain message without any prefix.
    pub fn print(&self, message: impl Display) {
        drop(self.term.write_line(&message.to_string()));
    }

    pub fn newline(&self) {
        drop(self.term.write_line(""));
    }

    /// Print a header with emphasis.
    pub fn header(&self, message: impl Display) {
        drop(
            self.term
                .write_line(&style(message).bold().cyan().to_string()),
        );
    }

    /// Print a dim/muted message.
    pub fn dim(&self, message: impl Display) {
        drop(self.term.write_line(&style(message).dim().to_string()));
    }

    /// "Page 2 of 3 · showing 4-6 of 8 user(s)"
    pub fn page_summary(&self, page: &Page) {
        drop(self.term.write_line(&format!(
            "{} {} {}",
            style(format!("Page {} of {}", page.page + 1, page.page_count)).bold(),
            style("·").dim(),
            style(format!(
                "showing {}-{} of {} user(s)",
                page.first_row(),
                page.last_row(),
                page.total
            ))
            .cyan()
        )));
    }
}
