//! Interactive page browsing.
//!
//! A [`BrowseSession`] walks a fixed listing one page at a time. Moving to
//! the next or previous page records a visit in a [`PageNavigator`], so
//! `back` and `forward` replay the pages the user actually looked at rather
//! than their numeric neighbours.

use std::str::FromStr;

use crate::catalog::pager::Pages;
use crate::catalog::record::TrailRecord;
use crate::catalog::render;
use crate::data_structures::page_navigator::PageNavigator;

/// Help text listing the browse commands.
pub const BROWSE_HELP: &str =
    "Commands: next (n), prev (p), back (b), forward (f), page <N>, help (h), quit (q)";

/// One line of browse input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseCommand {
    Next,
    Previous,
    Back,
    Forward,
    /// Jump to a 1-based page number
    Goto(usize),
    Help,
    Quit,
}

impl FromStr for BrowseCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let command = words.next().unwrap_or("").to_ascii_lowercase();
        let command = match command.as_str() {
            "n" | "next" => Self::Next,
            "p" | "prev" | "previous" => Self::Previous,
            "b" | "back" => Self::Back,
            "f" | "forward" => Self::Forward,
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            "page" | "g" => {
                let number = words
                    .next()
                    .ok_or_else(|| "page needs a number".to_string())?;
                let number = number
                    .parse::<usize>()
                    .map_err(|_| format!("not a page number: {number}"))?;
                Self::Goto(number)
            }
            "" => return Err("empty command".to_string()),
            other => return Err(format!("unknown command: {other}")),
        };

        if words.next().is_some() {
            return Err(format!("too many arguments: {}", line.trim()));
        }
        Ok(command)
    }
}

/// What the front end should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseOutcome {
    /// Show this text (a rendered page or a notice)
    Show(String),
    /// End the session
    Quit,
}

/// Browsing state over one listing.
#[derive(Debug)]
pub struct BrowseSession<'a> {
    records: Vec<&'a TrailRecord>,
    page_size: usize,
    navigator: PageNavigator<usize>,
}

impl<'a> BrowseSession<'a> {
    /// Starts a session on the first page of `records`.
    pub fn new(records: Vec<&'a TrailRecord>, page_size: usize) -> Self {
        let mut navigator = PageNavigator::new();
        navigator.visit_page(0);
        Self {
            records,
            page_size,
            navigator,
        }
    }

    fn pages(&self) -> Pages<'_, &'a TrailRecord> {
        Pages::new(&self.records, self.page_size)
    }

    /// Index of the page on screen.
    pub fn current_index(&self) -> usize {
        self.navigator.current_page().copied().unwrap_or(0)
    }

    /// Renders the page on screen.
    pub fn render_current(&self) -> String {
        render::render_page(&self.pages(), self.current_index())
    }

    /// Applies one command.
    pub fn apply(&mut self, command: BrowseCommand) -> BrowseOutcome {
        let current = self.current_index();
        let moved = match command {
            BrowseCommand::Quit => return BrowseOutcome::Quit,
            BrowseCommand::Help => return BrowseOutcome::Show(BROWSE_HELP.to_string()),
            BrowseCommand::Next => {
                if !self.pages().has_next(current) {
                    return notice("Already on the last page.");
                }
                self.navigator.visit_page(current + 1);
                true
            }
            BrowseCommand::Previous => {
                if !self.pages().has_previous(current) {
                    return notice("Already on the first page.");
                }
                self.navigator.visit_page(current - 1);
                true
            }
            BrowseCommand::Goto(number) => {
                let total = self.pages().total_pages().max(1);
                if number == 0 || number > total {
                    return notice(&format!("Page {number} is out of range (1-{total})."));
                }
                if number - 1 != current {
                    self.navigator.visit_page(number - 1);
                }
                true
            }
            BrowseCommand::Back => self.navigator.go_back().is_some(),
            BrowseCommand::Forward => self.navigator.go_forward().is_some(),
        };

        if moved {
            BrowseOutcome::Show(self.render_current())
        } else {
            notice("No page in that direction of the history.")
        }
    }
}

fn notice(text: &str) -> BrowseOutcome {
    BrowseOutcome::Show(text.to_string())
}
