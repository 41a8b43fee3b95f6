//! Issue list selection state

use super::app_state::Issue;
use super::page::Direction;
use crossterm::event::{KeyCode, KeyEvent};
use thiserror::Error;

/// Rows moved by PageUp/PageDown
pub const PAGE_SIZE: usize = 10;

/// Raised when asking for the selected issue of an empty list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no issue is selected because the list is empty")]
pub struct EmptySelection;

/// Fetched issues in fetch order plus the highlighted row
#[derive(Debug, Clone, Default)]
pub struct IssueList {
    issues: Vec<Issue>,
    /// `Some(i)` with `i < issues.len()`, or `None` exactly when empty
    selected: Option<usize>,
}

impl IssueList {
    pub fn new(issues: Vec<Issue>) -> Self {
        let selected = if issues.is_empty() { None } else { Some(0) };
        Self { issues, selected }
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The highlighted issue
    pub fn selected(&self) -> Result<&Issue, EmptySelection> {
        self.selected
            .and_then(|index| self.issues.get(index))
            .ok_or(EmptySelection)
    }

    /// Move the selection by one row, stopping at the first and last row
    pub fn move_selection(&mut self, direction: Direction) {
        if let Some(current) = self.selected {
            self.select(direction.step(current, self.issues.len()));
        }
    }

    /// Select `index`, clamped to the last row. No-op on an empty list.
    pub fn select(&mut self, index: usize) {
        if self.issues.is_empty() {
            return;
        }
        self.selected = Some(index.min(self.issues.len() - 1));
    }

    /// Apply a list navigation key. Returns false when the key is not one.
    pub fn dispatch(&mut self, key: KeyEvent) -> bool {
        let Some(current) = self.selected else {
            return false;
        };
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(Direction::Up),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(Direction::Down),
            KeyCode::Home | KeyCode::Char('g') => self.select(0),
            KeyCode::End | KeyCode::Char('G') => self.select(self.issues.len() - 1),
            KeyCode::PageUp => self.select(current.saturating_sub(PAGE_SIZE)),
            KeyCode::PageDown => self.select(current + PAGE_SIZE),
            _ => return false,
        }
        true
    }
}
