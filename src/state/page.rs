//! Page routing: which screen is active and what a key does on it
//!
//! Every key is first reduced to a [`NavKey`], then [`route`] maps
//! `(Page, NavKey)` to a [`Transition`] that the app applies. Keeping the
//! table pure makes every arm checkable without a terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Top-level screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Create-issue form
    #[default]
    Form,
    /// Table of fetched issues
    List,
    /// Single issue view
    Detail,
}

impl Page {
    /// Title shown in the tab header
    pub fn label(&self) -> &'static str {
        match self {
            Self::Form => "Create",
            Self::List => "Issues",
            Self::Detail => "Issue",
        }
    }

    /// Index of the tab highlighted for this page
    pub fn tab_index(&self) -> usize {
        match self {
            Self::Form => 0,
            Self::List | Self::Detail => 1,
        }
    }
}

/// Movement along an ordered sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Apply this direction to `index`, clamped to `0..len`
    pub fn step(self, index: usize, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        match self {
            Self::Up => index.saturating_sub(1),
            Self::Down => (index + 1).min(len - 1),
        }
    }
}

/// Keys the page router recognises
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    /// Escape or Ctrl+C
    Exit,
    Tab,
    Enter,
    Up,
    Down,
    /// Plain `q`; only navigational on the detail page
    Back,
    /// Anything else, forwarded to the active page
    Other,
}

impl NavKey {
    pub fn classify(key: &KeyEvent) -> Self {
        match key.code {
            KeyCode::Esc => Self::Exit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Self::Exit,
            KeyCode::Tab => Self::Tab,
            KeyCode::Enter => Self::Enter,
            KeyCode::Up => Self::Up,
            KeyCode::Down => Self::Down,
            KeyCode::Char('q')
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Self::Back
            }
            _ => Self::Other,
        }
    }
}

/// What a key does on the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Leave the program
    Exit,
    /// Switch to another page
    Switch(Page),
    /// Submit the form and clear it
    Submit,
    /// Move form focus
    MoveFocus(Direction),
    /// Hand the key to the focused form field
    ForwardToForm,
    /// Hand the key to the issue list
    ForwardToList,
    /// List to detail refused because there is nothing selected
    EmptyList,
    /// Key has no meaning here
    Ignore,
}

/// The page transition table
pub fn route(page: Page, key: NavKey, has_issues: bool) -> Transition {
    match (page, key) {
        (_, NavKey::Exit) => Transition::Exit,

        (Page::Form, NavKey::Tab) => Transition::Switch(Page::List),
        (Page::Form, NavKey::Enter) => Transition::Submit,
        (Page::Form, NavKey::Up) => Transition::MoveFocus(Direction::Up),
        (Page::Form, NavKey::Down) => Transition::MoveFocus(Direction::Down),
        (Page::Form, NavKey::Back | NavKey::Other) => Transition::ForwardToForm,

        (Page::List, NavKey::Tab) => Transition::Switch(Page::Form),
        (Page::List, NavKey::Enter) if has_issues => Transition::Switch(Page::Detail),
        (Page::List, NavKey::Enter) => Transition::EmptyList,
        (Page::List, NavKey::Up | NavKey::Down | NavKey::Back | NavKey::Other) => {
            Transition::ForwardToList
        }

        (Page::Detail, NavKey::Back) => Transition::Switch(Page::List),
        (Page::Detail, _) => Transition::Ignore,
    }
}
