//! Application state definitions

use super::forms::IssueForm;
use super::page::Page;
use super::selection::IssueList;
use chrono::{DateTime, Utc};

/// Issue information as returned by the tracker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    pub state: String,
    /// Login of the assignee, empty when unassigned
    pub assignee: String,
    pub created_at: Option<DateTime<Utc>>,
    pub url: Option<String>,
}

impl Issue {
    #[cfg(test)]
    pub fn new(number: u64, title: &str, state: &str, assignee: &str) -> Self {
        Self {
            number,
            title: title.to_string(),
            state: state.to_string(),
            assignee: assignee.to_string(),
            created_at: None,
            url: None,
        }
    }

    pub fn display_number(&self) -> String {
        format!("#{}", self.number)
    }

    pub fn assignee_label(&self) -> &str {
        if self.assignee.is_empty() {
            "unassigned"
        } else {
            &self.assignee
        }
    }
}

/// Snapshot of the form at submission time
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DraftIssue {
    pub title: String,
    pub description: String,
    /// Comma separated label names, as typed
    pub labels: String,
    pub repository: String,
}

impl DraftIssue {
    /// Split the labels field into trimmed, non-empty names
    pub fn label_list(&self) -> Vec<String> {
        split_labels(&self.labels)
    }
}

/// Split a comma separated label string, dropping blanks
pub fn split_labels(labels: &str) -> Vec<String> {
    labels
        .split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect()
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub page: Page,

    // Form
    pub form: IssueForm,

    // Data
    pub issues: IssueList,
}

impl AppState {
    pub fn new(issues: Vec<Issue>) -> Self {
        Self {
            page: Page::default(),
            form: IssueForm::new(),
            issues: IssueList::new(issues),
        }
    }
}
