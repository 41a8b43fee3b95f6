//! Application state and core logic

use crate::state::{route, AppState, Issue, NavKey, Page, Transition};
use crate::submission::{SessionContext, SubmissionCoordinator};
use crate::tracker::IssueTracker;
use anyhow::{Context, Result};
use crossterm::event::KeyEvent;
use std::sync::Arc;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Repository and user given on the command line
    pub context: SessionContext,
    /// Background issue creation
    submissions: SubmissionCoordinator,
    /// Whether the app should quit
    quit: bool,
    /// Transient message for the status bar, cleared on the next key press
    pub status_message: Option<String>,
}

impl App {
    /// Fetch the issue list and build the app.
    ///
    /// A fetch failure is returned as-is; there is no offline mode.
    pub async fn start(context: SessionContext, tracker: Arc<dyn IssueTracker>) -> Result<Self> {
        let issues = tracker
            .fetch_issues(&context.repository, &context.user)
            .await
            .with_context(|| {
                format!(
                    "Failed to fetch issues for {}/{}",
                    context.user, context.repository
                )
            })?;
        Ok(Self::new(context, tracker, issues))
    }

    /// Create a new App instance from already fetched issues
    pub fn new(context: SessionContext, tracker: Arc<dyn IssueTracker>, issues: Vec<Issue>) -> Self {
        Self {
            state: AppState::new(issues),
            context,
            submissions: SubmissionCoordinator::new(tracker),
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Number of submissions still waiting for the tracker
    pub fn pending_submissions(&self) -> usize {
        self.submissions.in_flight()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear any status messages on key press
        self.status_message = None;

        let nav = NavKey::classify(&key);
        let transition = route(self.state.page, nav, !self.state.issues.is_empty());
        tracing::trace!(page = ?self.state.page, ?nav, ?transition, "key routed");

        match transition {
            Transition::Exit => self.quit = true,
            Transition::Switch(page) => self.navigate(page),
            Transition::Submit => {
                let draft = self
                    .submissions
                    .submit(&mut self.state.form, &self.context);
                self.status_message = Some(format!("Submitting \"{}\"...", draft.title));
            }
            Transition::MoveFocus(direction) => self.state.form.move_focus(direction),
            Transition::ForwardToForm => {
                self.state.form.dispatch(key);
            }
            Transition::ForwardToList => {
                self.state.issues.dispatch(key);
            }
            Transition::EmptyList => {
                tracing::debug!("refusing to open detail page without issues");
                self.status_message = Some("No issues to open".to_string());
            }
            Transition::Ignore => {}
        }
    }

    /// Navigate to a new page
    fn navigate(&mut self, page: Page) {
        tracing::debug!(from = ?self.state.page, to = ?page, "navigate");
        self.state.page = page;
    }

    /// Move finished submissions onto the status bar
    pub fn poll_submissions(&mut self) {
        while let Some(outcome) = self.submissions.try_next_outcome() {
            tracing::debug!(id = %outcome.id, ok = outcome.result.is_ok(), "submission finished");
            self.status_message = Some(outcome.status_line());
        }
    }

    /// Wait for one submission to finish and show it
    #[cfg(test)]
    pub async fn wait_for_submission(&mut self) {
        if let Some(outcome) = self.submissions.next_outcome().await {
            self.status_message = Some(outcome.status_line());
        }
    }
}
