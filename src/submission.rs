//! Background issue submission
//!
//! Submitting never blocks the event loop: the create call runs on a tokio
//! task and reports back through a channel the loop drains every tick.

use crate::state::{DraftIssue, IssueForm};
use crate::tracker::{IssueTracker, TrackerError};
use std::sync::Arc;
use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};
use uuid::Uuid;

/// Who is using the app and which repository is open
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    pub repository: String,
    pub user: String,
}

impl SessionContext {
    pub fn new(repository: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            repository: repository.into(),
            user: user.into(),
        }
    }

    /// Repository a draft is filed against: its own field, or the session's
    pub fn target_repository<'a>(&'a self, draft: &'a DraftIssue) -> &'a str {
        let typed = draft.repository.trim();
        if typed.is_empty() {
            &self.repository
        } else {
            typed
        }
    }
}

/// Completion message of one background submission
#[derive(Debug)]
pub struct SubmissionOutcome {
    pub id: Uuid,
    pub title: String,
    /// Number of the created issue
    pub result: Result<u64, TrackerError>,
}

impl SubmissionOutcome {
    /// One-line summary for the status bar
    pub fn status_line(&self) -> String {
        match &self.result {
            Ok(number) => format!("Created issue #{number}: {}", self.title),
            Err(err) => format!("Failed to create issue \"{}\": {err}", self.title),
        }
    }
}

/// Turns form contents into create-issue calls
pub struct SubmissionCoordinator {
    tracker: Arc<dyn IssueTracker>,
    outcome_tx: UnboundedSender<SubmissionOutcome>,
    outcome_rx: UnboundedReceiver<SubmissionOutcome>,
    in_flight: usize,
}

impl SubmissionCoordinator {
    pub fn new(tracker: Arc<dyn IssueTracker>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            tracker,
            outcome_tx,
            outcome_rx,
            in_flight: 0,
        }
    }

    /// Snapshot the form, start the create call in the background, and
    /// clear the form. Returns the submitted draft.
    ///
    /// Must be called from within a tokio runtime.
    pub fn submit(&mut self, form: &mut IssueForm, context: &SessionContext) -> DraftIssue {
        let draft = form.snapshot();
        let id = Uuid::new_v4();
        let repository = context.target_repository(&draft).to_string();
        let user = context.user.clone();

        tracing::info!(
            %id,
            title = %draft.title,
            labels = ?draft.label_list(),
            %repository,
            %user,
            "submitting issue"
        );

        let tracker = Arc::clone(&self.tracker);
        let tx = self.outcome_tx.clone();
        let task_draft = draft.clone();
        tokio::spawn(async move {
            let result = tracker
                .create_issue(
                    &task_draft.title,
                    &task_draft.description,
                    &task_draft.labels,
                    &repository,
                    &user,
                )
                .await;
            if let Err(err) = &result {
                tracing::warn!(%id, error = %err, "issue submission failed");
            }
            // Receiver only goes away on shutdown
            let _ = tx.send(SubmissionOutcome {
                id,
                title: task_draft.title,
                result,
            });
        });

        self.in_flight += 1;
        form.reset();
        draft
    }

    /// Next finished submission, if any, without waiting
    pub fn try_next_outcome(&mut self) -> Option<SubmissionOutcome> {
        match self.outcome_rx.try_recv() {
            Ok(outcome) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                Some(outcome)
            }
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// Submissions started but not yet reported
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Wait for the next finished submission
    #[cfg(test)]
    pub async fn next_outcome(&mut self) -> Option<SubmissionOutcome> {
        let outcome = self.outcome_rx.recv().await;
        if outcome.is_some() {
            self.in_flight = self.in_flight.saturating_sub(1);
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Direction;
    use crate::tracker::MockIssueTracker;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::sync::Mutex;

    /// Arguments of one `create_issue` call
    type CreateCall = (String, String, String, String, String);

    fn filled_form(values: [&str; 4]) -> IssueForm {
        let mut form = IssueForm::new();
        for value in values {
            for c in value.chars() {
                form.dispatch(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
            }
            form.move_focus(Direction::Down);
        }
        form
    }

    fn recording_tracker(
        result: fn() -> Result<u64, TrackerError>,
    ) -> (MockIssueTracker, Arc<Mutex<Vec<CreateCall>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&calls);
        let mut mock = MockIssueTracker::new();
        mock.expect_create_issue()
            .returning(move |title, description, labels, repository, user| {
                recorded.lock().unwrap().push((
                    title.to_string(),
                    description.to_string(),
                    labels.to_string(),
                    repository.to_string(),
                    user.to_string(),
                ));
                result()
            });
        (mock, calls)
    }

    mod context {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_target_repository_prefers_typed_value() {
            let context = SessionContext::new("default-repo", "alice");
            let draft = DraftIssue {
                repository: " widgets ".to_string(),
                ..Default::default()
            };
            assert_eq!(context.target_repository(&draft), "widgets");
        }

        #[test]
        fn test_target_repository_falls_back_to_session() {
            let context = SessionContext::new("default-repo", "alice");
            assert_eq!(
                context.target_repository(&DraftIssue::default()),
                "default-repo"
            );
        }
    }

    mod outcome {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_status_line_success() {
            let outcome = SubmissionOutcome {
                id: Uuid::new_v4(),
                title: "Crash".to_string(),
                result: Ok(12),
            };
            assert_eq!(outcome.status_line(), "Created issue #12: Crash");
        }

        #[test]
        fn test_status_line_failure() {
            let outcome = SubmissionOutcome {
                id: Uuid::new_v4(),
                title: "Crash".to_string(),
                result: Err(TrackerError::Network("timed out".to_string())),
            };
            assert_eq!(
                outcome.status_line(),
                "Failed to create issue \"Crash\": network error: timed out"
            );
        }
    }

    #[tokio::test]
    async fn test_submit_returns_draft_and_resets_form() {
        let (mock, _calls) = recording_tracker(|| Ok(1));
        let mut coordinator = SubmissionCoordinator::new(Arc::new(mock));
        let mut form = filled_form(["R", "T", "D", "L"]);
        let context = SessionContext::new("Default", "alice");

        let draft = coordinator.submit(&mut form, &context);

        assert_eq!(
            draft,
            DraftIssue {
                title: "T".to_string(),
                description: "D".to_string(),
                labels: "L".to_string(),
                repository: "R".to_string(),
            }
        );
        assert!(form.fields().iter().all(|f| f.as_text().is_empty()));
        assert_eq!(coordinator.in_flight(), 1);
    }

    #[tokio::test]
    async fn test_submit_calls_tracker_with_context_user() {
        let (mock, calls) = recording_tracker(|| Ok(5));
        let mut coordinator = SubmissionCoordinator::new(Arc::new(mock));
        let mut form = filled_form(["widgets", "Crash", "It broke", "bug"]);

        coordinator.submit(&mut form, &SessionContext::new("Default", "alice"));
        let outcome = coordinator.next_outcome().await.unwrap();

        assert_eq!(outcome.title, "Crash");
        assert_eq!(outcome.result.unwrap(), 5);
        assert_eq!(coordinator.in_flight(), 0);
        assert_eq!(
            calls.lock().unwrap().clone(),
            vec![(
                "Crash".to_string(),
                "It broke".to_string(),
                "bug".to_string(),
                "widgets".to_string(),
                "alice".to_string(),
            )]
        );
    }

    #[tokio::test]
    async fn test_empty_repository_uses_session_repository() {
        let (mock, calls) = recording_tracker(|| Ok(5));
        let mut coordinator = SubmissionCoordinator::new(Arc::new(mock));
        let mut form = filled_form(["", "Crash", "", ""]);

        coordinator.submit(&mut form, &SessionContext::new("gadgets", "bob"));
        coordinator.next_outcome().await.unwrap();

        let calls = calls.lock().unwrap();
        assert_eq!(calls[0].3, "gadgets");
        assert_eq!(calls[0].4, "bob");
    }

    #[tokio::test]
    async fn test_failure_is_reported_not_raised() {
        let (mock, _calls) = recording_tracker(|| {
            Err(TrackerError::Api {
                status: 422,
                message: "Validation Failed".to_string(),
            })
        });
        let mut coordinator = SubmissionCoordinator::new(Arc::new(mock));
        let mut form = filled_form(["r", "t", "", ""]);

        coordinator.submit(&mut form, &SessionContext::new("r", "u"));
        let outcome = coordinator.next_outcome().await.unwrap();

        assert!(matches!(
            outcome.result,
            Err(TrackerError::Api { status: 422, .. })
        ));
    }

    #[tokio::test]
    async fn test_duplicate_submissions_are_independent() {
        let (mock, calls) = recording_tracker(|| Ok(1));
        let mut coordinator = SubmissionCoordinator::new(Arc::new(mock));
        let context = SessionContext::new("r", "u");

        let mut form = filled_form(["r", "same", "", ""]);
        let first = coordinator.submit(&mut form, &context);
        let mut form = filled_form(["r", "same", "", ""]);
        let second = coordinator.submit(&mut form, &context);
        assert_eq!(first, second);
        assert_eq!(coordinator.in_flight(), 2);

        let a = coordinator.next_outcome().await.unwrap();
        let b = coordinator.next_outcome().await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(calls.lock().unwrap().len(), 2);
        assert_eq!(coordinator.in_flight(), 0);
    }

    #[test]
    fn test_try_next_outcome_is_empty_initially() {
        let mut coordinator = SubmissionCoordinator::new(Arc::new(MockIssueTracker::new()));
        assert!(coordinator.try_next_outcome().is_none());
        assert_eq!(coordinator.in_flight(), 0);
    }
}
