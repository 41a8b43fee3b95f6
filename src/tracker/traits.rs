//! Trait abstraction for the issue tracker to enable mocking in tests

use super::TrackerError;
use crate::state::Issue;
use async_trait::async_trait;

/// Remote issue tracker operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// List the issues of `user/repository`, in the tracker's order
    async fn fetch_issues(&self, repository: &str, user: &str) -> Result<Vec<Issue>, TrackerError>;

    /// Create an issue and return its number.
    /// `labels` is the comma separated string typed into the form.
    async fn create_issue(
        &self,
        title: &str,
        description: &str,
        labels: &str,
        repository: &str,
        user: &str,
    ) -> Result<u64, TrackerError>;
}
