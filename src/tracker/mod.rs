//! Issue tracker module for HTTP communication

mod client;
mod error;
mod traits;

pub use client::GitHubClient;
pub use error::TrackerError;
pub use traits::IssueTracker;

#[cfg(test)]
pub use traits::MockIssueTracker;
