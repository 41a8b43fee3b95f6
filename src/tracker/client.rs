//! GitHub REST client for listing and creating issues
//!
//! Talks to `GET/POST /repos/{owner}/{repo}/issues`. The owner is the
//! `--user` given on the command line.

use super::{IssueTracker, TrackerError};
use crate::state::{split_labels, Issue};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Method, RequestBuilder, Response, Url};
use serde::{Deserialize, Serialize};

/// Default GitHub API address
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Default number of issues requested per fetch
pub const DEFAULT_PER_PAGE: u32 = 50;

const USER_AGENT: &str = concat!("issue-tui/", env!("CARGO_PKG_VERSION"));

/// Issue as returned by the GitHub API
#[derive(Debug, Deserialize)]
struct GitHubIssue {
    number: u64,
    title: String,
    state: String,
    assignee: Option<GitHubUser>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    html_url: Option<String>,
    /// Present when the item is a pull request
    #[serde(default)]
    pull_request: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct GitHubUser {
    login: String,
}

#[derive(Debug, Serialize)]
struct CreateIssueRequest<'a> {
    title: &'a str,
    body: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    labels: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CreatedIssue {
    number: u64,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl From<GitHubIssue> for Issue {
    fn from(issue: GitHubIssue) -> Self {
        Issue {
            number: issue.number,
            title: issue.title,
            state: issue.state,
            assignee: issue.assignee.map(|user| user.login).unwrap_or_default(),
            created_at: issue.created_at,
            url: issue.html_url,
        }
    }
}

/// Client for the GitHub issues API
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    base_url: Url,
    token: Option<String>,
    per_page: u32,
}

impl GitHubClient {
    /// Create a new client.
    ///
    /// `base_url` defaults to [`DEFAULT_API_URL`] and may carry a path prefix
    /// such as `/api/v3`.
    pub fn new(
        base_url: Option<String>,
        token: Option<String>,
        per_page: Option<u32>,
    ) -> Result<Self, TrackerError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| TrackerError::Config(e.to_string()))?;

        let base_url = base_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let base_url = Url::parse(&base_url)
            .map_err(|e| TrackerError::Config(format!("invalid API URL {base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(TrackerError::Config(format!(
                "API URL {base_url} cannot carry a path"
            )));
        }

        Ok(Self {
            http,
            base_url,
            token: token.filter(|t| !t.is_empty()),
            per_page: per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, 100),
        })
    }

    /// `{base}/repos/{user}/{repository}/issues` with each name kept to a
    /// single percent-encoded path segment
    fn issues_url(&self, user: &str, repository: &str) -> Result<Url, TrackerError> {
        for (kind, name) in [("user", user), ("repository", repository)] {
            // Url drops "." and ".." segments instead of encoding them
            if name.is_empty() || name == "." || name == ".." {
                return Err(TrackerError::Config(format!("invalid {kind} name {name:?}")));
            }
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                TrackerError::Config(format!("API URL {} cannot carry a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(["repos", user, repository, "issues"]);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let request = self.http.request(method, url);
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Turn a non-success response into [`TrackerError::Api`]
    async fn check_status(response: Response) -> Result<Response, TrackerError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .map(|e| e.message)
            .unwrap_or(body);
        Err(TrackerError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl IssueTracker for GitHubClient {
    async fn fetch_issues(&self, repository: &str, user: &str) -> Result<Vec<Issue>, TrackerError> {
        let url = self.issues_url(user, repository)?;
        tracing::debug!(%url, "fetching issues");

        let per_page = self.per_page.to_string();
        let response = self
            .request(Method::GET, url)
            .query(&[("state", "all"), ("per_page", per_page.as_str())])
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let issues: Vec<GitHubIssue> = response
            .json()
            .await
            .map_err(|e| TrackerError::Parse(e.to_string()))?;

        let issues: Vec<Issue> = issues
            .into_iter()
            .filter(|issue| issue.pull_request.is_none())
            .map(Issue::from)
            .collect();

        tracing::info!(count = issues.len(), %user, %repository, "fetched issues");
        Ok(issues)
    }

    async fn create_issue(
        &self,
        title: &str,
        description: &str,
        labels: &str,
        repository: &str,
        user: &str,
    ) -> Result<u64, TrackerError> {
        let url = self.issues_url(user, repository)?;
        let body = CreateIssueRequest {
            title,
            body: description,
            labels: split_labels(labels),
        };

        let response = self.request(Method::POST, url).json(&body).send().await?;
        let response = Self::check_status(response).await?;

        let created: CreatedIssue = response
            .json()
            .await
            .map_err(|e| TrackerError::Parse(e.to_string()))?;

        tracing::info!(number = created.number, %user, %repository, "created issue");
        Ok(created.number)
    }
}
