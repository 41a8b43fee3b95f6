//! Configuration handling for the TUI

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the configured token
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

const DEFAULT_LOG_FILTER: &str = "issue_tui=info";
const LOG_FILE_NAME: &str = "issue-tui.log";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Base URL of the GitHub REST API
    pub api_url: Option<String>,
    /// Personal access token sent as a bearer token
    pub token: Option<String>,
    /// Issues fetched at startup
    pub per_page: Option<u32>,
    /// Tracing filter used when RUST_LOG is not set
    pub log_filter: Option<String>,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("io", "issue-tui", "issue-tui")
}

impl TuiConfig {
    /// Get the default config file path
    fn config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from an explicit path, or the default location.
    ///
    /// A missing default file yields the defaults; a missing explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Token from the environment, falling back to the config file
    pub fn resolved_token(&self) -> Option<String> {
        self.token_with_env(std::env::var(TOKEN_ENV_VAR).ok())
    }

    fn token_with_env(&self, env_token: Option<String>) -> Option<String> {
        env_token
            .filter(|token| !token.is_empty())
            .or_else(|| self.token.clone())
    }

    /// Filter directive used when RUST_LOG is unset
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Path of the log file in the platform data directory
    pub fn log_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.data_dir().join(LOG_FILE_NAME))
    }
}
