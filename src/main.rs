//! Issue TUI - terminal client for creating and browsing GitHub issues
//!
//! A Ratatui-based TUI with two tabs: a form that files new issues in the
//! background and a table of the repository's existing issues.

mod app;
mod config;
mod state;
mod submission;
mod tracker;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use config::TuiConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use submission::SessionContext;
use tracker::GitHubClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Create and browse GitHub issues from the terminal
#[derive(Debug, Parser)]
#[command(name = "issue-tui", version, about)]
struct Args {
    /// Repository to browse and file issues against
    #[arg(long, default_value = "Default")]
    repo: String,

    /// Owner of the repository
    #[arg(long, default_value = "Default")]
    user: String,

    /// Config file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Open the log file, creating its directory. `None` disables file logging.
fn open_log_file() -> Option<File> {
    let path = TuiConfig::log_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    File::options().create(true).append(true).open(path).ok()
}

fn init_logging(config: &TuiConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.log_filter().into());

    // stdout and stderr belong to the TUI, so logs only ever go to a file
    let file_layer = open_log_file().map(|file| {
        tracing_subscriber::fmt::layer()
            .with_writer(Arc::new(file))
            .with_ansi(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = match TuiConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err:?}");
            std::process::exit(1);
        }
    };
    init_logging(&config);

    let context = SessionContext::new(args.repo, args.user);
    tracing::info!(repository = %context.repository, user = %context.user, "Starting issue-tui");

    // Fetch before touching the terminal so failures print cleanly
    let mut app = match build_app(&config, context).await {
        Ok(app) => app,
        Err(err) => {
            tracing::error!("Startup failed: {err:#}");
            eprintln!("Error: {err:?}");
            std::process::exit(1);
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn build_app(config: &TuiConfig, context: SessionContext) -> Result<App> {
    let client = GitHubClient::new(
        config.api_url.clone(),
        config.resolved_token(),
        config.per_page,
    )
    .context("Failed to build GitHub client")?;
    App::start(context, Arc::new(client)).await
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Ignore release and repeat events
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        app.poll_submissions();

        if app.should_quit() {
            tracing::info!(pending = app.pending_submissions(), "Exiting");
            return Ok(());
        }
    }
}
