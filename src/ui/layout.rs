//! Layout components (tab header, status bar)

use crate::app::App;
use crate::state::Page;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Tabs},
    Frame,
};

/// Tab titles, indexed by [`Page::tab_index`]
const TAB_TITLES: [&str; 2] = ["Create", "Issues"];

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tabs
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the tab header with repository name
pub fn draw_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(32)])
        .split(area);

    let tabs = Tabs::new(TAB_TITLES.to_vec())
        .select(app.state.page.tab_index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .divider("|");
    frame.render_widget(tabs, chunks[0]);

    let repo = Paragraph::new(Line::from(Span::styled(
        format!("{}/{}", app.context.user, app.context.repository),
        Style::default().fg(Color::DarkGray),
    )))
    .right_aligned();
    frame.render_widget(repo, chunks[1]);
}

/// Key hints for the current page
fn hints(page: Page) -> &'static str {
    match page {
        Page::Form => "↑/↓ field | Enter submit | Tab issues | Esc quit",
        Page::List => "↑/↓ select | Enter open | Tab form | Esc quit",
        Page::Detail => "q back | Esc quit",
    }
}

/// Draw the status bar at the bottom
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {} ", app.state.page.label()),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    )];

    if let Some(ref msg) = app.status_message {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(msg.as_str(), Style::default().fg(Color::Yellow)));
    } else {
        spans.push(Span::styled(
            format!(" {}", hints(app.state.page)),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let pending = app.pending_submissions();
    if pending > 0 {
        spans.push(Span::styled(
            format!("  ({pending} pending)"),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
