//! Issues list and detail views

use super::widgets::render_scrollable_table;
use crate::app::App;
use crate::state::Issue;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table, Wrap},
    Frame,
};

fn state_color(state: &str) -> Color {
    match state {
        "open" => Color::Green,
        "closed" => Color::Magenta,
        _ => Color::DarkGray,
    }
}

fn list_block(app: &App) -> Block<'static> {
    Block::default()
        .title(format!(
            " Issues ({}) - {}/{} ",
            app.state.issues.len(),
            app.context.user,
            app.context.repository
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
}

/// Draw the issues table
pub fn draw_list(frame: &mut Frame, area: Rect, app: &App) {
    let issues = &app.state.issues;

    if issues.is_empty() {
        let content = Paragraph::new("No issues found.\nPress Tab to create one.")
            .style(Style::default().fg(Color::DarkGray))
            .block(list_block(app));
        frame.render_widget(content, area);
        return;
    }

    let header = Row::new(["Number", "Title", "State", "Assignee"]).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = issues
        .issues()
        .iter()
        .map(|issue| {
            Row::new(vec![
                Span::styled(issue.display_number(), Style::default().fg(Color::Cyan)),
                Span::raw(issue.title.as_str()),
                Span::styled(issue.state.as_str(), Style::default().fg(state_color(&issue.state))),
                Span::raw(issue.assignee_label()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(8),
        Constraint::Min(20),
        Constraint::Length(8),
        Constraint::Length(16),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(list_block(app))
        .row_highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▸ ");

    render_scrollable_table(frame, area, table, issues.selected_index());
}

/// Draw the detail view of the selected issue
pub fn draw_detail(frame: &mut Frame, area: Rect, app: &App) {
    match app.state.issues.selected() {
        Ok(issue) => draw_issue_content(frame, area, issue),
        Err(err) => {
            let content = Paragraph::new(err.to_string())
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().title(" Issue ").borders(Borders::ALL));
            frame.render_widget(content, area);
        }
    }
}

fn draw_issue_content(frame: &mut Frame, area: Rect, issue: &Issue) {
    let title = format!(" {} {} ", issue.display_number(), issue.title);

    let mut content = vec![
        Line::from(vec![
            Span::styled("State: ", Style::default().fg(Color::DarkGray)),
            Span::styled(&issue.state, Style::default().fg(state_color(&issue.state))),
        ]),
        Line::from(vec![
            Span::styled("Assignee: ", Style::default().fg(Color::DarkGray)),
            Span::raw(issue.assignee_label()),
        ]),
    ];

    if let Some(created_at) = issue.created_at {
        content.push(Line::from(vec![
            Span::styled("Created: ", Style::default().fg(Color::DarkGray)),
            Span::raw(created_at.format("%Y-%m-%d %H:%M").to_string()),
        ]));
    }

    if let Some(ref url) = issue.url {
        content.push(Line::from(""));
        content.push(Line::from(Span::styled(
            url.as_str(),
            Style::default().fg(Color::Blue),
        )));
    }

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
