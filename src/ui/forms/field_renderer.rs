//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const CURSOR: &str = "▌";

/// Draw a form field, placing the cursor at the field's edit position
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField) {
    let is_active = field.is_focused();
    let color = if is_active { Color::Cyan } else { Color::DarkGray };

    let line = if is_active {
        let (before, after) = field.split_at_cursor();
        Line::from(vec![
            Span::raw(before.to_string()),
            Span::styled(CURSOR, Style::default().fg(Color::Cyan)),
            Span::raw(after.to_string()),
        ])
    } else if field.as_text().is_empty() {
        Line::from(Span::styled("(empty)", Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(field.as_text().to_string())
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    frame.render_widget(Paragraph::new(line).block(block), area);
}
