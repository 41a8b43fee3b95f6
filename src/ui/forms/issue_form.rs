//! Issue create page

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::FieldId;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Height of a single bordered input field
const FIELD_HEIGHT: u16 = 3;

/// Draw the issue create form: four fields stacked above a submit button
pub fn draw_issue_create(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let block = Block::default()
        .title(" Create Issue ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = form
        .fields()
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (field, chunk) in form.fields().iter().zip(chunks.iter()) {
        draw_field(frame, *chunk, field);
    }

    let button_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(14), Constraint::Min(0)])
        .split(chunks[form.field_count()]);
    let ready = !form.value(FieldId::Title).trim().is_empty();
    render_button(frame, button_row[0], "[ Submit ]", ready);
}
