//! Reusable UI widget helpers

use ratatui::{
    layout::Rect,
    widgets::{Table, TableState},
    Frame,
};

/// Render a scrollable table that automatically keeps the selected row visible.
///
/// This wraps `render_stateful_widget` with a `TableState`, so the table
/// scrolls to keep the selected row in view. `None` renders with no highlight.
///
/// # Example
/// ```ignore
/// let table = Table::new(rows, widths).block(block);
/// render_scrollable_table(frame, area, table, app.state.issues.selected_index());
/// ```
pub fn render_scrollable_table(
    frame: &mut Frame,
    area: Rect,
    table: Table,
    selected_index: Option<usize>,
) {
    let mut table_state = TableState::default().with_selected(selected_index);
    frame.render_stateful_widget(table, area, &mut table_state);
}
