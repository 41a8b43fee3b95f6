//! UI module for rendering the TUI

mod components;
mod forms;
mod issues;
mod layout;
mod widgets;

use crate::app::App;
use crate::state::Page;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_tabs(frame, header_area, app);

    // Draw main content based on current page
    match app.state.page {
        Page::Form => forms::draw_issue_create(frame, main_area, app),
        Page::List => issues::draw_list(frame, main_area, app),
        Page::Detail => issues::draw_detail(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);
}
