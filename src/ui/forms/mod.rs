//! Form rendering module
//!
//! - `field_renderer`: single field rendering with cursor
//! - `issue_form`: the issue create page

mod field_renderer;
mod issue_form;

pub use issue_form::draw_issue_create;
