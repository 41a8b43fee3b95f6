//! Application state module

mod app_state;
mod forms;
mod page;
mod selection;

pub use app_state::*;
pub use forms::*;
pub use page::*;
