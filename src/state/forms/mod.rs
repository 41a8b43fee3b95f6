//! Form domain layer
//!
//! Type-safe form handling for the create-issue page: individual fields
//! and the focus-owning form that groups them.

mod field;
mod form_state;

pub use field::FormField;
pub use form_state::{FieldId, IssueForm};
