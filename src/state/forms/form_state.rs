//! Create-issue form: field list and focus management

use super::field::FormField;
use crate::state::{Direction, DraftIssue};
use crossterm::event::KeyEvent;

/// Fields of the create-issue form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Repository,
    Title,
    Description,
    Labels,
}

impl FieldId {
    pub const ALL: [FieldId; 4] = [
        FieldId::Repository,
        FieldId::Title,
        FieldId::Description,
        FieldId::Labels,
    ];

    pub fn index(self) -> usize {
        match self {
            Self::Repository => 0,
            Self::Title => 1,
            Self::Description => 2,
            Self::Labels => 3,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Repository => "repository",
            Self::Title => "title",
            Self::Description => "description",
            Self::Labels => "labels",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Repository => "Repository",
            Self::Title => "Title",
            Self::Description => "Description",
            Self::Labels => "Labels (comma separated)",
        }
    }
}

/// The create-issue form.
///
/// Exactly one field is focused at all times; `focus_index` names it.
#[derive(Debug, Clone)]
pub struct IssueForm {
    fields: Vec<FormField>,
    focus_index: usize,
}

impl IssueForm {
    pub fn new() -> Self {
        let fields = FieldId::ALL
            .iter()
            .map(|id| FormField::text(id.name(), id.label()))
            .collect();
        let mut form = Self {
            fields,
            focus_index: 0,
        };
        form.focus(0);
        form
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    #[cfg(test)]
    pub fn focus_index(&self) -> usize {
        self.focus_index
    }

    pub fn field(&self, id: FieldId) -> &FormField {
        &self.fields[id.index()]
    }

    pub fn value(&self, id: FieldId) -> &str {
        self.field(id).as_text()
    }

    /// Focus the field at `index` (clamped) and blur every other field
    pub fn focus(&mut self, index: usize) {
        let index = index.min(self.fields.len().saturating_sub(1));
        for (i, field) in self.fields.iter_mut().enumerate() {
            field.set_focused(i == index);
        }
        self.focus_index = index;
    }

    /// Move focus one field up or down, stopping at the first and last field
    pub fn move_focus(&mut self, direction: Direction) {
        let next = direction.step(self.focus_index, self.fields.len());
        if next == self.focus_index {
            tracing::debug!(index = next, ?direction, "form focus already at bound");
            return;
        }
        self.focus(next);
        tracing::debug!(field = %self.fields[next].name, "form focus moved");
    }

    /// Apply a text-editing key to the focused field
    pub fn dispatch(&mut self, key: KeyEvent) -> bool {
        self.fields[self.focus_index].apply_key(key)
    }

    /// Clear every field, keeping focus where it is
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
    }

    /// Copy the current values into a draft
    pub fn snapshot(&self) -> DraftIssue {
        DraftIssue {
            title: self.value(FieldId::Title).to_string(),
            description: self.value(FieldId::Description).to_string(),
            labels: self.value(FieldId::Labels).to_string(),
            repository: self.value(FieldId::Repository).to_string(),
        }
    }
}

impl Default for IssueForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use pretty_assertions::assert_eq;

    fn focused_count(form: &IssueForm) -> usize {
        form.fields().iter().filter(|f| f.is_focused()).count()
    }

    fn type_into(form: &mut IssueForm, text: &str) {
        for c in text.chars() {
            form.dispatch(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    #[test]
    fn test_new_form_has_four_fields_in_order() {
        let form = IssueForm::new();
        let names: Vec<_> = form.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["repository", "title", "description", "labels"]);
    }

    #[test]
    fn test_new_form_focuses_first_field() {
        let form = IssueForm::new();
        assert_eq!(form.focus_index(), 0);
        assert!(form.field(FieldId::Repository).is_focused());
        assert_eq!(focused_count(&form), 1);
    }

    #[test]
    fn test_move_focus_down_and_up() {
        let mut form = IssueForm::new();
        form.move_focus(Direction::Down);
        assert_eq!(form.focus_index(), 1);
        assert!(form.field(FieldId::Title).is_focused());
        assert!(!form.field(FieldId::Repository).is_focused());

        form.move_focus(Direction::Up);
        assert_eq!(form.focus_index(), 0);
        assert_eq!(focused_count(&form), 1);
    }

    #[test]
    fn test_move_focus_clamps_at_top() {
        let mut form = IssueForm::new();
        form.move_focus(Direction::Up);
        assert_eq!(form.focus_index(), 0);
        assert_eq!(focused_count(&form), 1);
    }

    #[test]
    fn test_move_focus_clamps_at_bottom() {
        let mut form = IssueForm::new();
        for _ in 0..10 {
            form.move_focus(Direction::Down);
        }
        assert_eq!(form.focus_index(), 3);
        assert!(form.field(FieldId::Labels).is_focused());
        assert_eq!(focused_count(&form), 1);
    }

    #[test]
    fn test_focus_invariant_holds_for_any_sequence() {
        let mut form = IssueForm::new();
        let moves = [
            Direction::Down,
            Direction::Down,
            Direction::Up,
            Direction::Down,
            Direction::Down,
            Direction::Down,
            Direction::Down,
            Direction::Up,
            Direction::Up,
            Direction::Up,
            Direction::Up,
            Direction::Up,
        ];
        for direction in moves {
            form.move_focus(direction);
            assert!(form.focus_index() < form.field_count());
            assert_eq!(focused_count(&form), 1);
            assert!(form.fields()[form.focus_index()].is_focused());
        }
    }

    #[test]
    fn test_focus_out_of_range_is_clamped() {
        let mut form = IssueForm::new();
        form.focus(99);
        assert_eq!(form.focus_index(), 3);
        assert_eq!(focused_count(&form), 1);
    }

    #[test]
    fn test_dispatch_edits_focused_field_only() {
        let mut form = IssueForm::new();
        form.move_focus(Direction::Down);
        type_into(&mut form, "Crash");
        assert_eq!(form.value(FieldId::Title), "Crash");
        assert_eq!(form.value(FieldId::Repository), "");
        assert_eq!(form.value(FieldId::Description), "");
    }

    #[test]
    fn test_reset_clears_values_and_keeps_focus() {
        let mut form = IssueForm::new();
        type_into(&mut form, "repo");
        form.move_focus(Direction::Down);
        type_into(&mut form, "title");
        form.reset();

        for field in form.fields() {
            assert_eq!(field.as_text(), "");
            assert_eq!(field.split_at_cursor(), ("", ""));
        }
        assert_eq!(form.focus_index(), 1);
        assert_eq!(focused_count(&form), 1);
    }

    #[test]
    fn test_snapshot_maps_fields_to_draft() {
        let mut form = IssueForm::new();
        for text in ["R", "T", "D", "L"] {
            type_into(&mut form, text);
            form.move_focus(Direction::Down);
        }
        assert_eq!(
            form.snapshot(),
            DraftIssue {
                title: "T".to_string(),
                description: "D".to_string(),
                labels: "L".to_string(),
                repository: "R".to_string(),
            }
        );
    }
}
