//! Form field value objects

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A single editable line of text with its cursor and focus flag.
///
/// Focus is owned by [`super::IssueForm`]; a field never focuses itself.
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    value: String,
    /// Cursor position in characters, `0..=value.chars().count()`
    cursor: usize,
    focused: bool,
}

impl FormField {
    /// Create a new empty text field
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: String::new(),
            cursor: 0,
            focused: false,
        }
    }

    /// Get the text value
    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub(super) fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Apply a text-editing key. Returns false when the key is not an edit.
    pub fn apply_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.insert_char(c);
                true
            }
            KeyCode::Backspace => {
                self.backspace();
                true
            }
            KeyCode::Delete => {
                self.delete();
                true
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                true
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.char_count());
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = self.char_count();
                true
            }
            _ => false,
        }
    }

    /// Insert a character at the cursor
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Remove the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let at = self.byte_offset(self.cursor - 1);
        self.value.remove(at);
        self.cursor -= 1;
    }

    /// Remove the character under the cursor
    pub fn delete(&mut self) {
        if self.cursor >= self.char_count() {
            return;
        }
        let at = self.byte_offset(self.cursor);
        self.value.remove(at);
    }

    /// Get the display value split around the cursor for rendering
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.value.split_at(self.byte_offset(self.cursor))
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }
}
