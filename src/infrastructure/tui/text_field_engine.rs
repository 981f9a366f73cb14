use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::{CursorMove, TextArea};

use crate::core::{state::form::TextFieldState, text_field_engine::TextFieldEngine};

/// Production engine based on tui-textarea. It constructs a temporary TextArea,
/// hydrates it from the given snapshot, applies keys, then extracts the new snapshot.
///
/// Form fields are single-line, so keys that would split the line are dropped.
pub struct TuiTextFieldEngine;

impl TuiTextFieldEngine {
    fn restore_textarea_from_snapshot(textarea: &mut TextArea<'_>, snapshot: &TextFieldState) {
        if !snapshot.content.is_empty() {
            textarea.insert_str(&snapshot.content);
        }
        let column = u16::try_from(snapshot.cursor).unwrap_or(u16::MAX);
        textarea.move_cursor(CursorMove::Jump(0, column));
    }

    fn inserts_newline(key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::Enter)
            || (key.modifiers.contains(KeyModifiers::CONTROL)
                && matches!(key.code, KeyCode::Char('m') | KeyCode::Char('j')))
    }
}

impl TextFieldEngine for TuiTextFieldEngine {
    fn apply_keys(&self, snapshot: &TextFieldState, keys: &[KeyEvent]) -> TextFieldState {
        let mut textarea = TextArea::default();
        Self::restore_textarea_from_snapshot(&mut textarea, snapshot);
        for key in keys.iter().filter(|key| !Self::inserts_newline(key)) {
            textarea.input(Event::Key(*key));
        }
        let content = textarea.lines().join(" ");
        let (_, column) = textarea.cursor();
        TextFieldState::new(content, column)
    }
}
