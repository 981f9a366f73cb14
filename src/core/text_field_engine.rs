use crossterm::event::KeyEvent;

use crate::core::state::form::TextFieldState;

/// Engine interface that applies a sequence of key events to a single-line text field
/// snapshot and returns the resulting snapshot. Implementations must be deterministic and
/// free of external side effects so they can be called from the pure update path.
pub trait TextFieldEngine {
    fn apply_keys(&self, snapshot: &TextFieldState, keys: &[KeyEvent]) -> TextFieldState;
}

/// No-op engine used for tests or when no editing should occur.
pub struct NoopTextFieldEngine;

impl TextFieldEngine for NoopTextFieldEngine {
    fn apply_keys(&self, snapshot: &TextFieldState, _keys: &[KeyEvent]) -> TextFieldState {
        snapshot.clone()
    }
}
