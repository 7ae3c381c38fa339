use crossterm::event::KeyEvent;

use crate::domain::ui::CursorPosition;

/// Snapshot of the focused form field: its text and where the cursor sits.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextAreaState {
    pub content: String,
    pub cursor_position: CursorPosition,
}

impl TextAreaState {
    pub fn new(content: impl Into<String>, cursor_position: CursorPosition) -> Self {
        Self {
            content: content.into(),
            cursor_position,
        }
    }
}

/// Engine interface that applies a sequence of key events to a textarea snapshot
/// and returns the resulting snapshot. Implementations must be deterministic
/// and free of external side effects so they can run inside `update`.
pub trait TextAreaEngine {
    fn apply_keys(&self, snapshot: &TextAreaState, keys: &[KeyEvent]) -> TextAreaState;
}
