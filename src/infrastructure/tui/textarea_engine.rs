use crossterm::event::{Event, KeyEvent};
use tui_textarea::{CursorMove, TextArea};

use crate::core::textarea_engine::{TextAreaEngine, TextAreaState};
use crate::domain::ui::CursorPosition;

/// Production engine based on tui-textarea. Each call builds a scratch TextArea
/// from the snapshot, feeds it the keys and reads the result back.
#[derive(Debug, Default, Clone, Copy)]
pub struct TuiTextAreaEngine;

impl TuiTextAreaEngine {
    fn restore(snapshot: &TextAreaState) -> TextArea<'static> {
        let mut textarea = TextArea::from(snapshot.content.split('\n'));
        textarea.move_cursor(CursorMove::Jump(
            clamp_u16(snapshot.cursor_position.line),
            clamp_u16(snapshot.cursor_position.column),
        ));
        textarea
    }

    fn extract_cursor_position(textarea: &TextArea<'_>) -> CursorPosition {
        let (line, column) = textarea.cursor();
        CursorPosition { line, column }
    }
}

fn clamp_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

impl TextAreaEngine for TuiTextAreaEngine {
    fn apply_keys(&self, snapshot: &TextAreaState, keys: &[KeyEvent]) -> TextAreaState {
        let mut textarea = Self::restore(snapshot);
        for key in keys {
            textarea.input(Event::Key(*key));
        }
        let content = textarea.lines().join("\n");
        let cursor = Self::extract_cursor_position(&textarea);
        TextAreaState::new(content, cursor)
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn applies_basic_editing_with_left_and_char() {
        let engine = TuiTextAreaEngine;
        let snap = TextAreaState::new("ab", CursorPosition { line: 0, column: 2 });

        let out = engine.apply_keys(&snap, &[key(KeyCode::Left), key(KeyCode::Char('X'))]);

        assert_eq!(out.content, "aXb");
        assert_eq!(out.cursor_position, CursorPosition { line: 0, column: 2 });
        // original untouched
        assert_eq!(snap.content, "ab");
    }

    #[test]
    fn applies_backspace_at_end() {
        let engine = TuiTextAreaEngine;
        let snap = TextAreaState::new("Jane", CursorPosition { line: 0, column: 4 });

        let out = engine.apply_keys(&snap, &[key(KeyCode::Backspace)]);

        assert_eq!(out.content, "Jan");
        assert_eq!(out.cursor_position, CursorPosition { line: 0, column: 3 });
    }

    #[test]
    fn enter_splits_lines() {
        let engine = TuiTextAreaEngine;
        let snap = TextAreaState::new("one\ntwo", CursorPosition { line: 1, column: 3 });

        let out = engine.apply_keys(&snap, &[key(KeyCode::Enter), key(KeyCode::Char('3'))]);

        assert_eq!(out.content, "one\ntwo\n3");
        assert_eq!(out.cursor_position, CursorPosition { line: 2, column: 1 });
    }

    #[test]
    fn empty_snapshot() {
        let engine = TuiTextAreaEngine;
        let out = engine.apply_keys(&TextAreaState::default(), &[key(KeyCode::Char('a'))]);
        assert_eq!(out, TextAreaState::new("a", CursorPosition { line: 0, column: 1 }));
    }
}
