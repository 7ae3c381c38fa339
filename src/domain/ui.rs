use serde::{Deserialize, Serialize};

/// Cursor position inside a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CursorPosition {
    pub line: usize,
    pub column: usize,
}

impl CursorPosition {
    /// Position just after the last character of `text`.
    pub fn end_of(text: &str) -> Self {
        // `lines()` drops a trailing empty line, so count separators instead
        let line = text.matches('\n').count();
        let column = text
            .rsplit('\n')
            .next()
            .map(|last| last.chars().count())
            .unwrap_or(0);
        Self { line, column }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_of() {
        assert_eq!(CursorPosition::end_of(""), CursorPosition::default());
        assert_eq!(
            CursorPosition::end_of("Jane"),
            CursorPosition { line: 0, column: 4 }
        );
        assert_eq!(
            CursorPosition::end_of("ab\ncdé"),
            CursorPosition { line: 1, column: 3 }
        );
        assert_eq!(
            CursorPosition::end_of("ab\n"),
            CursorPosition { line: 1, column: 0 }
        );
    }
}
