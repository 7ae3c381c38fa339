//! Edit form
//!
//! One input box per editable field. Field errors from the last submit are
//! shown under their box. While a save is in flight the form stays visible
//! but read-only and no cursor is placed.

use ratatui::{prelude::*, widgets::*};
use unicode_width::UnicodeWidthStr;

use crate::{
    core::state::{editor::Phase, AppState},
    domain::ProfileField,
    presentation::widgets::{profile_field::FieldStyles, ProfileFieldWidget},
};

/// Rows a single-line field takes: box plus error line
const SINGLE_LINE_HEIGHT: u16 = 4;
const BIO_MIN_HEIGHT: u16 = 6;

#[derive(Debug, Clone, Default)]
pub struct ProfileFormComponent;

impl ProfileFormComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let Some(draft) = state.editor.draft.as_ref() else {
            return;
        };
        let styles = &state.config.config.styles;
        let read_only = state.editor.phase == Phase::Saving;

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(Span::styled(" Edit profile ", styles.style("title")));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let field_styles = FieldStyles {
            label: styles.style("label"),
            value: styles.style("value"),
            focused: styles.style("focused"),
            error: styles.style("error"),
        };

        for (field, field_area) in ProfileField::ALL.into_iter().zip(Self::layout(inner).iter()) {
            let focused = field == state.editor.focus;
            let widget = ProfileFieldWidget::new(field.label(), draft.field(field), field_styles)
                .error(state.editor.error(field))
                .focused(focused)
                .read_only(read_only);
            frame.render_widget(widget, *field_area);

            if focused && !read_only {
                if let Some(position) = Self::cursor_position(state, *field_area) {
                    frame.set_cursor_position(position);
                }
            }
        }
    }

    /// Areas for the fields in form order
    pub fn layout(area: Rect) -> [Rect; 4] {
        Layout::vertical([
            Constraint::Length(SINGLE_LINE_HEIGHT),
            Constraint::Length(SINGLE_LINE_HEIGHT),
            Constraint::Length(SINGLE_LINE_HEIGHT),
            Constraint::Min(BIO_MIN_HEIGHT),
        ])
        .areas(area)
    }

    /// Terminal cell of the text cursor inside the focused field's box
    pub fn cursor_position(state: &AppState, field_area: Rect) -> Option<Position> {
        let text = state.editor.focused_text()?;
        let cursor = state.editor.cursor;
        let (input_area, _) = ProfileFieldWidget::split(field_area);
        if input_area.width < 3 || input_area.height < 3 {
            return None;
        }

        let line = text.split('\n').nth(cursor.line).unwrap_or_default();
        let before: String = line.chars().take(cursor.column).collect();
        let column = u16::try_from(before.width()).unwrap_or(u16::MAX);
        let row = u16::try_from(cursor.line).unwrap_or(u16::MAX);

        let max_x = input_area.x + input_area.width - 2;
        let max_y = input_area.y + input_area.height - 2;
        Some(Position::new(
            (input_area.x + 1).saturating_add(column).min(max_x),
            (input_area.y + 1).saturating_add(row).min(max_y),
        ))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::{domain::Profile, infrastructure::config::Config};

    fn editing_state() -> AppState {
        let mut state = AppState::new_with_config(Config::default());
        let profile = Profile {
            name: "Jane Doe".into(),
            title: "Senior Frontend Developer".into(),
            email: "jane.doe@example.com".into(),
            bio: "Hello".into(),
            avatar: String::new(),
        };
        state.store.replace(profile.clone());
        state.editor.begin_editing(&profile);
        state
    }

    fn render(state: &AppState) -> (Vec<String>, Position) {
        let mut terminal = Terminal::new(TestBackend::new(40, 24)).expect("terminal");
        terminal
            .draw(|f| ProfileFormComponent::new().view(state, f, f.area()))
            .expect("draw");
        let rows = terminal
            .backend()
            .buffer()
            .content()
            .chunks(40)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect();
        let cursor = terminal.get_cursor_position().expect("cursor");
        (rows, cursor)
    }

    #[test]
    fn test_renders_draft_values() {
        let (rows, _) = render(&editing_state());

        assert!(rows[1].contains("Name"));
        assert!(rows[2].contains("Jane Doe"));
        assert!(rows[6].contains("Senior Frontend Developer"));
        assert!(rows[10].contains("jane.doe@example.com"));
        assert!(rows[14].contains("Hello"));
    }

    #[test]
    fn test_error_lines_under_fields() {
        let mut state = editing_state();
        state
            .editor
            .field_errors
            .field_errors
            .insert(ProfileField::Email, "Please enter a valid email address.".into());

        let (rows, _) = render(&state);

        assert!(rows[12].contains("Please enter a valid email address."));
        assert!(!rows[4].contains("Please"));
    }

    #[test]
    fn test_cursor_sits_after_focused_text() {
        let (_, cursor) = render(&editing_state());
        // outer border + field border + "Jane Doe"
        assert_eq!(cursor, Position::new(10, 2));
    }

    #[test]
    fn test_cursor_is_clamped_to_box() {
        let mut state = editing_state();
        state.editor.cursor.column = 500;
        let area = Rect::new(0, 0, 12, 4);
        assert_eq!(
            ProfileFormComponent::cursor_position(&state, area),
            Some(Position::new(10, 1))
        );
    }
}
