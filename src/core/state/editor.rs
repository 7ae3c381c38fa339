use serde::{Deserialize, Serialize};

use crate::{
    core::cmd::RequestId,
    domain::{ui::CursorPosition, EditDraft, Profile, ProfileField, ValidationResult},
};

/// Phase of the view/edit state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// A fetch is in flight (startup or reload)
    #[default]
    Loading,
    Viewing,
    Editing,
    /// A save is in flight; the form stays on screen but is read-only
    Saving,
}

/// Which surface is on screen. Also selects the keybinding table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    #[serde(alias = "viewing")]
    Viewing,
    #[serde(alias = "editing")]
    Editing,
}

/// State owned by the view controller
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    pub phase: Phase,
    /// Present while the form is open (Editing and Saving)
    pub draft: Option<EditDraft>,
    /// Result of the last submit; cleared when the form opens
    pub field_errors: ValidationResult,
    pub focus: ProfileField,
    /// Cursor within the focused field
    pub cursor: CursorPosition,
    in_flight: Option<RequestId>,
    last_request: u64,
}

impl EditorState {
    pub fn view_mode(&self) -> ViewMode {
        match self.phase {
            Phase::Loading | Phase::Viewing => ViewMode::Viewing,
            Phase::Editing | Phase::Saving => ViewMode::Editing,
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, Phase::Loading | Phase::Saving)
    }

    pub fn is_editing(&self) -> bool {
        self.phase == Phase::Editing
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    /// Allocates a fresh request id and marks it as the one in flight.
    pub fn issue_request(&mut self) -> RequestId {
        self.last_request += 1;
        let request = RequestId(self.last_request);
        self.in_flight = Some(request);
        request
    }

    /// Clears the in-flight marker if `request` is the one in flight.
    /// Returns false for stale or unknown results.
    pub fn settle(&mut self, request: RequestId) -> bool {
        if self.in_flight == Some(request) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }

    /// Opens the form on a copy of `profile`.
    pub fn begin_editing(&mut self, profile: &Profile) {
        let draft = EditDraft::from_profile(profile);
        self.focus = ProfileField::Name;
        self.cursor = CursorPosition::end_of(draft.field(self.focus));
        self.draft = Some(draft);
        self.field_errors = ValidationResult::default();
        self.phase = Phase::Editing;
    }

    /// Closes the form and drops the draft.
    pub fn finish_editing(&mut self) {
        self.draft = None;
        self.field_errors = ValidationResult::default();
        self.cursor = CursorPosition::default();
        self.focus = ProfileField::Name;
        self.phase = Phase::Viewing;
    }

    pub fn focus_field(&mut self, field: ProfileField) {
        self.focus = field;
        self.cursor = self
            .draft
            .as_ref()
            .map(|draft| CursorPosition::end_of(draft.field(field)))
            .unwrap_or_default();
    }

    pub fn focused_text(&self) -> Option<&str> {
        self.draft.as_ref().map(|draft| draft.field(self.focus))
    }

    pub fn error(&self, field: ProfileField) -> Option<&str> {
        self.field_errors.error(field)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn profile() -> Profile {
        Profile {
            name: "Jane Doe".into(),
            title: "Dev".into(),
            email: "jane@example.com".into(),
            bio: "Hi".into(),
            avatar: "https://example.com/a.svg".into(),
        }
    }

    #[test]
    fn test_view_mode_follows_phase() {
        let mut editor = EditorState::default();
        assert_eq!(editor.view_mode(), ViewMode::Viewing);
        assert!(editor.is_busy());

        editor.phase = Phase::Viewing;
        assert_eq!(editor.view_mode(), ViewMode::Viewing);
        assert!(!editor.is_busy());

        editor.phase = Phase::Editing;
        assert_eq!(editor.view_mode(), ViewMode::Editing);
        assert!(!editor.is_busy());

        editor.phase = Phase::Saving;
        assert_eq!(editor.view_mode(), ViewMode::Editing);
        assert!(editor.is_busy());
    }

    #[test]
    fn test_request_ids_are_unique_and_settle_once() {
        let mut editor = EditorState::default();
        let first = editor.issue_request();
        let second = editor.issue_request();

        assert_ne!(first, second);
        assert_eq!(editor.in_flight(), Some(second));
        // the superseded request is stale
        assert!(!editor.settle(first));
        assert!(editor.settle(second));
        assert!(!editor.settle(second));
        assert_eq!(editor.in_flight(), None);
    }

    #[test]
    fn test_begin_editing_copies_profile_and_resets_errors() {
        let mut editor = EditorState::default();
        editor
            .field_errors
            .field_errors
            .insert(ProfileField::Name, "stale".into());

        editor.begin_editing(&profile());

        assert_eq!(editor.phase, Phase::Editing);
        assert_eq!(editor.draft, Some(EditDraft::from_profile(&profile())));
        assert!(editor.field_errors.is_valid());
        assert_eq!(editor.focus, ProfileField::Name);
        assert_eq!(editor.cursor, CursorPosition { line: 0, column: 8 });
    }

    #[test]
    fn test_focus_moves_cursor_to_end_of_field() {
        let mut editor = EditorState::default();
        editor.begin_editing(&profile());

        editor.focus_field(ProfileField::Email);

        assert_eq!(editor.focused_text(), Some("jane@example.com"));
        assert_eq!(editor.cursor, CursorPosition { line: 0, column: 16 });
    }

    #[test]
    fn test_finish_editing_drops_draft() {
        let mut editor = EditorState::default();
        editor.begin_editing(&profile());

        editor.finish_editing();

        assert_eq!(editor.phase, Phase::Viewing);
        assert!(editor.draft.is_none());
        assert!(editor.focused_text().is_none());
    }
}
