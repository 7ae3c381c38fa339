use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::domain::ProfileField;

/// Edits applied to the open form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FormMsg {
    FocusNext,
    FocusPrev,
    Focus(ProfileField),
    /// Forward a key to the focused field's text area
    ProcessTextAreaInput(KeyEvent),
    /// Insert text at the cursor of the focused field
    InsertText(String),
    /// Replace a field's value wholesale
    SetField(ProfileField, String),
}

impl FormMsg {
    pub fn is_frequent(&self) -> bool {
        matches!(self, FormMsg::ProcessTextAreaInput(_))
    }
}
