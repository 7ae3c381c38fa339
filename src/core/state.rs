use crate::infrastructure::config::Config;

pub mod editor;
pub mod notification;
pub mod store;
pub mod system;

use editor::{EditorState, ViewMode};
use notification::NotificationState;
use store::ProfileStore;
use system::SystemState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Committed profile; written only on a successful fetch or save
    pub store: ProfileStore,
    /// Phase, draft and field errors of the view/edit state machine
    pub editor: EditorState,
    pub notification: NotificationState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    /// Initialize AppState with the given config
    pub fn new_with_config(config: Config) -> Self {
        Self {
            config: ConfigState { config },
            ..Default::default()
        }
    }

    pub fn view_mode(&self) -> ViewMode {
        self.editor.view_mode()
    }

    /// Whether a fetch or save is in flight (drives the busy overlay)
    pub fn is_busy(&self) -> bool {
        self.editor.is_busy()
    }
}
