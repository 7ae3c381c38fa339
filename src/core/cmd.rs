use serde::{Deserialize, Serialize};

use crate::domain::Profile;

/// Identifies one fetch or save. Results carrying an id other than the one
/// currently in flight are stale and get dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(pub u64);

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    Resize { width: u16, height: u16 },
}

/// Elm-like command definitions
/// Represents side effects requested by the update function. Cmd captures
/// intent only; the executor decides how it is carried out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    // Remote profile service
    FetchProfile {
        request: RequestId,
    },
    SaveProfile {
        request: RequestId,
        candidate: Profile,
    },

    // Timers
    ScheduleToastDismiss {
        generation: u64,
        after_ms: u64,
    },

    // UI-related commands
    Tui(TuiCommand),
}

impl Cmd {
    /// Whether the command is carried out by a spawned task
    pub fn is_async(&self) -> bool {
        match self {
            Cmd::FetchProfile { .. }
            | Cmd::SaveProfile { .. }
            | Cmd::ScheduleToastDismiss { .. } => true,
            Cmd::Tui(..) => false,
        }
    }

    /// Human-readable name for logs
    pub fn name(&self) -> String {
        match self {
            Cmd::FetchProfile { request } => format!("FetchProfile(#{})", request.0),
            Cmd::SaveProfile { request, .. } => format!("SaveProfile(#{})", request.0),
            Cmd::ScheduleToastDismiss { generation, .. } => {
                format!("ScheduleToastDismiss({generation})")
            }
            Cmd::Tui(TuiCommand::Resize { .. }) => "Tui(Resize)".to_string(),
        }
    }
}
