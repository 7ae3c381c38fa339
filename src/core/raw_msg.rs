use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::{
    core::cmd::RequestId,
    domain::{Profile, ServiceError},
};

/// Raw messages from external sources (terminal, service tasks, timers).
/// These are unprocessed events that the translator turns into domain messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawMsg {
    // System events
    Tick,
    Render,
    Resize(u16, u16),
    Quit,
    Suspend,
    Resume,

    // User input (raw keyboard events)
    Key(KeyEvent),
    Paste(String),

    // Completions of spawned service calls
    ProfileFetched {
        request: RequestId,
        result: Result<Profile, ServiceError>,
    },
    ProfileSaved {
        request: RequestId,
        result: Result<Profile, ServiceError>,
    },

    // Timers
    ToastExpired {
        generation: u64,
    },

    // Runtime status
    Error(String),
}

impl RawMsg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, RawMsg::Tick | RawMsg::Render)
    }
}
