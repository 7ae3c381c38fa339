use serde::{Deserialize, Serialize};

pub mod form;
pub mod notification;
pub mod profile;
pub mod system;

use form::FormMsg;
use notification::NotificationMsg;
use profile::ProfileMsg;
use system::SystemMsg;

/// Domain messages representing application intent.
/// These are processed by the update function and never carry raw terminal input
/// except where a key is forwarded verbatim to the focused form field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // Process and terminal control (delegated to SystemState)
    System(SystemMsg),

    // Load / edit / save lifecycle of the profile
    Profile(ProfileMsg),

    // Edits inside the open form
    Form(FormMsg),

    // Toast notifications (delegated to NotificationState)
    Notification(NotificationMsg),
}

impl Msg {
    /// Helper to exclude noisy messages from debug logging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::Form(form_msg) => form_msg.is_frequent(),
            _ => false,
        }
    }
}
