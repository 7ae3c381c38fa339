use serde::{Deserialize, Serialize};

use crate::core::state::notification::Notification;

/// Messages specific to NotificationState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NotificationMsg {
    Show(Notification),
    /// The dismiss timer scheduled for `generation` fired
    Expired { generation: u64 },
}
