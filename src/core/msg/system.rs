use serde::{Deserialize, Serialize};

/// Process and terminal level messages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SystemMsg {
    Quit,
    Suspend,
    Resume,
    Resize(u16, u16),
    /// Runtime failure outside the profile flow, shown on the status line
    ShowError(String),
}
