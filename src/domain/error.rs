use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure reported by a [`RemoteProfileService`](crate::infrastructure::profile_service::RemoteProfileService).
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ServiceError {
    #[error("Network error: {0}")]
    Network(String),
    /// The server rejected the request. The message is shown to the user as-is.
    #[error("{0}")]
    Server(String),
    #[error("Request timed out after {after_ms}ms")]
    Timeout { after_ms: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("profile has not been loaded yet")]
    NotReady,
}
