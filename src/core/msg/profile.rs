use serde::{Deserialize, Serialize};

use crate::{
    core::cmd::RequestId,
    domain::{Profile, ServiceError},
};

/// Messages driving the view/edit state machine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProfileMsg {
    /// Fetch the profile (startup, or a reload from the viewing screen)
    LoadRequested,
    /// Result of the fetch issued under `request`
    Loaded {
        request: RequestId,
        result: Result<Profile, ServiceError>,
    },
    /// Open the edit form
    EditRequested,
    /// Close the edit form and drop the draft
    EditCancelled,
    /// Validate the draft and save it if valid
    SubmitRequested,
    /// Result of the save issued under `request`
    Saved {
        request: RequestId,
        result: Result<Profile, ServiceError>,
    },
}
