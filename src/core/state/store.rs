use crate::domain::{Profile, StoreError};

/// Holds the one committed profile.
///
/// Empty until the first successful fetch. Writes are whole-profile
/// replacements; there is no partial merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileStore {
    current: Option<Profile>,
}

impl ProfileStore {
    pub fn get(&self) -> Result<&Profile, StoreError> {
        self.current.as_ref().ok_or(StoreError::NotReady)
    }

    pub fn replace(&mut self, profile: Profile) {
        self.current = Some(profile);
    }

    pub fn is_ready(&self) -> bool {
        self.current.is_some()
    }
}
