use serde::{Deserialize, Serialize};
use strum::Display;

/// The single user record this application displays and edits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub email: String,
    pub bio: String,
    /// URL of the avatar image. Not editable from the form.
    pub avatar: String,
}

impl Profile {
    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Title => &self.title,
            ProfileField::Email => &self.email,
            ProfileField::Bio => &self.bio,
        }
    }
}

/// Editable fields, in form order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display, Serialize,
    Deserialize,
)]
pub enum ProfileField {
    #[default]
    Name,
    Title,
    Email,
    Bio,
}

impl ProfileField {
    pub const ALL: [ProfileField; 4] = [
        ProfileField::Name,
        ProfileField::Title,
        ProfileField::Email,
        ProfileField::Bio,
    ];

    pub fn next(self) -> Self {
        match self {
            ProfileField::Name => ProfileField::Title,
            ProfileField::Title => ProfileField::Email,
            ProfileField::Email => ProfileField::Bio,
            ProfileField::Bio => ProfileField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ProfileField::Name => ProfileField::Bio,
            ProfileField::Title => ProfileField::Name,
            ProfileField::Email => ProfileField::Title,
            ProfileField::Bio => ProfileField::Email,
        }
    }

    /// Only the bio accepts line breaks; Enter moves focus on the others.
    pub fn is_multiline(self) -> bool {
        matches!(self, ProfileField::Bio)
    }

    pub fn label(self) -> &'static str {
        match self {
            ProfileField::Name => "Name",
            ProfileField::Title => "Title",
            ProfileField::Email => "Email",
            ProfileField::Bio => "Bio",
        }
    }
}

/// Working copy of the editable fields while the form is open.
///
/// A draft is never written back into the committed [`Profile`] directly;
/// [`EditDraft::merge_into`] builds the candidate that is sent to the service,
/// and only the service's answer replaces the stored profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditDraft {
    pub name: String,
    pub title: String,
    pub email: String,
    pub bio: String,
}

impl EditDraft {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            title: profile.title.clone(),
            email: profile.email.clone(),
            bio: profile.bio.clone(),
        }
    }

    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Title => &self.title,
            ProfileField::Email => &self.email,
            ProfileField::Bio => &self.bio,
        }
    }

    pub fn set_field(&mut self, field: ProfileField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ProfileField::Name => self.name = value,
            ProfileField::Title => self.title = value,
            ProfileField::Email => self.email = value,
            ProfileField::Bio => self.bio = value,
        }
    }

    /// Overwrites the four editable fields of `current` with the trimmed draft
    /// values. Everything else, such as the avatar, is kept from `current`.
    pub fn merge_into(&self, current: &Profile) -> Profile {
        Profile {
            name: self.name.trim().to_string(),
            title: self.title.trim().to_string(),
            email: self.email.trim().to_string(),
            bio: self.bio.trim().to_string(),
            ..current.clone()
        }
    }
}
