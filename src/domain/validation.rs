use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::profile::{EditDraft, ProfileField};

pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters.";
pub const INVALID_EMAIL: &str = "Please enter a valid email address.";

const MIN_NAME_CHARS: usize = 2;

lazy_static! {
    #[allow(clippy::unwrap_used)]
    static ref EMAIL_SHAPE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Outcome of validating an [`EditDraft`]: one message per failing field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub field_errors: BTreeMap<ProfileField, String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.field_errors.is_empty()
    }

    pub fn error(&self, field: ProfileField) -> Option<&str> {
        self.field_errors.get(&field).map(String::as_str)
    }
}

/// Checks every rule and collects all failures; a failing name does not
/// prevent the email from being checked.
pub fn validate(draft: &EditDraft) -> ValidationResult {
    let mut field_errors = BTreeMap::new();

    // length is in Unicode scalar values, so one emoji counts as one character
    if draft.name.trim().chars().count() < MIN_NAME_CHARS {
        field_errors.insert(ProfileField::Name, NAME_TOO_SHORT.to_string());
    }

    if !is_email_shaped(draft.email.trim()) {
        field_errors.insert(ProfileField::Email, INVALID_EMAIL.to_string());
    }

    ValidationResult { field_errors }
}

pub fn is_email_shaped(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}
