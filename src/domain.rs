//! Domain layer
//!
//! Plain data and pure rules with no knowledge of the terminal or the runtime:
//! - The profile entity and its edit draft
//! - Form validation
//! - Error kinds shared across layers

pub mod error;
pub mod profile;
pub mod ui;
pub mod validation;

pub use error::{ServiceError, StoreError};
pub use profile::{EditDraft, Profile, ProfileField};
pub use validation::{validate, ValidationResult};
