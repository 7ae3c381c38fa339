//! # profui - terminal profile editor
//!
//! Displays a user profile, switches into an edit form, validates input and
//! persists changes through an asynchronous remote service.
//!
//! ## Architecture Overview
//!
//! This crate is organized around the Elm architecture pattern:
//!
//! - **Model** (`core::state`): application state, owned by the runtime
//! - **Message** (`core::msg`): events that can change the state
//! - **Update** (`core::update`): pure function from message and state to new state and commands
//! - **Command** (`core::cmd`): side effects (service calls, timers, terminal)
//! - **View** (`presentation`): rendering based on current state
//!
//! ## Example Usage
//!
//! ```rust
//! use profui::core::{
//!     cmd::Cmd,
//!     msg::{profile::ProfileMsg, Msg},
//!     state::AppState,
//!     update::update,
//! };
//!
//! let state = AppState::default();
//! let (state, commands) = update(Msg::Profile(ProfileMsg::LoadRequested), state);
//!
//! // the fetch is now in flight and the executor is asked to run it
//! assert!(state.is_busy());
//! assert!(matches!(commands[0], Cmd::FetchProfile { .. }));
//! ```
//!
//! ## Modules
//!
//! - [`domain`] - Profile entity, validation, error kinds
//! - [`core`] - State machine, messages, commands
//! - [`infrastructure`] - Config, CLI, terminal, profile service
//! - [`integration`] - Runtime and event loop
//! - [`presentation`] - Components and widgets
//! - [`utils`] - Logging, panic handling, paths

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

pub use crate::core::{cmd::Cmd, msg::Msg, state::AppState, update::update};
pub use crate::domain::{validate, Profile, ProfileField, ValidationResult};

/// Crate-wide result type for startup and infrastructure code
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
