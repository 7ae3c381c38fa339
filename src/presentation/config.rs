//! UI configuration
//!
//! Keybindings and named styles, both loaded from the config file.

pub mod keybindings;
pub mod styles;

pub use keybindings::{Action, KeyBindings};
pub use styles::Styles;
