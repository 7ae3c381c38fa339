//! Presentation layer
//!
//! Pure rendering of `AppState`:
//! - Components (profile card, edit form, status bar)
//! - Reusable widgets
//! - Configuration (styles, keybindings)

pub mod components;
pub mod config;
pub mod widgets;
