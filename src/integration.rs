//! Integration layer
//!
//! Wires the pure core to the outside world:
//! - Runtime (message queues, update cycle, command execution)
//! - App runner (terminal event loop)
//! - Renderer

pub mod app_runner;
pub mod renderer;
pub mod runtime;
