//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - TUI foundation
//! - CLI argument processing
//! - Configuration loading
//! - The remote profile service

pub mod cli;
pub mod config;
pub mod profile_service;
pub mod tui;
