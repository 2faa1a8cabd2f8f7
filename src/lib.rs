//! Termtile Library
//!
//! This library provides core functionality for the Termtile application:
//! the workspace wizard state machine, the terminal grid layout model,
//! and the AppleScript tiling launcher.

// Module declarations
pub mod config;
pub mod constants;
pub mod launcher;
pub mod models;
pub mod scanner;
pub mod tui;
