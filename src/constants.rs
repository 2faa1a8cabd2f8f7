//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and layout limits.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Termtile";

/// The binary name of the application (used in command examples and config paths).
pub const APP_BINARY_NAME: &str = "termtile";

/// Maximum number of terminals a single layout may open.
pub const MAX_TERMINALS: u32 = 20;

/// Vertical inset reserved for the macOS menu bar, in pixels.
///
/// Subtracted once from the usable screen height before rows are divided.
pub const MENU_BAR_HEIGHT: i32 = 25;
