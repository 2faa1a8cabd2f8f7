//! Screen bounds detection.
//!
//! Asks the OS (via an osascript/JXA one-liner) for the frame of the
//! display that contains the frontmost Terminal window. Coordinates use a
//! top-left origin with Y increasing downward, matching what `set bounds`
//! expects. Detection is best-effort; callers fall back to a fixed
//! rectangle on any failure.

use anyhow::{bail, Context, Result};
use std::process::Command;

/// The usable rectangle of one display.
///
/// The menu-bar inset is not applied here; the script generator subtracts
/// it once when dividing rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenBounds {
    /// Left edge
    pub x1: i32,
    /// Top edge
    pub y1: i32,
    /// Right edge
    pub x2: i32,
    /// Bottom edge
    pub y2: i32,
}

impl ScreenBounds {
    /// Fixed rectangle substituted when detection fails.
    #[must_use]
    pub const fn fallback() -> Self {
        Self {
            x1: 0,
            y1: 0,
            x2: 1920,
            y2: 1080,
        }
    }
}

/// JXA snippet printing `x1 y1 x2 y2` of the display containing the
/// frontmost Terminal window, with the origin flipped to top-left.
const JXA_SCREEN_DETECT: &str = r#"
ObjC.import("AppKit");
var term = Application("Terminal");
var b = term.windows[0].bounds();
var winX = b.x, winY = b.y;
var screens = $.NSScreen.screens;
var mainH = screens.objectAtIndex(0).frame.size.height;
var result = "";
for (var i = 0; i < screens.count; i++) {
    var f = screens.objectAtIndex(i).frame;
    var sx = f.origin.x;
    var sy = mainH - f.origin.y - f.size.height;
    var sw = f.size.width;
    var sh = f.size.height;
    if (winX >= sx && winX < sx + sw && winY >= sy && winY < sy + sh) {
        result = Math.round(sx) + " " + Math.round(sy) + " " + Math.round(sx + sw) + " " + Math.round(sy + sh);
        break;
    }
}
result"#;

/// Parses detector output of the form `"x1 y1 x2 y2"`.
fn parse_bounds(output: &str) -> Result<ScreenBounds> {
    let values: Vec<i32> = output
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<_, _>>()
        .with_context(|| format!("unexpected screen detection output: {output:?}"))?;
    let [x1, y1, x2, y2] = values[..] else {
        bail!("unexpected screen detection output: {output:?}");
    };
    Ok(ScreenBounds { x1, y1, x2, y2 })
}

/// Queries the OS for the bounds of the display holding the active
/// Terminal window.
pub fn detect_screen() -> Result<ScreenBounds> {
    let output = Command::new("osascript")
        .args(["-l", "JavaScript", "-e", JXA_SCREEN_DETECT])
        .output()
        .context("Failed to run osascript for screen detection")?;

    if !output.status.success() {
        bail!(
            "screen detection failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    parse_bounds(String::from_utf8_lossy(&output.stdout).trim())
}
