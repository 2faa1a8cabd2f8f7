//! AppleScript tiling script generation.
//!
//! Given screen bounds, a per-row column-count sequence, and one shell
//! command per row, this module emits an AppleScript that opens one
//! Terminal window per grid cell, runs the row's command in it, and moves
//! it into its cell rectangle.
//!
//! Every command crosses two quoting boundaries on its way to the shell:
//! single-quoting of path segments (so the directory survives as one shell
//! token) and AppleScript string-literal escaping (so the command survives
//! as one `do script` argument). The two layers are separate functions and
//! are composed in that fixed order; see [`shell_quote`] and
//! [`applescript_escape`].

use anyhow::{bail, Result};
use std::fmt::Write as _;

use crate::constants::MENU_BAR_HEIGHT;
use crate::launcher::screen::ScreenBounds;

/// Wraps a string in single quotes for safe shell embedding.
///
/// Embedded single quotes are rendered as `'\''` (close quote, escaped
/// quote, reopen quote), which the shell rejoins into one token.
#[must_use]
pub fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}

/// Escapes a string for embedding inside an AppleScript string literal.
///
/// Backslashes must be doubled before quotes are escaped, or the escape
/// characters themselves would be re-escaped.
#[must_use]
pub fn applescript_escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// One terminal cell's pixel rectangle, `(x1, y1, x2, y2)`.
type CellRect = (i32, i32, i32, i32);

/// Computes the rectangle of cell `(row, col)` within the screen bounds.
///
/// The menu-bar inset is applied once to the top of the usable area. Height
/// splits evenly across rows; width splits evenly across the row's columns,
/// so cell width varies between rows with different column counts.
fn cell_rect(bounds: &ScreenBounds, num_rows: usize, row: usize, cols: u32, col: u32) -> CellRect {
    let cell_w = f64::from(bounds.x2 - bounds.x1) / f64::from(cols);
    let cell_h =
        f64::from(bounds.y2 - bounds.y1 - MENU_BAR_HEIGHT) / num_rows as f64;
    let top = bounds.y1 + MENU_BAR_HEIGHT;

    let x1 = f64::from(bounds.x1) + f64::from(col) * cell_w;
    let x2 = f64::from(bounds.x1) + f64::from(col + 1) * cell_w;
    let y1 = f64::from(top) + row as f64 * cell_h;
    let y2 = f64::from(top) + (row + 1) as f64 * cell_h;

    (
        x1.round() as i32,
        y1.round() as i32,
        x2.round() as i32,
        y2.round() as i32,
    )
}

/// Builds the tiling AppleScript.
///
/// `term_cmds` holds one shell command per row; it must have exactly one
/// entry per entry of `row_cols`. The script activates Terminal, then for
/// each cell runs the row's command in a new window, waits briefly for the
/// window to materialize, and resizes "window 1" (the newest window) into
/// the cell rectangle.
pub fn build_tiling_script(
    bounds: &ScreenBounds,
    row_cols: &[u32],
    term_cmds: &[String],
) -> Result<String> {
    if row_cols.is_empty() {
        bail!("layout has no rows");
    }
    if term_cmds.len() != row_cols.len() {
        bail!(
            "expected {} row commands, got {}",
            row_cols.len(),
            term_cmds.len()
        );
    }
    if let Some(&cols) = row_cols.iter().find(|&&cols| cols < 1) {
        bail!("invalid row column count: {cols}");
    }

    let mut script = String::from(
        "tell application \"Terminal\"\n\
         \tactivate\n\
         end tell\n\
         \n\
         delay 0.5\n\
         \n\
         tell application \"Terminal\"\n",
    );

    let num_rows = row_cols.len();
    for (row, (&cols, cmd)) in row_cols.iter().zip(term_cmds).enumerate() {
        let escaped = applescript_escape(cmd);
        for col in 0..cols {
            let (x1, y1, x2, y2) = cell_rect(bounds, num_rows, row, cols, col);
            let _ = writeln!(script, "\tdo script \"{escaped}\"");
            let _ = writeln!(script, "\tdelay 0.3");
            let _ = writeln!(
                script,
                "\tset bounds of window 1 to {{{x1}, {y1}, {x2}, {y2}}}"
            );
        }
    }

    script.push_str("end tell\n");

    Ok(script)
}
