//! Integration tests for tiling script generation.
//!
//! These exercise the full path traced by a launch: per-row shell command
//! composition, both escaping layers, and the cell geometry of the emitted
//! AppleScript.

use termtile::launcher::screen::ScreenBounds;
use termtile::launcher::script::{applescript_escape, build_tiling_script, shell_quote};

fn bounds() -> ScreenBounds {
    // 1920x1105 screen so the usable height (minus the 25px menu bar) is
    // exactly 1080 and halves cleanly
    ScreenBounds {
        x1: 0,
        y1: 0,
        x2: 1920,
        y2: 1105,
    }
}

#[test]
fn test_single_project_two_by_two() {
    let cmd = format!("cd {} && clear && editor", shell_quote("/work/app"));
    let script = build_tiling_script(&bounds(), &[2, 2], &[cmd.clone(), cmd]).unwrap();

    // Four cell placements, each running the same row command
    assert_eq!(script.matches("set bounds of window 1 to").count(), 4);
    assert_eq!(
        script
            .matches("do script \"cd '/work/app' && clear && editor\"")
            .count(),
        4
    );

    // Menu-bar inset applied once: row 0 is the top half band (y 25..565),
    // row 1 the bottom half (y 565..1105)
    assert!(script.contains("{0, 25, 960, 565}"));
    assert!(script.contains("{960, 25, 1920, 565}"));
    assert!(script.contains("{0, 565, 960, 1105}"));
    assert!(script.contains("{960, 565, 1920, 1105}"));
}

#[test]
fn test_split_mode_rows_use_their_own_project_and_tool() {
    let top = format!("cd {} && clear", shell_quote("/work/api"));
    let bottom = format!("cd {} && clear && fmt", shell_quote("/work/ui"));
    let script = build_tiling_script(&bounds(), &[3, 3], &[top, bottom]).unwrap();

    assert_eq!(
        script.matches("do script \"cd '/work/api' && clear\"").count(),
        3
    );
    assert_eq!(
        script
            .matches("do script \"cd '/work/ui' && clear && fmt\"")
            .count(),
        3
    );
}

#[test]
fn test_asymmetric_rows_get_different_cell_widths() {
    let cmd = "cd '/work/app' && clear".to_string();
    let script = build_tiling_script(&bounds(), &[3, 4], &[cmd.clone(), cmd]).unwrap();

    // Top row cells are 640 wide, bottom row cells 480 wide
    assert!(script.contains("{0, 25, 640, 565}"));
    assert!(script.contains("{0, 565, 480, 1105}"));
    assert_eq!(script.matches("do script").count(), 7);
}

#[test]
fn test_adversarial_path_survives_both_escaping_layers() {
    let nasty = r#"/work/bob's "special" \files"#;
    let cmd = format!("cd {} && clear", shell_quote(nasty));

    // Layer 1: the single quote is closed, escaped, and reopened
    assert!(cmd.contains(r"bob'\''s"));

    let script = build_tiling_script(&bounds(), &[1], &[cmd]).unwrap();

    // Layer 2: the AppleScript literal escapes backslashes and quotes
    assert!(script.contains(r#"\"special\""#));
    assert!(script.contains(r"\\files"));

    // The do script line still ends in a properly closed literal
    let line = script
        .lines()
        .find(|l| l.contains("do script"))
        .expect("script should contain a do script line");
    let inner = line
        .trim()
        .strip_prefix("do script \"")
        .and_then(|l| l.strip_suffix('"'))
        .expect("do script argument should be one string literal");
    let stripped = inner.replace("\\\\", "").replace("\\\"", "");
    assert!(!stripped.contains('"'), "literal broken by {inner:?}");
    assert!(!stripped.contains('\\'), "stray backslash in {inner:?}");
}

#[test]
fn test_escaping_layers_compose_in_order() {
    // Quoting first, then escaping: the shell-quote escapes survive as
    // AppleScript-escaped text
    let quoted = shell_quote(r"a\b");
    assert_eq!(quoted, r"'a\b'");
    assert_eq!(applescript_escape(&quoted), r"'a\\b'");
}

#[test]
fn test_row_command_mismatch_is_rejected() {
    let cmd = "cd '/a' && clear".to_string();
    assert!(build_tiling_script(&bounds(), &[2, 2], &[cmd]).is_err());
    let cmd = "cd '/a' && clear".to_string();
    assert!(build_tiling_script(&bounds(), &[2], &[cmd.clone(), cmd]).is_err());
}

#[test]
fn test_script_preamble_and_delays() {
    let cmd = "cd '/a' && clear".to_string();
    let script = build_tiling_script(&bounds(), &[2], &[cmd]).unwrap();

    // Terminal is activated before any window is opened, and each window
    // gets a settle delay before it is repositioned
    let activate = script.find("activate").unwrap();
    let first_open = script.find("do script").unwrap();
    assert!(activate < first_open);
    assert_eq!(script.matches("delay 0.3").count(), 2);
    assert!(script.contains("delay 0.5"));
}
