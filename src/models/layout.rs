//! Terminal grid layout model.
//!
//! A layout is an ordered sequence of row column-counts: `[3, 4]` means a
//! top row of three terminals above a bottom row of four. The identifier is
//! the sequence joined with commas ("3,4"); an older `ColsxRows` encoding
//! for uniform grids is migrated forward on read.

use anyhow::{bail, Result};

use crate::config::Config;
use crate::constants::MAX_TERMINALS;

/// Display name of the sentinel list entry that opens the custom-layout
/// input field instead of selecting a concrete layout.
pub const CUSTOM_ENTRY_NAME: &str = "Custom...";

/// A terminal grid layout.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Layout {
    /// Display name (e.g. "6 terminals")
    pub name: String,
    /// Column count per row, top to bottom
    pub row_cols: Vec<u32>,
    /// Bracket-grid description (e.g. "[ ][ ][ ] / [ ][ ][ ]")
    pub desc: String,
    /// True for layouts entered through the custom-layout field
    pub custom: bool,
}

impl Layout {
    /// Creates a built-in layout from a name and row sequence.
    fn builtin(name: &str, row_cols: Vec<u32>) -> Self {
        let desc = generate_desc(&row_cols);
        Self {
            name: name.to_string(),
            row_cols,
            desc,
            custom: false,
        }
    }

    /// Creates a custom layout from a parsed row sequence.
    ///
    /// The name is derived from the identifier ("Custom 3,4").
    #[must_use]
    pub fn custom(row_cols: Vec<u32>) -> Self {
        let desc = generate_desc(&row_cols);
        let name = format!("Custom {}", id(&row_cols));
        Self {
            name,
            row_cols,
            desc,
            custom: true,
        }
    }

    /// The sentinel entry that opens the custom-layout input field.
    #[must_use]
    pub fn custom_entry() -> Self {
        Self {
            name: CUSTOM_ENTRY_NAME.to_string(),
            row_cols: Vec::new(),
            desc: "Enter columns per row, e.g. 3,4".to_string(),
            custom: false,
        }
    }

    /// Returns true for the sentinel custom-entry item.
    #[must_use]
    pub fn is_custom_entry(&self) -> bool {
        self.name == CUSTOM_ENTRY_NAME && self.row_cols.is_empty()
    }

    /// Comma-joined layout identifier (e.g. "3,4").
    #[must_use]
    pub fn id(&self) -> String {
        id(&self.row_cols)
    }

    /// Total number of terminals across all rows.
    #[must_use]
    pub fn total_terminals(&self) -> u32 {
        self.row_cols.iter().sum()
    }

    /// Number of rows in the grid.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.row_cols.len()
    }
}

/// Renders a row sequence as its comma-joined identifier.
#[must_use]
pub fn id(row_cols: &[u32]) -> String {
    row_cols
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Renders a row sequence as a bracket-grid description, one `[ ]` per
/// terminal, rows joined with `" / "`.
#[must_use]
pub fn generate_desc(row_cols: &[u32]) -> String {
    row_cols
        .iter()
        .map(|&cols| "[ ]".repeat(cols as usize))
        .collect::<Vec<_>>()
        .join(" / ")
}

/// Parses a comma-separated row sequence like `"3,4"` into `[3, 4]`.
///
/// Whitespace around segments is trimmed and blank segments are skipped.
/// Fails if any segment is non-numeric or less than 1, if no segments
/// remain, or if the total exceeds [`MAX_TERMINALS`].
pub fn parse_row_cols(input: &str) -> Result<Vec<u32>> {
    let mut row_cols = Vec::new();
    let mut total: u32 = 0;
    for segment in input.split(',') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        let n: u32 = match segment.parse() {
            Ok(n) if n >= 1 => n,
            _ => bail!("invalid row count: {segment:?}"),
        };
        row_cols.push(n);
        total = total.saturating_add(n);
    }
    if row_cols.is_empty() {
        bail!("layout has no rows");
    }
    if total > MAX_TERMINALS {
        bail!("layout opens {total} terminals, maximum is {MAX_TERMINALS}");
    }
    Ok(row_cols)
}

/// Converts a legacy `"ColsxRows"` identifier to the comma format.
///
/// `"3x2"` becomes `"3,3"`, `"2x1"` becomes `"2"`. Identifiers already in
/// the comma format (no `x`) pass through unchanged, as does anything that
/// fails to parse: old presets must keep resolving even when their layout
/// field is garbage.
#[must_use]
pub fn convert_legacy_id(layout_id: &str) -> String {
    let Some((cols_text, rows_text)) = layout_id.split_once('x') else {
        return layout_id.to_string();
    };
    let (Ok(cols), Ok(rows)) = (cols_text.parse::<u32>(), rows_text.parse::<u32>()) else {
        return layout_id.to_string();
    };
    if cols < 1 || rows < 1 {
        return layout_id.to_string();
    }
    id(&vec![cols; rows as usize])
}

/// Built-in layouts offered in single-project mode.
#[must_use]
pub fn builtin_layouts() -> Vec<Layout> {
    vec![
        Layout::builtin("2 terminals", vec![2]),
        Layout::builtin("4 terminals", vec![2, 2]),
        Layout::builtin("6 terminals", vec![3, 3]),
        Layout::builtin("8 terminals", vec![4, 4]),
    ]
}

/// Layouts offered in split-workspace mode: exactly two rows each, one row
/// band per project. Callers append the custom-entry sentinel themselves.
#[must_use]
pub fn split_layouts() -> Vec<Layout> {
    vec![
        Layout::builtin("4 terminals (2+2)", vec![2, 2]),
        Layout::builtin("6 terminals (3+3)", vec![3, 3]),
        Layout::builtin("8 terminals (4+4)", vec![4, 4]),
    ]
}

/// All selectable layouts: built-ins, then persisted custom layouts, then
/// the custom-entry sentinel.
#[must_use]
pub fn all_layouts(config: &Config) -> Vec<Layout> {
    let mut layouts = builtin_layouts();
    for custom in &config.custom_layouts {
        let desc = generate_desc(&custom.row_cols);
        layouts.push(Layout {
            name: custom.name.clone(),
            row_cols: custom.row_cols.clone(),
            desc,
            custom: true,
        });
    }
    layouts.push(Layout::custom_entry());
    layouts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CustomLayout;

    #[test]
    fn test_id_joins_with_commas() {
        assert_eq!(id(&[3, 4]), "3,4");
        assert_eq!(id(&[2]), "2");
        assert_eq!(id(&[1, 1, 1]), "1,1,1");
    }

    #[test]
    fn test_parse_row_cols_valid() {
        assert_eq!(parse_row_cols("3,4").unwrap(), vec![3, 4]);
        assert_eq!(parse_row_cols("2").unwrap(), vec![2]);
        // Whitespace and blank segments are tolerated
        assert_eq!(parse_row_cols(" 3, ,4 ").unwrap(), vec![3, 4]);
    }

    #[test]
    fn test_parse_row_cols_rejects_bad_input() {
        assert!(parse_row_cols("").is_err());
        assert!(parse_row_cols(",").is_err());
        assert!(parse_row_cols("a,2").is_err());
        assert!(parse_row_cols("0").is_err());
        assert!(parse_row_cols("-1,2").is_err());
        // Sum over the terminal ceiling
        assert!(parse_row_cols("10,10,1").is_err());
        assert!(parse_row_cols("10,10").is_ok());
    }

    #[test]
    fn test_parse_id_roundtrip() {
        for row_cols in [vec![2], vec![2, 2], vec![3, 4], vec![1, 2, 3, 4]] {
            assert_eq!(parse_row_cols(&id(&row_cols)).unwrap(), row_cols);
        }
    }

    #[test]
    fn test_convert_legacy_id() {
        assert_eq!(convert_legacy_id("3x2"), "3,3");
        assert_eq!(convert_legacy_id("2x1"), "2");
        assert_eq!(convert_legacy_id("4x2"), "4,4");
        // Comma format passes through
        assert_eq!(convert_legacy_id("3,4"), "3,4");
        assert_eq!(convert_legacy_id("2"), "2");
        // Unparseable legacy forms fail open
        assert_eq!(convert_legacy_id("ax2"), "ax2");
        assert_eq!(convert_legacy_id("2x"), "2x");
        assert_eq!(convert_legacy_id("0x3"), "0x3");
    }

    #[test]
    fn test_generate_desc() {
        assert_eq!(generate_desc(&[2]), "[ ][ ]");
        assert_eq!(generate_desc(&[3, 4]), "[ ][ ][ ] / [ ][ ][ ][ ]");
    }

    #[test]
    fn test_layout_totals() {
        let layout = Layout::custom(vec![3, 4]);
        assert_eq!(layout.total_terminals(), 7);
        assert_eq!(layout.num_rows(), 2);
        assert_eq!(layout.id(), "3,4");
        assert_eq!(layout.name, "Custom 3,4");
        assert!(layout.custom);
    }

    #[test]
    fn test_split_layouts_have_two_rows() {
        let layouts = split_layouts();
        assert!(!layouts.is_empty());
        for layout in layouts {
            assert_eq!(layout.num_rows(), 2, "split layout {}", layout.name);
        }
    }

    #[test]
    fn test_all_layouts_merges_custom() {
        let mut config = Config::new();
        config.custom_layouts.push(CustomLayout {
            name: "Custom 3,4".to_string(),
            row_cols: vec![3, 4],
        });
        let layouts = all_layouts(&config);
        assert!(layouts.iter().any(|l| l.id() == "3,4" && l.custom));
        // Sentinel is last
        assert!(layouts.last().unwrap().is_custom_entry());
    }
}
