//! Integration tests for the layout identifier codec.
//!
//! These cover the round-trip between row sequences and their comma
//! identifiers, and the forward migration of legacy "ColsxRows" IDs.

use termtile::models::layout::{convert_legacy_id, id, parse_row_cols};

#[test]
fn test_id_parse_roundtrip() {
    let cases: Vec<Vec<u32>> = vec![
        vec![1],
        vec![2],
        vec![2, 2],
        vec![3, 4],
        vec![4, 4],
        vec![1, 2, 3, 4, 5],
        vec![20],
        vec![5, 5, 5, 5],
    ];
    for row_cols in cases {
        let encoded = id(&row_cols);
        assert_eq!(
            parse_row_cols(&encoded).unwrap(),
            row_cols,
            "roundtrip through {encoded:?}"
        );
    }
}

#[test]
fn test_legacy_id_expands_to_uniform_rows() {
    // "CxR" becomes R repetitions of C
    assert_eq!(convert_legacy_id("3x2"), "3,3");
    assert_eq!(convert_legacy_id("2x1"), "2");
    assert_eq!(convert_legacy_id("2x2"), "2,2");
    assert_eq!(convert_legacy_id("4x2"), "4,4");
    assert_eq!(convert_legacy_id("1x5"), "1,1,1,1,1");
}

#[test]
fn test_legacy_conversion_then_parse() {
    for (legacy, expected) in [("3x2", vec![3, 3]), ("2x1", vec![2]), ("4x2", vec![4, 4])] {
        let converted = convert_legacy_id(legacy);
        assert_eq!(parse_row_cols(&converted).unwrap(), expected);
    }
}

#[test]
fn test_current_format_passes_through_conversion() {
    for current in ["2", "2,2", "3,4", "1,2,3"] {
        assert_eq!(convert_legacy_id(current), current);
    }
}

#[test]
fn test_parse_rejections() {
    for bad in ["", " ", ",", "x", "3;4", "3,zero", "0,4", "-2", "21", "7,7,7"] {
        assert!(parse_row_cols(bad).is_err(), "should reject {bad:?}");
    }
}

#[test]
fn test_parse_tolerates_whitespace_and_blanks() {
    assert_eq!(parse_row_cols("3, ,4").unwrap(), vec![3, 4]);
    assert_eq!(parse_row_cols(" 2 , 2 ").unwrap(), vec![2, 2]);
    assert_eq!(parse_row_cols("2,,2").unwrap(), vec![2, 2]);
}
