//! Core data model: grid layouts and tools.

pub mod layout;
pub mod tool;

pub use layout::{
    all_layouts, builtin_layouts, convert_legacy_id, parse_row_cols, split_layouts, Layout,
};
pub use tool::{all_tools, builtin_tools, Tool};
