//! CSV input and output for per-source extracts and the unified table.

pub mod reader;
pub mod writer;

pub use reader::{
    discover, load_directory, load_extract, read_table, read_unified, validate_rows, RowViolations, SourceExtract,
};
pub use writer::{write_consolidated, write_consolidated_to, write_unified};
