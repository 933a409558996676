//! Table assembly.
//!
//! Row and column bands are combined into a grid, the header rows give field
//! names, and every remaining row becomes a record.

mod finder;
mod text;
mod types;

// Re-export public types
pub use types::{Cell, PageFailure, PageTable, Record, Table, TableExtraction};

// Re-export public API functions
pub use finder::{extract_field_names, extract_page_table, extract_table_entry, infer_table};
pub use text::{extract_cell_content, extract_cells, extract_column_content, extract_row_content};
