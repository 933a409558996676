//! tabulus - geometric table inference for positioned PDF layout items.
//!
//! Given the text boxes, text lines, characters and ruling lines a page
//! decoder produced, infers the row and column bands of a table, its header,
//! and returns the table as records keyed by field name.

pub mod api;
pub mod error;
pub mod layout;
pub mod utils;

// Re-export high_level for convenience
pub use api::high_level;

// Re-export table module for convenience
pub use layout::table;

pub use api::{extract_table, extract_table_par};
pub use error::{LayoutError, Result};
