//! High-level API module for table extraction.
//!
//! # Example
//!
//! ```ignore
//! use tabulus_core::api::extract_table;
//! use tabulus_core::layout::TableParams;
//!
//! let extraction = extract_table(&pages, &TableParams::default())?;
//! for record in &extraction.records {
//!     println!("{record:?}");
//! }
//! ```

pub mod high_level;

// Re-export for convenience
pub use high_level::{extract_table, extract_table_par};
