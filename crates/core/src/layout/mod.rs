//! Layout model and table inference.
//!
//! This module contains:
//! - Layout element types (LTPage, LTChar, LTTextLineHorizontal, LTTextBoxHorizontal, etc.)
//! - Table inference parameters (TableParams)
//! - Item selection and reduction to positions and font attributes
//! - Row, column and header analysis
//! - Table assembly

pub mod analysis;
pub mod elements;
pub mod params;
pub mod reduce;
pub mod select;
pub mod table;

// Re-export params
pub use params::*;

// Re-export element types
pub use elements::*;

// Re-export analysis types and functions
pub use analysis::*;

// Re-export table types
pub use table::*;
