//! Layout analysis: how bands of rows and columns are inferred.
//!
//! - Merging overlapping intervals and positions
//! - Distribution (side by side or stacked) and edge alignment
//! - Row and column detection
//! - Header detection

pub mod alignment;
pub mod distribution;
pub mod divisions;
pub mod intervals;
pub mod sections;

pub use alignment::{Alignment, alignment};
pub use distribution::{Distribution, distribution};
pub use divisions::{
    column_positions, columns_from_positions, determine_column_positions, determine_row_positions,
    row_positions, rows_from_positions,
};
pub use intervals::{
    Extent, interval_from_slice, is_disjoint, merge_overlapping, merge_positions,
    position_from_slice,
};
pub use sections::{determine_header_positions, header_positions};
