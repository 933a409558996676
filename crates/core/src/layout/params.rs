//! Table inference parameters.
//!
//! Contains the TableParams struct for controlling row, column and cell
//! detection.

use std::fmt;
use std::str::FromStr;

use crate::error::{LayoutError, Result};
use crate::utils::Rect;

pub(crate) const DEFAULT_PRECISION: u32 = 3;
pub(crate) const MAX_PRECISION: u32 = 10;
pub(crate) const DEFAULT_RULING_THICKNESS: f64 = 1.0;
pub(crate) const DEFAULT_MIN_LINE_HEIGHT: f64 = 1.0;
pub(crate) const DEFAULT_PADDING_OFFSET: f64 = 0.5;
pub(crate) const DEFAULT_CELL_MARGIN: f64 = 1.0;

/// How many leading row bands carry the field names of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderRows {
    /// A fixed number of header rows. Zero names fields by column index.
    Count(usize),
    /// Count the leading rows that overlap the detected header positions.
    Detect,
}

impl Default for HeaderRows {
    fn default() -> Self {
        HeaderRows::Count(1)
    }
}

impl fmt::Display for HeaderRows {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderRows::Count(n) => write!(f, "{n}"),
            HeaderRows::Detect => f.write_str("auto"),
        }
    }
}

impl FromStr for HeaderRows {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "auto" | "detect" => Ok(HeaderRows::Detect),
            other => other
                .parse::<usize>()
                .map(HeaderRows::Count)
                .map_err(|_| LayoutError::InvalidParams(format!("header rows: {other:?}"))),
        }
    }
}

/// Parameters for table inference.
///
/// Tolerances are expressed in page units (points).
#[derive(Debug, Clone, PartialEq)]
pub struct TableParams {
    /// Number of fractional digits kept when reading item positions.
    pub precision: u32,

    /// A rectangle thinner than this on one axis and longer than this on the
    /// other is treated as a ruling line.
    pub ruling_thickness: f64,

    /// Text lines at or below this height are ignored for row detection.
    pub min_line_height: f64,

    /// Gap kept between a band edge and an aligned neighbor.
    pub padding_offset: f64,

    /// Tolerance for deciding which text lines belong to a cell.
    pub cell_margin: f64,

    /// Number of header rows, or header detection.
    pub header_rows: HeaderRows,

    /// Optional region restricting which items take part. None means the
    /// whole page.
    pub boundary: Option<Rect>,
}

impl Default for TableParams {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            ruling_thickness: DEFAULT_RULING_THICKNESS,
            min_line_height: DEFAULT_MIN_LINE_HEIGHT,
            padding_offset: DEFAULT_PADDING_OFFSET,
            cell_margin: DEFAULT_CELL_MARGIN,
            header_rows: HeaderRows::default(),
            boundary: None,
        }
    }
}

impl TableParams {
    pub fn with_header_rows(mut self, header_rows: HeaderRows) -> Self {
        self.header_rows = header_rows;
        self
    }

    pub fn with_boundary(mut self, boundary: Option<Rect>) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn with_cell_margin(mut self, cell_margin: f64) -> Self {
        self.cell_margin = cell_margin;
        self
    }

    /// Checks that every tolerance is usable.
    pub fn validate(&self) -> Result<()> {
        if self.precision > MAX_PRECISION {
            return Err(LayoutError::InvalidParams(format!(
                "precision {} exceeds {MAX_PRECISION} digits",
                self.precision
            )));
        }
        let tolerances = [
            ("ruling_thickness", self.ruling_thickness),
            ("min_line_height", self.min_line_height),
            ("padding_offset", self.padding_offset),
            ("cell_margin", self.cell_margin),
        ];
        for (name, value) in tolerances {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::InvalidParams(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        if let Some((x0, y0, x1, y1)) = self.boundary {
            if x0 > x1 || y0 > y1 {
                return Err(LayoutError::InvalidParams(format!(
                    "boundary ({x0}, {y0}, {x1}, {y1}) is inverted"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let params = TableParams::default();
        assert_eq!(params.precision, 3);
        assert_eq!(params.header_rows, HeaderRows::Count(1));
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_tolerance() {
        let params = TableParams::default().with_cell_margin(-1.0);
        assert!(matches!(
            params.validate(),
            Err(LayoutError::InvalidParams(_))
        ));
    }

    #[test]
    fn test_validate_rejects_inverted_boundary() {
        let params = TableParams::default().with_boundary(Some((10.0, 0.0, 0.0, 10.0)));
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_header_rows_from_str() {
        assert_eq!("auto".parse::<HeaderRows>(), Ok(HeaderRows::Detect));
        assert_eq!("2".parse::<HeaderRows>(), Ok(HeaderRows::Count(2)));
        assert!("two".parse::<HeaderRows>().is_err());
        assert_eq!(HeaderRows::Count(0).to_string(), "0");
    }
}
