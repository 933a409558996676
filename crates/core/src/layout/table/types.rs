//! Table assembly types.

use indexmap::IndexMap;

use crate::error::LayoutError;
use crate::utils::{Interval, Rect};

/// One row of a table: field name to cell text, in column order.
pub type Record = IndexMap<String, String>;

/// The intersection of a row band and a column band, with its text.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    /// `(bottom, top)`
    pub row: Interval,
    /// `(left, right)`
    pub column: Interval,
    pub text: String,
}

impl Cell {
    pub fn bbox(&self) -> Rect {
        cell_rect(self.row, self.column)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

pub(crate) fn cell_rect(row: Interval, column: Interval) -> Rect {
    (column.0, row.0, column.1, row.1)
}

/// The inferred grid of one page.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    /// Row bands `(bottom, top)`, top to bottom.
    pub rows: Vec<Interval>,
    /// Column bands `(left, right)`, left to right.
    pub columns: Vec<Interval>,
    /// Number of leading rows holding field names.
    pub header_rows: usize,
    /// One unique name per column.
    pub fields: Vec<String>,
}

impl Table {
    /// Row bands after the header.
    pub fn data_rows(&self) -> &[Interval] {
        &self.rows[self.header_rows.min(self.rows.len())..]
    }

    pub fn bbox(&self) -> Option<Rect> {
        let top = self.rows.first()?.1;
        let bottom = self.rows.last()?.0;
        let left = self.columns.first()?.0;
        let right = self.columns.last()?.1;
        Some((left, bottom, right, top))
    }
}

/// A table found on one page together with its records.
#[derive(Clone, Debug, PartialEq)]
pub struct PageTable {
    pub pageid: i32,
    pub table: Table,
    pub records: Vec<Record>,
}

/// A page that could not be turned into records.
#[derive(Clone, Debug, PartialEq)]
pub struct PageFailure {
    pub pageid: i32,
    pub error: LayoutError,
}

/// Records gathered across pages.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableExtraction {
    /// Field names shared by every contributing page.
    pub fields: Vec<String>,
    pub records: Vec<Record>,
    /// Pages that contributed records, in page order.
    pub pages: Vec<i32>,
    /// Pages that failed, in page order.
    pub failures: Vec<PageFailure>,
}

impl TableExtraction {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
