//! Cell text extraction.

use crate::layout::params::TableParams;
use crate::layout::select::{Container, select_lines, within};
use crate::utils::Interval;

use super::types::{Cell, Table, cell_rect};

/// Text of the lines inside one cell, in source order, trimmed.
pub fn extract_cell_content<'a, C: Container<'a>>(
    items: C,
    column: Interval,
    row: Interval,
    params: &TableParams,
) -> String {
    let rect = cell_rect(row, column);
    let lines = select_lines(items, &[&within(Some(rect), params.cell_margin)]);
    let text: String = lines.iter().map(|line| line.get_text()).collect();
    text.trim().to_string()
}

/// Text of every cell in a row, left to right.
pub fn extract_row_content<'a, C: Container<'a> + Copy>(
    items: C,
    row: Interval,
    columns: &[Interval],
    params: &TableParams,
) -> Vec<String> {
    columns
        .iter()
        .map(|&column| extract_cell_content(items, column, row, params))
        .collect()
}

/// Text of every cell in a column, top to bottom.
pub fn extract_column_content<'a, C: Container<'a> + Copy>(
    items: C,
    column: Interval,
    rows: &[Interval],
    params: &TableParams,
) -> Vec<String> {
    rows.iter()
        .map(|&row| extract_cell_content(items, column, row, params))
        .collect()
}

/// Every cell of a table, row by row.
pub fn extract_cells<'a, C: Container<'a> + Copy>(
    items: C,
    table: &Table,
    params: &TableParams,
) -> Vec<Vec<Cell>> {
    table
        .rows
        .iter()
        .map(|&row| {
            table
                .columns
                .iter()
                .map(|&column| Cell {
                    row,
                    column,
                    text: extract_cell_content(items, column, row, params),
                })
                .collect()
        })
        .collect()
}
