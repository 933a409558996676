//! Table assembly: grid inference, field names and records for a page.

use std::collections::HashSet;

use crate::error::Result;
use crate::layout::analysis::divisions::{column_positions, row_positions};
use crate::layout::analysis::sections::{header_positions, header_row_count};
use crate::layout::elements::LTPage;
use crate::layout::params::{HeaderRows, TableParams};
use crate::layout::select::{Container, Node, top_level};
use crate::utils::Interval;

use super::text::extract_row_content;
use super::types::{PageTable, Record, Table};

/// Field names from the first `header_rows` row bands.
///
/// No header rows names fields by column index. Several header rows are read
/// as one band. Empty names fall back to the column index and repeated names
/// get a numeric suffix.
pub fn extract_field_names<'a, C: Container<'a> + Copy>(
    items: C,
    rows: &[Interval],
    columns: &[Interval],
    header_rows: usize,
    params: &TableParams,
) -> Vec<String> {
    let header_rows = header_rows.min(rows.len());
    let raw = match header_rows {
        0 => (0..columns.len()).map(|i| i.to_string()).collect(),
        1 => extract_row_content(items, rows[0], columns, params),
        n => {
            let band = (rows[n - 1].0, rows[0].1);
            extract_row_content(items, band, columns, params)
        }
    };
    unique_field_names(raw)
}

pub(crate) fn unique_field_names(raw: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(raw.len());
    let mut fields = Vec::with_capacity(raw.len());
    for (index, name) in raw.into_iter().enumerate() {
        let base = if name.is_empty() { index.to_string() } else { name };
        let mut candidate = base.clone();
        let mut suffix = 2;
        while seen.contains(&candidate) {
            candidate = format!("{base}_{suffix}");
            suffix += 1;
        }
        seen.insert(candidate.clone());
        fields.push(candidate);
    }
    fields
}

/// One record: the row's cell texts keyed by field name.
pub fn extract_table_entry<'a, C: Container<'a> + Copy>(
    items: C,
    row: Interval,
    table: &Table,
    params: &TableParams,
) -> Record {
    let values = extract_row_content(items, row, &table.columns, params);
    table.fields.iter().cloned().zip(values).collect()
}

/// Infers the grid and field names of a table. None when no rows or no
/// columns are found.
pub fn infer_table<'a, C: Container<'a>>(items: C, params: &TableParams) -> Result<Option<Table>> {
    let nodes = top_level(items);
    let rows = row_positions(&nodes, params);
    let columns = column_positions(&nodes, params);
    if rows.is_empty() || columns.is_empty() {
        tracing::debug!(rows = rows.len(), columns = columns.len(), "no table");
        return Ok(None);
    }

    let header_rows = match params.header_rows {
        HeaderRows::Count(n) => n.min(rows.len()),
        HeaderRows::Detect => {
            let headers = header_positions(&nodes, params)?;
            header_row_count(&rows, &headers)
        }
    };
    let fields = extract_field_names(nodes.as_slice(), &rows, &columns, header_rows, params);
    tracing::debug!(
        rows = rows.len(),
        columns = columns.len(),
        header_rows,
        "table grid"
    );
    Ok(Some(Table {
        rows,
        columns,
        header_rows,
        fields,
    }))
}

/// Extracts the table of one page. Errors carry the page id.
pub fn extract_page_table(page: &LTPage, params: &TableParams) -> Result<Option<PageTable>> {
    let nodes: Vec<Node<'_>> = top_level(page);
    let Some(table) = infer_table(nodes.as_slice(), params).map_err(|e| e.on_page(page.pageid))?
    else {
        return Ok(None);
    };
    let records = table
        .data_rows()
        .iter()
        .map(|&row| extract_table_entry(nodes.as_slice(), row, &table, params))
        .collect();
    Ok(Some(PageTable {
        pageid: page.pageid,
        table,
        records,
    }))
}
