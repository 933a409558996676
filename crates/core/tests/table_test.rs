mod common;

use common::*;
use tabulus_core::layout::{
    HeaderRows, TableParams, extract_cell_content, extract_cells, extract_page_table,
    infer_table,
};

#[test]
fn test_round_trip_cell_count() {
    for page in [bordered_page(), borderless_page()] {
        let params = TableParams::default();
        let table = infer_table(&page, &params).unwrap().unwrap();
        assert_eq!(table.rows.len(), ROWS);
        assert_eq!(table.columns.len(), COLUMNS);

        let cells = extract_cells(&page, &table, &params);
        for (r, row) in cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                assert_eq!(cell.text, body_text(r, c));
            }
        }
    }
}

#[test]
fn test_records_skip_header_row() {
    let page = bordered_page();
    let found = extract_page_table(&page, &TableParams::default())
        .unwrap()
        .unwrap();
    assert_eq!(found.table.fields, vec!["r0c0", "r0c1", "r0c2", "r0c3", "r0c4"]);
    assert_eq!(found.records.len(), ROWS - 1);
    assert_eq!(found.records[0]["r0c3"], "r1c3");
    assert_eq!(found.records[4]["r0c0"], "r5c0");
}

#[test]
fn test_two_header_rows_read_as_one_band() {
    let page = borderless_page();
    let params = TableParams::default().with_header_rows(HeaderRows::Count(2));
    let found = extract_page_table(&page, &params).unwrap().unwrap();
    assert_eq!(found.table.fields[0], "r0c0\nr1c0");
    assert_eq!(found.records.len(), ROWS - 2);
}

#[test]
fn test_missing_values_are_empty_strings() {
    let page = table_page(1, |r, c| !(r == 2 && c == 1));
    let found = extract_page_table(&page, &TableParams::default())
        .unwrap()
        .unwrap();
    assert_eq!(found.records[1]["r0c1"], "");
    assert_eq!(found.records[1]["r0c2"], "r2c2");
}

#[test]
fn test_cell_margin_controls_membership() {
    let page = borderless_page();
    let column = (cell_x(0), cell_x(0) + 19.5);
    let row = (cell_y(0), cell_y(0) + 10.0);
    let strict = TableParams::default().with_cell_margin(0.0);
    assert_eq!(extract_cell_content(&page, column, row, &strict), "");
    assert_eq!(
        extract_cell_content(&page, column, row, &TableParams::default()),
        "r0c0"
    );
}

#[test]
fn test_wrapped_cells_stay_in_their_ruled_row() {
    let page = wrapped_row_page();
    let found = extract_page_table(&page, &TableParams::default())
        .unwrap()
        .unwrap();
    assert_eq!(found.records.len(), ROWS - 1);
    assert_eq!(found.records[1]["r0c0"], "r2c0\nmore");
    assert_eq!(found.records[1]["r0c4"], "r2c4\nmore");
    assert_eq!(found.records[2]["r0c0"], "r3c0");
}

#[test]
fn test_records_from_mixed_alignments() {
    let page = aligned_page();
    let found = extract_page_table(&page, &TableParams::default())
        .unwrap()
        .unwrap();
    assert_eq!(found.table.fields, vec!["Name", "Age", "City", "Note"]);
    let rows: Vec<Vec<&str>> = found
        .records
        .iter()
        .map(|record| record.values().map(String::as_str).collect())
        .collect();
    assert_eq!(
        rows,
        vec![
            vec!["Ada", "36", "London", "x"],
            vec!["Grace", "112", "Rio", "yes"],
            vec!["Al", "7", "Oslo", "no"],
        ]
    );
}
