//! Synthetic pages shared by the integration tests.
//!
//! The grid mirrors a five column, six row table: columns start at the
//! ruling positions below and rows are 20 units apart from y = 700 down.

#![allow(dead_code)]

use tabulus_core::layout::{LTChar, LTPage, LTRect, LTTextBoxHorizontal, LTTextLineHorizontal};

pub const COLUMN_RULINGS: [f64; 6] = [72.5, 164.5, 259.6, 353.2, 446.7, 539.7];
pub const ROWS: usize = 6;
pub const COLUMNS: usize = 5;
pub const TABLE_TOP: f64 = 700.0;
pub const ROW_HEIGHT: f64 = 20.0;

/// A line of `text` starting at `x0`, one glyph `size / 2` wide per char.
pub fn line(text: &str, x0: f64, y0: f64, fontname: &str, size: f64) -> LTTextLineHorizontal {
    let advance = size / 2.0;
    LTTextLineHorizontal::from_chars(text.chars().enumerate().map(|(i, ch)| {
        let x = x0 + advance * i as f64;
        LTChar::new((x, y0, x + advance, y0 + size), &ch.to_string(), fontname, size)
    }))
}

pub fn text_box(text: &str, x0: f64, y0: f64, fontname: &str, size: f64) -> LTTextBoxHorizontal {
    LTTextBoxHorizontal::from_lines(vec![line(text, x0, y0, fontname, size)])
}

/// Left edge of the text in column `c`.
pub fn cell_x(c: usize) -> f64 {
    COLUMN_RULINGS[c] + 5.0
}

/// Bottom of the body text in row `r`.
pub fn cell_y(r: usize) -> f64 {
    TABLE_TOP - ROW_HEIGHT * r as f64 - 15.0
}

pub fn body_text(r: usize, c: usize) -> String {
    format!("r{r}c{c}")
}

/// Vertical and horizontal rulings around every cell.
pub fn add_borders(page: &mut LTPage) {
    let bottom = TABLE_TOP - ROW_HEIGHT * ROWS as f64;
    for &x in &COLUMN_RULINGS {
        page.add(LTRect::filled((x - 0.5, bottom, x, TABLE_TOP + 0.5)).into());
    }
    for r in 0..=ROWS {
        let y = TABLE_TOP - ROW_HEIGHT * r as f64;
        page.add(LTRect::filled((COLUMN_RULINGS[0] - 0.5, y, COLUMN_RULINGS[5], y + 0.5)).into());
    }
}

/// A page holding the body grid, skipping the cells `keep` rejects.
pub fn table_page<F>(pageid: i32, keep: F) -> LTPage
where
    F: Fn(usize, usize) -> bool,
{
    let mut page = LTPage::new(pageid, (0.0, 0.0, 612.0, 792.0));
    for r in 0..ROWS {
        for c in 0..COLUMNS {
            if keep(r, c) {
                page.add(text_box(&body_text(r, c), cell_x(c), cell_y(r), "Helvetica", 10.0).into());
            }
        }
    }
    page
}

pub fn borderless_page() -> LTPage {
    table_page(1, |_, _| true)
}

pub fn bordered_page() -> LTPage {
    let mut page = borderless_page();
    add_borders(&mut page);
    page
}

/// Body rows below a header row set at font size 14.
pub fn header_font_page(pageid: i32, data_rows: usize) -> LTPage {
    let mut page = LTPage::new(pageid, (0.0, 0.0, 612.0, 792.0));
    for c in 0..COLUMNS {
        page.add(text_box(&format!("Col{c}"), cell_x(c), TABLE_TOP - 17.0, "Helvetica", 14.0).into());
    }
    for r in 1..=data_rows {
        for c in 0..COLUMNS {
            let text = format!("p{pageid}r{r}c{c}");
            page.add(text_box(&text, cell_x(c), cell_y(r), "Helvetica", 10.0).into());
        }
    }
    page
}

/// Bordered grid where every cell of row 2 wraps onto a second line.
pub fn wrapped_row_page() -> LTPage {
    let mut page = table_page(1, |r, _| r != 2);
    add_borders(&mut page);
    let top = TABLE_TOP - ROW_HEIGHT * 2.0;
    for c in 0..COLUMNS {
        let lines = vec![
            line(&body_text(2, c), cell_x(c), top - 9.0, "Helvetica", 8.0),
            line("more", cell_x(c), top - 18.0, "Helvetica", 8.0),
        ];
        page.add(LTTextBoxHorizontal::from_lines(lines).into());
    }
    page
}

/// Borderless four by four table: a left aligned column, a right aligned
/// one, a centred one and another left aligned one. The second row mixes
/// font sizes on a shared baseline.
pub fn aligned_page() -> LTPage {
    // (text, x0, size) per cell, rows top to bottom
    let rows: [[(&str, f64, f64); 4]; 4] = [
        [("Name", 100.0, 10.0), ("Age", 235.0, 10.0), ("City", 340.0, 10.0), ("Note", 420.0, 10.0)],
        [("Ada", 100.0, 10.0), ("36", 236.0, 14.0), ("London", 335.0, 10.0), ("x", 420.0, 10.0)],
        [("Grace", 100.0, 10.0), ("112", 235.0, 10.0), ("Rio", 342.5, 10.0), ("yes", 420.0, 10.0)],
        [("Al", 100.0, 10.0), ("7", 245.0, 10.0), ("Oslo", 340.0, 10.0), ("no", 420.0, 10.0)],
    ];
    let mut page = LTPage::new(1, (0.0, 0.0, 612.0, 792.0));
    for (r, row) in rows.iter().enumerate() {
        let y0 = 685.0 - ROW_HEIGHT * r as f64;
        for &(text, x0, size) in row {
            page.add(text_box(text, x0, y0, "Helvetica", size).into());
        }
    }
    page
}

/// Asserts two interval sequences agree within `delta` per edge.
pub fn assert_bands_near(actual: &[(f64, f64)], expected: &[(f64, f64)], delta: f64) {
    assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
    for (a, e) in actual.iter().zip(expected) {
        assert!(
            (a.0 - e.0).abs() <= delta && (a.1 - e.1).abs() <= delta,
            "{a:?} not within {delta} of {e:?}"
        );
    }
}
