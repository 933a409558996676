//! JSON layout dump reader.
//!
//! A dump holds the positioned items a page decoder produced:
//!
//! ```json
//! {"pages": [{"pageid": 1, "bbox": [0, 0, 612, 792], "items": [
//!   {"type": "textbox", "lines": [{"chars": [
//!     {"text": "A", "bbox": [72, 700, 79, 712], "fontname": "Helvetica", "size": 12},
//!     {"text": " "}
//!   ]}]},
//!   {"type": "rect", "bbox": [70, 690, 300, 691]}
//! ]}]}
//! ```
//!
//! A glyph without a bbox is a virtual character (a space between words).

use serde::Deserialize;
use tabulus_core::layout::{
    LTAnno, LTChar, LTCurve, LTItem, LTPage, LTRect, LTTextBoxHorizontal, LTTextLineHorizontal,
};
use tabulus_core::utils::{Point, Rect};

#[derive(Debug, Deserialize)]
pub struct Document {
    pub pages: Vec<DumpPage>,
}

#[derive(Debug, Deserialize)]
pub struct DumpPage {
    pub pageid: i32,
    pub bbox: Rect,
    #[serde(default)]
    pub items: Vec<DumpItem>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DumpItem {
    TextBox { lines: Vec<DumpLine> },
    TextLine(DumpLine),
    Char(DumpChar),
    Anno {
        text: String,
    },
    Rect {
        bbox: Rect,
        #[serde(default = "default_linewidth")]
        linewidth: f64,
        #[serde(default = "default_true")]
        stroke: bool,
        #[serde(default)]
        fill: bool,
    },
    Curve {
        pts: Vec<Point>,
        #[serde(default = "default_linewidth")]
        linewidth: f64,
        #[serde(default = "default_true")]
        stroke: bool,
        #[serde(default)]
        fill: bool,
    },
}

#[derive(Debug, Deserialize)]
pub struct DumpLine {
    pub chars: Vec<DumpGlyph>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DumpGlyph {
    Char(DumpChar),
    Anno { text: String },
}

#[derive(Debug, Deserialize)]
pub struct DumpChar {
    pub text: String,
    pub bbox: Rect,
    #[serde(default)]
    pub fontname: String,
    #[serde(default)]
    pub size: f64,
}

fn default_linewidth() -> f64 {
    1.0
}

fn default_true() -> bool {
    true
}

impl From<DumpChar> for LTChar {
    fn from(c: DumpChar) -> Self {
        LTChar::new(c.bbox, &c.text, &c.fontname, c.size)
    }
}

impl From<DumpLine> for LTTextLineHorizontal {
    fn from(dump: DumpLine) -> Self {
        let mut line = LTTextLineHorizontal::new();
        for glyph in dump.chars {
            match glyph {
                DumpGlyph::Char(c) => line.add(c.into()),
                DumpGlyph::Anno { text } => line.add_anno(LTAnno::new(&text)),
            }
        }
        line.analyze();
        line
    }
}

impl From<DumpItem> for LTItem {
    fn from(item: DumpItem) -> Self {
        match item {
            DumpItem::TextBox { lines } => {
                LTTextBoxHorizontal::from_lines(lines.into_iter().map(Into::into)).into()
            }
            DumpItem::TextLine(line) => LTTextLineHorizontal::from(line).into(),
            DumpItem::Char(c) => LTChar::from(c).into(),
            DumpItem::Anno { text } => LTItem::Anno(LTAnno::new(&text)),
            DumpItem::Rect {
                bbox,
                linewidth,
                stroke,
                fill,
            } => LTRect::new(linewidth, bbox, stroke, fill).into(),
            DumpItem::Curve {
                pts,
                linewidth,
                stroke,
                fill,
            } => LTCurve::new(linewidth, pts, stroke, fill).into(),
        }
    }
}

impl From<DumpPage> for LTPage {
    fn from(dump: DumpPage) -> Self {
        let mut page = LTPage::new(dump.pageid, dump.bbox);
        page.extend(dump.items.into_iter().map(LTItem::from));
        page
    }
}

/// Parses a dump into pages, in document order.
pub fn read_pages(json: &str) -> serde_json::Result<Vec<LTPage>> {
    let doc: Document = serde_json::from_str(json)?;
    Ok(doc.pages.into_iter().map(Into::into).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabulus_core::layout::ItemKind;

    const DUMP: &str = r#"{"pages": [{"pageid": 3, "bbox": [0, 0, 200, 100], "items": [
        {"type": "textbox", "lines": [{"chars": [
            {"text": "a", "bbox": [10, 50, 15, 60], "fontname": "ABCDEF+Arial", "size": 10},
            {"text": " "},
            {"text": "b", "bbox": [20, 50, 25, 60], "fontname": "ABCDEF+Arial", "size": 10}
        ]}]},
        {"type": "rect", "bbox": [5, 40, 150, 41]},
        {"type": "curve", "pts": [[0, 0], [10, 10]], "fill": true}
    ]}]}"#;

    #[test]
    fn test_read_pages() {
        let pages = read_pages(DUMP).unwrap();
        assert_eq!(pages.len(), 1);
        let page = &pages[0];
        assert_eq!(page.pageid, 3);
        let kinds: Vec<ItemKind> = page.iter().map(|item| item.kind()).collect();
        assert_eq!(kinds, vec![ItemKind::TextBox, ItemKind::Rect, ItemKind::Curve]);
        match &page.items()[0] {
            LTItem::TextBox(textbox) => assert_eq!(textbox.get_text(), "a b\n"),
            other => panic!("unexpected item {:?}", other.kind()),
        }
    }

    #[test]
    fn test_unknown_item_type_is_rejected() {
        let dump = r#"{"pages": [{"pageid": 1, "bbox": [0, 0, 1, 1], "items": [{"type": "figure"}]}]}"#;
        assert!(read_pages(dump).is_err());
    }
}
