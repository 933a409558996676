//! LTItem - enum to represent any layout object.

use crate::utils::HasBBox;

use super::character::{LTAnno, LTChar};
use super::container::LTPage;
use super::graphics::{LTCurve, LTRect};
use super::textbox::LTTextBoxHorizontal;
use super::textline::LTTextLineHorizontal;

/// Macro to dispatch a HasBBox method call to the appropriate enum variant.
/// Special-cases Anno which has no bounding box (returns 0.0).
macro_rules! dispatch_hasbbox {
    ($self:ident, $method:ident) => {
        match $self {
            LTItem::Char(c) => c.$method(),
            LTItem::Anno(_) => 0.0,
            LTItem::Curve(c) => c.$method(),
            LTItem::Rect(r) => r.$method(),
            LTItem::TextLine(l) => l.$method(),
            LTItem::TextBox(b) => b.$method(),
            LTItem::Page(p) => p.$method(),
        }
    };
}

/// The kind of a layout object, used to request a level of the item tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Page,
    TextBox,
    TextLine,
    Char,
    Anno,
    Rect,
    Curve,
}

impl ItemKind {
    pub fn name(self) -> &'static str {
        match self {
            ItemKind::Page => "page",
            ItemKind::TextBox => "textbox",
            ItemKind::TextLine => "textline",
            ItemKind::Char => "char",
            ItemKind::Anno => "anno",
            ItemKind::Rect => "rect",
            ItemKind::Curve => "curve",
        }
    }
}

/// Represents any item that can appear in a layout container.
#[derive(Debug, Clone, PartialEq)]
pub enum LTItem {
    Char(LTChar),
    Anno(LTAnno),
    Curve(LTCurve),
    Rect(LTRect),
    TextLine(LTTextLineHorizontal),
    TextBox(LTTextBoxHorizontal),
    Page(Box<LTPage>),
}

impl LTItem {
    pub fn kind(&self) -> ItemKind {
        match self {
            LTItem::Char(_) => ItemKind::Char,
            LTItem::Anno(_) => ItemKind::Anno,
            LTItem::Curve(_) => ItemKind::Curve,
            LTItem::Rect(_) => ItemKind::Rect,
            LTItem::TextLine(_) => ItemKind::TextLine,
            LTItem::TextBox(_) => ItemKind::TextBox,
            LTItem::Page(_) => ItemKind::Page,
        }
    }
}

impl HasBBox for LTItem {
    fn x0(&self) -> f64 {
        dispatch_hasbbox!(self, x0)
    }
    fn y0(&self) -> f64 {
        dispatch_hasbbox!(self, y0)
    }
    fn x1(&self) -> f64 {
        dispatch_hasbbox!(self, x1)
    }
    fn y1(&self) -> f64 {
        dispatch_hasbbox!(self, y1)
    }
}

impl From<LTChar> for LTItem {
    fn from(c: LTChar) -> Self {
        LTItem::Char(c)
    }
}

impl From<LTRect> for LTItem {
    fn from(r: LTRect) -> Self {
        LTItem::Rect(r)
    }
}

impl From<LTCurve> for LTItem {
    fn from(c: LTCurve) -> Self {
        LTItem::Curve(c)
    }
}

impl From<LTTextLineHorizontal> for LTItem {
    fn from(l: LTTextLineHorizontal) -> Self {
        LTItem::TextLine(l)
    }
}

impl From<LTTextBoxHorizontal> for LTItem {
    fn from(b: LTTextBoxHorizontal) -> Self {
        LTItem::TextBox(b)
    }
}

impl From<LTPage> for LTItem {
    fn from(p: LTPage) -> Self {
        LTItem::Page(Box::new(p))
    }
}
