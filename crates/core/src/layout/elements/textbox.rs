//! Horizontal text box: a group of vertically adjacent text lines.

use std::hash::Hash;

use crate::utils::{HasBBox, Rect};

use super::component::LTComponent;
use super::textline::LTTextLineHorizontal;

/// Horizontal text box containing horizontal text lines.
#[derive(Debug, Clone, PartialEq)]
pub struct LTTextBoxHorizontal {
    component: LTComponent,
    lines: Vec<LTTextLineHorizontal>,
}

impl LTTextBoxHorizontal {
    pub fn new() -> Self {
        Self {
            component: LTComponent::unbounded(),
            lines: Vec::new(),
        }
    }

    /// Builds an analyzed box from lines.
    pub fn from_lines<I: IntoIterator<Item = LTTextLineHorizontal>>(lines: I) -> Self {
        let mut textbox = Self::new();
        for line in lines {
            textbox.add(line);
        }
        textbox.analyze();
        textbox
    }

    pub fn add(&mut self, line: LTTextLineHorizontal) {
        self.component.expand(line.bbox());
        self.lines.push(line);
    }

    pub fn bbox(&self) -> Rect {
        self.component.bbox()
    }

    /// Returns an iterator over lines in this text box.
    pub fn iter(&self) -> impl Iterator<Item = &LTTextLineHorizontal> {
        self.lines.iter()
    }

    /// Sort lines top-to-bottom (descending y1).
    pub fn analyze(&mut self) {
        self.lines.sort_by(|a, b| b.y1().total_cmp(&a.y1()));
    }

    pub fn get_text(&self) -> String {
        self.lines.iter().map(|l| l.get_text()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.component.is_empty() || self.get_text().trim().is_empty()
    }
}

impl Default for LTTextBoxHorizontal {
    fn default() -> Self {
        Self::new()
    }
}

impl_has_bbox_delegate!(LTTextBoxHorizontal, component);

impl Eq for LTTextBoxHorizontal {}

impl Hash for LTTextBoxHorizontal {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.component.hash(state);
    }
}
