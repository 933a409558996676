//! Horizontal text line: a run of characters sharing a baseline.

use std::hash::Hash;

use crate::utils::Rect;

use super::character::{LTAnno, LTChar};
use super::component::LTComponent;

/// Element in a text line - either a character or annotation.
#[derive(Debug, Clone, PartialEq)]
pub enum TextLineElement {
    Char(Box<LTChar>),
    Anno(LTAnno),
}

impl TextLineElement {
    fn text(&self) -> &str {
        match self {
            TextLineElement::Char(c) => c.get_text(),
            TextLineElement::Anno(a) => a.get_text(),
        }
    }
}

/// Horizontal text line.
#[derive(Debug, Clone, PartialEq)]
pub struct LTTextLineHorizontal {
    pub(crate) component: LTComponent,
    pub(crate) elements: Vec<TextLineElement>,
}

impl LTTextLineHorizontal {
    pub fn new() -> Self {
        Self {
            component: LTComponent::unbounded(),
            elements: Vec::new(),
        }
    }

    /// Builds an analyzed line from characters in reading order.
    pub fn from_chars<I: IntoIterator<Item = LTChar>>(chars: I) -> Self {
        let mut line = Self::new();
        for c in chars {
            line.add(c);
        }
        line.analyze();
        line
    }

    pub fn bbox(&self) -> Rect {
        self.component.bbox()
    }

    /// Adds a character, growing the line's bounding box around it.
    pub fn add(&mut self, c: LTChar) {
        self.component.expand(c.bbox());
        self.elements.push(TextLineElement::Char(Box::new(c)));
    }

    /// Adds a virtual character (inter-word space and the like).
    pub fn add_anno(&mut self, anno: LTAnno) {
        self.elements.push(TextLineElement::Anno(anno));
    }

    /// Returns an iterator over elements in this text line.
    pub fn iter(&self) -> impl Iterator<Item = &TextLineElement> {
        self.elements.iter()
    }

    /// Returns an iterator over the real characters of this line.
    pub fn chars(&self) -> impl Iterator<Item = &LTChar> {
        self.elements.iter().filter_map(|e| match e {
            TextLineElement::Char(c) => Some(c.as_ref()),
            TextLineElement::Anno(_) => None,
        })
    }

    /// Terminates the line with a newline annotation.
    pub fn analyze(&mut self) {
        self.elements.push(TextLineElement::Anno(LTAnno::new("\n")));
    }

    pub fn get_text(&self) -> String {
        let mut out = String::with_capacity(self.elements.len());
        for e in &self.elements {
            out.push_str(e.text());
        }
        out
    }

    /// True when the line has no area or only whitespace text.
    pub fn is_empty(&self) -> bool {
        self.component.is_empty() || self.get_text().trim().is_empty()
    }
}

impl Default for LTTextLineHorizontal {
    fn default() -> Self {
        Self::new()
    }
}

impl_has_bbox_delegate!(LTTextLineHorizontal, component);

impl Eq for LTTextLineHorizontal {}

impl Hash for LTTextLineHorizontal {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.component.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::HasBBox;

    #[test]
    fn test_from_chars_builds_bbox_and_text() {
        let line = LTTextLineHorizontal::from_chars(vec![
            LTChar::new((10.0, 100.0, 16.0, 110.0), "I", "Helvetica", 10.0),
            LTChar::new((16.0, 100.0, 22.0, 111.0), "D", "Helvetica", 10.0),
        ]);
        assert_eq!(line.bbox(), (10.0, 100.0, 22.0, 111.0));
        assert_eq!(line.get_text(), "ID\n");
        assert_eq!(line.chars().count(), 2);
        assert!(!line.is_empty());
    }

    #[test]
    fn test_whitespace_line_is_empty() {
        let mut line = LTTextLineHorizontal::new();
        line.add(LTChar::new((0.0, 0.0, 5.0, 10.0), " ", "Helvetica", 10.0));
        line.analyze();
        assert!(line.is_empty());
        assert!(LTTextLineHorizontal::new().is_empty());
        assert_eq!(line.width(), 5.0);
    }
}
