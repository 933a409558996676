//! Character types: LTChar and LTAnno.

use crate::utils::Rect;

use super::component::LTComponent;

/// Virtual character inserted by the decoder's layout pass (e.g., space, newline).
///
/// Unlike LTChar, LTAnno has no bounding box as it represents a character
/// inferred from the relationship between real characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LTAnno {
    text: String,
}

impl LTAnno {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }

    pub fn get_text(&self) -> &str {
        &self.text
    }
}

/// Actual character in text with bounding box and font information.
#[derive(Debug, Clone, PartialEq)]
pub struct LTChar {
    component: LTComponent,
    text: String,
    /// Raw font name as reported by the decoder, possibly subset-prefixed
    /// (e.g. `"ABCDEF+Helvetica-Bold"`).
    fontname: String,
    size: f64,
}

impl LTChar {
    pub fn new(bbox: Rect, text: &str, fontname: &str, size: f64) -> Self {
        Self {
            component: LTComponent::new(bbox),
            text: text.to_string(),
            fontname: fontname.to_string(),
            size,
        }
    }

    pub fn get_text(&self) -> &str {
        &self.text
    }

    pub fn fontname(&self) -> &str {
        &self.fontname
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn bbox(&self) -> Rect {
        self.component.bbox()
    }
}

impl_has_bbox_delegate!(LTChar, component);
