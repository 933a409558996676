//! Base component with bounding box.

use std::hash::Hash;

use crate::utils::{HasBBox, INF_F64, Rect};

/// Base component with a bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct LTComponent {
    pub(crate) x0: f64,
    pub(crate) y0: f64,
    pub(crate) x1: f64,
    pub(crate) y1: f64,
}

impl LTComponent {
    pub fn new(bbox: Rect) -> Self {
        let (x0, y0, x1, y1) = bbox;
        Self { x0, y0, x1, y1 }
    }

    /// An inverted bounding box that any `expand` call replaces.
    pub(crate) fn unbounded() -> Self {
        Self::new((INF_F64, INF_F64, -INF_F64, -INF_F64))
    }

    /// Grows the bounding box to cover `bbox`.
    pub(crate) fn expand(&mut self, bbox: Rect) {
        self.x0 = self.x0.min(bbox.0);
        self.y0 = self.y0.min(bbox.1);
        self.x1 = self.x1.max(bbox.2);
        self.y1 = self.y1.max(bbox.3);
    }

    pub fn bbox(&self) -> Rect {
        (self.x0, self.y0, self.x1, self.y1)
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// True when the box has no area (or was never expanded).
    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }
}

impl HasBBox for LTComponent {
    fn x0(&self) -> f64 {
        self.x0
    }
    fn y0(&self) -> f64 {
        self.y0
    }
    fn x1(&self) -> f64 {
        self.x1
    }
    fn y1(&self) -> f64 {
        self.y1
    }
}

impl Eq for LTComponent {}

impl Hash for LTComponent {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.x0.to_bits().hash(state);
        self.y0.to_bits().hash(state);
        self.x1.to_bits().hash(state);
        self.y1.to_bits().hash(state);
    }
}
