//! Graphical elements: LTCurve, LTRect.
//!
//! Neither carries text. Thin rectangles double as table ruling lines.

use crate::utils::{Point, Rect, get_bound};

use super::component::LTComponent;

/// A generic path made of control points.
#[derive(Debug, Clone, PartialEq)]
pub struct LTCurve {
    component: LTComponent,
    /// Control points of the curve
    pub pts: Vec<Point>,
    /// Line width
    pub linewidth: f64,
    /// Whether the path is stroked
    pub stroke: bool,
    /// Whether the path is filled
    pub fill: bool,
}

impl LTCurve {
    pub fn new(linewidth: f64, pts: Vec<Point>, stroke: bool, fill: bool) -> Self {
        let bbox = get_bound(pts.iter().copied());
        Self {
            component: LTComponent::new(bbox),
            pts,
            linewidth,
            stroke,
            fill,
        }
    }
}

impl std::ops::Deref for LTCurve {
    type Target = LTComponent;
    fn deref(&self) -> &Self::Target {
        &self.component
    }
}

impl_has_bbox_delegate!(LTCurve, component);

/// A rectangle.
///
/// Borders drawn as filled hairline rectangles show up here with one
/// dimension below a point.
#[derive(Debug, Clone, PartialEq)]
pub struct LTRect {
    curve: LTCurve,
}

impl LTRect {
    pub fn new(linewidth: f64, bbox: Rect, stroke: bool, fill: bool) -> Self {
        let (x0, y0, x1, y1) = bbox;
        let pts = vec![(x0, y0), (x1, y0), (x1, y1), (x0, y1)];
        Self {
            curve: LTCurve::new(linewidth, pts, stroke, fill),
        }
    }

    /// A filled rectangle with no stroke, the usual shape of a ruling line.
    pub fn filled(bbox: Rect) -> Self {
        Self::new(0.0, bbox, false, true)
    }
}

impl std::ops::Deref for LTRect {
    type Target = LTCurve;
    fn deref(&self) -> &Self::Target {
        &self.curve
    }
}

impl_has_bbox_delegate!(LTRect, curve, method);
