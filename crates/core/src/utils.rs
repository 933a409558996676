//! Miscellaneous routines shared by the layout inference modules.
//!
//! Provides:
//! - Geometric types (Point, Rect, Interval, Position)
//! - The `HasBBox` trait implemented by every positioned element
//! - Rounding and bounding helpers

/// Floating-point infinity for bounding box calculations.
pub const INF_F64: f64 = f64::MAX;

/// A 2D point (x, y).
pub type Point = (f64, f64);

/// A rectangle defined by (x0, y0, x1, y1) where (x0, y0) is the bottom-left
/// and (x1, y1) is the top-right corner. Page origin is bottom-left.
pub type Rect = (f64, f64, f64, f64);

/// A bounding box `(left, bottom, right, top)` derived from a layout item.
pub type Position = Rect;

/// A 1-D projection `(min, max)` of a position onto one axis.
pub type Interval = (f64, f64);

/// Rounds a value to a fixed number of fractional digits.
#[inline]
pub fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}

/// Rounds every edge of a rectangle to a fixed number of fractional digits.
pub fn round_rect(rect: Rect, digits: u32) -> Rect {
    (
        round_to(rect.0, digits),
        round_to(rect.1, digits),
        round_to(rect.2, digits),
        round_to(rect.3, digits),
    )
}

/// Trait for objects that have a bounding box.
pub trait HasBBox {
    fn x0(&self) -> f64;
    fn y0(&self) -> f64;
    fn x1(&self) -> f64;
    fn y1(&self) -> f64;

    fn bbox(&self) -> Rect {
        (self.x0(), self.y0(), self.x1(), self.y1())
    }

    fn width(&self) -> f64 {
        self.x1() - self.x0()
    }

    fn height(&self) -> f64 {
        self.y1() - self.y0()
    }
}

impl HasBBox for Rect {
    fn x0(&self) -> f64 {
        self.0
    }
    fn y0(&self) -> f64 {
        self.1
    }
    fn x1(&self) -> f64 {
        self.2
    }
    fn y1(&self) -> f64 {
        self.3
    }
}

/// Computes a minimal rectangle that covers all the points.
pub fn get_bound<I: IntoIterator<Item = Point>>(pts: I) -> Rect {
    let mut x0 = INF_F64;
    let mut y0 = INF_F64;
    let mut x1 = -INF_F64;
    let mut y1 = -INF_F64;

    for (x, y) in pts {
        x0 = x0.min(x);
        y0 = y0.min(y);
        x1 = x1.max(x);
        y1 = y1.max(y);
    }

    (x0, y0, x1, y1)
}

/// Computes a minimal rectangle that covers all the rectangles.
///
/// Returns `None` for an empty input.
pub fn union_rects<I: IntoIterator<Item = Rect>>(rects: I) -> Option<Rect> {
    rects.into_iter().reduce(|acc, r| {
        (
            acc.0.min(r.0),
            acc.1.min(r.1),
            acc.2.max(r.2),
            acc.3.max(r.3),
        )
    })
}
