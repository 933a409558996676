//! Merging of overlapping intervals and positions.
//!
//! Two extents overlap when they intersect or touch: `(0, 10)` and `(10, 20)`
//! merge into `(0, 20)`. Positions overlap only when they overlap on both
//! axes.

use std::cmp::Ordering;

use crate::error::{LayoutError, Result};
use crate::utils::{Interval, Position};

/// An extent that can be merged with overlapping neighbours.
pub trait Extent: Copy {
    fn overlaps(&self, other: &Self) -> bool;

    /// Smallest extent covering both.
    fn union(&self, other: &Self) -> Self;

    /// Sort key: the first and last coordinate.
    fn bounds(&self) -> (f64, f64);
}

impl Extent for Interval {
    fn overlaps(&self, other: &Self) -> bool {
        self.0 <= other.1 && other.0 <= self.1
    }

    fn union(&self, other: &Self) -> Self {
        (self.0.min(other.0), self.1.max(other.1))
    }

    fn bounds(&self) -> (f64, f64) {
        *self
    }
}

impl Extent for Position {
    fn overlaps(&self, other: &Self) -> bool {
        (self.0, self.2).overlaps(&(other.0, other.2)) && (self.1, self.3).overlaps(&(other.1, other.3))
    }

    fn union(&self, other: &Self) -> Self {
        (
            self.0.min(other.0),
            self.1.min(other.1),
            self.2.max(other.2),
            self.3.max(other.3),
        )
    }

    fn bounds(&self) -> (f64, f64) {
        (self.0, self.3)
    }
}

fn by_bounds<E: Extent>(a: &E, b: &E) -> Ordering {
    let (a0, a1) = a.bounds();
    let (b0, b1) = b.bounds();
    a0.total_cmp(&b0).then(a1.total_cmp(&b1))
}

/// Folds extents into a disjoint cover sorted ascending by start.
///
/// Each incoming extent absorbs every accumulated extent it overlaps. The
/// absorbed union is checked again until nothing else overlaps it, so the
/// result is pairwise disjoint even for positions.
pub fn merge_overlapping<E, I>(extents: I) -> Vec<E>
where
    E: Extent,
    I: IntoIterator<Item = E>,
{
    let mut merged: Vec<E> = Vec::new();
    for extent in extents {
        let mut running = extent;
        loop {
            let before = merged.len();
            merged.retain(|kept| {
                if kept.overlaps(&running) {
                    running = running.union(kept);
                    false
                } else {
                    true
                }
            });
            if merged.len() == before {
                break;
            }
        }
        merged.push(running);
    }
    merged.sort_by(by_bounds);
    merged
}

/// Smallest extent covering all inputs. None for no inputs.
pub fn merge_positions<E, I>(extents: I) -> Option<E>
where
    E: Extent,
    I: IntoIterator<Item = E>,
{
    extents.into_iter().reduce(|acc, e| acc.union(&e))
}

/// True when no two extents overlap.
pub fn is_disjoint<E: Extent>(extents: &[E]) -> bool {
    extents
        .iter()
        .enumerate()
        .all(|(i, a)| extents[i + 1..].iter().all(|b| !a.overlaps(b)))
}

/// Reads an interval from a coordinate slice of length 2.
pub fn interval_from_slice(coords: &[f64]) -> Result<Interval> {
    match *coords {
        [min, max] => Ok((min, max)),
        _ => Err(LayoutError::AmbiguousDimension(coords.len())),
    }
}

/// Reads a position from a coordinate slice of length 4.
pub fn position_from_slice(coords: &[f64]) -> Result<Position> {
    match *coords {
        [x0, y0, x1, y1] => Ok((x0, y0, x1, y1)),
        _ => Err(LayoutError::AmbiguousDimension(coords.len())),
    }
}
