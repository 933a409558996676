//! Whether a group of positions sits side by side or stacked.

use crate::utils::{Interval, Position};

/// Predominant arrangement of a group of positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Distribution {
    /// Side by side: every pair overlaps more vertically than horizontally.
    Horizontal,
    /// Stacked: every pair overlaps more horizontally than vertically.
    Vertical,
    Undetermined,
}

/// Length of the overlap of two intervals.
///
/// Intervals that only touch do not overlap.
pub(crate) fn overlap_length(first: Interval, second: Interval) -> f64 {
    let (a0, a1) = first;
    let (b0, b1) = second;
    if a0 <= b0 && a1 > b0 && a1 <= b1 {
        // first reaches into second from below
        a1 - b0
    } else if a0 >= b0 && a0 < b1 && a1 >= b1 {
        // first reaches into second from above
        b1 - a0
    } else if a0 >= b0 && a1 <= b1 {
        a1 - a0
    } else if a0 <= b0 && a1 >= b1 {
        b1 - b0
    } else {
        0.0
    }
}

pub(crate) fn horizontal_overlap(first: &Position, second: &Position) -> f64 {
    overlap_length((first.0, first.2), (second.0, second.2))
}

pub(crate) fn vertical_overlap(first: &Position, second: &Position) -> f64 {
    overlap_length((first.1, first.3), (second.1, second.3))
}

/// Compares vertical and horizontal overlap over every pair of positions.
///
/// Fewer than two positions are undetermined.
pub fn distribution(positions: &[Position]) -> Distribution {
    if positions.len() < 2 {
        return Distribution::Undetermined;
    }

    let mut all_horizontal = true;
    let mut all_vertical = true;
    for (i, current) in positions.iter().enumerate() {
        for neighbor in &positions[i + 1..] {
            let vertical = vertical_overlap(current, neighbor);
            let horizontal = horizontal_overlap(current, neighbor);
            all_horizontal &= vertical > horizontal;
            all_vertical &= horizontal > vertical;
        }
    }

    match (all_horizontal, all_vertical) {
        (true, false) => Distribution::Horizontal,
        (false, true) => Distribution::Vertical,
        _ => Distribution::Undetermined,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_cases() {
        assert_eq!(overlap_length((0.0, 10.0), (5.0, 20.0)), 5.0);
        assert_eq!(overlap_length((5.0, 20.0), (0.0, 10.0)), 5.0);
        assert_eq!(overlap_length((2.0, 4.0), (0.0, 10.0)), 2.0);
        assert_eq!(overlap_length((0.0, 10.0), (2.0, 4.0)), 2.0);
        assert_eq!(overlap_length((0.0, 10.0), (10.0, 20.0)), 0.0);
        assert_eq!(overlap_length((0.0, 1.0), (5.0, 6.0)), 0.0);
    }

    #[test]
    fn test_stacked_boxes_are_vertical() {
        let positions = [(0.0, 0.0, 10.0, 10.0), (0.0, 10.0, 10.0, 20.0)];
        assert_eq!(distribution(&positions), Distribution::Vertical);
    }

    #[test]
    fn test_side_by_side_boxes_are_horizontal() {
        let positions = [
            (0.0, 0.0, 10.0, 10.0),
            (10.0, 1.0, 20.0, 9.0),
            (25.0, 0.0, 40.0, 12.0),
        ];
        assert_eq!(distribution(&positions), Distribution::Horizontal);
    }

    #[test]
    fn test_mixed_or_single_is_undetermined() {
        let positions = [
            (0.0, 0.0, 10.0, 10.0),
            (0.0, 10.0, 10.0, 20.0),
            (20.0, 0.0, 30.0, 10.0),
        ];
        assert_eq!(distribution(&positions), Distribution::Undetermined);
        assert_eq!(distribution(&[(0.0, 0.0, 1.0, 1.0)]), Distribution::Undetermined);
        assert_eq!(distribution(&[]), Distribution::Undetermined);
    }
}
