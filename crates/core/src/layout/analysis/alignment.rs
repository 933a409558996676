//! Edge alignment of a group of positions.

use crate::utils::Position;

use super::distribution::{Distribution, distribution};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Top,
    Middle,
    Bottom,
}

impl Alignment {
    /// Coordinate of the edge this alignment refers to.
    pub fn edge(self, pos: &Position) -> f64 {
        match self {
            Alignment::Left => pos.0,
            Alignment::Center => (pos.0 + pos.2) / 2.0,
            Alignment::Right => pos.2,
            Alignment::Top => pos.3,
            Alignment::Middle => (pos.1 + pos.3) / 2.0,
            Alignment::Bottom => pos.1,
        }
    }
}

/// Sample standard deviation (n - 1 denominator).
fn sample_stdev(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    variance.sqrt()
}

/// The edge the positions line up on.
///
/// Stacked positions align left, center or right; side by side positions
/// align top, middle or bottom. The edge with the smallest spread wins, and
/// earlier candidates win ties. None when fewer than two positions are given
/// or their distribution is undetermined.
pub fn alignment(positions: &[Position]) -> Option<Alignment> {
    if positions.len() < 2 {
        return None;
    }
    let candidates = match distribution(positions) {
        Distribution::Vertical => [Alignment::Left, Alignment::Center, Alignment::Right],
        Distribution::Horizontal => [Alignment::Top, Alignment::Middle, Alignment::Bottom],
        Distribution::Undetermined => return None,
    };

    let mut best: Option<(Alignment, f64)> = None;
    for candidate in candidates {
        let edges: Vec<f64> = positions.iter().map(|p| candidate.edge(p)).collect();
        let spread = sample_stdev(&edges);
        if best.is_none_or(|(_, lowest)| spread < lowest) {
            best = Some((candidate, spread));
        }
    }
    best.map(|(alignment, _)| alignment)
}
