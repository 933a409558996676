//! Row and column detection.
//!
//! Bands come from ruling lines (vertical for columns, horizontal for rows)
//! and from text. Text boxes are read first, then text lines; a line band
//! replaces any box band that holds more than one of them. Ruling bands are
//! never replaced: they are unioned with the text bands and the whole set is
//! merged into disjoint bands. Each edge is then moved into the gap between
//! neighbours according to how the text inside is aligned.

use itertools::Itertools;

use crate::layout::elements::ItemKind;
use crate::layout::params::TableParams;
use crate::layout::reduce::covering_box;
use crate::layout::select::{
    Axis, Container, Node, between, not_blank, select, shorter_than, taller_than, thinner_than,
    top_level, wider_than, within,
};
use crate::utils::{Interval, Position, Rect, round_rect};

use super::alignment::{Alignment, alignment};
use super::intervals::merge_overlapping;

/// Column bands, left to right, using default parameters.
pub fn determine_column_positions<'a, C: Container<'a>>(
    items: C,
    boundary: Option<Rect>,
) -> Vec<Interval> {
    let params = TableParams::default().with_boundary(boundary);
    column_positions(items, &params)
}

/// Row bands as `(bottom, top)`, top to bottom, using default parameters.
pub fn determine_row_positions<'a, C: Container<'a>>(
    items: C,
    boundary: Option<Rect>,
) -> Vec<Interval> {
    let params = TableParams::default().with_boundary(boundary);
    row_positions(items, &params)
}

/// Column bands, left to right.
pub fn column_positions<'a, C: Container<'a>>(items: C, params: &TableParams) -> Vec<Interval> {
    let nodes = top_level(items);
    let scope = within(params.boundary, 0.0);
    let t = params.ruling_thickness;
    let mut text_bands = Vec::new();

    let rulings = select(
        &nodes,
        ItemKind::Rect,
        &[&scope, &taller_than(t), &thinner_than(t)],
    );
    let ruled = bands_from_rulings(project(&rulings, Axis::Horizontal, params.precision));
    tracing::debug!(rulings = rulings.len(), bands = ruled.len(), "column rulings");

    let boxes = select(&nodes, ItemKind::TextBox, &[&scope, &not_blank()]);
    let bands = merge_overlapping(project(&boxes, Axis::Horizontal, params.precision));
    tracing::debug!(boxes = boxes.len(), bands = bands.len(), "column text boxes");
    refine(&mut text_bands, &bands);

    let lines = select(&nodes, ItemKind::TextLine, &[&scope, &not_blank()]);
    let bands = merge_overlapping(project(&lines, Axis::Horizontal, params.precision));
    tracing::debug!(lines = lines.len(), bands = bands.len(), "column text lines");
    refine(&mut text_bands, &bands);

    let columns = merge_overlapping(ruled.into_iter().chain(text_bands));
    if columns.is_empty() {
        return columns;
    }

    let in_scope: Vec<Node<'_>> = nodes.iter().copied().filter(|n| scope(n)).collect();
    let columns = match covering_box(&in_scope) {
        Some(bbox) => {
            let (x0, _, x1, _) = round_rect(bbox, params.precision);
            fit_to_margins(columns, (x0, x1))
        }
        None => columns,
    };

    let alignments = band_alignments(&nodes, &columns, Axis::Horizontal, params);
    let columns = pad_columns(&columns, &alignments, params.padding_offset);
    for column in &columns {
        tracing::trace!(left = column.0, right = column.1, "column");
    }
    tracing::debug!(columns = columns.len(), "column positions");
    columns
}

/// Row bands as `(bottom, top)`, top to bottom.
pub fn row_positions<'a, C: Container<'a>>(items: C, params: &TableParams) -> Vec<Interval> {
    let nodes = top_level(items);
    let scope = within(params.boundary, 0.0);
    let t = params.ruling_thickness;
    let mut text_bands = Vec::new();

    let rulings = select(
        &nodes,
        ItemKind::Rect,
        &[&scope, &wider_than(t), &shorter_than(t)],
    );
    let ruled = bands_from_rulings(project(&rulings, Axis::Vertical, params.precision));
    tracing::debug!(rulings = rulings.len(), bands = ruled.len(), "row rulings");

    let boxes = select(&nodes, ItemKind::TextBox, &[&scope, &not_blank()]);
    let bands = merge_overlapping(project(&boxes, Axis::Vertical, params.precision));
    tracing::debug!(boxes = boxes.len(), bands = bands.len(), "row text boxes");
    refine(&mut text_bands, &bands);

    let lines = select(
        &nodes,
        ItemKind::TextLine,
        &[&scope, &not_blank(), &taller_than(params.min_line_height)],
    );
    let bands = merge_overlapping(project(&lines, Axis::Vertical, params.precision));
    tracing::debug!(lines = lines.len(), bands = bands.len(), "row text lines");
    refine(&mut text_bands, &bands);

    let mut rows = merge_overlapping(ruled.into_iter().chain(text_bands));
    if rows.is_empty() {
        return rows;
    }
    rows.reverse();

    let alignments = band_alignments(&nodes, &rows, Axis::Vertical, params);
    let rows = pad_rows(&rows, &alignments, params.padding_offset);
    for row in &rows {
        tracing::trace!(bottom = row.0, top = row.1, "row");
    }
    tracing::debug!(rows = rows.len(), "row positions");
    rows
}

/// Column bands from raw positions: projection and merge only.
pub fn columns_from_positions(positions: &[Position], boundary: Option<Rect>) -> Vec<Interval> {
    let extents = positions
        .iter()
        .filter(|p| inside(p, boundary))
        .map(|&p| Axis::Horizontal.project(p));
    merge_overlapping(extents)
}

/// Row bands from raw positions, top to bottom.
pub fn rows_from_positions(positions: &[Position], boundary: Option<Rect>) -> Vec<Interval> {
    let extents = positions
        .iter()
        .filter(|p| inside(p, boundary))
        .map(|&p| Axis::Vertical.project(p));
    let mut rows = merge_overlapping(extents);
    rows.reverse();
    rows
}

fn inside(pos: &Position, boundary: Option<Rect>) -> bool {
    boundary.is_none_or(|(x0, y0, x1, y1)| {
        pos.0 >= x0 && pos.1 >= y0 && pos.2 <= x1 && pos.3 <= y1
    })
}

fn project(nodes: &[Node<'_>], axis: Axis, digits: u32) -> Vec<Interval> {
    nodes
        .iter()
        .filter_map(Node::geometry)
        .map(|bbox| axis.project(round_rect(bbox, digits)))
        .collect()
}

/// Turns ruling extents into the bands between consecutive rulings.
///
/// The outermost edges are dropped and the inner edges paired. An odd edge
/// left over is ignored.
fn bands_from_rulings(extents: Vec<Interval>) -> Vec<Interval> {
    let merged = merge_overlapping(extents);
    let edges: Vec<f64> = merged.iter().flat_map(|&(lo, hi)| [lo, hi]).collect();
    if edges.len() < 4 {
        return Vec::new();
    }
    edges[1..edges.len() - 1].iter().copied().tuples().collect()
}

/// Adds text line bands, first dropping box bands that hold more than one.
fn refine(found: &mut Vec<Interval>, bands: &[Interval]) {
    if bands.is_empty() {
        return;
    }
    found.retain(|outer| {
        bands
            .iter()
            .filter(|inner| inner.0 >= outer.0 && inner.1 <= outer.1)
            .count()
            <= 1
    });
    for band in bands {
        if !found.contains(band) {
            found.push(*band);
        }
    }
}

/// Stretches the outermost columns to the left and right margins.
fn fit_to_margins(mut columns: Vec<Interval>, margins: Interval) -> Vec<Interval> {
    if columns.len() == 1 {
        return vec![margins];
    }
    if let Some(first) = columns.first_mut() {
        first.0 = margins.0;
    }
    if let Some(last) = columns.last_mut() {
        last.1 = margins.1;
    }
    columns
}

/// Alignment of the non-blank text lines lying within each band.
fn band_alignments(
    nodes: &[Node<'_>],
    bands: &[Interval],
    axis: Axis,
    params: &TableParams,
) -> Vec<Option<Alignment>> {
    let scope = within(params.boundary, 0.0);
    bands
        .iter()
        .map(|&band| {
            let lines = select(
                nodes,
                ItemKind::TextLine,
                &[&scope, &between(band, axis, 0.0), &not_blank()],
            );
            let positions: Vec<Position> = lines
                .iter()
                .filter_map(Node::geometry)
                .map(|bbox| round_rect(bbox, params.precision))
                .collect();
            alignment(&positions)
        })
        .collect()
}

/// Moves inner column edges into the gaps between columns.
fn pad_columns(columns: &[Interval], alignments: &[Option<Alignment>], offset: f64) -> Vec<Interval> {
    let last = columns.len().saturating_sub(1);
    columns
        .iter()
        .enumerate()
        .map(|(i, &(left, right))| {
            let left = if i == 0 || alignments[i] == Some(Alignment::Left) {
                left
            } else {
                let prev = columns[i - 1];
                if alignments[i - 1] == Some(Alignment::Right) {
                    prev.1 + offset
                } else {
                    (prev.1 + left) / 2.0
                }
            };
            let right = if i == last || alignments[i] == Some(Alignment::Right) {
                right
            } else {
                let next = columns[i + 1];
                if alignments[i + 1] == Some(Alignment::Left) {
                    next.0 - offset
                } else {
                    (right + next.0) / 2.0
                }
            };
            (left, right)
        })
        .collect()
}

/// Moves inner row edges into the gaps between rows. Rows run top to bottom.
fn pad_rows(rows: &[Interval], alignments: &[Option<Alignment>], offset: f64) -> Vec<Interval> {
    let last = rows.len().saturating_sub(1);
    rows.iter()
        .enumerate()
        .map(|(i, &(bottom, top))| {
            let top = if i == 0 || alignments[i] == Some(Alignment::Top) {
                top
            } else {
                let above = rows[i - 1];
                if alignments[i - 1] == Some(Alignment::Bottom) {
                    above.0 - offset
                } else {
                    (top + above.0) / 2.0
                }
            };
            let bottom = if i == last || alignments[i] == Some(Alignment::Bottom) {
                bottom
            } else {
                let below = rows[i + 1];
                if alignments[i + 1] == Some(Alignment::Top) {
                    below.1 + offset
                } else {
                    (below.1 + bottom) / 2.0
                }
            };
            (bottom, top)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands_from_rulings() {
        let rulings = vec![(72.0, 72.5), (164.0, 164.5), (259.1, 259.6), (352.7, 353.2)];
        assert_eq!(
            bands_from_rulings(rulings),
            vec![(72.5, 164.0), (164.5, 259.1), (259.6, 352.7)]
        );
        assert!(bands_from_rulings(vec![(10.0, 10.5)]).is_empty());
        assert!(bands_from_rulings(Vec::new()).is_empty());
    }

    #[test]
    fn test_refine_drops_bands_holding_several_finer_bands() {
        let mut found = vec![(0.0, 100.0), (120.0, 200.0)];
        refine(&mut found, &[(5.0, 40.0), (60.0, 90.0), (130.0, 180.0)]);
        assert_eq!(
            found,
            vec![(120.0, 200.0), (5.0, 40.0), (60.0, 90.0), (130.0, 180.0)]
        );
        assert_eq!(merge_overlapping(found), vec![(5.0, 40.0), (60.0, 90.0), (120.0, 200.0)]);
    }

    #[test]
    fn test_fit_to_margins() {
        let columns = vec![(10.0, 20.0), (30.0, 40.0), (50.0, 60.0)];
        assert_eq!(
            fit_to_margins(columns, (0.0, 100.0)),
            vec![(0.0, 20.0), (30.0, 40.0), (50.0, 100.0)]
        );
        assert_eq!(fit_to_margins(vec![(10.0, 20.0)], (0.0, 100.0)), vec![(0.0, 100.0)]);
    }

    #[test]
    fn test_pad_columns() {
        let columns = [(0.0, 20.0), (30.0, 40.0), (50.0, 70.0), (80.0, 100.0)];
        let alignments = [
            Some(Alignment::Left),
            Some(Alignment::Right),
            None,
            Some(Alignment::Left),
        ];
        assert_eq!(
            pad_columns(&columns, &alignments, 0.5),
            vec![(0.0, 25.0), (25.0, 40.0), (40.5, 79.5), (80.0, 100.0)]
        );
    }

    #[test]
    fn test_pad_rows() {
        let rows = [(80.0, 100.0), (50.0, 70.0), (20.0, 40.0)];
        let alignments = [Some(Alignment::Bottom), None, Some(Alignment::Top)];
        assert_eq!(
            pad_rows(&rows, &alignments, 0.5),
            vec![(80.0, 100.0), (40.5, 79.5), (20.0, 40.0)]
        );
    }

    #[test]
    fn test_from_positions() {
        let positions = [
            (0.0, 90.0, 10.0, 100.0),
            (5.0, 70.0, 15.0, 80.0),
            (30.0, 90.0, 40.0, 100.0),
        ];
        assert_eq!(
            columns_from_positions(&positions, None),
            vec![(0.0, 15.0), (30.0, 40.0)]
        );
        assert_eq!(
            rows_from_positions(&positions, None),
            vec![(90.0, 100.0), (70.0, 80.0)]
        );
        assert_eq!(
            columns_from_positions(&positions, Some((0.0, 85.0, 50.0, 100.0))),
            vec![(0.0, 10.0), (30.0, 40.0)]
        );
    }
}
