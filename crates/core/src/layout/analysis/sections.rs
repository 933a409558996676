//! Header detection.
//!
//! A text line is a header candidate when its font size or font name differs
//! from the most common one in scope, or when it is the topmost line of a
//! column.

use crate::error::Result;
use crate::layout::elements::{ItemKind, LTTextLineHorizontal};
use crate::layout::params::TableParams;
use crate::layout::reduce::{most_common_fontname, most_common_fontsize};
use crate::layout::select::{
    Axis, Container, Node, between, not_blank, select, select_lines, top_level, within,
};
use crate::utils::{HasBBox, Interval, Position, Rect, round_rect};

use super::distribution::{Distribution, distribution};
use super::divisions::column_positions;
use super::intervals::{merge_overlapping, merge_positions};

/// Header positions using default parameters.
pub fn determine_header_positions<'a, C: Container<'a>>(
    items: C,
    boundary: Option<Rect>,
) -> Result<Vec<Position>> {
    let params = TableParams::default().with_boundary(boundary);
    header_positions(items, &params)
}

/// Header positions, top to bottom.
///
/// Candidates that sit side by side are returned as one merged position.
pub fn header_positions<'a, C: Container<'a>>(
    items: C,
    params: &TableParams,
) -> Result<Vec<Position>> {
    let nodes = top_level(items);
    let scope = within(params.boundary, 0.0);
    let lines = select_lines(&nodes, &[&scope, &not_blank()]);
    let chars = select(&nodes, ItemKind::Char, &[&scope]);

    let modal_size = most_common_fontsize(&chars)?;
    let by_size = divergent_lines(&lines, &modal_size, |line| most_common_fontsize(line))?;

    let modal_font = most_common_fontname(&chars)?;
    let by_font = divergent_lines(&lines, &modal_font, |line| most_common_fontname(line))?;

    let mut topmost = Vec::new();
    for column in column_positions(&nodes, params) {
        let in_column = select_lines(
            &nodes,
            &[&scope, &between(column, Axis::Horizontal, 0.0), &not_blank()],
        );
        if let Some(line) = in_column.into_iter().max_by(|a, b| a.y1().total_cmp(&b.y1())) {
            topmost.push(line);
        }
    }
    tracing::debug!(
        by_size = by_size.len(),
        by_font = by_font.len(),
        topmost = topmost.len(),
        "header candidates"
    );

    let candidates = by_size
        .into_iter()
        .chain(by_font)
        .chain(topmost)
        .filter_map(|line| Node::TextLine(line).geometry())
        .map(|bbox| round_rect(bbox, params.precision));
    let mut headers = merge_overlapping(candidates);

    if distribution(&headers) == Distribution::Horizontal {
        return Ok(merge_positions(headers).into_iter().collect());
    }
    headers.sort_by(|a, b| b.3.total_cmp(&a.3));
    Ok(headers)
}

/// Lines whose own modal attribute differs from `modal`.
fn divergent_lines<'a, T, F>(
    lines: &[&'a LTTextLineHorizontal],
    modal: &T,
    line_mode: F,
) -> Result<Vec<&'a LTTextLineHorizontal>>
where
    T: PartialEq,
    F: Fn(&'a LTTextLineHorizontal) -> Result<T>,
{
    let mut divergent = Vec::new();
    for &line in lines {
        if line_mode(line)? != *modal {
            divergent.push(line);
        }
    }
    Ok(divergent)
}

/// Leading rows that overlap a header position. At least one.
pub(crate) fn header_row_count(rows: &[Interval], headers: &[Position]) -> usize {
    let count = rows
        .iter()
        .take_while(|&&(bottom, top)| headers.iter().any(|h| bottom <= h.3 && h.1 <= top))
        .count();
    count.max(1)
}
