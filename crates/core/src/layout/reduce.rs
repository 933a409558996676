//! Reduction of layout items to positions and typographic attributes.
//!
//! Values are gathered into an [`Accumulator`] chosen by the caller (a list
//! keeps every value, a set keeps distinct ones, a count map tallies them).
//! The `most_common_*` helpers compute a strict statistical mode: ties are an
//! error rather than a guess.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::hash::Hash;

use indexmap::IndexMap;
use ordered_float::OrderedFloat;

use crate::error::{LayoutError, Result};
use crate::utils::{Position, round_rect, union_rects};

use super::elements::LTChar;
use super::params::DEFAULT_PRECISION;
use super::select::{Container, Node, Predicate, select_chars};

/// Font size as a hashable, ordered key.
pub type FontSize = OrderedFloat<f64>;

const REGULAR_WEIGHT: &str = "Regular";

/// Position of a node, rounded to the default precision.
pub fn position_of<'a, N: Into<Node<'a>>>(item: N) -> Result<Position> {
    position_with_precision(item, DEFAULT_PRECISION)
}

/// Position of a node, rounded to `digits` fractional digits.
///
/// Virtual characters have no geometry and are rejected.
pub fn position_with_precision<'a, N: Into<Node<'a>>>(item: N, digits: u32) -> Result<Position> {
    let node = item.into();
    match node.geometry() {
        Some(bbox) => Ok(round_rect(bbox, digits)),
        None => Err(LayoutError::InvalidArgumentType {
            expected: "positioned item",
            got: node.kind().name(),
        }),
    }
}

/// Font name without a subset prefix (`"ABCDEF+Helvetica"` is `"Helvetica"`).
pub fn fontname_of(c: &LTChar) -> &str {
    match c.fontname().split_once('+') {
        Some((_, name)) => name,
        None => c.fontname(),
    }
}

pub fn fontsize_of(c: &LTChar) -> f64 {
    c.size()
}

/// Weight suffix of the font name, or "Regular" when there is none.
pub fn fontweight_of(c: &LTChar) -> &str {
    match fontname_of(c).split_once('-') {
        Some((_, weight)) => weight,
        None => REGULAR_WEIGHT,
    }
}

/// Family part of the font name.
pub fn typeface_of(c: &LTChar) -> &str {
    let name = fontname_of(c);
    name.split_once('-').map_or(name, |(face, _)| face)
}

/// A strategy for collecting reduced values.
pub trait Accumulator<T> {
    fn accumulate<I: IntoIterator<Item = T>>(&mut self, values: I);
}

impl<T> Accumulator<T> for Vec<T> {
    fn accumulate<I: IntoIterator<Item = T>>(&mut self, values: I) {
        self.extend(values);
    }
}

impl<T: Ord> Accumulator<T> for BTreeSet<T> {
    fn accumulate<I: IntoIterator<Item = T>>(&mut self, values: I) {
        self.extend(values);
    }
}

impl<T: Eq + Hash> Accumulator<T> for HashSet<T> {
    fn accumulate<I: IntoIterator<Item = T>>(&mut self, values: I) {
        self.extend(values);
    }
}

impl<T: Eq + Hash> Accumulator<T> for HashMap<T, usize> {
    fn accumulate<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            *self.entry(value).or_insert(0) += 1;
        }
    }
}

impl<T: Eq + Hash> Accumulator<T> for IndexMap<T, usize> {
    fn accumulate<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            *self.entry(value).or_insert(0) += 1;
        }
    }
}

/// Collects the positions of `items`. Fails on the first virtual character.
pub fn reduce_positions<'a, A, I, N>(mut acc: A, items: I) -> Result<A>
where
    A: Accumulator<Position>,
    I: IntoIterator<Item = N>,
    N: Into<Node<'a>>,
{
    let positions = items
        .into_iter()
        .map(position_of)
        .collect::<Result<Vec<_>>>()?;
    acc.accumulate(positions);
    Ok(acc)
}

pub fn reduce_fontnames<'a, A, C>(mut acc: A, container: C, predicates: &[Predicate<'_>]) -> A
where
    A: Accumulator<String>,
    C: Container<'a>,
{
    let chars = select_chars(container, predicates);
    acc.accumulate(chars.into_iter().map(|c| fontname_of(c).to_string()));
    acc
}

pub fn reduce_fontsizes<'a, A, C>(mut acc: A, container: C, predicates: &[Predicate<'_>]) -> A
where
    A: Accumulator<FontSize>,
    C: Container<'a>,
{
    let chars = select_chars(container, predicates);
    acc.accumulate(chars.into_iter().map(|c| OrderedFloat(fontsize_of(c))));
    acc
}

pub fn reduce_fontweights<'a, A, C>(mut acc: A, container: C, predicates: &[Predicate<'_>]) -> A
where
    A: Accumulator<String>,
    C: Container<'a>,
{
    let chars = select_chars(container, predicates);
    acc.accumulate(chars.into_iter().map(|c| fontweight_of(c).to_string()));
    acc
}

pub fn reduce_typefaces<'a, A, C>(mut acc: A, container: C, predicates: &[Predicate<'_>]) -> A
where
    A: Accumulator<String>,
    C: Container<'a>,
{
    let chars = select_chars(container, predicates);
    acc.accumulate(chars.into_iter().map(|c| typeface_of(c).to_string()));
    acc
}

/// The single most frequent value of a tally.
pub(crate) fn mode_of<T: Clone>(counts: &IndexMap<T, usize>, attribute: &'static str) -> Result<T> {
    let Some(top) = counts.values().copied().max() else {
        return Err(LayoutError::EmptyInput(attribute));
    };
    let mut leaders = counts.iter().filter(|&(_, &count)| count == top);
    match (leaders.next(), leaders.count()) {
        (Some((value, _)), 0) => Ok(value.clone()),
        (_, rest) => Err(LayoutError::NoMode {
            attribute,
            candidates: rest + 1,
        }),
    }
}

pub fn most_common_fontname<'a, C: Container<'a>>(container: C) -> Result<String> {
    let counts = reduce_fontnames(IndexMap::new(), container, &[]);
    mode_of(&counts, "font name")
}

pub fn most_common_fontsize<'a, C: Container<'a>>(container: C) -> Result<f64> {
    let counts = reduce_fontsizes(IndexMap::new(), container, &[]);
    mode_of(&counts, "font size").map(OrderedFloat::into_inner)
}

pub fn most_common_fontweight<'a, C: Container<'a>>(container: C) -> Result<String> {
    let counts = reduce_fontweights(IndexMap::new(), container, &[]);
    mode_of(&counts, "font weight")
}

pub fn most_common_typeface<'a, C: Container<'a>>(container: C) -> Result<String> {
    let counts = reduce_typefaces(IndexMap::new(), container, &[]);
    mode_of(&counts, "typeface")
}

/// Smallest rectangle covering every item. None for no items.
pub fn estimate_bounding_box<'a, I, N>(items: I) -> Result<Option<Position>>
where
    I: IntoIterator<Item = N>,
    N: Into<Node<'a>>,
{
    let positions: Vec<Position> = reduce_positions(Vec::new(), items)?;
    Ok(union_rects(positions))
}

/// Smallest rectangle covering every node that has geometry.
pub(crate) fn covering_box(nodes: &[Node<'_>]) -> Option<Position> {
    union_rects(nodes.iter().filter_map(|n| n.geometry()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::elements::{LTAnno, LTPage, LTTextLineHorizontal};

    fn ch(x0: f64, text: &str, fontname: &str, size: f64) -> LTChar {
        LTChar::new((x0, 0.0, x0 + 5.0, size), text, fontname, size)
    }

    #[test]
    fn test_position_rounds_to_three_digits() {
        let c = LTChar::new((1.23456, 2.0, 3.99999, 4.5), "a", "F", 10.0);
        assert_eq!(position_of(&c), Ok((1.235, 2.0, 4.0, 4.5)));
    }

    #[test]
    fn test_position_of_anno_is_type_error() {
        let anno = LTAnno::new(" ");
        assert_eq!(
            position_of(&anno),
            Err(LayoutError::InvalidArgumentType {
                expected: "positioned item",
                got: "anno",
            })
        );
    }

    #[test]
    fn test_font_name_parts() {
        let c = ch(0.0, "a", "ABCDEF+Helvetica-Bold", 10.0);
        assert_eq!(fontname_of(&c), "Helvetica-Bold");
        assert_eq!(fontweight_of(&c), "Bold");
        assert_eq!(typeface_of(&c), "Helvetica");

        let plain = ch(0.0, "a", "Times", 10.0);
        assert_eq!(fontname_of(&plain), "Times");
        assert_eq!(fontweight_of(&plain), "Regular");
        assert_eq!(typeface_of(&plain), "Times");
    }

    #[test]
    fn test_accumulators() {
        let line = LTTextLineHorizontal::from_chars(vec![
            ch(0.0, "a", "Helvetica", 10.0),
            ch(5.0, "b", "Helvetica-Bold", 12.0),
            ch(10.0, "c", "Helvetica", 10.0),
        ]);
        let names: Vec<String> = reduce_fontnames(Vec::new(), &line, &[]);
        assert_eq!(names.len(), 3);
        let distinct: BTreeSet<String> = reduce_typefaces(BTreeSet::new(), &line, &[]);
        assert_eq!(distinct.len(), 1);
        let sizes: HashMap<FontSize, usize> = reduce_fontsizes(HashMap::new(), &line, &[]);
        assert_eq!(sizes[&OrderedFloat(10.0)], 2);
    }

    #[test]
    fn test_most_common() {
        let line = LTTextLineHorizontal::from_chars(vec![
            ch(0.0, "a", "Helvetica", 10.0),
            ch(5.0, "b", "Helvetica-Bold", 12.0),
            ch(10.0, "c", "Helvetica", 10.0),
        ]);
        assert_eq!(most_common_fontsize(&line), Ok(10.0));
        assert_eq!(most_common_fontname(&line), Ok("Helvetica".to_string()));
        assert_eq!(most_common_fontweight(&line), Ok("Regular".to_string()));
    }

    #[test]
    fn test_mode_errors() {
        let page = LTPage::new(1, (0.0, 0.0, 10.0, 10.0));
        assert_eq!(
            most_common_fontsize(&page),
            Err(LayoutError::EmptyInput("font size"))
        );

        let tied = LTTextLineHorizontal::from_chars(vec![
            ch(0.0, "a", "Helvetica", 10.0),
            ch(5.0, "b", "Times", 12.0),
        ]);
        assert_eq!(
            most_common_fontname(&tied),
            Err(LayoutError::NoMode {
                attribute: "font name",
                candidates: 2,
            })
        );
    }

    #[test]
    fn test_estimate_bounding_box() {
        let a = ch(0.0, "a", "F", 10.0);
        let b = ch(20.0, "b", "F", 12.0);
        assert_eq!(
            estimate_bounding_box(vec![&a, &b]),
            Ok(Some((0.0, 0.0, 25.0, 12.0)))
        );
        assert_eq!(estimate_bounding_box(Vec::<&LTChar>::new()), Ok(None));
    }
}
