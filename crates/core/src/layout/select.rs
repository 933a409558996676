//! Item selection over the layout element tree.
//!
//! A container is walked top-down and every node of the requested kind that
//! satisfies all predicates is returned in source order. Descent stops at the
//! first level that matches, so asking a page for text lines never yields
//! the characters inside them. Rectangles and curves have no descendants.

use crate::utils::{HasBBox, Interval, Rect};

use super::elements::{
    ItemKind, LTAnno, LTChar, LTCurve, LTItem, LTPage, LTRect, LTTextBoxHorizontal,
    LTTextLineHorizontal, TextLineElement,
};

/// A borrowed view of one node of the element tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node<'a> {
    Page(&'a LTPage),
    TextBox(&'a LTTextBoxHorizontal),
    TextLine(&'a LTTextLineHorizontal),
    Char(&'a LTChar),
    Anno(&'a LTAnno),
    Rect(&'a LTRect),
    Curve(&'a LTCurve),
}

impl<'a> Node<'a> {
    pub fn kind(&self) -> ItemKind {
        match self {
            Node::Page(_) => ItemKind::Page,
            Node::TextBox(_) => ItemKind::TextBox,
            Node::TextLine(_) => ItemKind::TextLine,
            Node::Char(_) => ItemKind::Char,
            Node::Anno(_) => ItemKind::Anno,
            Node::Rect(_) => ItemKind::Rect,
            Node::Curve(_) => ItemKind::Curve,
        }
    }

    /// Bounding box, or None for virtual characters and for lines or boxes
    /// that hold no real character.
    pub fn geometry(&self) -> Option<Rect> {
        match self {
            Node::Anno(_) => None,
            node => {
                let bbox = node.bbox();
                (bbox.0 <= bbox.2 && bbox.1 <= bbox.3).then_some(bbox)
            }
        }
    }

    /// Text carried by the node. Graphics and pages carry none.
    pub fn text(&self) -> Option<String> {
        match self {
            Node::TextBox(b) => Some(b.get_text()),
            Node::TextLine(l) => Some(l.get_text()),
            Node::Char(c) => Some(c.get_text().to_string()),
            Node::Anno(a) => Some(a.get_text().to_string()),
            Node::Page(_) | Node::Rect(_) | Node::Curve(_) => None,
        }
    }

    /// Pushes the direct children of this node onto `out`.
    pub fn children(&self, out: &mut Vec<Node<'a>>) {
        match *self {
            Node::Page(p) => out.extend(p.iter().map(Node::from)),
            Node::TextBox(b) => out.extend(b.iter().map(Node::TextLine)),
            Node::TextLine(l) => out.extend(l.iter().map(Node::from)),
            Node::Char(_) | Node::Anno(_) | Node::Rect(_) | Node::Curve(_) => {}
        }
    }
}

impl HasBBox for Node<'_> {
    fn x0(&self) -> f64 {
        match self {
            Node::Page(p) => p.x0(),
            Node::TextBox(b) => b.x0(),
            Node::TextLine(l) => l.x0(),
            Node::Char(c) => c.x0(),
            Node::Anno(_) => 0.0,
            Node::Rect(r) => r.x0(),
            Node::Curve(c) => c.x0(),
        }
    }
    fn y0(&self) -> f64 {
        match self {
            Node::Page(p) => p.y0(),
            Node::TextBox(b) => b.y0(),
            Node::TextLine(l) => l.y0(),
            Node::Char(c) => c.y0(),
            Node::Anno(_) => 0.0,
            Node::Rect(r) => r.y0(),
            Node::Curve(c) => c.y0(),
        }
    }
    fn x1(&self) -> f64 {
        match self {
            Node::Page(p) => p.x1(),
            Node::TextBox(b) => b.x1(),
            Node::TextLine(l) => l.x1(),
            Node::Char(c) => c.x1(),
            Node::Anno(_) => 0.0,
            Node::Rect(r) => r.x1(),
            Node::Curve(c) => c.x1(),
        }
    }
    fn y1(&self) -> f64 {
        match self {
            Node::Page(p) => p.y1(),
            Node::TextBox(b) => b.y1(),
            Node::TextLine(l) => l.y1(),
            Node::Char(c) => c.y1(),
            Node::Anno(_) => 0.0,
            Node::Rect(r) => r.y1(),
            Node::Curve(c) => c.y1(),
        }
    }
}

impl<'a> From<&'a LTItem> for Node<'a> {
    fn from(item: &'a LTItem) -> Self {
        match item {
            LTItem::Char(c) => Node::Char(c),
            LTItem::Anno(a) => Node::Anno(a),
            LTItem::Curve(c) => Node::Curve(c),
            LTItem::Rect(r) => Node::Rect(r),
            LTItem::TextLine(l) => Node::TextLine(l),
            LTItem::TextBox(b) => Node::TextBox(b),
            LTItem::Page(p) => Node::Page(p),
        }
    }
}

impl<'a> From<&'a TextLineElement> for Node<'a> {
    fn from(element: &'a TextLineElement) -> Self {
        match element {
            TextLineElement::Char(c) => Node::Char(c),
            TextLineElement::Anno(a) => Node::Anno(a),
        }
    }
}

macro_rules! node_from_ref {
    ($type:ty, $variant:ident) => {
        impl<'a> From<&'a $type> for Node<'a> {
            fn from(value: &'a $type) -> Self {
                Node::$variant(value)
            }
        }
    };
}

node_from_ref!(LTPage, Page);
node_from_ref!(LTTextBoxHorizontal, TextBox);
node_from_ref!(LTTextLineHorizontal, TextLine);
node_from_ref!(LTChar, Char);
node_from_ref!(LTAnno, Anno);
node_from_ref!(LTRect, Rect);
node_from_ref!(LTCurve, Curve);

/// Anything that can be searched: a single node, a page, or a sequence of
/// items or pages.
pub trait Container<'a> {
    /// The top-level nodes of the container, in source order.
    fn nodes(self) -> Vec<Node<'a>>;
}

impl<'a> Container<'a> for Node<'a> {
    fn nodes(self) -> Vec<Node<'a>> {
        vec![self]
    }
}

impl<'a> Container<'a> for &'a LTItem {
    fn nodes(self) -> Vec<Node<'a>> {
        vec![Node::from(self)]
    }
}

impl<'a> Container<'a> for &'a LTPage {
    fn nodes(self) -> Vec<Node<'a>> {
        vec![Node::Page(self)]
    }
}

impl<'a> Container<'a> for &'a LTTextBoxHorizontal {
    fn nodes(self) -> Vec<Node<'a>> {
        vec![Node::TextBox(self)]
    }
}

impl<'a> Container<'a> for &'a LTTextLineHorizontal {
    fn nodes(self) -> Vec<Node<'a>> {
        vec![Node::TextLine(self)]
    }
}

impl<'a> Container<'a> for &'a [LTItem] {
    fn nodes(self) -> Vec<Node<'a>> {
        self.iter().map(Node::from).collect()
    }
}

impl<'a> Container<'a> for &'a Vec<LTItem> {
    fn nodes(self) -> Vec<Node<'a>> {
        self.as_slice().nodes()
    }
}

impl<'a> Container<'a> for &'a [LTPage] {
    fn nodes(self) -> Vec<Node<'a>> {
        self.iter().map(Node::Page).collect()
    }
}

impl<'a> Container<'a> for &'a Vec<LTPage> {
    fn nodes(self) -> Vec<Node<'a>> {
        self.as_slice().nodes()
    }
}

impl<'a> Container<'a> for &[Node<'a>] {
    fn nodes(self) -> Vec<Node<'a>> {
        self.to_vec()
    }
}

impl<'a> Container<'a> for &Vec<Node<'a>> {
    fn nodes(self) -> Vec<Node<'a>> {
        self.clone()
    }
}

impl<'a> Container<'a> for Vec<Node<'a>> {
    fn nodes(self) -> Vec<Node<'a>> {
        self
    }
}

/// The items a computation works on: every page stands for its children.
pub fn top_level<'a, C: Container<'a>>(container: C) -> Vec<Node<'a>> {
    let mut out = Vec::new();
    for node in container.nodes() {
        match node {
            Node::Page(page) => out.extend(page.iter().map(Node::from)),
            node => out.push(node),
        }
    }
    out
}

/// A filter over nodes. Predicates passed together are ANDed.
pub type Predicate<'p> = &'p dyn Fn(&Node<'_>) -> bool;

/// Returns every node of `kind` in `container` that satisfies all predicates.
pub fn select<'a, C: Container<'a>>(
    container: C,
    kind: ItemKind,
    predicates: &[Predicate<'_>],
) -> Vec<Node<'a>> {
    let mut out = Vec::new();
    let mut stack = container.nodes();
    stack.reverse();

    let mut children = Vec::new();
    while let Some(node) = stack.pop() {
        if node.kind() == kind {
            if predicates.iter().all(|p| p(&node)) {
                out.push(node);
            }
            continue;
        }
        children.clear();
        node.children(&mut children);
        stack.extend(children.drain(..).rev());
    }
    out
}

pub fn select_textboxes<'a, C: Container<'a>>(
    container: C,
    predicates: &[Predicate<'_>],
) -> Vec<&'a LTTextBoxHorizontal> {
    select(container, ItemKind::TextBox, predicates)
        .into_iter()
        .filter_map(|node| match node {
            Node::TextBox(b) => Some(b),
            _ => None,
        })
        .collect()
}

pub fn select_lines<'a, C: Container<'a>>(
    container: C,
    predicates: &[Predicate<'_>],
) -> Vec<&'a LTTextLineHorizontal> {
    select(container, ItemKind::TextLine, predicates)
        .into_iter()
        .filter_map(|node| match node {
            Node::TextLine(l) => Some(l),
            _ => None,
        })
        .collect()
}

pub fn select_chars<'a, C: Container<'a>>(
    container: C,
    predicates: &[Predicate<'_>],
) -> Vec<&'a LTChar> {
    select(container, ItemKind::Char, predicates)
        .into_iter()
        .filter_map(|node| match node {
            Node::Char(c) => Some(c),
            _ => None,
        })
        .collect()
}

pub fn select_rects<'a, C: Container<'a>>(
    container: C,
    predicates: &[Predicate<'_>],
) -> Vec<&'a LTRect> {
    select(container, ItemKind::Rect, predicates)
        .into_iter()
        .filter_map(|node| match node {
            Node::Rect(r) => Some(r),
            _ => None,
        })
        .collect()
}

/// The axis an interval is measured along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// x0..x1
    Horizontal,
    /// y0..y1
    Vertical,
}

impl Axis {
    /// Projects a rectangle onto this axis.
    pub fn project(self, rect: Rect) -> Interval {
        match self {
            Axis::Horizontal => (rect.0, rect.2),
            Axis::Vertical => (rect.1, rect.3),
        }
    }
}

fn is_blank_text(text: Option<String>) -> bool {
    text.is_none_or(|t| t.trim().is_empty())
}

/// Node lies inside `boundary` widened by `margin`. No boundary accepts all.
pub fn within(boundary: Option<Rect>, margin: f64) -> impl Fn(&Node<'_>) -> bool {
    move |node: &Node<'_>| {
        let Some((bx0, by0, bx1, by1)) = boundary else {
            return true;
        };
        node.geometry().is_some_and(|(x0, y0, x1, y1)| {
            x0 >= bx0 - margin && y0 >= by0 - margin && x1 <= bx1 + margin && y1 <= by1 + margin
        })
    }
}

/// Node extent along `axis` lies inside `interval` widened by `margin`.
pub fn between(interval: Interval, axis: Axis, margin: f64) -> impl Fn(&Node<'_>) -> bool {
    move |node: &Node<'_>| {
        node.geometry().is_some_and(|bbox| {
            let (lo, hi) = axis.project(bbox);
            lo >= interval.0 - margin && hi <= interval.1 + margin
        })
    }
}

pub fn not_blank() -> impl Fn(&Node<'_>) -> bool {
    |node: &Node<'_>| !is_blank_text(node.text())
}

pub fn is_blank() -> impl Fn(&Node<'_>) -> bool {
    |node: &Node<'_>| is_blank_text(node.text())
}

/// Stripped text equals `expected`.
pub fn text_equals(expected: &str) -> impl Fn(&Node<'_>) -> bool + '_ {
    move |node: &Node<'_>| node.text().is_some_and(|t| t.trim() == expected)
}

/// Text contains any of `needles`.
pub fn text_includes<'s>(needles: &'s [&'s str]) -> impl Fn(&Node<'_>) -> bool + 's {
    move |node: &Node<'_>| {
        node.text()
            .is_some_and(|t| needles.iter().any(|needle| t.contains(needle)))
    }
}

pub fn taller_than(height: f64) -> impl Fn(&Node<'_>) -> bool {
    move |node: &Node<'_>| node.geometry().is_some() && node.height() > height
}

pub fn shorter_than(height: f64) -> impl Fn(&Node<'_>) -> bool {
    move |node: &Node<'_>| node.geometry().is_some() && node.height() < height
}

pub fn wider_than(width: f64) -> impl Fn(&Node<'_>) -> bool {
    move |node: &Node<'_>| node.geometry().is_some() && node.width() > width
}

pub fn thinner_than(width: f64) -> impl Fn(&Node<'_>) -> bool {
    move |node: &Node<'_>| node.geometry().is_some() && node.width() < width
}
