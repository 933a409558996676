//! Page container.

use crate::utils::Rect;

use super::component::LTComponent;
use super::item::LTItem;

/// Represents an entire page.
///
/// An LTPage can be iterated to obtain child objects like
/// LTTextBoxHorizontal, LTRect and LTCurve. Decoders that skip text-box
/// grouping may place LTTextLineHorizontal or LTChar items directly on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct LTPage {
    component: LTComponent,
    items: Vec<LTItem>,
    /// Page identifier (usually 1-based page number)
    pub pageid: i32,
}

impl LTPage {
    pub fn new(pageid: i32, bbox: Rect) -> Self {
        Self {
            component: LTComponent::new(bbox),
            items: Vec::new(),
            pageid,
        }
    }

    pub fn bbox(&self) -> Rect {
        self.component.bbox()
    }

    /// Adds an item to the page.
    pub fn add(&mut self, item: LTItem) {
        self.items.push(item);
    }

    /// Returns an iterator over contained items.
    pub fn iter(&self) -> impl Iterator<Item = &LTItem> {
        self.items.iter()
    }

    /// Returns the contained items as a slice.
    pub fn items(&self) -> &[LTItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Extend<LTItem> for LTPage {
    fn extend<T: IntoIterator<Item = LTItem>>(&mut self, iter: T) {
        self.items.extend(iter);
    }
}

impl<'a> IntoIterator for &'a LTPage {
    type Item = &'a LTItem;
    type IntoIter = std::slice::Iter<'a, LTItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl_has_bbox_delegate!(LTPage, component);
