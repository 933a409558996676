//! Layout element types consumed by the table inference engine.
//!
//! These mirror the objects a page decoder produces:
//! - LTComponent: Base type for objects with bounding boxes
//! - LTAnno: Virtual characters (spaces, newlines) without a bounding box
//! - LTChar: Actual characters with font name and size
//! - LTTextLineHorizontal: A line of text
//! - LTTextBoxHorizontal: A group of text lines
//! - LTCurve, LTRect: Graphical elements (ruling lines are thin rectangles)
//! - LTPage: Page container
//! - LTItem: Enum to represent any layout object

/// Implements HasBBox trait by delegating to a field.
///
/// # Field access mode
/// Use when the field has direct `.x0`, `.y0`, `.x1`, `.y1` fields:
/// ```ignore
/// impl_has_bbox_delegate!(LTCurve, component);
/// // expands to: self.component.x0
/// ```
///
/// # Method call mode
/// Use when the field has `.x0()`, `.y0()`, `.x1()`, `.y1()` methods:
/// ```ignore
/// impl_has_bbox_delegate!(LTRect, curve, method);
/// // expands to: self.curve.x0()
/// ```
macro_rules! impl_has_bbox_delegate {
    ($type:ty, $field:ident, method) => {
        impl crate::utils::HasBBox for $type {
            fn x0(&self) -> f64 {
                self.$field.x0()
            }
            fn y0(&self) -> f64 {
                self.$field.y0()
            }
            fn x1(&self) -> f64 {
                self.$field.x1()
            }
            fn y1(&self) -> f64 {
                self.$field.y1()
            }
        }
    };
    ($type:ty, $field:ident) => {
        impl crate::utils::HasBBox for $type {
            fn x0(&self) -> f64 {
                self.$field.x0
            }
            fn y0(&self) -> f64 {
                self.$field.y0
            }
            fn x1(&self) -> f64 {
                self.$field.x1
            }
            fn y1(&self) -> f64 {
                self.$field.y1
            }
        }
    };
}

#[allow(unused_imports)]
pub(crate) use impl_has_bbox_delegate;

mod character;
mod component;
mod container;
mod graphics;
mod item;
mod textbox;
mod textline;

pub use character::{LTAnno, LTChar};
pub use component::LTComponent;
pub use container::LTPage;
pub use graphics::{LTCurve, LTRect};
pub use item::{ItemKind, LTItem};
pub use textbox::LTTextBoxHorizontal;
pub use textline::{LTTextLineHorizontal, TextLineElement};
