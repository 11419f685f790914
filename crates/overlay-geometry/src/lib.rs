//! Overlay Geometry
//!
//! Axis-aligned rectangle primitives shared by the overlay placement
//! algorithms. All values are in CSS pixels with the origin at the top-left
//! corner (positive y extends downward).

mod rect;

pub use rect::{intersect_all, Rect, Size};
