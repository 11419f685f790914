//! Overlay Engine
//!
//! Pure positioning decisions for floating panels anchored to a trigger
//! element. The component layer measures boxes and listens for scroll or
//! resize; this crate only answers "where does the panel go":
//! - [`compute_constrained_fit`] for simple panels (menus, suggestion lists)
//! - [`compute_best_position`] for popovers with an arrow
//! - [`DropDirectionMemory`] for oscillation-free recomputation
//!
//! All coordinates are CSS pixels, origin top-left.

pub use overlay_geometry::{intersect_all, Rect, Size};
pub use overlay_placement::{
    candidate_priority, compute_best_position, compute_constrained_fit, AnchorPosition,
    DropDirectionMemory, DropdownFit, FitOptions, PopoverOptions, PopoverPlacement, Side,
    MIN_BREAKPOINT_WIDTH, SCROLLBAR_ALLOWANCE,
};
