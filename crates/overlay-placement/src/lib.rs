//! Overlay Placement
//!
//! Pure placement decisions for trigger-anchored floating panels.
//! It implements:
//! - Constrained-fit calculation for simple panels (menus, suggestion lists):
//!   drop direction, horizontal flip, clamped width/height
//! - Multi-candidate anchor selection for rich panels (popovers with an
//!   arrow): ordered named positions with a largest-visible-area fallback
//! - Drop-direction hysteresis to keep repeated recomputation from
//!   oscillating when the panel itself changes the available space
//!
//! Every entry point is a pure, total function of freshly measured boxes;
//! callers own all measurement and event plumbing.

mod dropdown;
mod hysteresis;
mod popover;

pub use dropdown::{compute_constrained_fit, DropdownFit, FitOptions, MIN_BREAKPOINT_WIDTH};
pub use hysteresis::{DropDirectionMemory, SCROLLBAR_ALLOWANCE};
pub use popover::{
    candidate_priority, compute_best_position, AnchorPosition, PopoverOptions, PopoverPlacement,
    Side,
};
