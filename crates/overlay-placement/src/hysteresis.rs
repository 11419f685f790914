//! Drop-direction hysteresis
//!
//! Opening a panel can itself change the available space, typically by
//! introducing a document scrollbar, and a naive recomputation then
//! oscillates between dropping down and dropping up on every scroll event.
//! The memory below makes leaving the drop-up state cost an extra scrollbar
//! allowance; entering it costs nothing.

use overlay_geometry::{Rect, Size};

use crate::dropdown::{available_space, compute_constrained_fit, DropdownFit, FitOptions};

/// Extra space below the trigger required before a drop-up panel returns to
/// dropping down, in CSS pixels (a typical desktop scrollbar thickness)
pub const SCROLLBAR_ALLOWANCE: f32 = 17.0;

/// Memory of the previous drop direction, owned by the caller
///
/// Pass the same instance by `&mut` across recomputations of the same panel;
/// a fresh instance starts in the default drop-down state.
#[derive(Debug, Clone, Copy, Default)]
pub struct DropDirectionMemory {
    last_drop_up: bool,
}

impl DropDirectionMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Direction recorded by the most recent computation
    pub fn last_drop_up(&self) -> bool {
        self.last_drop_up
    }

    /// [`compute_constrained_fit`] with asymmetric switching resistance
    ///
    /// Once a panel has dropped up, it returns to dropping down only when
    /// the space below clears the natural height plus
    /// [`SCROLLBAR_ALLOWANCE`]; the switch into drop-up takes no margin.
    pub fn compute_with_memory(
        &mut self,
        trigger: Rect,
        content: Size,
        viewport: Rect,
        ancestors: &[Rect],
        options: &FitOptions,
    ) -> DropdownFit {
        let mut fit = compute_constrained_fit(trigger, content, viewport, ancestors, options);

        if self.last_drop_up && !fit.drop_up {
            let space = available_space(trigger, viewport, ancestors);
            if space.below < content.height + SCROLLBAR_ALLOWANCE {
                tracing::debug!("Holding drop-up within scrollbar allowance");
                fit.drop_up = true;
                fit.height = content.height.min(space.above);
            }
        }

        self.last_drop_up = fit.drop_up;
        fit
    }
}
