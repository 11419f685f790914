//! Constrained-fit calculation for simple trigger-anchored panels
//!
//! Decides whether a menu opens below or above its trigger, whether it flips
//! to the left, and what width/height it gets once clamped to the common
//! visible region of the viewport and every scroll/clip ancestor.

use overlay_geometry::{intersect_all, Rect, Size};

/// Smallest supported viewport breakpoint, in CSS pixels
///
/// Upper bound for panel growth past the trigger width when
/// [`FitOptions::stretch_beyond_trigger_width`] is set.
pub const MIN_BREAKPOINT_WIDTH: f32 = 320.0;

/// Recognized options for [`compute_constrained_fit`]
#[derive(Debug, Clone, Copy, Default)]
pub struct FitOptions {
    /// Floor below which the panel will not shrink, capped at the trigger width
    pub min_width: Option<f32>,
    /// Bias horizontal centering over edge alignment when the panel is wider
    /// than the trigger
    pub prefer_center: bool,
    /// Allow the panel to grow past the trigger width, up to
    /// [`MIN_BREAKPOINT_WIDTH`]
    pub stretch_beyond_trigger_width: bool,
}

/// Placement decision for a simple trigger-anchored panel
///
/// `width` and `height` never exceed the corresponding envelope dimension; a
/// `height` smaller than the content's natural height is the signal that the
/// panel will need internal scrolling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropdownFit {
    /// Panel opens above the trigger instead of below
    pub drop_up: bool,
    /// Panel's right edge anchors to the trigger's right edge
    pub drop_left: bool,
    pub width: f32,
    pub height: f32,
    /// Centering offset relative to the trigger's left edge, present only
    /// when a centered placement was produced
    pub left: Option<f32>,
}

/// Free space around the trigger inside the clipping envelope
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct AvailableSpace {
    /// Between the envelope's top edge and the trigger's top edge
    pub above: f32,
    /// Between the trigger's bottom edge and the envelope's bottom edge
    pub below: f32,
    /// Between the envelope's left edge and the trigger's right edge
    pub left_of: f32,
    /// Between the trigger's left edge and the envelope's right edge
    pub right_of: f32,
    pub envelope: Option<Rect>,
}

/// Measure the free space around `trigger` within the intersection of the
/// viewport and every clipping ancestor
///
/// A disjoint chain (no common visible area) degrades to zero space in every
/// direction rather than failing.
pub(crate) fn available_space(trigger: Rect, viewport: Rect, ancestors: &[Rect]) -> AvailableSpace {
    let mut boxes = Vec::with_capacity(ancestors.len() + 1);
    boxes.push(viewport);
    boxes.extend_from_slice(ancestors);

    match intersect_all(&boxes) {
        Some(env) => AvailableSpace {
            above: (trigger.top - env.top).max(0.0),
            below: (env.bottom() - trigger.bottom()).max(0.0),
            left_of: (trigger.right() - env.left).max(0.0),
            right_of: (env.right() - trigger.left).max(0.0),
            envelope: Some(env),
        },
        None => AvailableSpace::default(),
    }
}

/// Compute drop direction and clamped dimensions for a trigger-anchored panel
///
/// The envelope is the intersection of `viewport` with every rectangle in
/// `ancestors`; an empty `ancestors` list means the viewport alone
/// constrains. Total: every input yields a defined, best-effort placement.
pub fn compute_constrained_fit(
    trigger: Rect,
    content: Size,
    viewport: Rect,
    ancestors: &[Rect],
    options: &FitOptions,
) -> DropdownFit {
    let space = available_space(trigger, viewport, ancestors);

    let (drop_up, height) = vertical_fit(content.height, &space);

    let floor = options.min_width.unwrap_or(0.0).clamp(0.0, trigger.width);
    let desired = content.width.max(floor);

    let mut drop_left = false;
    let mut centered_in_envelope = false;
    let mut left = None;
    let mut width = desired;

    // The flip decision is made against the natural (floored) width; the
    // trigger-width cap below applies afterwards. A trigger flush against
    // the envelope's right edge therefore reports a flip even when the final
    // width equals the trigger width. Known historical quirk, kept for
    // compatibility with existing layouts.
    if desired <= space.right_of {
        // opens rightward from the trigger's left edge
    } else if desired <= space.left_of {
        drop_left = true;
    } else if let Some(env) = space.envelope {
        // fits on neither side: center within the envelope at the widest
        // size the envelope allows
        centered_in_envelope = true;
        width = desired.min(env.width);
    } else {
        width = 0.0;
    }

    let cap = if options.stretch_beyond_trigger_width && content.width > trigger.width {
        MIN_BREAKPOINT_WIDTH.max(trigger.width)
    } else {
        trigger.width
    };
    width = width.min(cap.max(floor));

    if centered_in_envelope {
        // the offset derives from the final width, after the cap above
        if let Some(env) = space.envelope {
            left = Some(env.left + (env.width - width) / 2.0 - trigger.left);
        }
    } else {
        width = width.min(space.right_of.max(space.left_of));
    }

    // centering wins over trigger-width matching: a panel naturally wider
    // than the trigger keeps its width when it fits centered on both sides
    if options.prefer_center && !centered_in_envelope && desired > trigger.width {
        if let Some(env) = space.envelope {
            let offset = (trigger.width - desired) / 2.0;
            let centered_left = trigger.left + offset;
            if centered_left >= env.left && centered_left + desired <= env.right() {
                drop_left = false;
                left = Some(offset);
                width = desired;
            }
        }
    }

    tracing::debug!(
        "Dropdown fit: drop_up={} drop_left={} {}x{}",
        drop_up,
        drop_left,
        width,
        height
    );

    DropdownFit {
        drop_up,
        drop_left,
        width,
        height,
        left,
    }
}

/// Pick a vertical side and clamp the height to it
///
/// Prefers dropping down; flips up only when the content fits above but not
/// below; when it fits on neither side the larger side wins with the height
/// clamped to that side's space.
fn vertical_fit(natural_height: f32, space: &AvailableSpace) -> (bool, f32) {
    if space.below >= natural_height {
        (false, natural_height)
    } else if space.above >= natural_height {
        (true, natural_height)
    } else if space.above > space.below {
        (true, space.above)
    } else {
        (false, space.below)
    }
}
