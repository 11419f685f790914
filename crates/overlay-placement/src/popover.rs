//! Multi-candidate anchor selection for rich floating panels
//!
//! A popover carries an arrow and a body; each named anchor position places
//! that pair against the trigger. Candidates are tried in a fixed per-side
//! priority order, and when none fits the reference envelope completely the
//! one with the largest visible area wins and the panel is told to scroll
//! internally.

use overlay_geometry::{Rect, Size};

/// Primary side of the trigger a popover prefers to open on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

/// Named anchor position: primary side plus secondary alignment
///
/// Closed set; horizontal sides align the body's top/center/bottom to the
/// trigger, vertical sides align its left/center/right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnchorPosition {
    TopLeft,
    TopCenter,
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
    LeftTop,
    LeftCenter,
    LeftBottom,
    RightTop,
    RightCenter,
    RightBottom,
}

const TOP_PRIORITY: [AnchorPosition; 4] = [
    AnchorPosition::TopCenter,
    AnchorPosition::TopLeft,
    AnchorPosition::TopRight,
    AnchorPosition::BottomCenter,
];

const BOTTOM_PRIORITY: [AnchorPosition; 4] = [
    AnchorPosition::BottomCenter,
    AnchorPosition::BottomLeft,
    AnchorPosition::BottomRight,
    AnchorPosition::TopCenter,
];

const LEFT_PRIORITY: [AnchorPosition; 4] = [
    AnchorPosition::LeftCenter,
    AnchorPosition::LeftTop,
    AnchorPosition::LeftBottom,
    AnchorPosition::RightCenter,
];

const RIGHT_PRIORITY: [AnchorPosition; 4] = [
    AnchorPosition::RightCenter,
    AnchorPosition::RightTop,
    AnchorPosition::RightBottom,
    AnchorPosition::LeftCenter,
];

/// Ordered candidate list for a preferred side, most preferred first
///
/// Three same-side alignments followed by the opposite-side center fallback:
/// flip only when the preferred side cannot host any alignment.
pub fn candidate_priority(side: Side) -> &'static [AnchorPosition; 4] {
    match side {
        Side::Top => &TOP_PRIORITY,
        Side::Bottom => &BOTTOM_PRIORITY,
        Side::Left => &LEFT_PRIORITY,
        Side::Right => &RIGHT_PRIORITY,
    }
}

/// Recognized options for [`compute_best_position`]
#[derive(Debug, Clone, Copy, Default)]
pub struct PopoverOptions {
    /// Caller-forced position bypassing all selection logic
    pub fixed_internal_position: Option<AnchorPosition>,
    /// Panel renders in a portal: only the viewport constrains it, the
    /// container argument is disregarded
    pub render_with_portal: bool,
}

/// Placement decision for a popover
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopoverPlacement {
    pub internal_position: AnchorPosition,
    /// Panel does not fully fit and must scroll its content internally
    pub scrollable: bool,
    /// Rectangle actually available to the panel: the candidate's natural
    /// rectangle when it fits, otherwise the clipped visible rectangle
    pub bounding_offset: Rect,
}

/// Select the best anchor position for a popover around `trigger`
///
/// Tries the preferred side's candidates in priority order against the
/// intersection of `container` and `viewport`; the first full fit wins.
/// When nothing fits the candidate with the largest visible area is chosen
/// with `scrollable` set, ties broken by priority order. Total: every input
/// yields a defined placement.
pub fn compute_best_position(
    trigger: Rect,
    body: Size,
    arrow: Size,
    preferred: Side,
    container: Rect,
    viewport: Rect,
    options: &PopoverOptions,
) -> PopoverPlacement {
    let envelope = if options.render_with_portal {
        Some(viewport)
    } else {
        viewport.intersection(&container)
    };

    if let Some(position) = options.fixed_internal_position {
        let rect = candidate_rect(position, trigger, body, arrow);
        let (scrollable, bounding_offset) = clip_to_envelope(rect, envelope);
        return PopoverPlacement {
            internal_position: position,
            scrollable,
            bounding_offset,
        };
    }

    let candidates = candidate_priority(preferred);

    for &position in candidates {
        let rect = candidate_rect(position, trigger, body, arrow);
        if let Some(env) = envelope {
            if env.contains_rect(&rect) {
                tracing::debug!("Popover placed at {:?}", position);
                return PopoverPlacement {
                    internal_position: position,
                    scrollable: false,
                    bounding_offset: rect,
                };
            }
        }
    }

    // no candidate fits completely: keep the one with the largest visible
    // area, earlier candidates winning ties
    let mut best_position = candidates[0];
    let mut best_visible = Rect::ZERO;
    for &position in candidates {
        let rect = candidate_rect(position, trigger, body, arrow);
        if let Some(visible) = envelope.and_then(|env| env.intersection(&rect)) {
            if visible.area() > best_visible.area() {
                best_position = position;
                best_visible = visible;
            }
        }
    }

    tracing::debug!(
        "Popover fallback to {:?}, visible {}x{}",
        best_position,
        best_visible.width,
        best_visible.height
    );

    PopoverPlacement {
        internal_position: best_position,
        scrollable: true,
        bounding_offset: best_visible,
    }
}

/// Natural rectangle of body+arrow anchored at `position` against the trigger
fn candidate_rect(position: AnchorPosition, trigger: Rect, body: Size, arrow: Size) -> Rect {
    use AnchorPosition::*;

    // side offsets reserve room for the arrow between trigger and body
    let above = trigger.top - arrow.height - body.height;
    let below = trigger.bottom() + arrow.height;
    let before = trigger.left - arrow.width - body.width;
    let after = trigger.right() + arrow.width;

    let h_start = trigger.left;
    let h_center = trigger.left + (trigger.width - body.width) / 2.0;
    let h_end = trigger.right() - body.width;
    let v_start = trigger.top;
    let v_center = trigger.top + (trigger.height - body.height) / 2.0;
    let v_end = trigger.bottom() - body.height;

    let (top, left) = match position {
        TopLeft => (above, h_start),
        TopCenter => (above, h_center),
        TopRight => (above, h_end),
        BottomLeft => (below, h_start),
        BottomCenter => (below, h_center),
        BottomRight => (below, h_end),
        LeftTop => (v_start, before),
        LeftCenter => (v_center, before),
        LeftBottom => (v_end, before),
        RightTop => (v_start, after),
        RightCenter => (v_center, after),
        RightBottom => (v_end, after),
    };

    Rect::new(top, left, body.width, body.height)
}

fn clip_to_envelope(rect: Rect, envelope: Option<Rect>) -> (bool, Rect) {
    match envelope {
        Some(env) if env.contains_rect(&rect) => (false, rect),
        Some(env) => (true, env.intersection(&rect).unwrap_or(Rect::ZERO)),
        None => (true, Rect::ZERO),
    }
}
