//! Integration tests - positioning decisions across the whole engine
//!
//! Exercises the public API the way the component layer calls it: freshly
//! measured boxes in, a placement decision out.

use overlay_engine::{
    candidate_priority, compute_best_position, compute_constrained_fit, intersect_all,
    AnchorPosition, FitOptions, PopoverOptions, Rect, Side, Size,
};

// ============================================================================
// RECTANGLE INTERSECTION
// ============================================================================

#[test]
fn test_intersection_order_independence() {
    let rects = [
        Rect::new(0.0, 0.0, 800.0, 600.0),
        Rect::new(50.0, 100.0, 700.0, 600.0),
        Rect::new(20.0, 0.0, 500.0, 400.0),
    ];
    let permuted = [rects[2], rects[0], rects[1]];

    assert_eq!(intersect_all(&rects), intersect_all(&permuted));
    assert_eq!(
        intersect_all(&rects),
        Some(Rect::new(50.0, 100.0, 400.0, 370.0))
    );
}

// ============================================================================
// CONSTRAINED FIT
// ============================================================================

#[test]
fn test_empty_ancestors_means_viewport_alone() {
    let viewport = Rect::new(0.0, 0.0, 1000.0, 1000.0);
    let trigger = Rect::new(100.0, 100.0, 100.0, 30.0);
    let content = Size::new(100.0, 400.0);

    let bare = compute_constrained_fit(trigger, content, viewport, &[], &FitOptions::default());
    let with_viewport_ancestor =
        compute_constrained_fit(trigger, content, viewport, &[viewport], &FitOptions::default());

    assert_eq!(bare, with_viewport_ancestor);
}

#[test]
fn test_ample_space_below_is_not_clamped() {
    // 500px below the trigger, content needs less
    let viewport = Rect::new(0.0, 0.0, 1000.0, 700.0);
    let trigger = Rect::new(170.0, 100.0, 100.0, 30.0);
    let fit = compute_constrained_fit(
        trigger,
        Size::new(100.0, 350.0),
        viewport,
        &[],
        &FitOptions::default(),
    );

    assert!(!fit.drop_up);
    assert_eq!(fit.height, 350.0);
}

#[test]
fn test_larger_space_above_wins_when_below_insufficient() {
    let viewport = Rect::new(0.0, 0.0, 1000.0, 1000.0);
    let trigger = Rect::new(600.0, 100.0, 100.0, 30.0);
    let fit = compute_constrained_fit(
        trigger,
        Size::new(100.0, 700.0),
        viewport,
        &[],
        &FitOptions::default(),
    );

    // 370px below, 600px above, content fits neither
    assert!(fit.drop_up);
    assert_eq!(fit.height, 600.0);
}

// ============================================================================
// MULTI-CANDIDATE SELECTION
// ============================================================================

#[test]
fn test_preferred_top_with_ample_space() {
    let viewport = Rect::new(0.0, 0.0, 1000.0, 1000.0);
    let placement = compute_best_position(
        Rect::new(500.0, 500.0, 25.0, 25.0),
        Size::new(250.0, 250.0),
        Size::new(15.0, 15.0),
        Side::Top,
        viewport,
        viewport,
        &PopoverOptions::default(),
    );

    assert_eq!(placement.internal_position, candidate_priority(Side::Top)[0]);
    assert_eq!(placement.internal_position, AnchorPosition::TopCenter);
    assert!(!placement.scrollable);
}

#[test]
fn test_preferred_top_without_headroom_flips_to_bottom_fallback() {
    let viewport = Rect::new(0.0, 0.0, 1000.0, 1000.0);
    let placement = compute_best_position(
        Rect::new(200.0, 500.0, 25.0, 25.0),
        Size::new(250.0, 250.0),
        Size::new(15.0, 15.0),
        Side::Top,
        viewport,
        viewport,
        &PopoverOptions::default(),
    );

    assert_eq!(placement.internal_position, candidate_priority(Side::Top)[3]);
    assert_eq!(placement.internal_position, AnchorPosition::BottomCenter);
}

#[test]
fn test_corner_fallback_maximizes_visible_area() {
    let viewport = Rect::new(0.0, 0.0, 600.0, 600.0);
    let trigger = Rect::new(560.0, 560.0, 25.0, 25.0);
    let body = Size::new(500.0, 500.0);
    let arrow = Size::new(15.0, 15.0);

    let placement = compute_best_position(
        trigger,
        body,
        arrow,
        Side::Bottom,
        viewport,
        viewport,
        &PopoverOptions::default(),
    );
    assert!(placement.scrollable);

    // the winner's visible area is maximal over the whole candidate list
    let chosen_area = placement.bounding_offset.area();
    for &position in candidate_priority(Side::Bottom) {
        let options = PopoverOptions {
            fixed_internal_position: Some(position),
            ..Default::default()
        };
        let other =
            compute_best_position(trigger, body, arrow, Side::Bottom, viewport, viewport, &options);
        assert!(
            chosen_area >= other.bounding_offset.area(),
            "{:?} beats the chosen candidate",
            position
        );
    }
}

#[test]
fn test_fixed_position_wins_over_preference() {
    let viewport = Rect::new(0.0, 0.0, 1000.0, 1000.0);
    let options = PopoverOptions {
        fixed_internal_position: Some(AnchorPosition::LeftBottom),
        ..Default::default()
    };
    for preferred in [Side::Top, Side::Right, Side::Bottom, Side::Left] {
        let placement = compute_best_position(
            Rect::new(500.0, 500.0, 25.0, 25.0),
            Size::new(250.0, 250.0),
            Size::new(15.0, 15.0),
            preferred,
            viewport,
            viewport,
            &options,
        );
        assert_eq!(placement.internal_position, AnchorPosition::LeftBottom);
    }
}

#[test]
fn test_portal_rendering_is_container_independent() {
    let viewport = Rect::new(0.0, 0.0, 1000.0, 1000.0);
    let options = PopoverOptions {
        render_with_portal: true,
        ..Default::default()
    };
    let containers = [
        Rect::new(0.0, 0.0, 10.0, 10.0),
        Rect::new(490.0, 490.0, 50.0, 50.0),
        Rect::new(3000.0, 3000.0, 5.0, 5.0),
    ];

    let reference = compute_best_position(
        Rect::new(500.0, 500.0, 25.0, 25.0),
        Size::new(250.0, 250.0),
        Size::new(15.0, 15.0),
        Side::Bottom,
        containers[0],
        viewport,
        &options,
    );
    for container in &containers[1..] {
        let placement = compute_best_position(
            Rect::new(500.0, 500.0, 25.0, 25.0),
            Size::new(250.0, 250.0),
            Size::new(15.0, 15.0),
            Side::Bottom,
            *container,
            viewport,
            &options,
        );
        assert_eq!(placement, reference);
    }
}
