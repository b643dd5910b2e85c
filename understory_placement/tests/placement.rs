// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for `understory_placement`.
//!
//! These check the resolver against arbitrary panel/viewport pairs rather than
//! hand-picked rectangles.

use kurbo::{Rect, Size};
use proptest::prelude::*;
use understory_placement::{
    Orientation, Overflow, overflow, resolve, resolved_root_offsets, resolved_submenu_offsets,
};

const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1024.0, 768.0);

fn panel() -> impl Strategy<Value = Rect> {
    (-500.0..1500.0_f64, -500.0..1200.0_f64, 1.0..600.0_f64, 1.0..600.0_f64)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, x + w, y + h))
}

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![
        Just(Orientation::None),
        Just(Orientation::FlipTop),
        Just(Orientation::FlipBottom),
        Just(Orientation::FlipLeft),
        Just(Orientation::FlipRight),
    ]
}

/// Panels whose bottom edge is below the viewport while the top edge is inside.
fn bottom_overflowing(x: std::ops::Range<f64>, w: std::ops::Range<f64>) -> impl Strategy<Value = Rect> {
    (x, w, 0.0..768.0_f64, 1.0..600.0_f64)
        .prop_map(|(x, w, y0, extra)| Rect::new(x, y0, x + w, VIEWPORT.y1 + extra))
}

proptest! {
    #[test]
    fn resolve_is_idempotent(panel in panel()) {
        prop_assert_eq!(resolve(panel, VIEWPORT), resolve(panel, VIEWPORT));
    }

    #[test]
    fn bottom_overflow_with_top_inside_flips_top(panel in bottom_overflowing(-500.0..1500.0, 1.0..600.0)) {
        prop_assert_eq!(resolve(panel, VIEWPORT), Orientation::FlipTop);
    }

    #[test]
    fn right_overflow_with_left_inside_flips_left(
        x0 in 0.0..1024.0_f64,
        extra in 1.0..600.0_f64,
        y0 in 0.0..384.0_f64,
        h in 1.0..384.0_f64,
    ) {
        let panel = Rect::new(x0, y0, VIEWPORT.x1 + extra, y0 + h);
        prop_assert_eq!(overflow(panel, VIEWPORT), Overflow::RIGHT);
        prop_assert_eq!(resolve(panel, VIEWPORT), Orientation::FlipLeft);
    }

    #[test]
    fn contained_panels_never_flip(
        x0 in 0.0..512.0_f64,
        w in 1.0..512.0_f64,
        y0 in 0.0..384.0_f64,
        h in 1.0..384.0_f64,
    ) {
        let panel = Rect::new(x0, y0, x0 + w, y0 + h);
        prop_assert_eq!(overflow(panel, VIEWPORT), Overflow::empty());
        prop_assert_eq!(resolve(panel, VIEWPORT), Orientation::None);
    }

    #[test]
    fn vertical_overflow_wins_over_horizontal(panel in bottom_overflowing(600.0..1000.0, 500.0..900.0)) {
        prop_assert!(overflow(panel, VIEWPORT).contains(Overflow::RIGHT));
        prop_assert_eq!(resolve(panel, VIEWPORT), Orientation::FlipTop);
    }

    #[test]
    fn zero_width_panels_resolve_to_none(x in -500.0..1500.0_f64, y in -500.0..1500.0_f64, h in 0.0..900.0_f64) {
        let panel = Rect::new(x, y, x, y + h);
        prop_assert_eq!(resolve(panel, VIEWPORT), Orientation::None);
    }

    #[test]
    fn flipped_submenu_moves_to_the_left(orientation in orientation(), w in 1.0..400.0_f64) {
        let row = Size::new(200.0, 40.0);
        let panel = Size::new(w, 100.0);
        let origin = resolved_submenu_offsets(orientation).origin(row, panel);
        if orientation == Orientation::FlipLeft {
            prop_assert!(origin.x + panel.width <= 0.0);
        } else {
            prop_assert!(origin.x >= row.width);
        }
    }

    #[test]
    fn flipped_root_panel_sits_above_trigger(orientation in orientation(), h in 1.0..400.0_f64) {
        let trigger = Size::new(120.0, 32.0);
        let panel = Size::new(300.0, h);
        let origin = resolved_root_offsets(orientation).origin(trigger, panel);
        if orientation == Orientation::FlipTop {
            prop_assert!(origin.y + panel.height <= 0.0);
        } else {
            prop_assert!(origin.y >= trigger.height);
        }
    }
}
