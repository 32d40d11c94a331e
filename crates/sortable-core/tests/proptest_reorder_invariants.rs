//! Property-based invariant tests for the reorder engine's pure core.
//!
//! These tests verify structural invariants that must hold for any valid
//! inputs:
//!
//! 1. Reorder is a permutation: no element is lost or duplicated.
//! 2. Reorder places the dragged element exactly at the target index.
//! 3. Reorder preserves the relative order of all other elements.
//! 4. Collision resolution is deterministic.
//! 5. Collision resolution over an empty snapshot is `None`.
//! 6. A resolved collision target actually overlaps the ghost.
//! 7. Auto-scroll speed is bounded by the configured peak.
//! 8. Auto-scroll speed is zero in the middle of the viewport.
//! 9. Auto-scroll speed sign matches the nearer edge.
//! 10. Dragged travel is zero for a degenerate move.
//! 11. Sibling shifts are zero outside the displaced span.
//! 12. The settle timer elapses by the deadline under any tick slicing.

use std::time::Duration;

use proptest::prelude::*;
use sortable_core::animation::{SETTLE_GRACE, SettleTimer};
use sortable_core::autoscroll::{MAX_SPEED, ScrollArea, scroll_speed};
use sortable_core::geometry::{ItemId, ItemRect, Point, Rect, RectSnapshot, colliding_item};
use sortable_core::translate::{ShiftContext, dragged_travel, sibling_shift};
use sortable_core::{Axis, Direction, reorder};

// ── Helpers ─────────────────────────────────────────────────────────────

/// A vertical list of `len` uniform 40px items with a 10px gap.
fn uniform_snapshot(len: usize) -> RectSnapshot {
    RectSnapshot::new(
        (0..len)
            .map(|i| ItemRect::new(ItemId(i as u64), Rect::new(0.0, i as f64 * 50.0, 100.0, 40.0)))
            .collect(),
    )
}

fn ghost_strategy() -> impl Strategy<Value = Rect> {
    (-50.0f64..150.0, -60.0f64..500.0, 10.0f64..120.0, 10.0f64..60.0)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

fn viewport() -> ScrollArea {
    ScrollArea {
        viewport: Rect::new(0.0, 0.0, 400.0, 600.0),
        scroll_left: 0.0,
        scroll_top: 300.0,
        scroll_width: 400.0,
        scroll_height: 2000.0,
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 1-3. Reorder is an order-preserving permutation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn reorder_is_permutation(len in 1usize..20, from in 0usize..20, to in 0usize..20) {
        let from = from % len;
        let to = to % len;
        let mut items: Vec<usize> = (0..len).collect();
        reorder(&mut items, from, to);

        let mut sorted = items.clone();
        sorted.sort_unstable();
        prop_assert_eq!(sorted, (0..len).collect::<Vec<_>>(), "element lost or duplicated");
    }

    #[test]
    fn reorder_places_dragged_at_target(len in 1usize..20, from in 0usize..20, to in 0usize..20) {
        let from = from % len;
        let to = to % len;
        let mut items: Vec<usize> = (0..len).collect();
        reorder(&mut items, from, to);
        prop_assert_eq!(items[to], from, "dragged element not at target index");
    }

    #[test]
    fn reorder_preserves_relative_order(len in 1usize..20, from in 0usize..20, to in 0usize..20) {
        let from = from % len;
        let to = to % len;
        let mut items: Vec<usize> = (0..len).collect();
        reorder(&mut items, from, to);

        let rest: Vec<usize> = items.into_iter().filter(|&v| v != from).collect();
        let mut expected: Vec<usize> = (0..len).collect();
        expected.retain(|&v| v != from);
        prop_assert_eq!(rest, expected, "sibling order disturbed");
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4-6. Collision resolution
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn collision_is_deterministic(ghost in ghost_strategy(), len in 0usize..10) {
        let rects = uniform_snapshot(len);
        let first = colliding_item(&ghost, &rects).map(|i| i.id);
        let second = colliding_item(&ghost, &rects).map(|i| i.id);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn collision_on_empty_snapshot_is_none(ghost in ghost_strategy()) {
        let rects = RectSnapshot::default();
        prop_assert!(colliding_item(&ghost, &rects).is_none());
    }

    #[test]
    fn collision_target_overlaps_ghost(ghost in ghost_strategy(), len in 1usize..10) {
        let rects = uniform_snapshot(len);
        if let Some(hit) = colliding_item(&ghost, &rects) {
            prop_assert!(
                ghost.overlap_area(&hit.rect) > 0.0,
                "resolved target {:?} does not overlap ghost {:?}",
                hit, ghost
            );
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7-9. Auto-scroll speed shape
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn scroll_speed_is_bounded(x in -500.0f64..900.0, y in -500.0f64..1100.0) {
        let area = viewport();
        for direction in [Direction::Vertical, Direction::Horizontal] {
            let speed = scroll_speed(&area, Point::new(x, y), direction);
            prop_assert!(speed.abs() <= MAX_SPEED, "speed {} exceeds peak", speed);
        }
    }

    #[test]
    fn scroll_speed_zero_at_center(offset in -50.0f64..50.0) {
        let area = viewport();
        let center = area.viewport.center();
        let speed = scroll_speed(
            &area,
            Point::new(center.x, center.y + offset),
            Direction::Vertical,
        );
        prop_assert_eq!(speed, 0.0);
    }

    #[test]
    fn scroll_speed_sign_matches_edge(y in -100.0f64..700.0) {
        let area = viewport();
        let speed = scroll_speed(&area, Point::new(200.0, y), Direction::Vertical);
        if speed < 0.0 {
            prop_assert!(y < area.viewport.center().y, "negative speed away from start edge");
        } else if speed > 0.0 {
            prop_assert!(y > area.viewport.center().y, "positive speed away from end edge");
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 10-11. Translation offsets
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn degenerate_travel_is_zero(index in 0usize..10) {
        let rects = uniform_snapshot(10);
        let rect = rects.by_index(index).map(|i| i.rect);
        prop_assert_eq!(dragged_travel(Axis::Y, rect, rect, index, index), 0.0);
    }

    #[test]
    fn shifts_outside_span_are_zero(
        len in 2usize..12,
        from in 0usize..12,
        to in 0usize..12,
        probe in 0usize..12,
    ) {
        let from = from % len;
        let to = to % len;
        let probe = probe % len;
        let rects = uniform_snapshot(len);
        let ctx = ShiftContext {
            axis: Axis::Y,
            dragged_index: from,
            target_index: to,
            gap: 10.0,
            wrapping: false,
            rtl: false,
            rects: &rects,
        };
        let in_span = if from < to {
            probe > from && probe <= to
        } else {
            probe >= to && probe < from
        };
        let shift = sibling_shift(&ctx, probe);
        if !in_span || from == to {
            prop_assert_eq!(shift, Point::ZERO, "unexpected shift at {}", probe);
        } else {
            prop_assert!(shift.y.abs() > 0.0, "missing shift at {}", probe);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 12. Settle timer always elapses by the deadline
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn settle_elapses_under_any_tick_slicing(
        duration_ms in 0u64..1000,
        ticks in prop::collection::vec(1u64..50, 1..100),
    ) {
        let duration = Duration::from_millis(duration_ms);
        let mut timer = SettleTimer::new(duration);
        let mut total = Duration::ZERO;
        for ms in ticks {
            timer.tick(Duration::from_millis(ms));
            total += Duration::from_millis(ms);
        }
        if total >= duration + SETTLE_GRACE {
            prop_assert!(timer.is_elapsed(), "timer stuck past its deadline");
        } else {
            prop_assert!(!timer.is_elapsed(), "timer fired early");
        }
    }
}
