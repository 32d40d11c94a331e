#![forbid(unsafe_code)]

//! Translation calculator.
//!
//! Pure functions deriving the per-item animation offsets for an active
//! drag: where the dragged element travels, how far each displaced
//! sibling shifts, and the cross-axis correction for wrapped rows of
//! differing heights. No mutable state; a missing rect (stale index)
//! always yields a zero offset, never an error.

use crate::config::Alignment;
use crate::geometry::{Axis, Point, Rect, RectSnapshot};

/// Signed delta along `axis` that moves the element at `from` to `to`'s
/// position.
///
/// Accounts for which rectangle is geometrically earlier: travelling
/// forward (toward higher indices) the element lands end-aligned with
/// the target slot, because the displaced siblings close ranks behind
/// it; travelling backward it lands start-aligned.
pub fn dragged_travel(
    axis: Axis,
    from: Option<Rect>,
    to: Option<Rect>,
    from_index: usize,
    to_index: usize,
) -> f64 {
    let (Some(from), Some(to)) = (from, to) else {
        return 0.0;
    };
    if from_index < to_index {
        (to.end(axis) - from.extent(axis)) - from.start(axis)
    } else if from_index > to_index {
        to.start(axis) - from.start(axis)
    } else {
        0.0
    }
}

/// Inputs shared by every sibling-shift query during one drag.
#[derive(Debug, Clone, Copy)]
pub struct ShiftContext<'a> {
    /// Axis items travel along.
    pub axis: Axis,
    /// Live index of the dragged item.
    pub dragged_index: usize,
    /// Live index of the current target item.
    pub target_index: usize,
    /// Inter-item gap in pixels.
    pub gap: f64,
    /// Items wrap onto multiple rows/columns.
    pub wrapping: bool,
    /// Right-to-left container.
    pub rtl: bool,
    /// Index-ordered item boxes for the session.
    pub rects: &'a RectSnapshot,
}

/// Offset for the sibling at `sibling_index` while the drag is between
/// `dragged_index` and `target_index`.
///
/// Siblings between the dragged and target index (inclusive of the
/// target, exclusive of the dragged) shift by exactly one item extent
/// (dragged size + gap) opposite to the travel direction. Under
/// wrapping, the shift is the full rect delta to the slot the sibling
/// will occupy, which may span rows. Siblings outside the span get zero.
pub fn sibling_shift(ctx: &ShiftContext<'_>, sibling_index: usize) -> Point {
    if ctx.dragged_index == ctx.target_index {
        return Point::ZERO;
    }
    let Some(dragged) = ctx.rects.by_index(ctx.dragged_index) else {
        return Point::ZERO;
    };

    let forward = ctx.dragged_index < ctx.target_index;
    let affected = if forward {
        sibling_index > ctx.dragged_index && sibling_index <= ctx.target_index
    } else {
        sibling_index >= ctx.target_index && sibling_index < ctx.dragged_index
    };
    if !affected {
        return Point::ZERO;
    }

    if ctx.wrapping {
        // The slot this sibling will occupy is its neighbor's rect;
        // under wrapping that can be on an adjacent row, so the offset
        // carries both axes.
        let slot_index = if forward {
            sibling_index - 1
        } else {
            sibling_index + 1
        };
        let (Some(sibling), Some(slot)) =
            (ctx.rects.by_index(sibling_index), ctx.rects.by_index(slot_index))
        else {
            return Point::ZERO;
        };
        return Point::new(slot.rect.x - sibling.rect.x, slot.rect.y - sibling.rect.y);
    }

    let mut shift = dragged.rect.extent(ctx.axis) + ctx.gap;
    if forward {
        shift = -shift;
    }
    // Physical order runs right-to-left in RTL containers, so the
    // horizontal sign flips.
    if ctx.axis == Axis::X && ctx.rtl {
        shift = -shift;
    }
    match ctx.axis {
        Axis::X => Point::new(shift, 0.0),
        Axis::Y => Point::new(0.0, shift),
    }
}

/// Row-relative cross-axis offset so items of differing heights stay
/// visually aligned within a wrapped row, following the container's
/// alignment.
pub fn cross_axis_offset(
    alignment: Alignment,
    axis: Axis,
    from: Option<Rect>,
    to: Option<Rect>,
) -> f64 {
    let (Some(from), Some(to)) = (from, to) else {
        return 0.0;
    };
    let cross = axis.cross();
    match alignment {
        Alignment::Start => to.start(cross) - from.start(cross),
        Alignment::Center => to.center().along(cross) - from.center().along(cross),
        Alignment::End => to.end(cross) - from.end(cross),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{ItemId, ItemRect};

    // Five 40px-tall items stacked vertically with a 10px gap.
    fn vertical_rects() -> RectSnapshot {
        RectSnapshot::new(
            (0..5)
                .map(|i| {
                    ItemRect::new(
                        ItemId(i as u64),
                        Rect::new(0.0, i as f64 * 50.0, 100.0, 40.0),
                    )
                })
                .collect(),
        )
    }

    // 2x2 wrapped grid of 50px squares with a 10px gap.
    fn wrapped_rects() -> RectSnapshot {
        let positions = [
            (0.0, 0.0),
            (60.0, 0.0),
            (0.0, 60.0),
            (60.0, 60.0),
        ];
        RectSnapshot::new(
            positions
                .iter()
                .enumerate()
                .map(|(i, &(x, y))| ItemRect::new(ItemId(i as u64), Rect::new(x, y, 50.0, 50.0)))
                .collect(),
        )
    }

    fn ctx(rects: &RectSnapshot, dragged: usize, target: usize) -> ShiftContext<'_> {
        ShiftContext {
            axis: Axis::Y,
            dragged_index: dragged,
            target_index: target,
            gap: 10.0,
            wrapping: false,
            rtl: false,
            rects,
        }
    }

    #[test]
    fn travel_forward_is_end_aligned() {
        let rects = vertical_rects();
        let from = rects.by_index(0).map(|i| i.rect);
        let to = rects.by_index(3).map(|i| i.rect);
        // Item 3 spans y 150..190; end-aligned landing puts the dragged
        // item's top at 150 (equal sizes), so travel is +150.
        assert_eq!(dragged_travel(Axis::Y, from, to, 0, 3), 150.0);
    }

    #[test]
    fn travel_backward_is_start_aligned() {
        let rects = vertical_rects();
        let from = rects.by_index(3).map(|i| i.rect);
        let to = rects.by_index(1).map(|i| i.rect);
        assert_eq!(dragged_travel(Axis::Y, from, to, 3, 1), -100.0);
    }

    #[test]
    fn travel_forward_differing_sizes() {
        // Dragged is 20px tall, target slot ends at 190.
        let from = Some(Rect::new(0.0, 0.0, 100.0, 20.0));
        let to = Some(Rect::new(0.0, 150.0, 100.0, 40.0));
        // Lands with its bottom at 190: top at 170.
        assert_eq!(dragged_travel(Axis::Y, from, to, 0, 3), 170.0);
    }

    #[test]
    fn travel_same_index_is_zero() {
        let rects = vertical_rects();
        let r = rects.by_index(2).map(|i| i.rect);
        assert_eq!(dragged_travel(Axis::Y, r, r, 2, 2), 0.0);
    }

    #[test]
    fn travel_missing_rect_is_zero() {
        let rects = vertical_rects();
        let from = rects.by_index(0).map(|i| i.rect);
        assert_eq!(dragged_travel(Axis::Y, from, None, 0, 9), 0.0);
        assert_eq!(dragged_travel(Axis::Y, None, from, 9, 0), 0.0);
    }

    #[test]
    fn siblings_in_span_shift_one_extent() {
        let rects = vertical_rects();
        let ctx = ctx(&rects, 0, 3);
        // Items 1..=3 shift up by extent + gap = 50.
        for i in 1..=3 {
            assert_eq!(sibling_shift(&ctx, i), Point::new(0.0, -50.0));
        }
    }

    #[test]
    fn siblings_outside_span_stay_put() {
        let rects = vertical_rects();
        let ctx = ctx(&rects, 0, 3);
        assert_eq!(sibling_shift(&ctx, 0), Point::ZERO);
        assert_eq!(sibling_shift(&ctx, 4), Point::ZERO);
    }

    #[test]
    fn backward_drag_shifts_down() {
        let rects = vertical_rects();
        let ctx = ctx(&rects, 4, 1);
        for i in 1..4 {
            assert_eq!(sibling_shift(&ctx, i), Point::new(0.0, 50.0));
        }
        assert_eq!(sibling_shift(&ctx, 0), Point::ZERO);
        assert_eq!(sibling_shift(&ctx, 4), Point::ZERO);
    }

    #[test]
    fn no_target_movement_is_zero() {
        let rects = vertical_rects();
        let ctx = ctx(&rects, 2, 2);
        for i in 0..5 {
            assert_eq!(sibling_shift(&ctx, i), Point::ZERO);
        }
    }

    #[test]
    fn rtl_inverts_horizontal_shift() {
        let rects = RectSnapshot::new(
            (0..3)
                .map(|i| {
                    // Physical order right-to-left.
                    ItemRect::new(
                        ItemId(i as u64),
                        Rect::new(200.0 - i as f64 * 60.0, 0.0, 50.0, 40.0),
                    )
                })
                .collect(),
        );
        let ctx = ShiftContext {
            axis: Axis::X,
            dragged_index: 0,
            target_index: 2,
            gap: 10.0,
            wrapping: false,
            rtl: true,
            rects: &rects,
        };
        // Forward shift is physically rightward in RTL.
        assert_eq!(sibling_shift(&ctx, 1), Point::new(60.0, 0.0));
    }

    #[test]
    fn wrapping_uses_slot_rect_delta() {
        let rects = wrapped_rects();
        let ctx = ShiftContext {
            axis: Axis::X,
            dragged_index: 0,
            target_index: 2,
            gap: 10.0,
            wrapping: true,
            rtl: false,
            rects: &rects,
        };
        // Item 1 moves into slot 0: same row, leftward.
        assert_eq!(sibling_shift(&ctx, 1), Point::new(-60.0, 0.0));
        // Item 2 moves into slot 1: up a row and to the right.
        assert_eq!(sibling_shift(&ctx, 2), Point::new(60.0, -60.0));
    }

    #[test]
    fn wrapping_missing_slot_is_zero() {
        let rects = wrapped_rects();
        let ctx = ShiftContext {
            axis: Axis::X,
            dragged_index: 0,
            target_index: 9,
            gap: 10.0,
            wrapping: true,
            rtl: false,
            rects: &rects,
        };
        // Affected range reaches past the snapshot; stale slots yield zero.
        assert_eq!(sibling_shift(&ctx, 9), Point::ZERO);
    }

    #[test]
    fn cross_axis_alignment_variants() {
        let from = Some(Rect::new(0.0, 100.0, 50.0, 40.0));
        let to = Some(Rect::new(0.0, 200.0, 50.0, 20.0));
        assert_eq!(
            cross_axis_offset(Alignment::Start, Axis::X, from, to),
            100.0
        );
        assert_eq!(
            cross_axis_offset(Alignment::Center, Axis::X, from, to),
            90.0
        );
        assert_eq!(cross_axis_offset(Alignment::End, Axis::X, from, to), 80.0);
    }

    #[test]
    fn cross_axis_missing_rect_is_zero() {
        let from = Some(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(cross_axis_offset(Alignment::Center, Axis::X, from, None), 0.0);
        assert_eq!(cross_axis_offset(Alignment::Center, Axis::X, None, from), 0.0);
    }
}
