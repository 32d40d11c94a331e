#![forbid(unsafe_code)]

//! Auto-scroll controller.
//!
//! While a pointer drag is active, the pointer's distance to the edges
//! of the nearest scrollable ancestor maps to a signed scroll speed. The
//! drag state machine re-reads the live speed every frame and emits one
//! scroll increment per tick while it is non-zero, so the loop
//! self-terminates the moment the pointer leaves the edge band or the
//! drag ends, with no explicit cancel signal.

use crate::config::Direction;
use crate::geometry::{Point, Rect};

/// Fraction of the tracked extent used as the edge band.
pub const EDGE_BAND_RATIO: f64 = 0.2;
/// Smallest edge band in pixels.
pub const EDGE_BAND_MIN: f64 = 40.0;
/// Largest edge band in pixels.
pub const EDGE_BAND_MAX: f64 = 120.0;
/// Peak scroll speed in pixels per frame, reached at the outer edge.
pub const MAX_SPEED: f64 = 16.0;

/// Scroll metrics of the nearest scrollable ancestor, as observed by the
/// host at the time of the query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollArea {
    /// Visible box of the scrollable region in client coordinates.
    pub viewport: Rect,
    /// Current horizontal scroll offset.
    pub scroll_left: f64,
    /// Current vertical scroll offset.
    pub scroll_top: f64,
    /// Total scrollable content width.
    pub scroll_width: f64,
    /// Total scrollable content height.
    pub scroll_height: f64,
}

impl ScrollArea {
    /// Current offsets as an `(x, y)` pair, for change detection.
    #[must_use]
    pub fn offsets(&self) -> (f64, f64) {
        (self.scroll_left, self.scroll_top)
    }
}

/// Edge band width for a tracked extent: proportional, clamped to a sane
/// range, and never more than half the extent so the two bands cannot
/// overlap.
fn edge_band(extent: f64) -> f64 {
    (extent * EDGE_BAND_RATIO)
        .clamp(EDGE_BAND_MIN, EDGE_BAND_MAX)
        .min(extent / 2.0)
}

/// Signed scroll speed for the pointer position, in pixels per frame.
///
/// Zero at and beyond the inner edge of the band; scales linearly to
/// [`MAX_SPEED`] at the outer edge and holds there when the pointer
/// travels past the viewport. Negative speed scrolls toward the start
/// edge (up/left), positive toward the end edge.
pub fn scroll_speed(area: &ScrollArea, pointer: Point, direction: Direction) -> f64 {
    let axis = direction.axis();
    let extent = area.viewport.extent(axis);
    if extent <= 0.0 {
        return 0.0;
    }
    let band = edge_band(extent);
    let p = pointer.along(axis);

    let from_start = p - area.viewport.start(axis);
    if from_start < band {
        let t = (1.0 - from_start / band).clamp(0.0, 1.0);
        return -MAX_SPEED * t;
    }
    let from_end = area.viewport.end(axis) - p;
    if from_end < band {
        let t = (1.0 - from_end / band).clamp(0.0, 1.0);
        return MAX_SPEED * t;
    }
    0.0
}

/// Whether the region can still move in the direction of `speed`.
///
/// The frame loop checks this before emitting an increment so it stops
/// at the content limits instead of requesting no-op scrolls forever.
pub fn can_scroll_further(area: &ScrollArea, direction: Direction, speed: f64) -> bool {
    if speed == 0.0 {
        return false;
    }
    match direction {
        Direction::Vertical => {
            if speed < 0.0 {
                area.scroll_top > 0.0
            } else {
                area.scroll_top + area.viewport.height < area.scroll_height
            }
        }
        Direction::Horizontal => {
            if speed < 0.0 {
                area.scroll_left > 0.0
            } else {
                area.scroll_left + area.viewport.width < area.scroll_width
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> ScrollArea {
        ScrollArea {
            viewport: Rect::new(0.0, 0.0, 400.0, 600.0),
            scroll_left: 0.0,
            scroll_top: 100.0,
            scroll_width: 400.0,
            scroll_height: 2000.0,
        }
    }

    #[test]
    fn zero_at_center() {
        let a = area();
        let speed = scroll_speed(&a, Point::new(200.0, 300.0), Direction::Vertical);
        assert_eq!(speed, 0.0);
    }

    #[test]
    fn zero_outside_band() {
        let a = area();
        // Band is 120px (20% of 600); y=150 sits outside it.
        let speed = scroll_speed(&a, Point::new(200.0, 150.0), Direction::Vertical);
        assert_eq!(speed, 0.0);
    }

    #[test]
    fn negative_toward_start_edge() {
        let a = area();
        let speed = scroll_speed(&a, Point::new(200.0, 30.0), Direction::Vertical);
        assert!(speed < 0.0);
    }

    #[test]
    fn positive_toward_end_edge() {
        let a = area();
        let speed = scroll_speed(&a, Point::new(200.0, 580.0), Direction::Vertical);
        assert!(speed > 0.0);
    }

    #[test]
    fn magnitude_increases_toward_edge() {
        let a = area();
        let mut last = 0.0;
        for y in [110.0, 80.0, 50.0, 20.0, 0.0] {
            let speed = scroll_speed(&a, Point::new(200.0, y), Direction::Vertical).abs();
            assert!(
                speed > last,
                "speed should strictly increase toward the edge: {speed} !> {last}"
            );
            last = speed;
        }
    }

    #[test]
    fn peak_speed_at_outer_edge() {
        let a = area();
        let speed = scroll_speed(&a, Point::new(200.0, 0.0), Direction::Vertical);
        assert_eq!(speed, -MAX_SPEED);
    }

    #[test]
    fn holds_peak_past_the_edge() {
        let a = area();
        let speed = scroll_speed(&a, Point::new(200.0, -50.0), Direction::Vertical);
        assert_eq!(speed, -MAX_SPEED);
    }

    #[test]
    fn horizontal_uses_x_axis() {
        let a = area();
        // Band is 80px (20% of 400).
        let speed = scroll_speed(&a, Point::new(390.0, 300.0), Direction::Horizontal);
        assert!(speed > 0.0);
        let speed = scroll_speed(&a, Point::new(200.0, 10.0), Direction::Horizontal);
        assert_eq!(speed, 0.0);
    }

    #[test]
    fn band_clamps_to_half_extent() {
        assert_eq!(edge_band(60.0), 30.0);
        assert_eq!(edge_band(600.0), 120.0);
        assert_eq!(edge_band(100.0), EDGE_BAND_MIN);
    }

    #[test]
    fn empty_viewport_never_scrolls() {
        let mut a = area();
        a.viewport = Rect::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(
            scroll_speed(&a, Point::new(0.0, 0.0), Direction::Vertical),
            0.0
        );
    }

    #[test]
    fn can_scroll_respects_limits() {
        let mut a = area();
        assert!(can_scroll_further(&a, Direction::Vertical, -1.0));
        assert!(can_scroll_further(&a, Direction::Vertical, 1.0));

        a.scroll_top = 0.0;
        assert!(!can_scroll_further(&a, Direction::Vertical, -1.0));

        a.scroll_top = 1400.0; // 1400 + 600 == scroll_height
        assert!(!can_scroll_further(&a, Direction::Vertical, 1.0));

        assert!(!can_scroll_further(&a, Direction::Vertical, 0.0));
    }

    #[test]
    fn can_scroll_horizontal_limits() {
        let mut a = area();
        a.scroll_width = 1000.0;
        a.scroll_left = 0.0;
        assert!(!can_scroll_further(&a, Direction::Horizontal, -1.0));
        assert!(can_scroll_further(&a, Direction::Horizontal, 1.0));
        a.scroll_left = 600.0;
        assert!(!can_scroll_further(&a, Direction::Horizontal, 1.0));
    }
}
