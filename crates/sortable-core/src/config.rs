#![forbid(unsafe_code)]

//! Per-list configuration.
//!
//! Supplied by the host and read-only to the engine for the lifetime of
//! a render. Defaults follow the reference behavior: 12 px gap, vertical
//! direction, no start delay, 320 ms ease-out reposition transition.

use std::time::Duration;

use crate::animation::{EasingFn, ease_out_cubic};
use crate::geometry::Axis;

/// Main layout direction of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Items stack top to bottom.
    #[default]
    Vertical,
    /// Items flow along the inline axis.
    Horizontal,
}

impl Direction {
    /// The axis items travel along when reordered.
    #[inline]
    pub const fn axis(self) -> Axis {
        match self {
            Direction::Vertical => Axis::Y,
            Direction::Horizontal => Axis::X,
        }
    }
}

/// Text direction of the list's container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

/// Cross-axis alignment of items within a wrapped row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Start,
    Center,
    End,
}

/// Reposition transition settings.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    /// How long displaced items animate to their new slot.
    pub duration: Duration,
    /// Easing applied to the reposition animation.
    pub easing: EasingFn,
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(320),
            easing: ease_out_cubic,
        }
    }
}

/// Immutable per-render list settings.
#[derive(Debug, Clone)]
pub struct ListConfig {
    /// Gap between items in pixels.
    pub gap: f64,
    /// Main layout direction.
    pub direction: Direction,
    /// Hold time before a pointer press becomes a drag.
    pub delay: Duration,
    /// Reposition transition.
    pub transition: Transition,
    /// Items wrap onto multiple rows/columns.
    pub has_wrapping: bool,
    /// Ghost movement is locked to the main axis.
    pub has_locked_axis: bool,
    /// Ghost is clamped inside the list's box.
    pub has_boundaries: bool,
    /// Cross-axis alignment of wrapped rows.
    pub alignment: Alignment,
    /// Losing collision with every item clears the target.
    pub can_clear_on_drag_out: bool,
    /// Dropping outside the list's box signals removal.
    pub can_remove_on_drop_out: bool,
    /// Reordering is locked (items still interactive).
    pub is_locked: bool,
    /// The whole list is disabled.
    pub is_disabled: bool,
    /// Text direction; swaps horizontal key meaning and offset signs.
    pub text_direction: TextDirection,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            gap: 12.0,
            direction: Direction::Vertical,
            delay: Duration::ZERO,
            transition: Transition::default(),
            has_wrapping: false,
            has_locked_axis: false,
            has_boundaries: false,
            alignment: Alignment::Start,
            can_clear_on_drag_out: false,
            can_remove_on_drop_out: false,
            is_locked: false,
            is_disabled: false,
            text_direction: TextDirection::Ltr,
        }
    }
}

impl ListConfig {
    /// Set the inter-item gap in pixels.
    #[must_use]
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Set the layout direction.
    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the pointer drag-start delay.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Set the reposition transition.
    #[must_use]
    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }

    /// Enable wrapping onto multiple rows/columns.
    #[must_use]
    pub fn with_wrapping(mut self) -> Self {
        self.has_wrapping = true;
        self
    }

    /// Lock ghost movement to the main axis.
    #[must_use]
    pub fn with_locked_axis(mut self) -> Self {
        self.has_locked_axis = true;
        self
    }

    /// Clamp the ghost inside the list's box.
    #[must_use]
    pub fn with_boundaries(mut self) -> Self {
        self.has_boundaries = true;
        self
    }

    /// Set the cross-axis alignment of wrapped rows.
    #[must_use]
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Clear the target when the ghost stops colliding with every item.
    #[must_use]
    pub fn clear_on_drag_out(mut self) -> Self {
        self.can_clear_on_drag_out = true;
        self
    }

    /// Signal removal when the item is dropped outside the list.
    #[must_use]
    pub fn remove_on_drop_out(mut self) -> Self {
        self.can_remove_on_drop_out = true;
        self
    }

    /// Lock reordering.
    #[must_use]
    pub fn locked(mut self) -> Self {
        self.is_locked = true;
        self
    }

    /// Disable the list entirely.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.is_disabled = true;
        self
    }

    /// Set the text direction.
    #[must_use]
    pub fn with_text_direction(mut self, text_direction: TextDirection) -> Self {
        self.text_direction = text_direction;
        self
    }

    /// Whether the container is right-to-left.
    #[must_use]
    pub fn is_rtl(&self) -> bool {
        self.text_direction == TextDirection::Rtl
    }
}
