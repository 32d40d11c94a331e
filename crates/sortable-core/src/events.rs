#![forbid(unsafe_code)]

//! Host-facing contracts: lifecycle events, commands, and announcements.
//!
//! The engine calls one [`SortableHost`] — a single subscription fixed
//! for the session's lifetime — at well-defined points:
//!
//! 1. `on_drag_start` — once, when a drag begins (either device).
//! 2. `on_drag_update` — on each coalesced frame or keyboard step.
//! 3. `on_drop` — once, at the drop/cancel input, with indices fixed at
//!    that moment.
//! 4. `on_drag_end` — once, after the settle phase, with the cancel flag.
//!
//! Removal is signaled, never performed: a drop outside the list bounds
//! with removal enabled reports `is_between_bounds == false` together
//! with `can_remove_on_drop_out == true`, and the host deletes the item.

use crate::autoscroll::ScrollArea;
use crate::geometry::{ItemId, ItemRect, Rect};
use crate::input::PointerId;
use crate::session::DeviceKind;

/// Structured payload shared by every lifecycle notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragEvent {
    /// Input modality of the active session.
    pub device: DeviceKind,
    /// Item being dragged.
    pub dragged_id: ItemId,
    /// Its live index at the time of the notification.
    pub dragged_index: usize,
    /// Current target item, if one is established.
    pub target_id: Option<ItemId>,
    /// The target's live index.
    pub target_index: Option<usize>,
    /// Whether the dragged item's box overlaps the list's own box.
    pub is_between_bounds: bool,
    /// Whether dropping out of bounds would signal removal.
    pub can_remove_on_drop_out: bool,
}

/// Movement requests the host performs on the engine's behalf.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostCommand {
    /// Scroll the scrollable ancestor by a delta.
    ScrollBy { dx: f64, dy: f64 },
    /// Bring an item fully into view (keyboard steps and cancel).
    EnsureVisible(ItemId),
    /// Move focus between siblings.
    Focus(FocusTarget),
    /// Acquire pointer capture for the active drag.
    CapturePointer(PointerId),
    /// Release a previously acquired capture.
    ReleasePointer(PointerId),
}

/// Where a focus-move request points. The engine never names an item:
/// focus travels relative to the host's live sibling order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Next,
    Prev,
    First,
    Last,
}

/// Everything the engine needs from its host: geometry on demand, and
/// sinks for lifecycle events, commands, and assistive-technology text.
///
/// Geometry queries are answered live — the engine asks again rather
/// than caching across frames (rect snapshots are the one deliberate
/// exception, owned by the session). Notification methods default to
/// no-ops so a host implements only what it renders.
pub trait SortableHost {
    /// Bounding boxes of all list items, in list order.
    fn item_rects(&self) -> Vec<ItemRect>;

    /// The list's own bounding box.
    fn root_rect(&self) -> Rect;

    /// Metrics of the nearest scrollable ancestor, if any.
    fn scroll_area(&self) -> Option<ScrollArea> {
        None
    }

    /// A drag session began.
    fn on_drag_start(&mut self, _event: &DragEvent) {}

    /// The session state changed (pointer frame or keyboard step).
    fn on_drag_update(&mut self, _event: &DragEvent) {}

    /// The drop (or cancel) input arrived; indices are final.
    fn on_drop(&mut self, _event: &DragEvent) {}

    /// The settle phase finished and the session reset to idle.
    fn on_drag_end(&mut self, _event: &DragEvent, _is_canceled: bool) {}

    /// Assistive-technology narration for the latest transition.
    fn on_announcement(&mut self, _text: &str) {}

    /// Perform a movement request.
    fn command(&mut self, _cmd: HostCommand) {}
}

/// Phrase generators for assistive-technology narration, invoked at the
/// same lifecycle points as the structured events. Positions are
/// 1-based, matching what a screen-reader user counts.
pub trait Announcements {
    fn lifted(&self, dragged: ItemId, dragged_index: usize) -> String;
    fn moved(
        &self,
        dragged: ItemId,
        dragged_index: usize,
        target: ItemId,
        target_index: usize,
    ) -> String;
    fn dropped(
        &self,
        dragged: ItemId,
        dragged_index: usize,
        target: Option<ItemId>,
        target_index: Option<usize>,
    ) -> String;
    fn canceled(&self, dragged: ItemId, dragged_index: usize) -> String;
}

/// Built-in English phrases used when the host supplies none.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultAnnouncements;

impl Announcements for DefaultAnnouncements {
    fn lifted(&self, _dragged: ItemId, dragged_index: usize) -> String {
        format!(
            "Picked up the item at position {}. Use the arrow keys to move it, \
             Space to drop it, or Escape to cancel.",
            dragged_index + 1
        )
    }

    fn moved(
        &self,
        _dragged: ItemId,
        dragged_index: usize,
        _target: ItemId,
        target_index: usize,
    ) -> String {
        format!(
            "Moved the item from position {} to position {}.",
            dragged_index + 1,
            target_index + 1
        )
    }

    fn dropped(
        &self,
        _dragged: ItemId,
        dragged_index: usize,
        _target: Option<ItemId>,
        target_index: Option<usize>,
    ) -> String {
        match target_index {
            Some(target_index) => format!(
                "Dropped the item at position {}. It moved from position {}.",
                target_index + 1,
                dragged_index + 1
            ),
            None => format!(
                "Dropped the item. It stayed at position {}.",
                dragged_index + 1
            ),
        }
    }

    fn canceled(&self, _dragged: ItemId, dragged_index: usize) -> String {
        format!(
            "Canceled dragging. The item returned to position {}.",
            dragged_index + 1
        )
    }
}
