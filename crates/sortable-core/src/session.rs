#![forbid(unsafe_code)]

//! Drag session state.
//!
//! One [`DragSession`] exists per active drag, owned exclusively by the
//! state machine: created on drag start, mutated across input and frame
//! callbacks, destroyed when the session resets to idle. Every callback
//! reads the session through the controller, never through a captured
//! copy.
//!
//! # Invariants
//!
//! 1. `target_id` is non-null only while a dragged item exists.
//! 2. `rects` is non-null only between drag start and drag end.
//! 3. At most one session per list instance; both input paths funnel
//!    through the same owner.

use crate::geometry::{ItemId, Point, Rect, RectSnapshot};
use crate::input::PointerId;

/// Which input modality drives the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceKind {
    Pointer,
    Keyboard,
}

/// Drag lifecycle state, device-qualified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    PtrDragStart,
    PtrDrag,
    PtrDrop,
    PtrCancel,
    KbdDragStart,
    KbdDrag,
    KbdDrop,
    KbdCancel,
}

impl DragState {
    /// No drag in progress.
    #[must_use]
    pub const fn is_idle(self) -> bool {
        matches!(self, DragState::Idle)
    }

    /// A pointer drag is being tracked (started or moving).
    #[must_use]
    pub const fn is_pointer_dragging(self) -> bool {
        matches!(self, DragState::PtrDragStart | DragState::PtrDrag)
    }

    /// A keyboard drag is being tracked (started or stepping).
    #[must_use]
    pub const fn is_keyboard_dragging(self) -> bool {
        matches!(self, DragState::KbdDragStart | DragState::KbdDrag)
    }

    /// A drop or cancel is settling.
    #[must_use]
    pub const fn is_settling(self) -> bool {
        matches!(
            self,
            DragState::PtrDrop | DragState::PtrCancel | DragState::KbdDrop | DragState::KbdCancel
        )
    }
}

/// Ghost animation state, tracked independently of [`DragState`] so the
/// drop snap can sequence (predrop on the drop frame, drop on the next)
/// without disturbing the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GhostState {
    #[default]
    Idle,
    PtrDragStart,
    PtrDrag,
    PtrPredrop,
    PtrDrop,
    PtrRemove,
}

/// Indices fixed at the moment of the drop input. Never re-derived
/// afterwards, even if geometry changes during the settle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropResolution {
    pub dragged_index: usize,
    pub target_index: Option<usize>,
    pub canceled: bool,
}

/// Mutable state of one drag operation.
#[derive(Debug, Clone)]
pub struct DragSession {
    /// Input modality that started the session.
    pub device: DeviceKind,
    /// Item being dragged.
    pub dragged_id: ItemId,
    /// Item the dragged one would swap with if dropped now.
    pub target_id: Option<ItemId>,
    /// Pointer driving the session (pointer sessions only).
    pub pointer_id: Option<PointerId>,
    /// Last pointer sample (pointer sessions only).
    pub pointer: Option<Point>,
    /// Pointer position at press time (pointer sessions only).
    pub pointer_origin: Option<Point>,
    /// At least one pointer frame has been processed since drag start.
    /// Auto-scroll waits for this so a press inside an edge band does
    /// not scroll before the pointer ever moves.
    pub has_moved: bool,
    /// Item boxes captured at drag start, recaptured on scroll.
    pub rects: Option<RectSnapshot>,
    /// The list's own box, captured alongside the item boxes.
    pub root: Option<Rect>,
    /// Whether the ghost currently overlaps the list's own box.
    pub is_between_bounds: bool,
    /// Live auto-scroll speed in pixels per frame.
    pub scrolling_speed: f64,
    /// Set once the drop input arrives.
    pub resolution: Option<DropResolution>,
}

impl DragSession {
    /// Start a session for the given item.
    #[must_use]
    pub fn new(device: DeviceKind, dragged_id: ItemId) -> Self {
        Self {
            device,
            dragged_id,
            target_id: None,
            pointer_id: None,
            pointer: None,
            pointer_origin: None,
            has_moved: false,
            rects: None,
            root: None,
            is_between_bounds: true,
            scrolling_speed: 0.0,
            resolution: None,
        }
    }

    /// Live index of the dragged item within the captured order.
    #[must_use]
    pub fn dragged_index(&self) -> Option<usize> {
        self.rects.as_ref()?.index_of(self.dragged_id)
    }

    /// Live index of the target item within the captured order.
    #[must_use]
    pub fn target_index(&self) -> Option<usize> {
        let target = self.target_id?;
        self.rects.as_ref()?.index_of(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{ItemRect, Rect};

    #[test]
    fn state_predicates() {
        assert!(DragState::Idle.is_idle());
        assert!(DragState::PtrDragStart.is_pointer_dragging());
        assert!(DragState::PtrDrag.is_pointer_dragging());
        assert!(!DragState::PtrDrop.is_pointer_dragging());
        assert!(DragState::KbdDrag.is_keyboard_dragging());
        assert!(DragState::PtrCancel.is_settling());
        assert!(DragState::KbdDrop.is_settling());
        assert!(!DragState::Idle.is_settling());
    }

    #[test]
    fn new_session_defaults() {
        let s = DragSession::new(DeviceKind::Pointer, ItemId(3));
        assert_eq!(s.device, DeviceKind::Pointer);
        assert_eq!(s.dragged_id, ItemId(3));
        assert!(s.target_id.is_none());
        assert!(s.pointer_id.is_none());
        assert!(!s.has_moved);
        assert!(s.rects.is_none());
        assert!(s.root.is_none());
        assert!(s.is_between_bounds);
        assert_eq!(s.scrolling_speed, 0.0);
        assert!(s.resolution.is_none());
    }

    #[test]
    fn indices_resolve_through_snapshot() {
        let mut s = DragSession::new(DeviceKind::Keyboard, ItemId(2));
        assert_eq!(s.dragged_index(), None);

        s.rects = Some(RectSnapshot::new(
            (0..3)
                .map(|i| ItemRect::new(ItemId(i), Rect::new(0.0, i as f64 * 50.0, 100.0, 40.0)))
                .collect(),
        ));
        assert_eq!(s.dragged_index(), Some(2));
        assert_eq!(s.target_index(), None);

        s.target_id = Some(ItemId(0));
        assert_eq!(s.target_index(), Some(0));

        s.target_id = Some(ItemId(99));
        assert_eq!(s.target_index(), None);
    }
}
