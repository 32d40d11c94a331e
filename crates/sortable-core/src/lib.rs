#![forbid(unsafe_code)]

//! Reorderable-list interaction engine.
//!
//! A pure, host-driven drag-and-drop controller for sortable lists. The
//! host owns rendering, layout measurement, and the item collection; the
//! engine owns the interaction: press eligibility, the drag state
//! machine for pointer and keyboard input, collision-based target
//! resolution, per-item animation offsets, edge auto-scroll, and the
//! two-phase drop settle.
//!
//! Everything advances through explicit calls. The host feeds input
//! ([`DragController::pointer_down`], [`DragController::key_down`], ...)
//! and calls [`DragController::tick`] once per frame; the engine answers
//! with lifecycle events, movement commands, and screen-reader
//! announcements through the [`SortableHost`] trait.

pub mod animation;
pub mod autoscroll;
pub mod config;
pub mod controller;
pub mod events;
pub mod geometry;
pub mod input;
pub mod session;
pub mod translate;

pub use config::{Alignment, Direction, ListConfig, TextDirection, Transition};
pub use controller::{DRAG_START_TOLERANCE, DragController, reorder};
pub use events::{
    Announcements, DefaultAnnouncements, DragEvent, FocusTarget, HostCommand, SortableHost,
};
pub use geometry::{Axis, ItemId, ItemRect, Point, Rect, RectSnapshot};
pub use input::{Key, KeyInput, Modifiers, PointerButton, PointerId, PointerInput, PressContext};
pub use session::{DeviceKind, DragSession, DragState, DropResolution, GhostState};
