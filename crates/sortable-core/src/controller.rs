#![forbid(unsafe_code)]

//! Drag state machine.
//!
//! [`DragController`] owns the full reorder interaction: pointer and
//! keyboard drags funnel through the same session, geometry is captured
//! once per drag, and every derived value (target, offsets, bounds) is
//! recomputed from the session rather than cached at call sites.
//!
//! # Design
//!
//! - The controller holds no clock and schedules nothing. The host calls
//!   [`DragController::tick`] once per frame; delay holds, coalesced
//!   pointer frames, auto-scroll, and the settle phase all advance there.
//! - Pointer moves are coalesced latest-wins: only the newest sample
//!   since the previous tick is processed, so a fast pointer cannot
//!   outrun the frame rate.
//! - A drop runs in two phases. The drop input fixes the resolution
//!   indices and arms the settle timer; the session resets to idle only
//!   when the host reports the reposition transition finished or the
//!   timer elapses on its own.
//!
//! # Invariants
//!
//! 1. At most one session exists at a time; inputs for a second drag are
//!    ignored until the first fully settles.
//! 2. Resolution indices are fixed at the drop input and never re-derived
//!    during the settle phase.
//! 3. Every notification reaching the host carries indices consistent
//!    with the session's captured order.

use std::fmt;
use std::time::Duration;

use crate::animation::SettleTimer;
use crate::autoscroll::{can_scroll_further, scroll_speed};
use crate::config::{Direction, ListConfig};
use crate::events::{
    Announcements, DefaultAnnouncements, DragEvent, FocusTarget, HostCommand, SortableHost,
};
use crate::geometry::{Axis, ItemId, Point, RectSnapshot, are_colliding, colliding_item};
use crate::input::{Key, KeyInput, PointerButton, PointerId, PointerInput, PressContext};
use crate::session::{DeviceKind, DragSession, DragState, DropResolution, GhostState};
use crate::translate::{ShiftContext, cross_axis_offset, dragged_travel, sibling_shift};

/// Pointer travel on either axis during a delay hold that aborts the
/// pending drag.
pub const DRAG_START_TOLERANCE: f64 = 10.0;

/// A pointer press waiting out the configured start delay.
#[derive(Debug, Clone, Copy)]
struct PendingPress {
    id: PointerId,
    item: ItemId,
    origin: Point,
    elapsed: Duration,
}

/// Keyboard step targets, after direction and text-direction mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Prev,
    Next,
    First,
    Last,
}

/// The reorder interaction engine for one list.
pub struct DragController {
    config: ListConfig,
    state: DragState,
    ghost: GhostState,
    session: Option<DragSession>,
    pending_press: Option<PendingPress>,
    pending_pointer: Option<Point>,
    settle: Option<SettleTimer>,
    announcer: Box<dyn Announcements>,
    last_scroll_offsets: Option<(f64, f64)>,
}

impl fmt::Debug for DragController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragController")
            .field("state", &self.state)
            .field("ghost", &self.ghost)
            .field("session", &self.session)
            .field("pending_press", &self.pending_press)
            .finish_non_exhaustive()
    }
}

impl Default for DragController {
    fn default() -> Self {
        Self::new(ListConfig::default())
    }
}

// ---- Construction and accessors ----

impl DragController {
    /// Create a controller with the given list configuration.
    #[must_use]
    pub fn new(config: ListConfig) -> Self {
        Self {
            config,
            state: DragState::Idle,
            ghost: GhostState::Idle,
            session: None,
            pending_press: None,
            pending_pointer: None,
            settle: None,
            announcer: Box::new(DefaultAnnouncements),
            last_scroll_offsets: None,
        }
    }

    /// Replace the assistive-technology phrase generator.
    #[must_use]
    pub fn with_announcements(mut self, announcer: impl Announcements + 'static) -> Self {
        self.announcer = Box::new(announcer);
        self
    }

    /// Current list configuration.
    #[must_use]
    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    /// Swap the list configuration.
    ///
    /// # Panics
    ///
    /// Panics if a drag is in progress. Configuration is fixed for the
    /// lifetime of a session; swap it between drags.
    pub fn set_config(&mut self, config: ListConfig) {
        assert!(
            self.state.is_idle(),
            "configuration cannot change while a drag is in progress"
        );
        self.config = config;
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Current ghost animation state.
    #[must_use]
    pub fn ghost_state(&self) -> GhostState {
        self.ghost
    }

    /// The active session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Whether the host should swallow a context-menu gesture right now.
    ///
    /// True from pointer press (including a delay hold) until the drop
    /// input; long-press platforms open the menu mid-drag otherwise.
    #[must_use]
    pub fn should_suppress_context_menu(&self) -> bool {
        self.pending_press.is_some() || self.state.is_pointer_dragging()
    }
}

// ---- Pointer input ----

impl DragController {
    /// Handle a pointer press over the list.
    ///
    /// Ineligible presses (wrong button, locked or disabled targets,
    /// presses on interactive controls or outside a declared handle) are
    /// ignored without side effects. An eligible press either starts a
    /// drag immediately or arms the configured delay hold.
    pub fn pointer_down(
        &mut self,
        host: &mut dyn SortableHost,
        input: PointerInput,
        ctx: PressContext,
    ) {
        if !self.state.is_idle() || self.pending_press.is_some() {
            return;
        }
        if self.config.is_disabled || self.config.is_locked {
            return;
        }
        if input.button != PointerButton::Primary {
            return;
        }
        let Some(item) = ctx.item else {
            return;
        };
        if ctx.item_is_locked || ctx.item_is_disabled || ctx.over_interactive {
            return;
        }
        if ctx.item_has_handle && !ctx.over_handle {
            return;
        }

        if self.config.delay > Duration::ZERO {
            self.pending_press = Some(PendingPress {
                id: input.id,
                item,
                origin: input.position,
                elapsed: Duration::ZERO,
            });
            return;
        }
        self.start_pointer_drag(host, input.id, item, input.position);
    }

    /// Record a pointer move. Samples are coalesced latest-wins and
    /// processed on the next [`DragController::tick`].
    pub fn pointer_move(&mut self, input: PointerInput) {
        if let Some(pending) = self.pending_press {
            if pending.id != input.id {
                return;
            }
            let delta = input.position.delta(pending.origin);
            if delta.x.abs() > DRAG_START_TOLERANCE || delta.y.abs() > DRAG_START_TOLERANCE {
                // Moved too far during the hold: this is a scroll or a
                // swipe, not a drag.
                self.pending_press = None;
            }
            return;
        }
        if !self.state.is_pointer_dragging() {
            return;
        }
        if self.session.as_ref().and_then(|s| s.pointer_id) != Some(input.id) {
            return;
        }
        self.pending_pointer = Some(input.position);
    }

    /// Handle the pointer release: drop, or abandon a pending hold.
    pub fn pointer_up(&mut self, host: &mut dyn SortableHost, id: PointerId) {
        if let Some(pending) = self.pending_press {
            if pending.id == id {
                self.pending_press = None;
            }
            return;
        }
        if !self.state.is_pointer_dragging() {
            return;
        }
        if self.session.as_ref().and_then(|s| s.pointer_id) != Some(id) {
            return;
        }
        self.drop_session(host, false);
    }

    /// Handle a platform pointer-cancel (capture lost, gesture claimed
    /// by the system). Equivalent to an explicit cancel.
    pub fn pointer_cancel(&mut self, host: &mut dyn SortableHost, id: PointerId) {
        if let Some(pending) = self.pending_press {
            if pending.id == id {
                self.pending_press = None;
            }
            return;
        }
        if !self.state.is_pointer_dragging() {
            return;
        }
        if self.session.as_ref().and_then(|s| s.pointer_id) != Some(id) {
            return;
        }
        self.drop_session(host, true);
    }

    fn start_pointer_drag(
        &mut self,
        host: &mut dyn SortableHost,
        id: PointerId,
        item: ItemId,
        position: Point,
    ) {
        let rects = RectSnapshot::new(host.item_rects());
        if rects.index_of(item).is_none() {
            return;
        }
        let mut session = DragSession::new(DeviceKind::Pointer, item);
        session.pointer_id = Some(id);
        session.pointer = Some(position);
        session.pointer_origin = Some(position);
        session.rects = Some(rects);
        session.root = Some(host.root_rect());
        self.last_scroll_offsets = host.scroll_area().map(|a| a.offsets());

        let dragged_index = session.dragged_index().unwrap_or_default();
        #[cfg(feature = "tracing")]
        tracing::debug!(item = item.0, index = dragged_index, "pointer drag started");

        self.state = DragState::PtrDragStart;
        self.ghost = GhostState::PtrDragStart;
        let event = live_event(&self.config, &session);
        self.session = Some(session);

        host.command(HostCommand::CapturePointer(id));
        host.on_drag_start(&event);
        host.on_announcement(&self.announcer.lifted(item, dragged_index));
    }
}

// ---- Keyboard input ----

impl DragController {
    /// Handle a key press while an item (or its handle) has focus.
    ///
    /// Outside a drag, Space lifts the focused item and the arrow keys
    /// turn into focus-move requests. During a keyboard drag, the arrow
    /// keys step the target, Space drops, and Escape cancels. Escape also
    /// cancels an active pointer drag. Steps past either end of the list
    /// are silent no-ops.
    pub fn key_down(
        &mut self,
        host: &mut dyn SortableHost,
        input: KeyInput,
        focused: Option<ItemId>,
    ) {
        if !input.modifiers.is_empty() {
            return;
        }
        if self.config.is_disabled || self.config.is_locked {
            return;
        }

        if self.state.is_pointer_dragging() {
            if input.key == Key::Escape {
                self.drop_session(host, true);
            }
            return;
        }
        if self.state.is_settling() {
            return;
        }

        if self.state.is_keyboard_dragging() {
            match input.key {
                Key::Space => self.drop_session(host, false),
                Key::Escape => self.drop_session(host, true),
                key => {
                    if let Some(step) = self.map_step(key) {
                        self.step_target(host, step);
                    }
                }
            }
            return;
        }

        // Idle: lift or move focus.
        match input.key {
            Key::Space => {
                if let Some(item) = focused {
                    self.start_keyboard_drag(host, item);
                }
            }
            key => {
                if focused.is_some()
                    && let Some(step) = self.map_step(key)
                {
                    let target = match step {
                        Step::Prev => FocusTarget::Prev,
                        Step::Next => FocusTarget::Next,
                        Step::First => FocusTarget::First,
                        Step::Last => FocusTarget::Last,
                    };
                    host.command(HostCommand::Focus(target));
                }
            }
        }
    }

    /// Handle focus leaving the list. A keyboard drag cannot survive
    /// without a focused owner, so it cancels.
    pub fn focus_changed(&mut self, host: &mut dyn SortableHost, has_focus: bool) {
        if !has_focus && self.state.is_keyboard_dragging() {
            self.drop_session(host, true);
        }
    }

    /// Map a key to a step along the list's direction, swapping the
    /// horizontal arrows under right-to-left text.
    fn map_step(&self, key: Key) -> Option<Step> {
        let rtl = self.config.is_rtl();
        match (self.config.direction, key) {
            (Direction::Vertical, Key::Up) => Some(Step::Prev),
            (Direction::Vertical, Key::Down) => Some(Step::Next),
            (Direction::Horizontal, Key::Left) => Some(if rtl { Step::Next } else { Step::Prev }),
            (Direction::Horizontal, Key::Right) => Some(if rtl { Step::Prev } else { Step::Next }),
            (_, Key::Home) => Some(Step::First),
            (_, Key::End) => Some(Step::Last),
            _ => None,
        }
    }

    fn start_keyboard_drag(&mut self, host: &mut dyn SortableHost, item: ItemId) {
        let rects = RectSnapshot::new(host.item_rects());
        if rects.index_of(item).is_none() {
            return;
        }
        let mut session = DragSession::new(DeviceKind::Keyboard, item);
        session.rects = Some(rects);
        session.root = Some(host.root_rect());

        let dragged_index = session.dragged_index().unwrap_or_default();
        #[cfg(feature = "tracing")]
        tracing::debug!(item = item.0, index = dragged_index, "keyboard drag started");

        self.state = DragState::KbdDragStart;
        let event = live_event(&self.config, &session);
        self.session = Some(session);

        host.on_drag_start(&event);
        host.on_announcement(&self.announcer.lifted(item, dragged_index));
        host.command(HostCommand::EnsureVisible(item));
    }

    fn step_target(&mut self, host: &mut dyn SortableHost, step: Step) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let len = session.rects.as_ref().map_or(0, RectSnapshot::len);
        if len == 0 {
            return;
        }
        let Some(dragged_index) = session.dragged_index() else {
            return;
        };
        let current = session.target_index().unwrap_or(dragged_index);
        let next = match step {
            Step::Prev => {
                if current == 0 {
                    return;
                }
                current - 1
            }
            Step::Next => {
                if current + 1 >= len {
                    return;
                }
                current + 1
            }
            Step::First => 0,
            Step::Last => len - 1,
        };
        if next == current {
            return;
        }
        let Some(target_id) = session.rects.as_ref().and_then(|r| r.by_index(next)).map(|i| i.id)
        else {
            return;
        };
        session.target_id = Some(target_id);

        #[cfg(feature = "tracing")]
        tracing::trace!(from = current, to = next, "keyboard step");

        let event = live_event(&self.config, session);
        host.on_drag_update(&event);
        host.on_announcement(&self.announcer.moved(
            session.dragged_id,
            dragged_index,
            target_id,
            next,
        ));
        host.command(HostCommand::EnsureVisible(target_id));
    }
}

// ---- Frame loop ----

impl DragController {
    /// Advance the controller by one frame.
    ///
    /// Runs, in order: the ghost animation sequencing, the delay hold,
    /// the coalesced pointer frame with collision detection, auto-scroll,
    /// and the settle timer.
    pub fn tick(&mut self, host: &mut dyn SortableHost, dt: Duration) {
        // Ghost transitions advance one per frame so the host observes
        // the predrop state before the drop snap begins.
        self.ghost = match self.ghost {
            GhostState::PtrDragStart => GhostState::PtrDrag,
            GhostState::PtrPredrop => GhostState::PtrDrop,
            other => other,
        };
        match self.state {
            DragState::PtrDragStart => self.state = DragState::PtrDrag,
            DragState::KbdDragStart => self.state = DragState::KbdDrag,
            _ => {}
        }

        if let Some(mut pending) = self.pending_press {
            pending.elapsed = pending.elapsed.saturating_add(dt);
            if pending.elapsed >= self.config.delay {
                self.pending_press = None;
                self.start_pointer_drag(host, pending.id, pending.item, pending.origin);
            } else {
                self.pending_press = Some(pending);
            }
        }

        if self.state == DragState::PtrDrag {
            self.observe_external_scroll(host);
            if let Some(position) = self.pending_pointer.take() {
                self.process_pointer_frame(host, position);
            }
            self.auto_scroll(host);
        }

        if self.state.is_settling()
            && let Some(settle) = self.settle.as_mut()
        {
            settle.tick(dt);
            if settle.is_elapsed() {
                self.finish_drag(host);
            }
        }
    }

    /// Record the host's "reposition transition finished" signal. The
    /// session resets on the next tick instead of waiting out the
    /// fallback deadline.
    pub fn transition_finished(&mut self) {
        if let Some(settle) = self.settle.as_mut() {
            settle.complete();
        }
    }

    /// Re-capture geometry when the scrollable ancestor moved under us
    /// (wheel, trackpad, or our own scroll increments).
    fn observe_external_scroll(&mut self, host: &mut dyn SortableHost) {
        let Some(area) = host.scroll_area() else {
            return;
        };
        let offsets = area.offsets();
        if let Some(prev) = self.last_scroll_offsets
            && prev != offsets
        {
            self.apply_scroll_delta(host, offsets.0 - prev.0, offsets.1 - prev.1);
        }
        self.last_scroll_offsets = Some(offsets);
    }

    /// Scrolled content shifts every captured box in client space. The
    /// snapshot is re-taken, and the press origin moves with the content
    /// so the ghost stays under the pointer.
    fn apply_scroll_delta(&mut self, host: &mut dyn SortableHost, dx: f64, dy: f64) {
        if let Some(session) = self.session.as_mut()
            && let Some(origin) = session.pointer_origin.as_mut()
        {
            origin.x -= dx;
            origin.y -= dy;
        }
        self.recapture(host);
    }

    fn recapture(&mut self, host: &mut dyn SortableHost) {
        if let Some(session) = self.session.as_mut() {
            session.rects = Some(RectSnapshot::new(host.item_rects()));
            session.root = Some(host.root_rect());
        }
    }

    fn process_pointer_frame(&mut self, host: &mut dyn SortableHost, position: Point) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.pointer = Some(position);
        session.has_moved = true;

        let delta = pointer_delta(&self.config, session);
        let Some(dragged_rect) = session
            .rects
            .as_ref()
            .and_then(|r| r.get(session.dragged_id))
            .map(|i| i.rect)
        else {
            return;
        };
        let ghost = dragged_rect.translated(delta);
        if let Some(root) = session.root {
            session.is_between_bounds = are_colliding(&ghost, &root);
        }

        let previous = session.target_id;
        let hit = session
            .rects
            .as_ref()
            .and_then(|r| colliding_item(&ghost, r))
            .map(|i| i.id);
        match hit {
            Some(id) if id != session.dragged_id => session.target_id = Some(id),
            Some(_) => {}
            // Out of bounds with removal enabled also clears: the drop
            // must not carry a stale target into the removal signal.
            None if self.config.can_clear_on_drag_out
                || (self.config.can_remove_on_drop_out && !session.is_between_bounds) =>
            {
                session.target_id = None;
            }
            None => {}
        }

        let event = live_event(&self.config, session);
        host.on_drag_update(&event);
        if session.target_id != previous
            && let (Some(target_id), Some(target_index), Some(dragged_index)) =
                (session.target_id, session.target_index(), session.dragged_index())
        {
            host.on_announcement(&self.announcer.moved(
                session.dragged_id,
                dragged_index,
                target_id,
                target_index,
            ));
        }
    }

    fn auto_scroll(&mut self, host: &mut dyn SortableHost) {
        let area = host.scroll_area();
        let Some(session) = self.session.as_mut() else {
            return;
        };
        // The press position alone is not a scroll intent.
        if !session.has_moved {
            return;
        }
        let (Some(area), Some(pointer)) = (area, session.pointer) else {
            session.scrolling_speed = 0.0;
            return;
        };
        let speed = scroll_speed(&area, pointer, self.config.direction);
        session.scrolling_speed = speed;
        if speed == 0.0 || !can_scroll_further(&area, self.config.direction, speed) {
            return;
        }
        let (dx, dy) = match self.config.direction {
            Direction::Vertical => (0.0, speed),
            Direction::Horizontal => (speed, 0.0),
        };
        let before = area.offsets();
        host.command(HostCommand::ScrollBy { dx, dy });
        // The host applied the increment synchronously; re-read what it
        // actually scrolled (limits may clamp the request).
        let after = host.scroll_area().map_or(before, |a| a.offsets());
        self.apply_scroll_delta(host, after.0 - before.0, after.1 - before.1);
        self.last_scroll_offsets = Some(after);
        self.process_pointer_frame(host, pointer);
    }
}

// ---- Drop and settle ----

impl DragController {
    fn drop_session(&mut self, host: &mut dyn SortableHost, canceled: bool) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let dragged_index = session.dragged_index().unwrap_or_default();
        let target_index = if canceled { None } else { session.target_index() };
        let resolution = DropResolution {
            dragged_index,
            target_index,
            canceled,
        };
        session.resolution = Some(resolution);
        self.pending_pointer = None;

        let device = session.device;
        self.state = match (device, canceled) {
            (DeviceKind::Pointer, false) => DragState::PtrDrop,
            (DeviceKind::Pointer, true) => DragState::PtrCancel,
            (DeviceKind::Keyboard, false) => DragState::KbdDrop,
            (DeviceKind::Keyboard, true) => DragState::KbdCancel,
        };
        if device == DeviceKind::Pointer {
            self.ghost = if !canceled
                && !session.is_between_bounds
                && self.config.can_remove_on_drop_out
            {
                GhostState::PtrRemove
            } else {
                GhostState::PtrPredrop
            };
            if let Some(id) = session.pointer_id.take() {
                host.command(HostCommand::ReleasePointer(id));
            }
        }
        self.settle = Some(SettleTimer::new(self.config.transition.duration));

        #[cfg(feature = "tracing")]
        tracing::debug!(
            ?resolution,
            canceled,
            "drop input received, settle phase armed"
        );

        let event = resolved_event(&self.config, session, resolution);
        host.on_drop(&event);
        let text = if canceled {
            self.announcer.canceled(session.dragged_id, dragged_index)
        } else {
            let target_id = if target_index.is_some() {
                session.target_id
            } else {
                None
            };
            self.announcer
                .dropped(session.dragged_id, dragged_index, target_id, target_index)
        };
        host.on_announcement(&text);
        if device == DeviceKind::Keyboard {
            host.command(HostCommand::EnsureVisible(session.dragged_id));
        }
    }

    fn finish_drag(&mut self, host: &mut dyn SortableHost) {
        let Some(session) = self.session.take() else {
            return;
        };
        let resolution = session.resolution.unwrap_or(DropResolution {
            dragged_index: session.dragged_index().unwrap_or_default(),
            target_index: None,
            canceled: true,
        });
        let event = resolved_event(&self.config, &session, resolution);

        #[cfg(feature = "tracing")]
        tracing::debug!(?resolution, "drag finished, session reset");

        self.state = DragState::Idle;
        self.ghost = GhostState::Idle;
        self.settle = None;
        self.pending_pointer = None;
        self.last_scroll_offsets = None;
        host.on_drag_end(&event, resolution.canceled);
    }
}

// ---- Offsets ----

impl DragController {
    /// Translation the host applies to the dragged element right now.
    ///
    /// During a pointer drag this tracks the pointer (honoring the locked
    /// axis and boundary settings); during a keyboard drag and the drop
    /// snap it is the travel to the target slot; during a cancel snap it
    /// is zero so the element returns home.
    #[must_use]
    pub fn ghost_offset(&self) -> Point {
        let Some(session) = self.session.as_ref() else {
            return Point::ZERO;
        };
        if let Some(resolution) = session.resolution {
            if self.ghost == GhostState::PtrRemove || self.ghost == GhostState::PtrPredrop {
                // Hold the lift position: one frame for the transition to
                // switch on, or for the host's removal animation.
                return pointer_delta(&self.config, session);
            }
            if resolution.canceled {
                return Point::ZERO;
            }
            return travel_offset(
                &self.config,
                session,
                resolution.dragged_index,
                resolution.target_index,
            );
        }
        match session.device {
            DeviceKind::Pointer => pointer_delta(&self.config, session),
            DeviceKind::Keyboard => {
                let Some(dragged_index) = session.dragged_index() else {
                    return Point::ZERO;
                };
                travel_offset(&self.config, session, dragged_index, session.target_index())
            }
        }
    }

    /// Translation the host applies to the sibling at `index`.
    ///
    /// Displaced siblings stay shifted through the settle phase and reset
    /// with the session; on a cancel they return immediately.
    #[must_use]
    pub fn item_offset(&self, index: usize) -> Point {
        let Some(session) = self.session.as_ref() else {
            return Point::ZERO;
        };
        let Some(rects) = session.rects.as_ref() else {
            return Point::ZERO;
        };
        let (dragged_index, target_index) = if let Some(resolution) = session.resolution {
            if resolution.canceled {
                return Point::ZERO;
            }
            let Some(target_index) = resolution.target_index else {
                return Point::ZERO;
            };
            (resolution.dragged_index, target_index)
        } else {
            let (Some(dragged_index), Some(target_index)) =
                (session.dragged_index(), session.target_index())
            else {
                return Point::ZERO;
            };
            (dragged_index, target_index)
        };
        sibling_shift(
            &ShiftContext {
                axis: self.config.direction.axis(),
                dragged_index,
                target_index,
                gap: self.config.gap,
                wrapping: self.config.has_wrapping,
                rtl: self.config.is_rtl(),
                rects,
            },
            index,
        )
    }
}

/// Raw pointer translation with the locked-axis and boundary settings
/// applied.
fn pointer_delta(config: &ListConfig, session: &DragSession) -> Point {
    let (Some(pointer), Some(origin)) = (session.pointer, session.pointer_origin) else {
        return Point::ZERO;
    };
    let mut delta = pointer.delta(origin);
    if config.has_locked_axis {
        match config.direction.axis() {
            Axis::X => delta.y = 0.0,
            Axis::Y => delta.x = 0.0,
        }
    }
    if config.has_boundaries
        && let (Some(root), Some(dragged)) = (
            session.root,
            session
                .rects
                .as_ref()
                .and_then(|r| r.get(session.dragged_id))
                .map(|i| i.rect),
        )
    {
        let clamped = dragged.translated(delta).clamped_within(&root);
        delta = Point::new(clamped.x - dragged.x, clamped.y - dragged.y);
    }
    delta
}

/// Travel from the dragged slot to the target slot, with the cross-axis
/// correction under wrapping.
fn travel_offset(
    config: &ListConfig,
    session: &DragSession,
    from: usize,
    to: Option<usize>,
) -> Point {
    let Some(to) = to else {
        return Point::ZERO;
    };
    let Some(rects) = session.rects.as_ref() else {
        return Point::ZERO;
    };
    let axis = config.direction.axis();
    let from_rect = rects.by_index(from).map(|i| i.rect);
    let to_rect = rects.by_index(to).map(|i| i.rect);
    let main = dragged_travel(axis, from_rect, to_rect, from, to);
    let cross = if config.has_wrapping {
        cross_axis_offset(config.alignment, axis, from_rect, to_rect)
    } else {
        0.0
    };
    match axis {
        Axis::X => Point::new(main, cross),
        Axis::Y => Point::new(cross, main),
    }
}

/// Event payload from the session's live indices.
fn live_event(config: &ListConfig, session: &DragSession) -> DragEvent {
    DragEvent {
        device: session.device,
        dragged_id: session.dragged_id,
        dragged_index: session.dragged_index().unwrap_or_default(),
        target_id: session.target_id,
        target_index: session.target_index(),
        is_between_bounds: session.is_between_bounds,
        can_remove_on_drop_out: config.can_remove_on_drop_out,
    }
}

/// Event payload from indices fixed at the drop input.
fn resolved_event(
    config: &ListConfig,
    session: &DragSession,
    resolution: DropResolution,
) -> DragEvent {
    DragEvent {
        device: session.device,
        dragged_id: session.dragged_id,
        dragged_index: resolution.dragged_index,
        target_id: if resolution.target_index.is_some() {
            session.target_id
        } else {
            None
        },
        target_index: resolution.target_index,
        is_between_bounds: session.is_between_bounds,
        can_remove_on_drop_out: config.can_remove_on_drop_out,
    }
}

/// Apply a finished drag to the host's item collection: the element at
/// `from` moves to position `to` and everything between shifts by one.
/// Out-of-range indices leave the collection untouched.
pub fn reorder<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to || from >= items.len() || to >= items.len() {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}
