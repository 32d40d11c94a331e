#![forbid(unsafe_code)]

//! Scripted-host harness for exercising the reorder engine end to end.
//!
//! [`ScriptedHost`] is a deterministic stand-in for a real rendering
//! host: it lays items out from simple metrics (extent, gap, direction),
//! answers the engine's geometry queries from that layout, applies
//! scroll increments, and records every notification as one log line.
//! On drag end it commits the resolved move to its own item order, the
//! way a real host would update its collection.
//!
//! Tests drive a [`DragController`] against the host frame by frame and
//! assert on the final order and the log.

use std::time::Duration;

use sortable_core::autoscroll::ScrollArea;
use sortable_core::{
    Direction, DragController, DragEvent, HostCommand, ItemId, ItemRect, Point, PointerButton,
    PointerId, PointerInput, Rect, SortableHost, reorder,
};

/// Frame interval used by the test drivers (62.5 fps).
pub const FRAME: Duration = Duration::from_millis(16);

/// A deterministic host with a generated layout and a notification log.
pub struct ScriptedHost {
    /// Item order; drag ends commit moves here.
    pub order: Vec<ItemId>,
    /// Item size along the layout direction.
    pub item_extent: f64,
    /// Item size across the layout direction.
    pub cross_extent: f64,
    /// Gap between items.
    pub gap: f64,
    /// Layout direction.
    pub direction: Direction,
    /// Top-left corner of the first item in content space.
    pub origin: Point,
    /// Scrollable ancestor, if the list should scroll.
    pub scroll: Option<ScrollArea>,
    /// When true, apply a non-canceled drag end to `order`.
    pub auto_commit: bool,
    /// When true, remove the item on an out-of-bounds removal drop.
    pub remove_on_signal: bool,
    /// One line per notification, in arrival order.
    pub log: Vec<String>,
    /// Every movement command, in arrival order.
    pub commands: Vec<HostCommand>,
}

impl ScriptedHost {
    /// A vertical list of `count` items, 40px tall with a 12px gap.
    #[must_use]
    pub fn vertical(count: u64) -> Self {
        Self {
            order: (0..count).map(ItemId).collect(),
            item_extent: 40.0,
            cross_extent: 100.0,
            gap: 12.0,
            direction: Direction::Vertical,
            origin: Point::ZERO,
            scroll: None,
            auto_commit: true,
            remove_on_signal: false,
            log: Vec::new(),
            commands: Vec::new(),
        }
    }

    /// A horizontal list of `count` items, 40px wide with a 12px gap.
    #[must_use]
    pub fn horizontal(count: u64) -> Self {
        Self {
            direction: Direction::Horizontal,
            ..Self::vertical(count)
        }
    }

    /// Attach a scrollable ancestor whose viewport shows `visible` pixels
    /// of the content.
    #[must_use]
    pub fn with_viewport(mut self, visible: f64) -> Self {
        let content = self.content_extent();
        let viewport = match self.direction {
            Direction::Vertical => Rect::new(0.0, 0.0, self.cross_extent, visible),
            Direction::Horizontal => Rect::new(0.0, 0.0, visible, self.cross_extent),
        };
        self.scroll = Some(ScrollArea {
            viewport,
            scroll_left: 0.0,
            scroll_top: 0.0,
            scroll_width: match self.direction {
                Direction::Vertical => self.cross_extent,
                Direction::Horizontal => content,
            },
            scroll_height: match self.direction {
                Direction::Vertical => content,
                Direction::Horizontal => self.cross_extent,
            },
        });
        self
    }

    /// Total content length along the layout direction.
    #[must_use]
    pub fn content_extent(&self) -> f64 {
        let n = self.order.len() as f64;
        if n == 0.0 {
            return 0.0;
        }
        n * self.item_extent + (n - 1.0) * self.gap
    }

    /// Center of the item currently at `index`, in client coordinates.
    #[must_use]
    pub fn slot_center(&self, index: usize) -> Point {
        let along = index as f64 * (self.item_extent + self.gap) + self.item_extent / 2.0;
        let (scroll_x, scroll_y) = self.scroll.map_or((0.0, 0.0), |a| a.offsets());
        match self.direction {
            Direction::Vertical => Point::new(
                self.origin.x + self.cross_extent / 2.0 - scroll_x,
                self.origin.y + along - scroll_y,
            ),
            Direction::Horizontal => Point::new(
                self.origin.x + along - scroll_x,
                self.origin.y + self.cross_extent / 2.0 - scroll_y,
            ),
        }
    }

    /// Whether any log line contains `needle`.
    #[must_use]
    pub fn saw(&self, needle: &str) -> bool {
        self.log.iter().any(|line| line.contains(needle))
    }

    fn commit(&mut self, event: &DragEvent, is_canceled: bool) {
        if is_canceled || !self.auto_commit {
            return;
        }
        if !event.is_between_bounds && event.can_remove_on_drop_out {
            if self.remove_on_signal {
                self.order.retain(|&id| id != event.dragged_id);
            }
            return;
        }
        if let Some(target_index) = event.target_index {
            let mut order = std::mem::take(&mut self.order);
            reorder(&mut order, event.dragged_index, target_index);
            self.order = order;
        }
    }
}

impl SortableHost for ScriptedHost {
    fn item_rects(&self) -> Vec<ItemRect> {
        let (scroll_x, scroll_y) = self.scroll.map_or((0.0, 0.0), |a| a.offsets());
        self.order
            .iter()
            .enumerate()
            .map(|(i, &id)| {
                let along = i as f64 * (self.item_extent + self.gap);
                let rect = match self.direction {
                    Direction::Vertical => Rect::new(
                        self.origin.x - scroll_x,
                        self.origin.y + along - scroll_y,
                        self.cross_extent,
                        self.item_extent,
                    ),
                    Direction::Horizontal => Rect::new(
                        self.origin.x + along - scroll_x,
                        self.origin.y - scroll_y,
                        self.item_extent,
                        self.cross_extent,
                    ),
                };
                ItemRect::new(id, rect)
            })
            .collect()
    }

    fn root_rect(&self) -> Rect {
        let (scroll_x, scroll_y) = self.scroll.map_or((0.0, 0.0), |a| a.offsets());
        let content = self.content_extent();
        match self.direction {
            Direction::Vertical => Rect::new(
                self.origin.x - scroll_x,
                self.origin.y - scroll_y,
                self.cross_extent,
                content,
            ),
            Direction::Horizontal => Rect::new(
                self.origin.x - scroll_x,
                self.origin.y - scroll_y,
                content,
                self.cross_extent,
            ),
        }
    }

    fn scroll_area(&self) -> Option<ScrollArea> {
        self.scroll
    }

    fn on_drag_start(&mut self, event: &DragEvent) {
        self.log
            .push(format!("start {:?} {}", event.device, event.dragged_index));
    }

    fn on_drag_update(&mut self, event: &DragEvent) {
        self.log.push(format!(
            "update {} -> {:?}",
            event.dragged_index, event.target_index
        ));
    }

    fn on_drop(&mut self, event: &DragEvent) {
        self.log.push(format!(
            "drop {} -> {:?} in_bounds={} removable={}",
            event.dragged_index,
            event.target_index,
            event.is_between_bounds,
            event.can_remove_on_drop_out
        ));
    }

    fn on_drag_end(&mut self, event: &DragEvent, is_canceled: bool) {
        self.log.push(format!(
            "end {} -> {:?} canceled={}",
            event.dragged_index, event.target_index, is_canceled
        ));
        self.commit(event, is_canceled);
    }

    fn on_announcement(&mut self, text: &str) {
        self.log.push(format!("say {text}"));
    }

    fn command(&mut self, cmd: HostCommand) {
        if let HostCommand::ScrollBy { dx, dy } = cmd
            && let Some(area) = self.scroll.as_mut()
        {
            let max_top = (area.scroll_height - area.viewport.height).max(0.0);
            let max_left = (area.scroll_width - area.viewport.width).max(0.0);
            area.scroll_top = (area.scroll_top + dy).clamp(0.0, max_top);
            area.scroll_left = (area.scroll_left + dx).clamp(0.0, max_left);
        }
        self.commands.push(cmd);
        self.log.push(format!("cmd {cmd:?}"));
    }
}

/// Primary-button press sample.
#[must_use]
pub fn press(id: u32, position: Point) -> PointerInput {
    PointerInput {
        id: PointerId(id),
        button: PointerButton::Primary,
        position,
    }
}

/// Tick the controller `frames` times at the standard frame interval.
pub fn run_frames(ctl: &mut DragController, host: &mut ScriptedHost, frames: usize) {
    for _ in 0..frames {
        ctl.tick(host, FRAME);
    }
}

/// Signal the reposition transition finished and tick once so the
/// session settles out.
pub fn settle(ctl: &mut DragController, host: &mut ScriptedHost) {
    ctl.transition_finished();
    ctl.tick(host, FRAME);
}
