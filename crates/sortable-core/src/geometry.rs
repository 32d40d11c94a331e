#![forbid(unsafe_code)]

//! Geometric primitives and the drag-session rect snapshot.
//!
//! Coordinates are f64 pixels in the host's client space (origin at the
//! top-left, y growing downward). The engine never measures anything
//! itself: the host captures item boxes and the engine answers collision
//! and containment queries over them.

/// A point in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Origin.
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`.
    #[inline]
    pub fn delta(&self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    /// Component along the given axis.
    #[inline]
    pub const fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}

/// Layout axis. The drag direction maps to one axis; the other is the
/// cross axis (relevant only under wrapping).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// The perpendicular axis.
    #[inline]
    pub const fn cross(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

/// An axis-aligned rectangle in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge.
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center point.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check if a point is inside the rectangle (edges inclusive on the
    /// near side, exclusive on the far side).
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Leading edge along an axis.
    #[inline]
    pub const fn start(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Trailing edge along an axis.
    #[inline]
    pub fn end(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.right(),
            Axis::Y => self.bottom(),
        }
    }

    /// Extent along an axis.
    #[inline]
    pub const fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }

    /// A copy shifted by the given delta.
    #[inline]
    pub fn translated(&self, delta: Point) -> Rect {
        Rect::new(self.x + delta.x, self.y + delta.y, self.width, self.height)
    }

    /// Area of the overlap with another rectangle (0.0 when disjoint).
    pub fn overlap_area(&self, other: &Rect) -> f64 {
        let w = self.right().min(other.right()) - self.x.max(other.x);
        let h = self.bottom().min(other.bottom()) - self.y.max(other.y);
        if w > 0.0 && h > 0.0 { w * h } else { 0.0 }
    }

    /// A copy clamped so it lies within `bounds` (position only; the
    /// size is preserved, so a rect larger than the bounds pins to the
    /// near edge).
    pub fn clamped_within(&self, bounds: &Rect) -> Rect {
        let x = self
            .x
            .min(bounds.right() - self.width)
            .max(bounds.x);
        let y = self
            .y
            .min(bounds.bottom() - self.height)
            .max(bounds.y);
        Rect::new(x, y, self.width, self.height)
    }
}

/// Standard AABB overlap test: true if the rectangles overlap on both
/// axes. Used for ghost/item collision and ghost/root containment.
#[inline]
pub fn are_colliding(a: &Rect, b: &Rect) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}

/// Stable identifier for a list item, supplied by the host.
///
/// The engine never inspects ids; it only matches and reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u64);

/// Snapshot of one item's layout box. Immutable once captured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemRect {
    pub id: ItemId,
    pub rect: Rect,
}

impl ItemRect {
    /// Create a new item rect.
    #[inline]
    pub const fn new(id: ItemId, rect: Rect) -> Self {
        Self { id, rect }
    }
}

/// Index-ordered set of item boxes captured at drag start.
///
/// Owned by the active drag session; recaptured whenever the scrollable
/// ancestor's offsets change during a drag, discarded when the session
/// ends. Item index is always a position lookup in this order, never
/// cached elsewhere.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RectSnapshot {
    items: Vec<ItemRect>,
}

impl RectSnapshot {
    /// Create a snapshot from index-ordered item boxes.
    #[must_use]
    pub fn new(items: Vec<ItemRect>) -> Self {
        Self { items }
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the snapshot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Live position of an item in list order.
    #[must_use]
    pub fn index_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Box of an item by id.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&ItemRect> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Box of an item by index.
    #[must_use]
    pub fn by_index(&self, index: usize) -> Option<&ItemRect> {
        self.items.get(index)
    }

    /// Iterate items in list order.
    pub fn iter(&self) -> impl Iterator<Item = &ItemRect> {
        self.items.iter()
    }
}

/// The item whose box overlaps `ghost` with the greatest area.
///
/// Ties break to the first item in list order (the comparison keeps the
/// earlier maximum). Returns `None` for an empty snapshot or when
/// nothing overlaps. Pure: identical inputs give identical results.
pub fn colliding_item<'a>(ghost: &Rect, rects: &'a RectSnapshot) -> Option<&'a ItemRect> {
    let mut best: Option<(&ItemRect, f64)> = None;
    for item in rects.iter() {
        let area = ghost.overlap_area(&item.rect);
        if area <= 0.0 {
            continue;
        }
        match best {
            Some((_, best_area)) if area <= best_area => {}
            _ => best = Some((item, area)),
        }
    }
    best.map(|(item, _)| item)
}
