#![forbid(unsafe_code)]

//! Host input surface.
//!
//! The host translates its native pointer and keyboard events into these
//! types. Pointer-down eligibility context replaces DOM traversal: the
//! host answers "was this press on a handle / an interactive control /
//! a locked item" up front, and the engine only evaluates the flags.

use bitflags::bitflags;

use crate::geometry::{ItemId, Point};

/// Identifier of a pointer, as assigned by the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerId(pub u32);

/// Which pointer button is pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Left button / primary touch contact.
    Primary,
    /// Right button.
    Secondary,
    /// Middle button.
    Auxiliary,
    /// Anything else.
    Other(u8),
}

/// A pointer press sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub id: PointerId,
    pub button: PointerButton,
    pub position: Point,
}

/// What the pointer press landed on, answered by the host at press time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PressContext {
    /// Item under the pointer, if any.
    pub item: Option<ItemId>,
    /// That item is individually locked.
    pub item_is_locked: bool,
    /// That item is individually disabled.
    pub item_is_disabled: bool,
    /// That item defines a drag handle sub-region.
    pub item_has_handle: bool,
    /// The press originated inside the handle.
    pub over_handle: bool,
    /// The press landed on an interactive control (button, input, ...).
    pub over_interactive: bool,
}

impl PressContext {
    /// Context for a plain press on an item body.
    #[must_use]
    pub fn on_item(item: ItemId) -> Self {
        Self {
            item: Some(item),
            ..Self::default()
        }
    }

    /// Mark the item as carrying a handle, with the press inside it.
    #[must_use]
    pub fn via_handle(mut self) -> Self {
        self.item_has_handle = true;
        self.over_handle = true;
        self
    }

    /// Mark the item as carrying a handle, with the press outside it.
    #[must_use]
    pub fn outside_handle(mut self) -> Self {
        self.item_has_handle = true;
        self.over_handle = false;
        self
    }

    /// Mark the press as landing on an interactive control.
    #[must_use]
    pub fn on_interactive(mut self) -> Self {
        self.over_interactive = true;
        self
    }
}

/// Keys the engine reacts to. Anything else is `Other` and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Activation key: lifts or drops the focused item.
    Space,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Other,
}

bitflags! {
    /// Modifier keys held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

/// A key press sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyInput {
    /// A plain, unmodified key press.
    #[must_use]
    pub const fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    /// Attach modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}
