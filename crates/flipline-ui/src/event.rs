//! Input events consumed by the reorderable list.

use flipline_core::math::Vec2;

use crate::list::MoveCommand;

/// The slice of a host platform event the controller needs to touch.
pub trait PlatformEvent {
    /// Suppress the host's default handling (navigation on drop, scrolling on
    /// touch move, refusing a drop on drag over).
    fn prevent_default(&mut self);
}

/// A [`PlatformEvent`] that just remembers whether default handling was suppressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventFlags {
    pub default_prevented: bool,
}

impl PlatformEvent for EventFlags {
    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}

/// Raw list input, already resolved to item indices where the host knows them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListInput {
    /// Native drag started on the item at `index`.
    DragStart { index: usize },
    /// Native drag entered the item at `index`.
    DragEnter { index: usize },
    /// Native drag is over an item; the host must be told a drop is allowed.
    DragOver,
    /// Native drag ended, with or without a drop.
    DragEnd,
    /// Dragged item was dropped on the list.
    Drop,
    /// A touch landed on the item at `index`.
    TouchStart { index: usize, touch: Vec2 },
    /// The active touch moved.
    TouchMove { touch: Vec2 },
    /// The active touch lifted or was cancelled.
    TouchEnd,
}

/// What handling a [`ListInput`] did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// The move applied to the list, if any.
    pub moved: Option<MoveCommand>,
    /// Whether the host should suppress default handling of the raw event.
    pub prevent_default: bool,
}

impl DispatchOutcome {
    pub(crate) fn from_flags(moved: Option<MoveCommand>, flags: EventFlags) -> Self {
        Self {
            moved,
            prevent_default: flags.default_prevented,
        }
    }
}
