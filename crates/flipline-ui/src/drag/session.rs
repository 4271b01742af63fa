//! Per-gesture drag state.

use flipline_core::math::Vec2;

use super::ghost::Ghost;
use crate::list::MoveCommand;

/// Input modality that started the drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragModality {
    /// Host-native drag and drop; the platform draws the drag image.
    Mouse,
    /// Touch dragging; the controller maintains a [`Ghost`].
    Touch,
}

/// Identifies one drag session. Handles from ended sessions are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionHandle(pub(crate) u64);

impl SessionHandle {
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

/// Touch-only session data.
#[derive(Debug, Clone, PartialEq)]
pub struct TouchTracking {
    /// Where the initiating touch landed.
    pub pointer_origin: Vec2,
    pub ghost: Ghost,
}

/// State of one in-progress drag, from start event to end event.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub(crate) handle: SessionHandle,
    pub modality: DragModality,
    /// Index of the dragged item when the gesture started.
    pub origin_index: usize,
    /// Index the dragged item was most recently moved to.
    pub current_index: usize,
    pub touch: Option<TouchTracking>,
}

impl DragSession {
    pub(crate) fn new(handle: SessionHandle, modality: DragModality, index: usize) -> Self {
        Self {
            handle,
            modality,
            origin_index: index,
            current_index: index,
            touch: None,
        }
    }

    pub fn handle(&self) -> SessionHandle {
        self.handle
    }

    pub fn ghost(&self) -> Option<&Ghost> {
        self.touch.as_ref().map(|touch| &touch.ghost)
    }

    /// Compute the move to `target` and advance `current_index`.
    ///
    /// `len` is the live list length; targets past it are ignored.
    pub(crate) fn retarget(&mut self, target: usize, len: usize) -> Option<MoveCommand> {
        if target == self.current_index || target >= len || self.current_index >= len {
            return None;
        }
        let command = MoveCommand::new(self.current_index, target);
        self.current_index = target;
        Some(command)
    }

    /// Update the ghost for a new pointer position. Returns its new geometry.
    pub(crate) fn track_pointer(&mut self, pointer: Vec2) -> Option<&Ghost> {
        let touch = self.touch.as_mut()?;
        touch.ghost.follow(pointer - touch.pointer_origin);
        Some(&touch.ghost)
    }

    /// Account for the item at `index` being deleted from the list.
    ///
    /// Indices past it shift down by one. Returns false when the deleted item
    /// is the dragged one, in which case the session no longer has a source.
    pub(crate) fn item_removed(&mut self, index: usize) -> bool {
        if index == self.current_index {
            return false;
        }
        if self.current_index > index {
            self.current_index -= 1;
        }
        if self.origin_index > index {
            self.origin_index -= 1;
        }
        true
    }

    /// Net displacement of the dragged item since the gesture started.
    pub fn displacement(&self) -> isize {
        self.current_index as isize - self.origin_index as isize
    }
}
