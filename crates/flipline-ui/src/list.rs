//! Ordered lists with stable identity and splice-move reordering.

use std::fmt;

use crate::id::{ItemId, Keyed};

/// Error types for programmatic list operations.
///
/// Gesture handling never produces these; spurious gestures are ignored instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// Index past the end of the list.
    IndexOutOfBounds { index: usize, len: usize },
    /// An item with this id is already in the list.
    DuplicateId(ItemId),
    /// No item with this id is in the list.
    UnknownId(ItemId),
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::IndexOutOfBounds { index, len } => {
                write!(f, "Index {} out of bounds for list of length {}", index, len)
            }
            ListError::DuplicateId(id) => write!(f, "Item id {} is already in the list", id),
            ListError::UnknownId(id) => write!(f, "Item id {} not found", id),
        }
    }
}

impl std::error::Error for ListError {}

/// Result type for list operations.
pub type ListResult<T> = Result<T, ListError>;

/// Move the element at `from` to `to`, shifting everything in between by one.
///
/// This is remove-then-insert, not a swap: for `from < to` the items in
/// `(from, to]` shift left, for `from > to` the items in `[to, from)` shift right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveCommand {
    pub from: usize,
    pub to: usize,
}

impl MoveCommand {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// True if applying this command would leave the order unchanged.
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }

    /// Apply the move to a slice. Returns `false` (and leaves the slice
    /// untouched) if either index is out of range or the move is a no-op.
    pub fn apply<T>(&self, items: &mut [T]) -> bool {
        let len = items.len();
        if self.from >= len || self.to >= len || self.is_noop() {
            return false;
        }

        if self.from < self.to {
            items[self.from..=self.to].rotate_left(1);
        } else {
            items[self.to..=self.from].rotate_right(1);
        }
        true
    }
}

/// A collection the drag controller can reorder.
///
/// The controller never owns the list; it issues [`MoveCommand`]s through this
/// trait so the consumer stays the only writer.
pub trait ReorderTarget {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Apply a move. Returns whether the order changed.
    fn apply_move(&mut self, command: MoveCommand) -> bool;
}

impl<T> ReorderTarget for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn apply_move(&mut self, command: MoveCommand) -> bool {
        command.apply(self.as_mut_slice())
    }
}

/// A payload paired with its stable id.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedItem<T> {
    pub id: ItemId,
    pub value: T,
}

impl<T> OrderedItem<T> {
    pub fn new(id: impl Into<ItemId>, value: T) -> Self {
        Self {
            id: id.into(),
            value,
        }
    }
}

impl<T> Keyed for OrderedItem<T> {
    fn id(&self) -> &ItemId {
        &self.id
    }
}

/// An ordered sequence of uniquely-identified items.
///
/// Every insertion path checks for duplicate ids, so the uniqueness invariant
/// holds at all times; reordering goes through [`MoveCommand`] and can only
/// permute what is already there.
#[derive(Debug, Clone)]
pub struct OrderedList<I> {
    items: Vec<I>,
}

impl<I> Default for OrderedList<I> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<I: Keyed> OrderedList<I> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list, failing on the first duplicate id.
    pub fn from_items(items: impl IntoIterator<Item = I>) -> ListResult<Self> {
        let mut list = Self::new();
        for item in items {
            list.push(item)?;
        }
        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn index_of(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    pub fn get(&self, index: usize) -> Option<&I> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut I> {
        self.items.get_mut(index)
    }

    pub fn get_by_id(&self, id: &ItemId) -> Option<&I> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn get_by_id_mut(&mut self, id: &ItemId) -> Option<&mut I> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, I> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, I> {
        self.items.iter_mut()
    }

    pub fn as_slice(&self) -> &[I] {
        &self.items
    }

    /// Ids in current order.
    pub fn ids(&self) -> Vec<ItemId> {
        self.items.iter().map(|item| item.id().clone()).collect()
    }

    /// Append an item.
    pub fn push(&mut self, item: I) -> ListResult<()> {
        if self.contains(item.id()) {
            return Err(ListError::DuplicateId(item.id().clone()));
        }
        self.items.push(item);
        Ok(())
    }

    /// Insert an item at `index` (`index == len` appends).
    pub fn insert(&mut self, index: usize, item: I) -> ListResult<()> {
        if index > self.items.len() {
            return Err(ListError::IndexOutOfBounds {
                index,
                len: self.items.len(),
            });
        }
        if self.contains(item.id()) {
            return Err(ListError::DuplicateId(item.id().clone()));
        }
        self.items.insert(index, item);
        Ok(())
    }

    /// Move the item at `from` to `to`.
    ///
    /// Returns `Ok(false)` for a no-op move.
    pub fn move_item(&mut self, from: usize, to: usize) -> ListResult<bool> {
        let len = self.items.len();
        for index in [from, to] {
            if index >= len {
                return Err(ListError::IndexOutOfBounds { index, len });
            }
        }
        Ok(MoveCommand::new(from, to).apply(&mut self.items))
    }

    /// Remove and return the item with `id`.
    pub fn remove_by_id(&mut self, id: &ItemId) -> ListResult<I> {
        let index = self
            .index_of(id)
            .ok_or_else(|| ListError::UnknownId(id.clone()))?;
        Ok(self.items.remove(index))
    }

    pub fn retain(&mut self, f: impl FnMut(&I) -> bool) {
        self.items.retain(f);
    }

    pub fn into_vec(self) -> Vec<I> {
        self.items
    }
}

impl<I: Keyed> ReorderTarget for OrderedList<I> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn apply_move(&mut self, command: MoveCommand) -> bool {
        command.apply(&mut self.items)
    }
}

impl<'a, I> IntoIterator for &'a OrderedList<I> {
    type Item = &'a I;
    type IntoIter = std::slice::Iter<'a, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
