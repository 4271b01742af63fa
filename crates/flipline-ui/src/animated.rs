//! List state with deferred removal.
//!
//! Removing an item is a two-step affair: [`AnimatedList::mark_removing`] flags
//! it so the exit transition can play while it is still rendered, and
//! [`AnimatedList::complete_removal`] deletes it once that transition ended.

use crate::id::{ItemId, Keyed};
use crate::list::{ListError, ListResult, MoveCommand, OrderedItem, OrderedList, ReorderTarget};

/// An [`OrderedItem`] plus its transient removal flag.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedItem<T> {
    pub item: OrderedItem<T>,
    pub removing: bool,
}

impl<T> AnimatedItem<T> {
    pub fn new(item: OrderedItem<T>) -> Self {
        Self {
            item,
            removing: false,
        }
    }

    pub fn value(&self) -> &T {
        &self.item.value
    }
}

impl<T> Keyed for AnimatedItem<T> {
    fn id(&self) -> &ItemId {
        &self.item.id
    }
}

/// How an insertion landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// A new id, appended at the end; it will play the enter transition.
    Appended,
    /// The id was mid-removal; the removal is cancelled and the payload replaced.
    Revived,
}

/// Membership changes produced by [`AnimatedList::sync`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Ids that disappeared from the source and are now flagged `removing`.
    pub removing: Vec<ItemId>,
    /// Ids that were appended.
    pub added: Vec<ItemId>,
    /// Ids that reappeared while their exit transition was still running.
    pub revived: Vec<ItemId>,
}

impl SyncReport {
    pub fn is_empty(&self) -> bool {
        self.removing.is_empty() && self.added.is_empty() && self.revived.is_empty()
    }
}

/// The list an animator-owning component renders from.
///
/// Indices used by drag gestures refer to this list as rendered, including
/// items that are currently playing their exit transition.
#[derive(Debug, Clone)]
pub struct AnimatedList<T> {
    items: OrderedList<AnimatedItem<T>>,
}

impl<T> Default for AnimatedList<T> {
    fn default() -> Self {
        Self {
            items: OrderedList::new(),
        }
    }
}

impl<T> AnimatedList<T> {
    /// Build from an initial set of items, failing on duplicate ids.
    pub fn new(items: impl IntoIterator<Item = OrderedItem<T>>) -> ListResult<Self> {
        Ok(Self {
            items: OrderedList::from_items(items.into_iter().map(AnimatedItem::new))?,
        })
    }

    /// Number of rendered items, including those being removed.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items not flagged for removal.
    pub fn live_len(&self) -> usize {
        self.items.iter().filter(|item| !item.removing).count()
    }

    pub fn get(&self, index: usize) -> Option<&AnimatedItem<T>> {
        self.items.get(index)
    }

    pub fn get_by_id(&self, id: &ItemId) -> Option<&AnimatedItem<T>> {
        self.items.get_by_id(id)
    }

    pub fn index_of(&self, id: &ItemId) -> Option<usize> {
        self.items.index_of(id)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.items.contains(id)
    }

    pub fn is_removing(&self, id: &ItemId) -> bool {
        self.items.get_by_id(id).is_some_and(|item| item.removing)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AnimatedItem<T>> {
        self.items.iter()
    }

    pub fn ids(&self) -> Vec<ItemId> {
        self.items.ids()
    }

    /// Append `item`, or revive it if its id is mid-removal.
    pub fn push(&mut self, item: OrderedItem<T>) -> ListResult<Insertion> {
        if let Some(existing) = self.items.get_by_id_mut(&item.id) {
            if !existing.removing {
                return Err(ListError::DuplicateId(item.id));
            }
            existing.item.value = item.value;
            existing.removing = false;
            return Ok(Insertion::Revived);
        }
        self.items.push(AnimatedItem::new(item))?;
        Ok(Insertion::Appended)
    }

    /// Flag `id` for removal. The item stays in the list until
    /// [`complete_removal`](Self::complete_removal).
    ///
    /// Returns `Ok(false)` if it was already flagged.
    pub fn mark_removing(&mut self, id: &ItemId) -> ListResult<bool> {
        let item = self
            .items
            .get_by_id_mut(id)
            .ok_or_else(|| ListError::UnknownId(id.clone()))?;
        if item.removing {
            return Ok(false);
        }
        item.removing = true;
        Ok(true)
    }

    /// Delete an item whose exit transition finished.
    ///
    /// Items that are not flagged `removing` are left alone and `None` is returned.
    pub fn complete_removal(&mut self, id: &ItemId) -> Option<AnimatedItem<T>> {
        if !self.is_removing(id) {
            return None;
        }
        self.items.remove_by_id(id).ok()
    }

    /// Delete immediately, bypassing the exit transition.
    pub fn remove_now(&mut self, id: &ItemId) -> ListResult<AnimatedItem<T>> {
        self.items.remove_by_id(id)
    }

    /// Reconcile with a new source list.
    ///
    /// Ids missing from `source` are flagged `removing`, new ids are appended in
    /// source order, and existing ids take the source payload while keeping
    /// their current position. An id that comes back while flagged is revived.
    pub fn sync(&mut self, source: impl IntoIterator<Item = OrderedItem<T>>) -> ListResult<SyncReport> {
        let source = OrderedList::from_items(source)?;
        let mut report = SyncReport::default();

        for item in self.items.iter_mut() {
            if !item.removing && !source.contains(&item.item.id) {
                item.removing = true;
                report.removing.push(item.item.id.clone());
            }
        }

        for OrderedItem { id, value } in source.into_vec() {
            match self.items.get_by_id_mut(&id) {
                Some(existing) => {
                    existing.item.value = value;
                    if existing.removing {
                        existing.removing = false;
                        report.revived.push(id);
                    }
                }
                None => {
                    report.added.push(id.clone());
                    self.items.push(AnimatedItem::new(OrderedItem { id, value }))?;
                }
            }
        }

        Ok(report)
    }
}

impl<T> ReorderTarget for AnimatedList<T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn apply_move(&mut self, command: MoveCommand) -> bool {
        self.items.apply_move(command)
    }
}
