//! Last-known item boxes.

use flipline_core::alloc::HashMap;
use flipline_core::geometry::Rect;

use crate::id::ItemId;

/// Bounding boxes from the most recent measurement pass, keyed by item id.
#[derive(Debug, Default, Clone)]
pub struct PositionCache {
    boxes: HashMap<ItemId, Rect>,
}

impl PositionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &ItemId) -> Option<Rect> {
        self.boxes.get(id).copied()
    }

    pub fn insert(&mut self, id: ItemId, rect: Rect) -> Option<Rect> {
        self.boxes.insert(id, rect)
    }

    pub fn remove(&mut self, id: &ItemId) -> Option<Rect> {
        self.boxes.remove(id)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.boxes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn clear(&mut self) {
        self.boxes.clear();
    }

    /// Replace the whole cache with a fresh pass.
    pub fn replace(&mut self, boxes: HashMap<ItemId, Rect>) {
        self.boxes = boxes;
    }
}
