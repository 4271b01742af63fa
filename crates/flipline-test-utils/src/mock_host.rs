//! Headless list host for testing.
//!
//! Lays items out as a vertical stack and runs style transitions through a
//! [`TransitionTimeline`], so tests can step time and observe exactly what the
//! list asked the host to do.

use flipline_core::alloc::HashSet;
use flipline_core::geometry::Rect;
use flipline_core::math::Vec2;
use flipline_ui::{ElementHost, ItemId, ItemStyle, ItemView, ListRenderer, TransitionTimeline, VisualState};
use parking_lot::Mutex;

/// Records a host call for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    Measure { id: ItemId },
    ApplyStyle { id: ItemId, style: ItemStyle },
    Render { ids: Vec<ItemId> },
}

/// Geometry of the mock stack layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackLayout {
    /// Top-left corner of the first item.
    pub origin: Vec2,
    pub item_width: f32,
    pub item_height: f32,
    /// Space between consecutive items.
    pub gap: f32,
}

impl StackLayout {
    /// Layout box of the item at `index`.
    pub fn slot(&self, index: usize) -> Rect {
        let y = self.origin.y + index as f32 * (self.item_height + self.gap);
        Rect::new(self.origin.x, y, self.item_width, self.item_height)
    }
}

impl Default for StackLayout {
    fn default() -> Self {
        Self {
            origin: Vec2::ZERO,
            item_width: 320.0,
            item_height: 48.0,
            gap: 8.0,
        }
    }
}

/// Mock implementation of [`ListRenderer`].
///
/// `measure` takes `&self` but is recorded too, hence the `Mutex`.
pub struct MockHost {
    calls: Mutex<Vec<HostCall>>,
    layout: StackLayout,
    /// Mounted items in render order.
    mounted: Vec<ItemId>,
    /// Mounted items that refuse to be measured.
    detached: HashSet<ItemId>,
    timeline: TransitionTimeline,
}

impl MockHost {
    pub fn new() -> Self {
        Self::with_layout(StackLayout::default())
    }

    pub fn with_layout(layout: StackLayout) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            layout,
            mounted: Vec::new(),
            detached: HashSet::default(),
            timeline: TransitionTimeline::new(),
        }
    }

    pub fn layout(&self) -> &StackLayout {
        &self.layout
    }

    /// Advance transitions by `delta_time` seconds; returns ids whose transition ended.
    pub fn advance(&mut self, delta_time: f32) -> Vec<ItemId> {
        self.timeline.update(delta_time)
    }

    pub fn is_idle(&self) -> bool {
        self.timeline.is_idle()
    }

    pub fn is_animating(&self, id: &ItemId) -> bool {
        self.timeline.is_animating(id)
    }

    pub fn visual(&self, id: &ItemId) -> VisualState {
        self.timeline.visual(id)
    }

    /// Make `measure` return `None` for a mounted item.
    pub fn detach(&mut self, id: impl Into<ItemId>) {
        self.detached.insert(id.into());
    }

    pub fn reattach(&mut self, id: &ItemId) {
        self.detached.remove(id);
    }

    pub fn rendered_ids(&self) -> &[ItemId] {
        &self.mounted
    }

    pub fn is_mounted(&self, id: &ItemId) -> bool {
        self.mounted.contains(id)
    }

    fn slot_of(&self, id: &ItemId) -> Option<Rect> {
        if self.detached.contains(id) {
            return None;
        }
        let index = self.mounted.iter().position(|mounted| mounted == id)?;
        Some(self.layout.slot(index))
    }

    /// Get a copy of all recorded calls (for test assertions).
    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().clone()
    }

    /// Every style written to `id`, oldest first.
    pub fn styles_for(&self, id: &ItemId) -> Vec<ItemStyle> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                HostCall::ApplyStyle { id: call_id, style } if call_id == id => Some(*style),
                _ => None,
            })
            .collect()
    }

    pub fn last_style(&self, id: &ItemId) -> Option<ItemStyle> {
        self.styles_for(id).pop()
    }

    pub fn count_renders(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, HostCall::Render { .. }))
            .count()
    }

    pub fn count_style_writes(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, HostCall::ApplyStyle { .. }))
            .count()
    }

    /// Clear recorded calls (useful between test steps).
    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementHost for MockHost {
    fn measure(&self, id: &ItemId) -> Option<Rect> {
        self.calls.lock().push(HostCall::Measure { id: id.clone() });

        let slot = self.slot_of(id)?;
        let visual = self.timeline.visual(id);
        let mut rect = slot.translate(visual.offset);
        rect.height *= visual.extent;
        Some(rect)
    }

    fn measure_layout(&self, id: &ItemId) -> Option<Rect> {
        self.calls.lock().push(HostCall::Measure { id: id.clone() });
        self.slot_of(id)
    }

    fn apply_style(&mut self, id: &ItemId, style: &ItemStyle) {
        self.calls.lock().push(HostCall::ApplyStyle {
            id: id.clone(),
            style: *style,
        });
        self.timeline.apply(id, style);
    }
}

impl ListRenderer for MockHost {
    fn render(&mut self, views: &[ItemView]) {
        let ids: Vec<ItemId> = views.iter().map(|view| view.id.clone()).collect();
        for unmounted in self.mounted.iter().filter(|id| !ids.contains(id)) {
            self.timeline.remove(unmounted);
        }
        self.mounted = ids.clone();
        self.calls.lock().push(HostCall::Render { ids });
    }
}
