//! A reorderable, animated list: the drag controller and the FLIP animator
//! wired to one [`AnimatedList`].

use flipline_core::geometry::Rect;
use flipline_core::profiling::profile_function;

use crate::animated::{AnimatedItem, AnimatedList, Insertion, SyncReport};
use crate::config::ListConfig;
use crate::drag::{DragController, Ghost};
use crate::event::{DispatchOutcome, EventFlags, ListInput};
use crate::flip::{FlipAnimator, FlipReport, TransitionOutcome};
use crate::host::{ItemView, ListRenderer};
use crate::id::ItemId;
use crate::list::{ListError, ListResult, OrderedItem};

/// Everything a todo-style list needs: ordering, gestures and transitions.
///
/// Each change that can move items follows the same sequence: capture the
/// current boxes, mutate, re-render through the host, then invert and queue
/// the transitions. The host calls [`on_animation_frame`](Self::on_animation_frame)
/// on the following frame and forwards finished transitions to
/// [`on_transition_end`](Self::on_transition_end).
#[derive(Debug)]
pub struct ReorderableList<T> {
    items: AnimatedList<T>,
    drag: DragController,
    flip: FlipAnimator,
}

impl<T> ReorderableList<T> {
    pub fn new(items: impl IntoIterator<Item = OrderedItem<T>>, config: ListConfig) -> ListResult<Self> {
        Ok(Self {
            items: AnimatedList::new(items)?,
            drag: DragController::with_config(config.drag),
            flip: FlipAnimator::new(config.flip),
        })
    }

    pub fn items(&self) -> &AnimatedList<T> {
        &self.items
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn animator(&self) -> &FlipAnimator {
        &self.flip
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn ids(&self) -> Vec<ItemId> {
        self.items.ids()
    }

    pub fn ghost(&self) -> Option<&Ghost> {
        self.drag.ghost()
    }

    /// Render state of every item, in list order.
    pub fn views(&self) -> Vec<ItemView> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| ItemView {
                id: item.item.id.clone(),
                index,
                opacity: self.drag.item_opacity(index),
                removing: item.removing,
            })
            .collect()
    }

    /// Initial render. Every item plays its enter transition.
    pub fn mount<H>(&mut self, host: &mut H) -> FlipReport
    where
        H: ListRenderer + ?Sized,
    {
        self.render_and_play(host)
    }

    /// Handle one input event.
    ///
    /// Gesture input never fails: events without an active session, targets
    /// out of range and pointers over empty space are ignored.
    pub fn dispatch<H>(&mut self, input: ListInput, host: &mut H) -> DispatchOutcome
    where
        H: ListRenderer + ?Sized,
    {
        profile_function!();

        let mut flags = EventFlags::default();
        let moved = match input {
            ListInput::DragStart { index } => {
                if self.is_live(index) && self.drag.on_drag_start(index).is_some() {
                    self.render(host);
                }
                None
            }
            ListInput::DragEnter { index } => {
                if !self.drag.is_dragging() || !self.is_live(index) {
                    return DispatchOutcome::default();
                }
                self.capture(host);
                let moved = self.drag.on_drag_enter(index, &mut self.items);
                if moved.is_some() {
                    self.render_and_play(host);
                }
                moved
            }
            ListInput::DragOver => {
                self.drag.on_drag_over(&mut flags);
                None
            }
            ListInput::DragEnd => {
                if self.drag.is_dragging() {
                    self.drag.on_drag_end();
                    self.render(host);
                }
                None
            }
            ListInput::Drop => {
                let was_dragging = self.drag.is_dragging();
                self.drag.on_drop(&mut flags);
                if was_dragging {
                    self.render(host);
                }
                None
            }
            ListInput::TouchStart { index, touch } => {
                let bounds = self.live_id(index).and_then(|id| host.measure(&id));
                match bounds {
                    Some(bounds) => {
                        if self.drag.on_touch_start(index, touch, bounds).is_some() {
                            self.render(host);
                        }
                    }
                    None => tracing::trace!(index, "touch start on unmeasurable item ignored"),
                }
                None
            }
            ListInput::TouchMove { touch } => {
                if !self.drag.is_dragging() {
                    return DispatchOutcome::default();
                }
                let targets = self.hit_targets(host);
                self.capture(host);
                let moved = self.drag.on_touch_move(touch, targets, &mut self.items, &mut flags);
                if moved.is_some() {
                    self.render_and_play(host);
                }
                moved
            }
            ListInput::TouchEnd => {
                if self.drag.is_dragging() {
                    self.drag.on_touch_end();
                    self.render(host);
                }
                None
            }
        };

        DispatchOutcome::from_flags(moved, flags)
    }

    /// Append an item, or revive it if its id is mid-removal.
    pub fn push<H>(&mut self, item: OrderedItem<T>, host: &mut H) -> ListResult<Insertion>
    where
        H: ListRenderer + ?Sized,
    {
        let id = item.id.clone();
        self.capture(host);
        let insertion = self.items.push(item)?;
        if insertion == Insertion::Revived {
            self.flip.revive(&id, host);
        }
        self.render_and_play(host);
        Ok(insertion)
    }

    /// Reconcile with a new source list; see [`AnimatedList::sync`].
    ///
    /// Disappeared items start their exit transition, new ones enter.
    pub fn sync<H>(&mut self, source: impl IntoIterator<Item = OrderedItem<T>>, host: &mut H) -> ListResult<SyncReport>
    where
        H: ListRenderer + ?Sized,
    {
        self.capture(host);
        let report = self.items.sync(source)?;
        for id in &report.removing {
            self.release_drag_source(id);
            self.flip.begin_removal(id, host);
        }
        for id in &report.revived {
            self.flip.revive(id, host);
        }
        if !report.is_empty() {
            tracing::debug!(
                removing = report.removing.len(),
                added = report.added.len(),
                revived = report.revived.len(),
                "list synced"
            );
        }
        self.render_and_play(host);
        Ok(report)
    }

    /// Start removing `id`. It stays in the list until its exit transition ends.
    ///
    /// Returns `Ok(false)` if it was already being removed.
    pub fn remove<H>(&mut self, id: &ItemId, host: &mut H) -> ListResult<bool>
    where
        H: ListRenderer + ?Sized,
    {
        if !self.items.mark_removing(id)? {
            return Ok(false);
        }
        self.release_drag_source(id);
        self.flip.begin_removal(id, host);
        self.render(host);
        Ok(true)
    }

    /// Delete `id` immediately, without an exit transition.
    pub fn remove_now<H>(&mut self, id: &ItemId, host: &mut H) -> ListResult<AnimatedItem<T>>
    where
        H: ListRenderer + ?Sized,
    {
        let index = self.items.index_of(id).ok_or_else(|| ListError::UnknownId(id.clone()))?;
        self.capture(host);
        let removed = self.items.remove_now(id)?;
        self.drag.on_item_removed(index);
        self.flip.forget(id);
        self.render_and_play(host);
        Ok(removed)
    }

    /// Forward a transition-complete signal from the host.
    ///
    /// When it ends an exit transition the item is deleted and the remaining
    /// items animate into the gap.
    pub fn on_transition_end<H>(&mut self, id: &ItemId, host: &mut H) -> TransitionOutcome
    where
        H: ListRenderer + ?Sized,
    {
        let outcome = self.flip.on_transition_end(id);
        if outcome == TransitionOutcome::Removed {
            self.capture(host);
            let index = self.items.index_of(id);
            if self.items.complete_removal(id).is_some() {
                if let Some(index) = index {
                    self.drag.on_item_removed(index);
                }
                tracing::debug!(%id, "item removed");
            }
            self.render_and_play(host);
        }
        outcome
    }

    /// Apply the transitions queued by the last change.
    pub fn on_animation_frame<H>(&mut self, host: &mut H) -> usize
    where
        H: ListRenderer + ?Sized,
    {
        self.flip.on_animation_frame(host)
    }

    /// End the drag if `id` is the item being dragged; removing items are not drag sources.
    fn release_drag_source(&mut self, id: &ItemId) {
        if self.drag.dragged_index().is_some() && self.drag.dragged_index() == self.items.index_of(id) {
            tracing::debug!(%id, "dragged item is being removed");
            self.drag.cancel();
        }
    }

    fn is_live(&self, index: usize) -> bool {
        self.items.get(index).is_some_and(|item| !item.removing)
    }

    fn live_id(&self, index: usize) -> Option<ItemId> {
        self.items
            .get(index)
            .filter(|item| !item.removing)
            .map(|item| item.item.id.clone())
    }

    /// Boxes of items a touch may land on; removing items are excluded.
    fn hit_targets<H>(&self, host: &H) -> Vec<(usize, Rect)>
    where
        H: ListRenderer + ?Sized,
    {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| !item.removing)
            .filter_map(|(index, item)| host.measure(&item.item.id).map(|rect| (index, rect)))
            .collect()
    }

    fn capture<H>(&mut self, host: &H)
    where
        H: ListRenderer + ?Sized,
    {
        let live = self.items.iter().filter(|item| !item.removing).map(|item| &item.item.id);
        self.flip.capture(live, host);
    }

    fn render<H>(&self, host: &mut H)
    where
        H: ListRenderer + ?Sized,
    {
        host.render(&self.views());
    }

    fn render_and_play<H>(&mut self, host: &mut H) -> FlipReport
    where
        H: ListRenderer + ?Sized,
    {
        self.render(host);
        let ids = self.items.ids();
        self.flip.play(&ids, host)
    }
}
