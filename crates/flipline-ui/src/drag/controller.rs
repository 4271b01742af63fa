//! Gesture state machine turning pointer input into list moves.

use flipline_core::geometry::Rect;
use flipline_core::math::Vec2;

use super::ghost::Ghost;
use super::hit_test::hit_test;
use super::session::{DragModality, DragSession, SessionHandle, TouchTracking};
use crate::config::DragConfig;
use crate::event::PlatformEvent;
use crate::list::{MoveCommand, ReorderTarget};

/// Manages drag-to-reorder gestures for one list.
///
/// There are two layers:
/// - the explicit state machine ([`begin`](Self::begin), [`update`](Self::update),
///   [`end`](Self::end)) which takes a [`SessionHandle`] and returns
///   [`MoveCommand`]s without touching any list;
/// - the `on_*` event handlers, which use the active session and apply moves
///   to a [`ReorderTarget`].
///
/// Every operation is a silent no-op without an active session: stray events
/// are a normal part of UI event delivery.
#[derive(Debug, Default)]
pub struct DragController {
    session: Option<DragSession>,
    next_handle: u64,
    config: DragConfig,
}

impl DragController {
    /// Create a controller with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DragConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    /// Start a session for the item at `index`.
    ///
    /// Returns `None` if a session is already active; only one drag per list.
    pub fn begin(&mut self, index: usize, modality: DragModality) -> Option<SessionHandle> {
        if let Some(active) = &self.session {
            tracing::debug!(
                index,
                active = active.current_index,
                "ignoring drag start while a session is active"
            );
            return None;
        }

        self.next_handle += 1;
        let handle = SessionHandle(self.next_handle);
        self.session = Some(DragSession::new(handle, modality, index));
        tracing::debug!(index, ?modality, handle = handle.0, "drag session started");
        Some(handle)
    }

    /// Start a touch session, capturing the touch point and the item's box for the ghost.
    pub fn begin_touch(&mut self, index: usize, pointer: Vec2, item_bounds: Rect) -> Option<SessionHandle> {
        let handle = self.begin(index, DragModality::Touch)?;
        let ghost = Ghost::new(item_bounds, self.config.ghost_scale);
        if let Some(session) = self.session.as_mut() {
            session.touch = Some(TouchTracking {
                pointer_origin: pointer,
                ghost,
            });
        }
        Some(handle)
    }

    /// Retarget the session to `target_index` in a list of length `len`.
    ///
    /// Returns the move the owner should apply, or `None` for a stale handle,
    /// a same-index target or an out-of-range target.
    pub fn update(&mut self, handle: SessionHandle, target_index: usize, len: usize) -> Option<MoveCommand> {
        let session = self.session_for(handle)?;
        let command = session.retarget(target_index, len)?;
        tracing::trace!(from = command.from, to = command.to, "drag move");
        Some(command)
    }

    /// Move the ghost with the finger. Returns the ghost's new geometry.
    pub fn track_pointer(&mut self, handle: SessionHandle, pointer: Vec2) -> Option<Rect> {
        let session = self.session_for(handle)?;
        session.track_pointer(pointer).map(|ghost| ghost.geometry)
    }

    /// End the session and return its final state.
    pub fn end(&mut self, handle: SessionHandle) -> Option<DragSession> {
        if self.active_handle() != Some(handle) {
            return None;
        }
        self.cancel()
    }

    /// End whatever session is active, discarding the ghost.
    pub fn cancel(&mut self) -> Option<DragSession> {
        let session = self.session.take()?;
        tracing::debug!(
            origin = session.origin_index,
            current = session.current_index,
            "drag session ended"
        );
        Some(session)
    }

    /// The owner deleted the item at `index` from the list.
    ///
    /// Keeps the session pointing at the dragged item, or ends it when the
    /// dragged item itself was deleted.
    pub fn on_item_removed(&mut self, index: usize) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if !session.item_removed(index) {
            tracing::debug!(index, "dragged item deleted");
            self.cancel();
        }
    }

    fn session_for(&mut self, handle: SessionHandle) -> Option<&mut DragSession> {
        self.session.as_mut().filter(|session| session.handle == handle)
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn active_handle(&self) -> Option<SessionHandle> {
        self.session.as_ref().map(|session| session.handle)
    }

    /// Index of the item being dragged, as of the last move.
    pub fn dragged_index(&self) -> Option<usize> {
        self.session.as_ref().map(|session| session.current_index)
    }

    pub fn ghost(&self) -> Option<&Ghost> {
        self.session.as_ref().and_then(DragSession::ghost)
    }

    /// Opacity the item at `index` should render with.
    pub fn item_opacity(&self, index: usize) -> f32 {
        if self.dragged_index() == Some(index) {
            self.config.dragged_opacity
        } else {
            1.0
        }
    }

    // -----------------------------------------------------------------------
    // Mouse (native drag and drop)
    // -----------------------------------------------------------------------

    pub fn on_drag_start(&mut self, index: usize) -> Option<SessionHandle> {
        self.begin(index, DragModality::Mouse)
    }

    /// The drag entered the item at `index`: move the dragged item there.
    pub fn on_drag_enter<R>(&mut self, index: usize, list: &mut R) -> Option<MoveCommand>
    where
        R: ReorderTarget + ?Sized,
    {
        let handle = self.active_handle()?;
        let command = self.update(handle, index, list.len())?;
        list.apply_move(command).then_some(command)
    }

    /// Accept drops while dragging over the list.
    pub fn on_drag_over<E: PlatformEvent + ?Sized>(&mut self, event: &mut E) {
        event.prevent_default();
    }

    pub fn on_drag_end(&mut self) {
        self.cancel();
    }

    pub fn on_drop<E: PlatformEvent + ?Sized>(&mut self, event: &mut E) {
        event.prevent_default();
        self.cancel();
    }

    // -----------------------------------------------------------------------
    // Touch
    // -----------------------------------------------------------------------

    pub fn on_touch_start(&mut self, index: usize, touch: Vec2, item_bounds: Rect) -> Option<SessionHandle> {
        self.begin_touch(index, touch, item_bounds)
    }

    /// Follow the finger with the ghost and reorder when it crosses another item.
    ///
    /// `items` yields the live `(index, bounding box)` of every rendered item;
    /// exactly one hit-test is made per call.
    pub fn on_touch_move<I, R, E>(
        &mut self,
        touch: Vec2,
        items: I,
        list: &mut R,
        event: &mut E,
    ) -> Option<MoveCommand>
    where
        I: IntoIterator<Item = (usize, Rect)>,
        R: ReorderTarget + ?Sized,
        E: PlatformEvent + ?Sized,
    {
        let handle = self.active_handle()?;
        event.prevent_default();
        self.track_pointer(handle, touch);

        let over = hit_test(touch, items, self.config.hit_test)?;
        let command = self.update(handle, over, list.len())?;
        list.apply_move(command).then_some(command)
    }

    pub fn on_touch_end(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drag::HitTestPolicy;
    use crate::event::EventFlags;

    fn rows(count: usize, height: f32) -> Vec<(usize, Rect)> {
        (0..count)
            .map(|i| (i, Rect::new(0.0, i as f32 * height, 300.0, height)))
            .collect()
    }

    #[test]
    fn drag_enter_moves_and_reindexes() {
        let mut controller = DragController::new();
        let mut list = vec!['a', 'b', 'c', 'd', 'e'];

        controller.on_drag_start(1);
        assert_eq!(controller.on_drag_enter(3, &mut list), Some(MoveCommand::new(1, 3)));
        assert_eq!(list, vec!['a', 'c', 'd', 'b', 'e']);
        assert_eq!(controller.dragged_index(), Some(3));

        // Crossing back walks the item one slot at a time.
        assert_eq!(controller.on_drag_enter(2, &mut list), Some(MoveCommand::new(3, 2)));
        assert_eq!(list, vec!['a', 'c', 'b', 'd', 'e']);
    }

    #[test]
    fn drag_enter_on_current_index_never_mutates() {
        let mut controller = DragController::new();
        let mut list = vec![1, 2, 3];

        controller.on_drag_start(1);
        assert_eq!(controller.on_drag_enter(1, &mut list), None);
        assert_eq!(list, vec![1, 2, 3]);
    }

    #[test]
    fn events_after_end_are_ignored() {
        let mut controller = DragController::new();
        let mut list = vec![1, 2, 3];
        let mut event = EventFlags::default();

        controller.on_drag_start(0);
        controller.on_drag_end();
        assert_eq!(controller.on_drag_enter(2, &mut list), None);

        controller.on_touch_start(0, Vec2::new(10.0, 10.0), Rect::new(0.0, 0.0, 300.0, 50.0));
        controller.on_touch_end();
        assert_eq!(
            controller.on_touch_move(Vec2::new(10.0, 120.0), rows(3, 50.0), &mut list, &mut event),
            None
        );
        assert!(!event.default_prevented);
        assert_eq!(list, vec![1, 2, 3]);
    }

    #[test]
    fn stray_enter_without_start_is_ignored() {
        let mut controller = DragController::new();
        let mut list = vec![1, 2, 3];
        assert_eq!(controller.on_drag_enter(2, &mut list), None);
        assert!(!controller.is_dragging());
    }

    #[test]
    fn drop_prevents_default_and_ends_session() {
        let mut controller = DragController::new();
        let mut event = EventFlags::default();

        controller.on_drag_start(0);
        controller.on_drop(&mut event);
        assert!(event.default_prevented);
        assert!(!controller.is_dragging());
    }

    #[test]
    fn drag_over_allows_drop() {
        let mut controller = DragController::new();
        let mut event = EventFlags::default();
        controller.on_drag_over(&mut event);
        assert!(event.default_prevented);
    }

    #[test]
    fn second_begin_is_rejected() {
        let mut controller = DragController::new();
        let first = controller.begin(0, DragModality::Mouse).unwrap();
        assert!(controller.begin(2, DragModality::Touch).is_none());
        assert_eq!(controller.active_handle(), Some(first));
        assert_eq!(controller.dragged_index(), Some(0));
    }

    #[test]
    fn stale_handles_are_rejected() {
        let mut controller = DragController::new();
        let old = controller.begin(0, DragModality::Mouse).unwrap();
        controller.end(old).unwrap();

        let new = controller.begin(1, DragModality::Mouse).unwrap();
        assert_ne!(old, new);
        assert_eq!(controller.update(old, 2, 3), None);
        assert!(controller.end(old).is_none());
        assert!(controller.is_dragging());
        assert_eq!(controller.update(new, 2, 3), Some(MoveCommand::new(1, 2)));
    }

    #[test]
    fn touch_drag_moves_ghost_and_reorders() {
        let mut controller = DragController::new();
        let mut list = vec![1, 2, 3];
        let mut event = EventFlags::default();
        let items = rows(3, 50.0);

        controller.on_touch_start(0, Vec2::new(20.0, 25.0), items[0].1);
        let moved = controller.on_touch_move(Vec2::new(20.0, 130.0), items, &mut list, &mut event);

        assert_eq!(moved, Some(MoveCommand::new(0, 2)));
        assert_eq!(list, vec![2, 3, 1]);
        assert_eq!(controller.dragged_index(), Some(2));
        assert!(event.default_prevented);

        let ghost = controller.ghost().unwrap();
        assert_eq!(ghost.geometry, Rect::new(0.0, 105.0, 300.0, 50.0));
        assert_eq!(ghost.scale, crate::config::DEFAULT_GHOST_SCALE);
    }

    #[test]
    fn touch_over_empty_space_only_moves_ghost() {
        let mut controller = DragController::new();
        let mut list = vec![1, 2, 3];
        let mut event = EventFlags::default();

        controller.on_touch_start(1, Vec2::new(20.0, 75.0), Rect::new(0.0, 50.0, 300.0, 50.0));
        let moved =
            controller.on_touch_move(Vec2::new(400.0, 75.0), rows(3, 50.0), &mut list, &mut event);

        assert_eq!(moved, None);
        assert_eq!(list, vec![1, 2, 3]);
        assert_eq!(controller.ghost().unwrap().geometry.x, 380.0);
    }

    #[test]
    fn touch_end_discards_ghost() {
        let mut controller = DragController::new();
        controller.on_touch_start(0, Vec2::ZERO, Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(controller.ghost().is_some());
        controller.on_touch_end();
        assert!(controller.ghost().is_none());
        assert!(controller.session().is_none());
    }

    #[test]
    fn deletion_keeps_session_on_dragged_item() {
        let mut controller = DragController::new();
        let mut list = vec!['b', 'c'];

        controller.on_drag_start(2);
        // 'a' at index 0 was deleted; the dragged 'c' is now at index 1.
        controller.on_item_removed(0);
        assert_eq!(controller.dragged_index(), Some(1));
        assert_eq!(controller.on_drag_enter(0, &mut list), Some(MoveCommand::new(1, 0)));
        assert_eq!(list, vec!['c', 'b']);
    }

    #[test]
    fn deleting_dragged_item_ends_session() {
        let mut controller = DragController::new();
        controller.on_touch_start(1, Vec2::ZERO, Rect::new(0.0, 0.0, 10.0, 10.0));
        controller.on_item_removed(1);
        assert!(!controller.is_dragging());
        assert!(controller.ghost().is_none());

        // Without a session nothing happens.
        controller.on_item_removed(0);
        assert!(!controller.is_dragging());
    }

    #[test]
    fn dragged_item_is_hidden() {
        let mut controller = DragController::with_config(DragConfig::default().with_dragged_opacity(0.3));
        controller.on_drag_start(2);
        assert_eq!(controller.item_opacity(2), 0.3);
        assert_eq!(controller.item_opacity(1), 1.0);
    }

    #[test]
    fn nearest_center_policy_is_used_for_touch() {
        let config = DragConfig::default().with_hit_test(HitTestPolicy::NearestCenter);
        let mut controller = DragController::with_config(config);
        let mut list = vec!['a', 'b', 'c'];
        let mut event = EventFlags::default();
        let items = vec![
            (0, Rect::new(0.0, 0.0, 100.0, 50.0)),
            (1, Rect::new(0.0, 30.0, 100.0, 50.0)),
            (2, Rect::new(0.0, 60.0, 100.0, 50.0)),
        ];

        controller.on_touch_start(0, Vec2::new(50.0, 10.0), items[0].1);
        let moved = controller.on_touch_move(Vec2::new(50.0, 80.0), items, &mut list, &mut event);
        assert_eq!(moved, Some(MoveCommand::new(0, 2)));
        assert_eq!(list, vec!['b', 'c', 'a']);
    }
}
