//! FLIP position transitions.
//!
//! After every re-render, items that changed position are snapped back to
//! where they were ("invert") and then, on the next animation frame, released
//! to transition into their new place ("play"). Items seen for the first time
//! play an enter animation instead, and removals run an exit transition before
//! the owner deletes the item.

use flipline_core::alloc::HashMap;
use flipline_core::geometry::{Rect, inverse_offset};
use flipline_core::math::Vec2;
use flipline_core::profiling::profile_function;

use super::cache::PositionCache;
use super::style::{ItemStyle, Transition};
use crate::config::FlipConfig;
use crate::host::ElementHost;
use crate::id::ItemId;

/// Offsets smaller than this (in pixels, per component) are treated as no movement.
const MIN_DELTA: f32 = 0.01;

/// Animation lifecycle of one tracked item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemPhase {
    /// Fading in after its first render.
    Entering,
    Steady,
    /// Playing its exit transition; deleted when it ends.
    Removing,
}

/// What to do after a host reported a finished transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The item finished its exit transition and must be deleted now.
    Removed,
    /// An enter or move transition finished; nothing to do.
    Settled,
    /// The id is not tracked (already removed or never rendered).
    Ignored,
}

/// Summary of one [`FlipAnimator::play`] pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlipReport {
    /// Items that started an enter animation.
    pub entering: Vec<ItemId>,
    /// Items that were inverted, with the offset they were snapped to.
    pub moved: Vec<(ItemId, Vec2)>,
    /// Items the host could not measure; left untouched.
    pub unmeasured: Vec<ItemId>,
}

impl FlipReport {
    pub fn is_empty(&self) -> bool {
        self.entering.is_empty() && self.moved.is_empty() && self.unmeasured.is_empty()
    }
}

/// A style write deferred to the next animation frame.
#[derive(Debug, Clone)]
struct PendingCommit {
    id: ItemId,
    style: ItemStyle,
}

/// Animates position changes of list items.
///
/// Usage per list mutation:
/// 1. [`capture`](Self::capture) the current boxes,
/// 2. mutate the list and let the host re-render,
/// 3. [`play`](Self::play) to invert and queue the transitions,
/// 4. call [`on_animation_frame`](Self::on_animation_frame) on the next frame.
#[derive(Debug, Default)]
pub struct FlipAnimator {
    config: FlipConfig,
    cache: PositionCache,
    phases: HashMap<ItemId, ItemPhase>,
    pending: Vec<PendingCommit>,
}

impl FlipAnimator {
    pub fn new(config: FlipConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &FlipConfig {
        &self.config
    }

    fn transition(&self) -> Transition {
        Transition::new(self.config.duration, self.config.easing)
    }

    /// Record the current on-screen box of every item in `ids`.
    ///
    /// Call before mutating the list. Items the host cannot measure are skipped.
    pub fn capture<'a, I, H>(&mut self, ids: I, host: &H)
    where
        I: IntoIterator<Item = &'a ItemId>,
        H: ElementHost + ?Sized,
    {
        profile_function!();

        for id in ids {
            if let Some(rect) = host.measure(id) {
                self.cache.insert(id.clone(), rect);
            }
        }
    }

    /// Run the invert step for the freshly rendered `ids`.
    ///
    /// Removing items are skipped and keep their cached box. Every other item
    /// either enters (no cached box), is snapped back by its position delta,
    /// or is left alone when it did not move. The cache is rebuilt from this
    /// pass.
    pub fn play<'a, I, H>(&mut self, ids: I, host: &mut H) -> FlipReport
    where
        I: IntoIterator<Item = &'a ItemId>,
        H: ElementHost + ?Sized,
    {
        profile_function!();

        let mut report = FlipReport::default();
        let mut boxes: HashMap<ItemId, Rect> = HashMap::default();

        for id in ids {
            if self.phase(id) == Some(ItemPhase::Removing) {
                if let Some(rect) = self.cache.get(id) {
                    boxes.insert(id.clone(), rect);
                }
                continue;
            }

            let Some(next) = host.measure_layout(id) else {
                report.unmeasured.push(id.clone());
                continue;
            };
            boxes.insert(id.clone(), next);

            match self.cache.get(id) {
                None => {
                    host.apply_style(id, &ItemStyle::entering(self.config.enter_offset));
                    self.queue(id.clone(), ItemStyle::steady(Some(self.transition())));
                    self.phases.insert(id.clone(), ItemPhase::Entering);
                    report.entering.push(id.clone());
                }
                Some(prev) => {
                    let delta = inverse_offset(&prev, &next, self.config.axis);
                    if delta.abs().max_element() < MIN_DELTA {
                        continue;
                    }
                    tracing::trace!(%id, dx = delta.x, dy = delta.y, "flip invert");
                    host.apply_style(id, &ItemStyle::offset(delta));
                    self.queue(id.clone(), ItemStyle::steady(Some(self.transition())));
                    self.phases.entry(id.clone()).or_insert(ItemPhase::Steady);
                    report.moved.push((id.clone(), delta));
                }
            }
        }

        self.phases.retain(|id, phase| *phase == ItemPhase::Removing || boxes.contains_key(id));
        self.pending.retain(|commit| boxes.contains_key(&commit.id));
        self.cache.replace(boxes);
        report
    }

    fn queue(&mut self, id: ItemId, style: ItemStyle) {
        // Only the latest write for an item matters.
        self.pending.retain(|commit| commit.id != id);
        self.pending.push(PendingCommit { id, style });
    }

    /// Apply the style writes queued before this call.
    ///
    /// Returns how many were applied.
    pub fn on_animation_frame<H>(&mut self, host: &mut H) -> usize
    where
        H: ElementHost + ?Sized,
    {
        let commits = std::mem::take(&mut self.pending);
        for commit in &commits {
            host.apply_style(&commit.id, &commit.style);
        }
        commits.len()
    }

    /// Start the exit transition of `id`.
    ///
    /// Returns false if it is already removing.
    pub fn begin_removal<H>(&mut self, id: &ItemId, host: &mut H) -> bool
    where
        H: ElementHost + ?Sized,
    {
        if self.phase(id) == Some(ItemPhase::Removing) {
            return false;
        }

        let width = host
            .measure(id)
            .or_else(|| self.cache.get(id))
            .map_or(0.0, |rect| rect.width);

        self.pending.retain(|commit| &commit.id != id);
        host.apply_style(id, &ItemStyle::exit(width, self.transition()));
        self.phases.insert(id.clone(), ItemPhase::Removing);
        tracing::debug!(%id, "exit transition started");
        true
    }

    /// Bring a removing item back.
    ///
    /// Returns false if `id` was not removing.
    pub fn revive<H>(&mut self, id: &ItemId, host: &mut H) -> bool
    where
        H: ElementHost + ?Sized,
    {
        if self.phase(id) != Some(ItemPhase::Removing) {
            return false;
        }
        host.apply_style(id, &ItemStyle::steady(Some(self.transition())));
        self.phases.insert(id.clone(), ItemPhase::Steady);
        tracing::debug!(%id, "removal cancelled");
        true
    }

    /// Handle a transition-complete signal from the host.
    pub fn on_transition_end(&mut self, id: &ItemId) -> TransitionOutcome {
        match self.phases.get(id).copied() {
            Some(ItemPhase::Removing) => {
                self.forget(id);
                TransitionOutcome::Removed
            }
            Some(ItemPhase::Entering) => {
                self.phases.insert(id.clone(), ItemPhase::Steady);
                TransitionOutcome::Settled
            }
            Some(ItemPhase::Steady) => TransitionOutcome::Settled,
            None => TransitionOutcome::Ignored,
        }
    }

    /// Stop tracking `id` entirely. Used for deletion without an exit animation.
    pub fn forget(&mut self, id: &ItemId) {
        self.phases.remove(id);
        self.cache.remove(id);
        self.pending.retain(|commit| &commit.id != id);
    }

    pub fn phase(&self, id: &ItemId) -> Option<ItemPhase> {
        self.phases.get(id).copied()
    }

    pub fn cached_box(&self, id: &ItemId) -> Option<Rect> {
        self.cache.get(id)
    }

    /// Number of style writes waiting for the next animation frame.
    pub fn pending_commits(&self) -> usize {
        self.pending.len()
    }

    pub fn is_tracking(&self, id: &ItemId) -> bool {
        self.phases.contains_key(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records style writes; boxes are set directly by the test.
    #[derive(Default)]
    struct FakeHost {
        boxes: HashMap<ItemId, Rect>,
        writes: Vec<(ItemId, ItemStyle)>,
    }

    impl FakeHost {
        fn place(&mut self, id: i64, y: f32) {
            self.boxes.insert(ItemId::from(id), Rect::new(0.0, y, 200.0, 40.0));
        }

        fn last_write(&self, id: i64) -> Option<&ItemStyle> {
            let id = ItemId::from(id);
            self.writes.iter().rev().find(|(write_id, _)| *write_id == id).map(|(_, style)| style)
        }
    }

    impl ElementHost for FakeHost {
        fn measure(&self, id: &ItemId) -> Option<Rect> {
            self.boxes.get(id).copied()
        }

        fn apply_style(&mut self, id: &ItemId, style: &ItemStyle) {
            self.writes.push((id.clone(), *style));
        }
    }

    fn ids(raw: &[i64]) -> Vec<ItemId> {
        raw.iter().copied().map(ItemId::from).collect()
    }

    #[test]
    fn first_render_enters_without_delta() {
        let mut animator = FlipAnimator::default();
        let mut host = FakeHost::default();
        host.place(1, 0.0);

        let report = animator.play(&ids(&[1]), &mut host);

        assert_eq!(report.entering, ids(&[1]));
        assert!(report.moved.is_empty());
        let style = host.last_write(1).unwrap();
        assert_eq!(style.opacity, 0.0);
        assert_eq!(style.offset, Vec2::new(0.0, 20.0));
        assert!(style.is_snap());
        assert_eq!(animator.phase(&ItemId::from(1)), Some(ItemPhase::Entering));
    }

    #[test]
    fn enter_transition_waits_for_next_frame() {
        let mut animator = FlipAnimator::default();
        let mut host = FakeHost::default();
        host.place(1, 0.0);

        animator.play(&ids(&[1]), &mut host);
        assert_eq!(host.writes.len(), 1);
        assert_eq!(animator.pending_commits(), 1);

        assert_eq!(animator.on_animation_frame(&mut host), 1);
        let style = host.last_write(1).unwrap();
        assert_eq!(*style, ItemStyle::steady(Some(animator.transition())));
        assert_eq!(animator.on_animation_frame(&mut host), 0);
    }

    #[test]
    fn moved_item_is_inverted_by_old_minus_new() {
        let mut animator = FlipAnimator::default();
        let mut host = FakeHost::default();
        host.place(1, 100.0);
        animator.play(&ids(&[1]), &mut host);
        animator.on_animation_frame(&mut host);

        host.place(1, 40.0);
        let report = animator.play(&ids(&[1]), &mut host);

        assert_eq!(report.moved, vec![(ItemId::from(1), Vec2::new(0.0, 60.0))]);
        let style = host.last_write(1).unwrap();
        assert_eq!(style.offset, Vec2::new(0.0, 60.0));
        assert!(style.is_snap());
        // Rendered position equals the previous position exactly.
        assert_eq!(40.0 + style.offset.y, 100.0);
    }

    #[test]
    fn unmoved_item_is_left_alone() {
        let mut animator = FlipAnimator::default();
        let mut host = FakeHost::default();
        host.place(1, 0.0);
        animator.play(&ids(&[1]), &mut host);
        animator.on_animation_frame(&mut host);
        let writes = host.writes.len();

        let report = animator.play(&ids(&[1]), &mut host);
        assert!(report.is_empty());
        assert_eq!(host.writes.len(), writes);
        assert_eq!(animator.pending_commits(), 0);
    }

    #[test]
    fn horizontal_motion_ignored_on_vertical_axis() {
        let mut animator = FlipAnimator::default();
        let mut host = FakeHost::default();
        host.place(1, 0.0);
        animator.play(&ids(&[1]), &mut host);

        host.boxes.insert(ItemId::from(1), Rect::new(50.0, 0.0, 200.0, 40.0));
        assert!(animator.play(&ids(&[1]), &mut host).moved.is_empty());
    }

    #[test]
    fn unmeasurable_items_are_skipped() {
        let mut animator = FlipAnimator::default();
        let mut host = FakeHost::default();
        host.place(1, 0.0);

        let report = animator.play(&ids(&[1, 2]), &mut host);
        assert_eq!(report.unmeasured, ids(&[2]));
        assert!(animator.cached_box(&ItemId::from(2)).is_none());
        assert!(!animator.is_tracking(&ItemId::from(2)));
    }

    #[test]
    fn capture_refreshes_previous_boxes() {
        let mut animator = FlipAnimator::default();
        let mut host = FakeHost::default();
        host.place(1, 0.0);
        animator.play(&ids(&[1]), &mut host);

        host.place(1, 80.0);
        animator.capture(&ids(&[1]), &host);
        host.place(1, 120.0);
        let report = animator.play(&ids(&[1]), &mut host);
        assert_eq!(report.moved[0].1, Vec2::new(0.0, -40.0));
    }

    #[test]
    fn removal_lifecycle() {
        let mut animator = FlipAnimator::default();
        let mut host = FakeHost::default();
        host.place(1, 0.0);
        host.place(2, 40.0);
        animator.play(&ids(&[1, 2]), &mut host);
        animator.on_animation_frame(&mut host);

        let two = ItemId::from(2);
        assert!(animator.begin_removal(&two, &mut host));
        assert!(!animator.begin_removal(&two, &mut host));
        let exit = host.last_write(2).unwrap();
        assert_eq!(exit.offset, Vec2::new(200.0, 0.0));
        assert!(exit.collapsed);

        // Removing items are not re-animated by later passes.
        host.place(2, 0.0);
        let report = animator.play(&ids(&[1, 2]), &mut host);
        assert!(report.moved.iter().all(|(id, _)| *id != two));
        assert!(animator.cached_box(&two).is_some());

        assert_eq!(animator.on_transition_end(&two), TransitionOutcome::Removed);
        assert_eq!(animator.on_transition_end(&two), TransitionOutcome::Ignored);
        assert!(animator.cached_box(&two).is_none());
    }

    #[test]
    fn removal_drops_pending_enter_commit() {
        let mut animator = FlipAnimator::default();
        let mut host = FakeHost::default();
        host.place(1, 0.0);
        animator.play(&ids(&[1]), &mut host);
        animator.begin_removal(&ItemId::from(1), &mut host);

        assert_eq!(animator.on_animation_frame(&mut host), 0);
        assert!(host.last_write(1).unwrap().collapsed);
    }

    #[test]
    fn entering_item_settles() {
        let mut animator = FlipAnimator::default();
        let mut host = FakeHost::default();
        host.place(1, 0.0);
        animator.play(&ids(&[1]), &mut host);

        let one = ItemId::from(1);
        assert_eq!(animator.on_transition_end(&one), TransitionOutcome::Settled);
        assert_eq!(animator.phase(&one), Some(ItemPhase::Steady));
    }

    #[test]
    fn revive_restores_steady_style() {
        let mut animator = FlipAnimator::default();
        let mut host = FakeHost::default();
        host.place(1, 0.0);
        animator.play(&ids(&[1]), &mut host);

        let one = ItemId::from(1);
        animator.begin_removal(&one, &mut host);
        assert!(animator.revive(&one, &mut host));
        assert_eq!(host.last_write(1).unwrap().opacity, 1.0);
        assert_eq!(animator.on_transition_end(&one), TransitionOutcome::Settled);
        assert!(!animator.revive(&one, &mut host));
    }

    #[test]
    fn items_dropped_from_render_are_forgotten() {
        let mut animator = FlipAnimator::default();
        let mut host = FakeHost::default();
        host.place(1, 0.0);
        host.place(2, 40.0);
        animator.play(&ids(&[1, 2]), &mut host);

        animator.play(&ids(&[1]), &mut host);
        assert!(!animator.is_tracking(&ItemId::from(2)));
        assert_eq!(animator.pending_commits(), 1);
    }
}
