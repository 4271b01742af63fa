//! Software transitions for hosts without a native transition engine.
//!
//! A [`TransitionTimeline`] receives the same [`ItemStyle`] writes a browser
//! would, interpolates them with [`Tween`]s and reports which items finished
//! their transition on each [`update`](TransitionTimeline::update). Headless
//! hosts and immediate-mode renderers embed one and forward the finished ids
//! to the list's `on_transition_end`.

use flipline_core::alloc::HashMap;
use flipline_core::math::Vec2;

use super::style::ItemStyle;
use crate::animation::Tween;
use crate::id::ItemId;

/// Interpolated visual state of one item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub offset: Vec2,
    pub opacity: f32,
    /// Fraction of the item's layout extent still occupied; `0.0` when collapsed.
    pub extent: f32,
}

impl VisualState {
    pub const REST: VisualState = VisualState {
        offset: Vec2::ZERO,
        opacity: 1.0,
        extent: 1.0,
    };

    fn of(style: &ItemStyle) -> Self {
        Self {
            offset: style.offset,
            opacity: style.opacity,
            extent: if style.collapsed { 0.0 } else { 1.0 },
        }
    }

    fn channel(&self, channel: Channel) -> f32 {
        match channel {
            Channel::OffsetX => self.offset.x,
            Channel::OffsetY => self.offset.y,
            Channel::Opacity => self.opacity,
            Channel::Extent => self.extent,
        }
    }

    fn set_channel(&mut self, channel: Channel, value: f32) {
        match channel {
            Channel::OffsetX => self.offset.x = value,
            Channel::OffsetY => self.offset.y = value,
            Channel::Opacity => self.opacity = value,
            Channel::Extent => self.extent = value,
        }
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self::REST
    }
}

/// Independently animated properties of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Channel {
    OffsetX,
    OffsetY,
    Opacity,
    Extent,
}

const CHANNELS: [Channel; 4] = [Channel::OffsetX, Channel::OffsetY, Channel::Opacity, Channel::Extent];

#[derive(Debug, Clone, Default)]
struct Track {
    visual: VisualState,
    tweens: Vec<(Channel, Tween)>,
}

impl Track {
    fn is_animating(&self) -> bool {
        !self.tweens.is_empty()
    }

    /// Advance all tweens. Returns true when the last one finished this step.
    fn update(&mut self, delta_time: f32) -> bool {
        if self.tweens.is_empty() {
            return false;
        }

        let mut running = false;
        for (channel, tween) in &mut self.tweens {
            running |= tween.update(delta_time);
            let value = if tween.is_done() { tween.target() } else { tween.value() };
            self.visual.set_channel(*channel, value);
        }

        if running {
            return false;
        }
        self.tweens.clear();
        true
    }
}

/// Per-item transition driver.
#[derive(Debug, Default, Clone)]
pub struct TransitionTimeline {
    tracks: HashMap<ItemId, Track>,
}

impl TransitionTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a style write.
    ///
    /// A snap replaces the visual state and drops running tweens without an
    /// end signal. A timed style starts a tween from the current visual value
    /// for every property that changes; properties already at their target do
    /// not animate, and a style that changes nothing produces no end signal.
    pub fn apply(&mut self, id: &ItemId, style: &ItemStyle) {
        let track = self.tracks.entry(id.clone()).or_default();
        let target = VisualState::of(style);

        let Some(transition) = style.transition else {
            track.visual = target;
            track.tweens.clear();
            return;
        };

        track.tweens.clear();
        for channel in CHANNELS {
            let from = track.visual.channel(channel);
            let to = target.channel(channel);
            if from != to {
                let tween = Tween::new(from, to, transition.duration_secs()).easing(transition.easing);
                track.tweens.push((channel, tween));
            }
        }
    }

    /// Advance every running transition by `delta_time` seconds.
    ///
    /// Returns the ids whose transition completed during this step, in id order.
    pub fn update(&mut self, delta_time: f32) -> Vec<ItemId> {
        let mut ended: Vec<ItemId> = self
            .tracks
            .iter_mut()
            .filter_map(|(id, track)| track.update(delta_time).then(|| id.clone()))
            .collect();
        ended.sort();
        ended
    }

    /// Current visual state; [`VisualState::REST`] for untracked items.
    pub fn visual(&self, id: &ItemId) -> VisualState {
        self.tracks.get(id).map(|track| track.visual).unwrap_or_default()
    }

    pub fn is_animating(&self, id: &ItemId) -> bool {
        self.tracks.get(id).is_some_and(Track::is_animating)
    }

    /// True when no item has a running transition.
    pub fn is_idle(&self) -> bool {
        !self.tracks.values().any(Track::is_animating)
    }

    /// Stop tracking an item, e.g. after it was unmounted.
    pub fn remove(&mut self, id: &ItemId) {
        self.tracks.remove(id);
    }

    pub fn clear(&mut self) {
        self.tracks.clear();
    }
}
