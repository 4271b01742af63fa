//! Tunables for the drag controller and the FLIP animator.

use std::time::Duration;

use flipline_core::geometry::Axis;
use flipline_core::math::Vec2;

use crate::animation::EasingFunction;
use crate::drag::HitTestPolicy;

/// Default transition duration.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(300);

/// How far below its slot a newly inserted item starts.
pub const DEFAULT_ENTER_OFFSET: Vec2 = Vec2::new(0.0, 20.0);

/// Scale applied to the touch-drag ghost.
pub const DEFAULT_GHOST_SCALE: f32 = 1.05;

/// Animator settings.
#[derive(Debug, Clone, PartialEq)]
pub struct FlipConfig {
    /// Length of every reorder, enter and exit transition.
    pub duration: Duration,
    pub easing: EasingFunction,
    /// Which component of a position change gets animated.
    pub axis: Axis,
    /// Offset an entering item animates in from.
    pub enter_offset: Vec2,
}

impl Default for FlipConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            easing: EasingFunction::Ease,
            axis: Axis::Vertical,
            enter_offset: DEFAULT_ENTER_OFFSET,
        }
    }
}

impl FlipConfig {
    /// The `{ duration }` option: default settings with a duration in milliseconds.
    pub fn from_millis(duration_ms: u64) -> Self {
        Self::default().with_duration(Duration::from_millis(duration_ms))
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_enter_offset(mut self, offset: Vec2) -> Self {
        self.enter_offset = offset;
        self
    }
}

/// Drag controller settings.
#[derive(Debug, Clone, PartialEq)]
pub struct DragConfig {
    pub hit_test: HitTestPolicy,
    /// Opacity of the item being dragged; the platform drag image or the
    /// ghost stands in for it.
    pub dragged_opacity: f32,
    pub ghost_scale: f32,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            hit_test: HitTestPolicy::FirstMatch,
            dragged_opacity: 0.0,
            ghost_scale: DEFAULT_GHOST_SCALE,
        }
    }
}

impl DragConfig {
    pub fn with_hit_test(mut self, policy: HitTestPolicy) -> Self {
        self.hit_test = policy;
        self
    }

    pub fn with_dragged_opacity(mut self, opacity: f32) -> Self {
        self.dragged_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn with_ghost_scale(mut self, scale: f32) -> Self {
        self.ghost_scale = scale;
        self
    }
}

/// Settings for a [`ReorderableList`](crate::shell::ReorderableList).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListConfig {
    pub flip: FlipConfig,
    pub drag: DragConfig,
}

impl ListConfig {
    pub fn with_flip(mut self, flip: FlipConfig) -> Self {
        self.flip = flip;
        self
    }

    pub fn with_drag(mut self, drag: DragConfig) -> Self {
        self.drag = drag;
        self
    }
}
