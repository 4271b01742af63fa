//! Visual styles the animator writes to rendered items.

use std::time::Duration;

use flipline_core::math::Vec2;

use crate::animation::EasingFunction;

/// How a style change should be animated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: Duration,
    pub easing: EasingFunction,
}

impl Transition {
    pub fn new(duration: Duration, easing: EasingFunction) -> Self {
        Self { duration, easing }
    }

    pub fn duration_secs(&self) -> f32 {
        self.duration.as_secs_f32()
    }
}

/// A complete visual state for one item.
///
/// `transition: None` means "snap": the host applies the style immediately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemStyle {
    /// Translation from the item's layout position.
    pub offset: Vec2,
    pub opacity: f32,
    /// Collapse the item's extent to zero so following items close the gap.
    pub collapsed: bool,
    pub transition: Option<Transition>,
}

impl ItemStyle {
    /// At rest in layout, fully visible.
    pub fn steady(transition: Option<Transition>) -> Self {
        Self {
            offset: Vec2::ZERO,
            opacity: 1.0,
            collapsed: false,
            transition,
        }
    }

    /// Invisible and displaced by `offset`; where enter animations start.
    pub fn entering(offset: Vec2) -> Self {
        Self {
            offset,
            opacity: 0.0,
            collapsed: false,
            transition: None,
        }
    }

    /// Displaced by `delta` with no transition; the FLIP "invert" step.
    pub fn offset(delta: Vec2) -> Self {
        Self {
            offset: delta,
            opacity: 1.0,
            collapsed: false,
            transition: None,
        }
    }

    /// Slid out sideways by the item's `width`, faded and collapsed.
    pub fn exit(width: f32, transition: Transition) -> Self {
        Self {
            offset: Vec2::new(width, 0.0),
            opacity: 0.0,
            collapsed: true,
            transition: Some(transition),
        }
    }

    pub fn is_snap(&self) -> bool {
        self.transition.is_none()
    }
}

impl Default for ItemStyle {
    fn default() -> Self {
        Self::steady(None)
    }
}
