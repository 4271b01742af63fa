//! Easing curves and scalar tweens.
//!
//! These drive [`TransitionTimeline`](crate::flip::TransitionTimeline), the
//! software stand-in for a platform's timed CSS-style transitions.

/// Easing functions for transitions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EasingFunction {
    /// Linear interpolation
    Linear,
    /// The CSS `ease` curve, `cubic-bezier(0.25, 0.1, 0.25, 1.0)`
    #[default]
    Ease,
    /// Ease in (slow start)
    EaseIn,
    /// Ease out (slow end)
    EaseOut,
    /// Ease in and out (slow start and end)
    EaseInOut,
    /// Cubic ease out
    CubicOut,
}

impl EasingFunction {
    /// Apply the easing function to a normalized time value (0.0 to 1.0).
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::Ease => cubic_bezier(0.25, 0.1, 0.25, 1.0, t),
            EasingFunction::EaseIn => t * t,
            EasingFunction::EaseOut => t * (2.0 - t),
            EasingFunction::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            EasingFunction::CubicOut => {
                let t = t - 1.0;
                t * t * t + 1.0
            }
        }
    }
}

/// Evaluate a CSS cubic-bezier timing curve with endpoints (0,0) and (1,1).
///
/// Solves x(s) = t for the curve parameter with Newton steps, falling back to
/// bisection when the slope flattens out.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, t: f32) -> f32 {
    if t <= 0.0 || t >= 1.0 {
        return t;
    }

    let bezier = |p1: f32, p2: f32, s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
    };
    let slope = |p1: f32, p2: f32, s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
    };

    let mut s = t;
    for _ in 0..8 {
        let err = bezier(x1, x2, s) - t;
        if err.abs() < 1e-5 {
            return bezier(y1, y2, s);
        }
        let d = slope(x1, x2, s);
        if d.abs() < 1e-6 {
            break;
        }
        s -= err / d;
    }

    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    s = t;
    for _ in 0..32 {
        let x = bezier(x1, x2, s);
        if (x - t).abs() < 1e-5 {
            break;
        }
        if x < t {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) * 0.5;
    }
    bezier(y1, y2, s)
}

/// Tween state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenState {
    /// Tween is running
    Running,
    /// Tween reached its end value
    Completed,
}

/// Interpolates a single scalar from one value to another over a fixed duration.
#[derive(Debug, Clone)]
pub struct Tween {
    /// Start value
    from: f32,
    /// End value
    to: f32,
    /// Duration in seconds
    duration: f32,
    /// Elapsed time in seconds
    elapsed: f32,
    easing: EasingFunction,
    state: TweenState,
}

impl Tween {
    /// Create a new tween.
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
            easing: EasingFunction::default(),
            state: TweenState::Running,
        }
    }

    /// Set the easing function.
    pub fn easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn state(&self) -> TweenState {
        self.state
    }

    pub fn is_done(&self) -> bool {
        self.state == TweenState::Completed
    }

    /// Progress in the range 0.0 to 1.0.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).min(1.0)
    }

    /// Get the current value.
    pub fn value(&self) -> f32 {
        let eased_t = self.easing.apply(self.progress());
        self.from + (self.to - self.from) * eased_t
    }

    /// Advance by `delta_time` seconds.
    ///
    /// Returns true if the tween is still running.
    pub fn update(&mut self, delta_time: f32) -> bool {
        if self.state == TweenState::Completed {
            return false;
        }

        self.elapsed += delta_time;
        if self.elapsed >= self.duration {
            self.elapsed = self.duration;
            self.state = TweenState::Completed;
            return false;
        }
        true
    }
}
