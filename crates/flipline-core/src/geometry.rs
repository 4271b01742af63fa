//! Layout geometry shared by measurement, hit-testing and FLIP deltas.

use crate::math::Vec2;

/// An axis-aligned bounding box in screen space (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self::new(origin.x, origin.y, size.x, size.y)
    }

    /// Inclusive containment test, matching how pointer hit-testing treats edges.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Same size, moved by `offset`.
    pub fn translate(&self, offset: Vec2) -> Self {
        Self {
            x: self.x + offset.x,
            y: self.y + offset.y,
            ..*self
        }
    }

    /// Same size, origin moved to `origin`.
    pub fn with_position(&self, origin: Vec2) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            ..*self
        }
    }
}

/// The axis (or axes) along which a list lays out its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    /// Items stack top to bottom; only vertical offsets are animated.
    #[default]
    Vertical,
    /// Items flow left to right; only horizontal offsets are animated.
    Horizontal,
    /// Wrapping or grid layouts; both components are animated.
    Both,
}

impl Axis {
    /// Keep only the component(s) of `v` that lie on this axis.
    pub fn project(self, v: Vec2) -> Vec2 {
        match self {
            Axis::Vertical => Vec2::new(0.0, v.y),
            Axis::Horizontal => Vec2::new(v.x, 0.0),
            Axis::Both => v,
        }
    }
}

/// Offset that makes an element laid out at `next` appear at `prev`.
///
/// This is the FLIP inversion: `prev - next`, restricted to `axis`.
pub fn inverse_offset(prev: &Rect, next: &Rect, axis: Axis) -> Vec2 {
    axis.project(prev.position() - next.position())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_inclusive() {
        let rect = Rect::new(10.0, 10.0, 100.0, 40.0);
        assert!(rect.contains(Vec2::new(10.0, 10.0)));
        assert!(rect.contains(Vec2::new(110.0, 50.0)));
        assert!(!rect.contains(Vec2::new(110.1, 50.0)));
        assert!(!rect.contains(Vec2::new(50.0, 9.0)));
    }

    #[test]
    fn edges_and_center() {
        let rect = Rect::new(0.0, 100.0, 200.0, 50.0);
        assert_eq!(rect.top(), 100.0);
        assert_eq!(rect.bottom(), 150.0);
        assert_eq!(rect.right(), 200.0);
        assert_eq!(rect.center(), Vec2::new(100.0, 125.0));
    }

    #[test]
    fn translate_keeps_size() {
        let rect = Rect::new(5.0, 5.0, 10.0, 20.0).translate(Vec2::new(3.0, -5.0));
        assert_eq!(rect, Rect::new(8.0, 0.0, 10.0, 20.0));
    }

    #[test]
    fn inverse_offset_vertical() {
        let prev = Rect::new(0.0, 100.0, 300.0, 40.0);
        let next = Rect::new(0.0, 40.0, 300.0, 40.0);
        assert_eq!(inverse_offset(&prev, &next, Axis::Vertical), Vec2::new(0.0, 60.0));
    }

    #[test]
    fn inverse_offset_respects_axis() {
        let prev = Rect::new(30.0, 100.0, 10.0, 10.0);
        let next = Rect::new(10.0, 40.0, 10.0, 10.0);
        assert_eq!(inverse_offset(&prev, &next, Axis::Horizontal), Vec2::new(20.0, 0.0));
        assert_eq!(inverse_offset(&prev, &next, Axis::Both), Vec2::new(20.0, 60.0));
    }
}
