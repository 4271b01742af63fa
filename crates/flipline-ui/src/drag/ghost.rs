//! Floating proxy that follows the finger during touch drags.

use flipline_core::geometry::Rect;
use flipline_core::math::Vec2;

/// Stacking order for the ghost; above everything else in the list's layer.
pub const GHOST_Z_INDEX: i32 = 9999;

/// A visual copy of the dragged item.
///
/// The ghost never intercepts pointer events, otherwise hit-testing during
/// the drag would always land on the ghost itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Ghost {
    /// Bounding box of the dragged item when the touch started.
    pub origin_rect: Rect,
    /// Current rendered geometry; same size as `origin_rect`.
    pub geometry: Rect,
    /// Render scale, applied around the ghost's centre.
    pub scale: f32,
}

impl Ghost {
    /// Create a ghost covering `item_bounds`.
    pub fn new(item_bounds: Rect, scale: f32) -> Self {
        Self {
            origin_rect: item_bounds,
            geometry: item_bounds,
            scale,
        }
    }

    /// Move the ghost so it stays under the finger: origin plus the pointer delta.
    pub fn follow(&mut self, pointer_delta: Vec2) {
        self.geometry = self.origin_rect.translate(pointer_delta);
    }

    /// Screen rect after scaling around the centre.
    pub fn scaled_rect(&self) -> Rect {
        let size = self.geometry.size() * self.scale;
        let origin = self.geometry.center() - size * 0.5;
        Rect::from_origin_size(origin, size)
    }

    pub fn z_index(&self) -> i32 {
        GHOST_Z_INDEX
    }

    pub fn is_interactive(&self) -> bool {
        false
    }
}
