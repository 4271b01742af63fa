//! Math types re-exported from [`glam`].
//!
//! Positions, pointer coordinates and FLIP offsets are all [`Vec2`].
//!
//! ```
//! use flipline_core::math::Vec2;
//!
//! let touch_origin = Vec2::new(10.0, 20.0);
//! let touch = Vec2::new(14.0, 80.0);
//! assert_eq!(touch - touch_origin, Vec2::new(4.0, 60.0));
//! ```
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::{Vec2, vec2};
