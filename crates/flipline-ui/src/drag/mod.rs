//! Drag-to-reorder for mouse and touch input.
//!
//! A [`DragController`] tracks at most one [`DragSession`] and turns pointer
//! events into splice-moves on the list it is driving. Touch drags also get a
//! [`Ghost`] that follows the finger.

pub mod controller;
pub mod ghost;
pub mod session;

pub use controller::DragController;
pub use ghost::{GHOST_Z_INDEX, Ghost};
pub use hit_test::{HitTestPolicy, hit_test};
pub use session::{DragModality, DragSession, SessionHandle, TouchTracking};
