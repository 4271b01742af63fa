//! Position transitions for reordered, inserted and removed items.

pub mod animator;
pub mod cache;
pub mod style;
pub mod timeline;

pub use animator::{FlipAnimator, FlipReport, ItemPhase, TransitionOutcome};
pub use cache::PositionCache;
pub use style::{ItemStyle, Transition};
pub use timeline::{TransitionTimeline, VisualState};
