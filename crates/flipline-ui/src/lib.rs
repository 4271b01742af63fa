//! Flipline UI - drag-to-reorder and FLIP list transitions
//!
//! This crate provides the interactive parts of a reorderable list without
//! tying them to any particular renderer:
//! - Ordered lists with stable ids and splice-move semantics
//! - Mouse and touch drag sessions with a floating ghost
//! - FLIP position transitions for moved, entering and removed items
//! - A software transition timeline for hosts without native transitions
//!
//! Rendering goes through the [`ElementHost`] and [`ListRenderer`] traits.
//!
//! ## Quick Start
//!
//! ```rust
//! use flipline_ui::{DragController, OrderedItem, OrderedList};
//!
//! let mut list = OrderedList::from_items(
//!     ["write", "test", "ship"].into_iter().enumerate().map(|(i, t)| OrderedItem::new(i as i64, t)),
//! )
//! .unwrap();
//!
//! let mut drag = DragController::new();
//! drag.on_drag_start(0);
//! drag.on_drag_enter(2, &mut list);
//! drag.on_drag_end();
//!
//! let order: Vec<_> = list.iter().map(|item| item.value).collect();
//! assert_eq!(order, ["test", "ship", "write"]);
//! ```

pub mod animated;
pub mod animation;
pub mod config;
pub mod drag;
pub mod event;
pub mod flip;
pub mod host;
pub mod id;
pub mod list;
pub mod shell;

pub use animated::{AnimatedItem, AnimatedList, Insertion, SyncReport};
pub use animation::{EasingFunction, Tween, TweenState};
pub use config::{DragConfig, FlipConfig, ListConfig};
pub use drag::{DragController, DragModality, DragSession, Ghost, HitTestPolicy, SessionHandle};
pub use event::{DispatchOutcome, EventFlags, ListInput, PlatformEvent};
pub use flip::{
    FlipAnimator, FlipReport, ItemPhase, ItemStyle, PositionCache, Transition, TransitionOutcome,
    TransitionTimeline, VisualState,
};
pub use host::{ElementHost, ItemView, ListRenderer};
pub use id::{ItemId, Keyed};
pub use list::{ListError, ListResult, MoveCommand, OrderedItem, OrderedList, ReorderTarget};
pub use shell::ReorderableList;

pub use flipline_core::geometry::{Axis, Rect};
pub use flipline_core::math::Vec2;
