//! Flipline - reorderable lists with animated transitions
//!
//! Flipline keeps a list of uniquely-identified items in order while the
//! user drags them around, and animates every position change with the FLIP
//! technique (First, Last, Invert, Play):
//!
//! - **Drag to reorder**: mouse drag-and-drop and touch dragging with a ghost
//! - **Position transitions**: moved items slide from where they were
//! - **Enter and exit**: new items fade in, removed items slide out before deletion
//! - **Renderer agnostic**: everything on screen goes through [`ElementHost`](ui::ElementHost)
//!
//! # Quick Start
//!
//! ```ignore
//! use flipline::prelude::*;
//!
//! let mut list = ReorderableList::new(todos, ListConfig::default())?;
//! list.mount(&mut host);
//!
//! // From the host's event loop:
//! let outcome = list.dispatch(ListInput::DragEnter { index }, &mut host);
//! if outcome.prevent_default {
//!     event.prevent_default();
//! }
//!
//! // Next animation frame:
//! list.on_animation_frame(&mut host);
//!
//! // When the host reports a finished transition:
//! list.on_transition_end(&id, &mut host);
//! ```
//!
//! Run `cargo run -p flipline --example todo_reorder` for a headless walkthrough.

pub use flipline_core as core;
pub use flipline_core::math;
pub use flipline_ui as ui;

/// Install logging (and profiling, if configured) from an engine config.
pub fn init(config: &core::Config) {
    core::init(config);
    tracing::debug!(filter = %config.log_filter, "flipline initialized");
}

pub mod prelude {
    pub use flipline_core::Config;
    pub use flipline_core::geometry::{Axis, Rect};
    pub use flipline_core::math::Vec2;

    pub use flipline_ui::{
        DispatchOutcome, DragConfig, EasingFunction, ElementHost, FlipConfig, HitTestPolicy,
        ItemId, ItemStyle, ItemView, ListConfig, ListError, ListInput, ListRenderer, ListResult,
        OrderedItem, ReorderableList, TransitionOutcome, TransitionTimeline,
    };
}
