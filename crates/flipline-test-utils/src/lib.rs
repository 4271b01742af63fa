//! Test utilities for flipline.
//!
//! - [`MockHost`] - headless [`ListRenderer`](flipline_ui::ListRenderer) with a
//!   fixed stack layout, software transitions and call recording
//! - [`run_frame`] / [`settle`] - drive a list and a host through animation frames
//!
//! # Example
//!
//! ```rust
//! use flipline_test_utils::{MockHost, settle};
//! use flipline_ui::{ListConfig, OrderedItem, ReorderableList};
//!
//! let mut host = MockHost::new();
//! let mut list = ReorderableList::new(
//!     (1..=3).map(|id| OrderedItem::new(id, ())),
//!     ListConfig::default(),
//! )
//! .unwrap();
//!
//! list.mount(&mut host);
//! settle(&mut list, &mut host);
//!
//! assert!(host.is_idle());
//! assert_eq!(host.count_renders(), 1);
//! ```

pub mod frame;
pub mod mock_host;

pub use frame::{FRAME_SECS, run_frame, settle};
pub use mock_host::{HostCall, MockHost, StackLayout};
