//! Stable item identifiers.
//!
//! An [`ItemId`] follows an item through every reorder; positions change, the id
//! never does. Ids are either integers or strings, mirroring the keys a
//! consumer usually already has on its records.

use std::fmt;
use std::sync::Arc;

/// A stable identifier for a list item, unique within one list.
///
/// # Example
/// ```
/// use flipline_ui::ItemId;
///
/// let a = ItemId::from(3);
/// let b = ItemId::from("todo-3");
/// assert_ne!(a, b);
/// assert_eq!(a.to_string(), "3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ItemId {
    Int(i64),
    Str(Arc<str>),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Int(id) => write!(f, "{}", id),
            ItemId::Str(id) => f.write_str(id),
        }
    }
}

impl From<i64> for ItemId {
    fn from(id: i64) -> Self {
        ItemId::Int(id)
    }
}

impl From<i32> for ItemId {
    fn from(id: i32) -> Self {
        ItemId::Int(id as i64)
    }
}

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        ItemId::Int(id as i64)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        ItemId::Str(Arc::from(id))
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        ItemId::Str(Arc::from(id))
    }
}

/// Anything that carries an [`ItemId`].
pub trait Keyed {
    fn id(&self) -> &ItemId;
}

impl Keyed for ItemId {
    fn id(&self) -> &ItemId {
        self
    }
}
