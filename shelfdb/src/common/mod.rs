//! Common types shared by the engine, the registry and the stores.
//!
//! - [`Value`] - the schema-free field value model
//! - [`SortOrder`] / [`SortableFields`] - sort orders for find options
//! - [`LockRegistry`] / [`LockHandle`] - named read/write locks guarding collections
//! - field and storage-key constants

mod constants;
mod lock;
mod sort_order;
pub(crate) mod util;
mod value;

pub use constants::*;
pub use lock::*;
pub use sort_order::*;
pub use value::*;
