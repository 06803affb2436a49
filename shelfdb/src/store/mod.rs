//! Key-value substrates underneath the document engine.
//!
//! The engine only ever needs four single-key primitives, described by
//! [`KeyValueStoreProvider`]:
//!
//! - `get(key)` - the stored value or `None`
//! - `set(key, value)` - replace the value under a key
//! - `delete(key)` - remove a key (absent keys are not an error)
//! - `list_keys()` - every key currently present
//!
//! No cross-key atomicity is assumed. Each collection lives under a single key, so a
//! collection write is atomic exactly when the substrate's `set` is.
//!
//! # Stores
//!
//! - [`memory::InMemoryStore`] - concurrent ordered in-memory map, the default store
//!
//! Custom substrates implement [`KeyValueStoreProvider`] and are wrapped in a
//! [`KeyValueStore`] handle before being handed to the database builder.

mod kv_store;
pub mod memory;

pub use kv_store::*;
