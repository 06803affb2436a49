use crate::common::Value;
use crate::errors::ShelfResult;
use std::ops::Deref;
use std::sync::Arc;

/// Contract every key-value substrate must fulfil.
///
/// # Semantics
/// - Single-key operations are atomic; nothing is promised across keys.
/// - Failures are reported through `Err` and the engine surfaces them to its caller
///   unchanged. The engine never retries.
/// - `delete` of a missing key succeeds.
///
/// # Thread Safety
/// Implementers must be `Send + Sync`; the engine calls them from whichever thread
/// runs the collection operation.
pub trait KeyValueStoreProvider: Send + Sync {
    /// Returns the value stored under `key`, or `None` if the key is absent.
    fn get(&self, key: &str) -> ShelfResult<Option<Value>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: Value) -> ShelfResult<()>;

    /// Removes `key`. Removing an absent key is not an error.
    fn delete(&self, key: &str) -> ShelfResult<()>;

    /// Lists every key currently present.
    fn list_keys(&self) -> ShelfResult<Vec<String>>;

    /// Lists keys that start with `prefix`.
    ///
    /// The default implementation filters [`list_keys`](Self::list_keys); ordered
    /// substrates may override it with a range scan.
    fn list_keys_with_prefix(&self, prefix: &str) -> ShelfResult<Vec<String>> {
        Ok(self
            .list_keys()?
            .into_iter()
            .filter(|key| key.starts_with(prefix))
            .collect())
    }
}

/// Shared handle to a key-value substrate.
///
/// Cloning the handle is cheap; every clone talks to the same substrate.
///
/// # Examples
///
/// ```rust
/// use shelfdb::common::Value;
/// use shelfdb::store::{KeyValueStore, KeyValueStoreProvider, memory::InMemoryStore};
///
/// let store = KeyValueStore::new(InMemoryStore::new());
/// store.set("greeting", Value::from("hello")).unwrap();
/// assert_eq!(store.get("greeting").unwrap(), Some(Value::from("hello")));
/// ```
#[derive(Clone)]
pub struct KeyValueStore {
    inner: Arc<dyn KeyValueStoreProvider>,
}

impl KeyValueStore {
    pub fn new<T: KeyValueStoreProvider + 'static>(inner: T) -> Self {
        KeyValueStore {
            inner: Arc::new(inner),
        }
    }
}

impl Deref for KeyValueStore {
    type Target = Arc<dyn KeyValueStoreProvider>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
