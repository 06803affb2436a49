use crate::common::Value;
use crate::errors::{ErrorKind, ShelfError, ShelfResult};
use crate::store::KeyValueStoreProvider;
use crossbeam_skiplist::SkipMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// In-memory implementation of the key-value substrate.
///
/// # Characteristics
/// - **Thread-Safe**: backed by a lock-free concurrent skip list
/// - **Ordered**: keys are listed in lexicographic order, prefix listing is a range scan
/// - **No Persistence**: all data is lost when the last handle is dropped
/// - **Closable**: after [`close`](InMemoryStore::close) every operation fails with
///   `ErrorKind::StoreAlreadyClosed`
///
/// Clones share the same entries.
///
/// # Usage
/// ```rust
/// use shelfdb::common::Value;
/// use shelfdb::store::KeyValueStoreProvider;
/// use shelfdb::store::memory::InMemoryStore;
///
/// let store = InMemoryStore::new();
/// store.set("key1", Value::from("value1")).unwrap();
/// assert_eq!(store.list_keys().unwrap(), vec!["key1"]);
/// ```
#[derive(Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<InMemoryStoreInner>,
}

impl InMemoryStore {
    pub fn new() -> InMemoryStore {
        InMemoryStore {
            inner: Arc::new(InMemoryStoreInner::default()),
        }
    }

    /// Closes the store. Subsequent operations on any clone fail.
    pub fn close(&self) {
        self.inner.closed.store(true, Ordering::Release);
        log::debug!("In-memory store closed");
    }

    pub fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::Acquire)
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.inner.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.entries.is_empty()
    }

    fn ensure_open(&self) -> ShelfResult<()> {
        if self.is_closed() {
            log::error!("In-memory store is closed");
            return Err(ShelfError::new(
                "In-memory store is closed; reopen a new store to continue operations",
                ErrorKind::StoreAlreadyClosed,
            ));
        }
        Ok(())
    }
}

#[derive(Default)]
struct InMemoryStoreInner {
    entries: SkipMap<String, Value>,
    closed: AtomicBool,
}

impl KeyValueStoreProvider for InMemoryStore {
    fn get(&self, key: &str) -> ShelfResult<Option<Value>> {
        self.ensure_open()?;
        Ok(self.inner.entries.get(key).map(|entry| entry.value().clone()))
    }

    fn set(&self, key: &str, value: Value) -> ShelfResult<()> {
        self.ensure_open()?;
        self.inner.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&self, key: &str) -> ShelfResult<()> {
        self.ensure_open()?;
        self.inner.entries.remove(key);
        Ok(())
    }

    fn list_keys(&self) -> ShelfResult<Vec<String>> {
        self.ensure_open()?;
        Ok(self
            .inner
            .entries
            .iter()
            .map(|entry| entry.key().clone())
            .collect())
    }

    fn list_keys_with_prefix(&self, prefix: &str) -> ShelfResult<Vec<String>> {
        self.ensure_open()?;
        Ok(self
            .inner
            .entries
            .range(prefix.to_string()..)
            .take_while(|entry| entry.key().starts_with(prefix))
            .map(|entry| entry.key().clone())
            .collect())
    }
}
