use crate::collection::DocumentCollection;
use crate::common::util::{collection_key, collection_name_from_key, database_prefix};
use crate::common::LockRegistry;
use crate::database_builder::DatabaseBuilder;
use crate::database_config::DatabaseConfig;
use crate::errors::{ErrorKind, ShelfError, ShelfResult};
use crate::store::KeyValueStore;
use std::sync::Arc;

/// A named group of collections sharing the key prefix `db_<name>_`.
///
/// A database does not exist in the substrate on its own: it appears with the first
/// collection write and disappears when its last collection is dropped. The handle is
/// cheap to clone; clones share one lock registry, so every collection handle obtained
/// through them is serialized per collection.
///
/// Two `Database` values opened separately over the same store do not share locks.
///
/// # Examples
///
/// ```rust
/// use shelfdb::{doc, Database};
///
/// let db = Database::builder().name("library").open().unwrap();
/// db.collection("books").unwrap().insert_one(doc! { "title": "Dune" }).unwrap();
/// db.collection("users").unwrap().insert_one(doc! { "name": "ann" }).unwrap();
///
/// assert_eq!(db.list_collections().unwrap(), vec!["books", "users"]);
///
/// db.drop().unwrap();
/// assert!(db.list_collections().unwrap().is_empty());
/// ```
#[derive(Clone)]
pub struct Database {
    inner: Arc<DatabaseInner>,
}

impl Database {
    pub(crate) fn new(config: DatabaseConfig) -> Self {
        Database {
            inner: Arc::new(DatabaseInner::new(config)),
        }
    }

    /// Creates a builder for a database.
    pub fn builder() -> DatabaseBuilder {
        DatabaseBuilder::new()
    }

    pub fn name(&self) -> &str {
        self.inner.config.name()
    }

    /// The substrate this database stores its collections in.
    pub fn store(&self) -> KeyValueStore {
        self.inner.config.store()
    }

    pub fn config(&self) -> &DatabaseConfig {
        &self.inner.config
    }

    /// Returns a handle to the named collection.
    ///
    /// No I/O happens here; the collection comes into existence with its first write.
    /// Calling this repeatedly with the same name yields handles over the same data and
    /// the same lock.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if `name` is empty.
    pub fn collection(&self, name: &str) -> ShelfResult<DocumentCollection> {
        self.inner.collection(name)
    }

    /// Names of the collections currently stored, sorted.
    pub fn list_collections(&self) -> ShelfResult<Vec<String>> {
        self.inner.list_collections()
    }

    pub fn has_collection(&self, name: &str) -> ShelfResult<bool> {
        self.inner.has_collection(name)
    }

    /// Deletes every collection of this database, one key at a time.
    ///
    /// The drop is not atomic. If the substrate fails partway, collections deleted
    /// before the failure stay deleted and the error is returned.
    pub fn drop(&self) -> ShelfResult<()> {
        self.inner.drop_collections()
    }
}

struct DatabaseInner {
    config: DatabaseConfig,
    prefix: String,
    lock_registry: LockRegistry,
}

impl DatabaseInner {
    fn new(config: DatabaseConfig) -> Self {
        let prefix = database_prefix(config.name());
        DatabaseInner {
            config,
            prefix,
            lock_registry: LockRegistry::new(),
        }
    }

    fn collection(&self, name: &str) -> ShelfResult<DocumentCollection> {
        if name.is_empty() {
            log::error!("Collection name cannot be empty");
            return Err(ShelfError::new(
                "Collection name cannot be empty",
                ErrorKind::ValidationError,
            ));
        }

        let storage_key = collection_key(self.config.name(), name);
        log::debug!("Binding collection {} to {}", name, storage_key);

        Ok(DocumentCollection::new(
            name,
            &storage_key,
            self.config.store(),
            self.config.id_generator(),
            self.lock_registry.get_lock(&storage_key),
        ))
    }

    fn list_collections(&self) -> ShelfResult<Vec<String>> {
        let mut names: Vec<String> = self
            .config
            .store()
            .list_keys_with_prefix(&self.prefix)?
            .iter()
            .filter_map(|key| collection_name_from_key(&self.prefix, key))
            .map(str::to_string)
            .collect();
        names.sort();
        Ok(names)
    }

    fn has_collection(&self, name: &str) -> ShelfResult<bool> {
        if name.is_empty() {
            return Ok(false);
        }
        let storage_key = collection_key(self.config.name(), name);
        let lock = self.lock_registry.get_lock(&storage_key);
        let _guard = lock.read();
        Ok(self.config.store().get(&storage_key)?.is_some())
    }

    fn drop_collections(&self) -> ShelfResult<()> {
        let store = self.config.store();
        let keys = store.list_keys_with_prefix(&self.prefix)?;

        for key in keys {
            if collection_name_from_key(&self.prefix, &key).is_none() {
                continue;
            }

            let lock = self.lock_registry.get_lock(&key);
            let _guard = lock.write();
            if let Err(e) = store.delete(&key) {
                log::error!("Failed to drop {} while dropping database {}: {}", key, self.config.name(), e);
                return Err(e);
            }
        }

        log::debug!("Dropped database {}", self.config.name());
        Ok(())
    }
}
