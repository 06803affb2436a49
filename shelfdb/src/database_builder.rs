use crate::collection::IdGenerator;
use crate::database::Database;
use crate::database_config::DatabaseConfig;
use crate::errors::{ShelfError, ShelfResult};
use crate::store::{KeyValueStore, KeyValueStoreProvider};
use std::sync::Arc;

/// Builder for opening a [Database].
///
/// Setters capture the first configuration error; [open](DatabaseBuilder::open)
/// returns it.
///
/// # Examples
///
/// ```rust
/// use shelfdb::Database;
/// use shelfdb::store::memory::InMemoryStore;
///
/// let store = InMemoryStore::new();
/// let db = Database::builder()
///     .name("library")
///     .store(store.clone())
///     .open()
///     .unwrap();
/// assert_eq!(db.name(), "library");
///
/// assert!(Database::builder().name("bad_name").open().is_err());
/// ```
#[derive(Default)]
pub struct DatabaseBuilder {
    error: Option<ShelfError>,
    config: DatabaseConfig,
}

impl DatabaseBuilder {
    pub fn new() -> Self {
        DatabaseBuilder {
            error: None,
            config: DatabaseConfig::new(),
        }
    }

    /// Sets the database name. It must be non-empty and must not contain `_`.
    pub fn name(mut self, name: &str) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.config.set_name(name) {
                self.error = Some(e);
            }
        }
        self
    }

    /// Sets the key-value substrate. Defaults to a fresh in-memory store.
    pub fn store<T: KeyValueStoreProvider + 'static>(mut self, store: T) -> Self {
        self.config.set_store(KeyValueStore::new(store));
        self
    }

    /// Shares an existing substrate handle.
    pub fn store_handle(mut self, store: KeyValueStore) -> Self {
        self.config.set_store(store);
        self
    }

    /// Sets the generator for `_id` values. Defaults to the object id generator.
    pub fn id_generator<T: IdGenerator + 'static>(mut self, id_generator: T) -> Self {
        self.config.set_id_generator(Arc::new(id_generator));
        self
    }

    /// Opens the database. No I/O happens until a collection is used.
    pub fn open(self) -> ShelfResult<Database> {
        if let Some(error) = self.error {
            return Err(error);
        }
        self.config.validate()?;
        log::debug!("Opened database {}", self.config.name());
        Ok(Database::new(self.config))
    }
}
