//! Configuration of a shelfdb database.

use crate::collection::{IdGenerator, ObjectIdGenerator};
use crate::common::KEY_SEPARATOR;
use crate::errors::{ErrorKind, ShelfError, ShelfResult};
use crate::store::memory::InMemoryStore;
use crate::store::KeyValueStore;
use std::sync::Arc;

/// Settings a [crate::Database] is opened with.
///
/// Built through [crate::DatabaseBuilder]. Defaults to a fresh [InMemoryStore] and the
/// [ObjectIdGenerator]; the name has no default and must be set.
#[derive(Clone)]
pub struct DatabaseConfig {
    name: String,
    store: KeyValueStore,
    id_generator: Arc<dyn IdGenerator>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DatabaseConfig {
    pub fn new() -> Self {
        DatabaseConfig {
            name: String::new(),
            store: KeyValueStore::new(InMemoryStore::new()),
            id_generator: Arc::new(ObjectIdGenerator::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn store(&self) -> KeyValueStore {
        self.store.clone()
    }

    pub fn id_generator(&self) -> Arc<dyn IdGenerator> {
        self.id_generator.clone()
    }

    /// Sets the database name.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the name is empty or contains `_`. The separator
    /// is reserved so that no database's key prefix is a prefix of another's.
    pub fn set_name(&mut self, name: &str) -> ShelfResult<()> {
        validate_database_name(name)?;
        self.name = name.to_string();
        Ok(())
    }

    pub fn set_store(&mut self, store: KeyValueStore) {
        self.store = store;
    }

    pub fn set_id_generator(&mut self, id_generator: Arc<dyn IdGenerator>) {
        self.id_generator = id_generator;
    }

    pub(crate) fn validate(&self) -> ShelfResult<()> {
        if self.name.is_empty() {
            log::error!("Database name is not configured");
            return Err(ShelfError::new(
                "Database name must be set before opening",
                ErrorKind::ValidationError,
            ));
        }
        Ok(())
    }
}

fn validate_database_name(name: &str) -> ShelfResult<()> {
    if name.is_empty() {
        log::error!("Database name cannot be empty");
        return Err(ShelfError::new(
            "Database name cannot be empty",
            ErrorKind::ValidationError,
        ));
    }

    if name.contains(KEY_SEPARATOR) {
        log::error!("Database name {} contains the key separator", name);
        return Err(ShelfError::new(
            &format!("Database name cannot contain '{}': {}", KEY_SEPARATOR, name),
            ErrorKind::ValidationError,
        ));
    }
    Ok(())
}
