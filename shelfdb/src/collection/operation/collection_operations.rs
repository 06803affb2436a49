use super::read_operations::{count_documents, find_documents};
use super::write_operations::WriteOperations;
use super::write_result::{DeleteResult, UpdateResult};
use crate::collection::{Document, FindOptions, IdGenerator, UpdateOptions};
use crate::common::Value;
use crate::errors::{ErrorKind, ShelfError, ShelfResult};
use crate::filter::Filter;
use crate::store::KeyValueStore;
use std::sync::Arc;

/// Load-compute-store plumbing for one collection entry.
///
/// Each call reloads the full document array from the substrate; writes persist the
/// full array back in one `set`. Callers hold the collection lock around each call.
#[derive(Clone)]
pub(crate) struct CollectionOperations {
    storage_key: String,
    store: KeyValueStore,
    write_operations: WriteOperations,
}

impl CollectionOperations {
    pub fn new(storage_key: &str, store: KeyValueStore, id_generator: Arc<dyn IdGenerator>) -> Self {
        CollectionOperations {
            storage_key: storage_key.to_string(),
            store,
            write_operations: WriteOperations::new(id_generator),
        }
    }

    pub fn insert(&self, documents: Vec<Document>) -> ShelfResult<Vec<Document>> {
        if documents.is_empty() {
            return Ok(Vec::new());
        }

        let mut stored = self.load()?;
        let inserted = self.write_operations.insert(&mut stored, documents);
        self.persist(stored)?;
        Ok(inserted)
    }

    pub fn find(&self, filter: &Filter, find_options: &FindOptions) -> ShelfResult<Vec<Document>> {
        let stored = self.load()?;
        Ok(find_documents(&stored, filter, find_options))
    }

    pub fn count(&self, filter: &Filter) -> ShelfResult<u64> {
        let stored = self.load()?;
        Ok(count_documents(&stored, filter))
    }

    pub fn update(
        &self,
        filter: &Filter,
        update: &Document,
        update_options: &UpdateOptions,
        just_once: bool,
    ) -> ShelfResult<UpdateResult> {
        let mut stored = self.load()?;
        let result = self
            .write_operations
            .update(&mut stored, filter, update, update_options, just_once);
        self.persist(stored)?;
        Ok(result)
    }

    pub fn remove(&self, filter: &Filter, just_once: bool) -> ShelfResult<DeleteResult> {
        let mut stored = self.load()?;
        let result = self.write_operations.remove(&mut stored, filter, just_once);
        self.persist(stored)?;
        Ok(result)
    }

    pub fn drop_collection(&self) -> ShelfResult<()> {
        self.store.delete(&self.storage_key)
    }

    pub fn exists(&self) -> ShelfResult<bool> {
        Ok(self.store.get(&self.storage_key)?.is_some())
    }

    fn load(&self) -> ShelfResult<Vec<Document>> {
        match self.store.get(&self.storage_key)? {
            None => Ok(Vec::new()),
            Some(Value::Array(values)) => values
                .into_iter()
                .map(|value| match value {
                    Value::Document(document) => Ok(document),
                    other => Err(self.corrupt_entry(&other)),
                })
                .collect(),
            Some(other) => Err(self.corrupt_entry(&other)),
        }
    }

    fn persist(&self, documents: Vec<Document>) -> ShelfResult<()> {
        let values = documents.into_iter().map(Value::Document).collect();
        self.store.set(&self.storage_key, Value::Array(values))
    }

    fn corrupt_entry(&self, found: &Value) -> ShelfError {
        log::error!(
            "Entry {} does not hold an array of documents, found {}",
            self.storage_key,
            found
        );
        ShelfError::new(
            &format!("Collection entry {} is not an array of documents", self.storage_key),
            ErrorKind::EncodingError,
        )
    }
}
