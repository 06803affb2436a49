use super::operation::{CollectionOperations, DeleteResult, UpdateResult};
use super::{Document, FindOptions, IdGenerator, UpdateOptions};
use crate::common::LockHandle;
use crate::errors::{ErrorKind, ShelfError, ShelfResult};
use crate::filter::{by_id, Filter};
use crate::store::KeyValueStore;
use std::sync::Arc;

/// A named collection of documents bound to one key-value entry.
///
/// Obtained from [crate::Database::collection]. The handle is cheap to clone and holds
/// no documents: every call loads the whole collection from the substrate, computes,
/// and writes it back when the call mutates anything.
///
/// Calls on handles from the same [crate::Database] are serialized per collection.
/// Readers share the collection lock; writers hold it exclusively for the whole
/// load-compute-store sequence, so concurrent updates are never lost.
///
/// # Examples
///
/// ```rust
/// use shelfdb::{doc, Database};
/// use shelfdb::filter::field;
///
/// let db = Database::builder().name("library").open().unwrap();
/// let books = db.collection("books").unwrap();
///
/// let dune = books.insert_one(doc! { "title": "Dune", "status": "reading" }).unwrap();
/// assert!(dune.id().is_some());
///
/// let reading = books.find(field("status").eq("reading")).unwrap();
/// assert_eq!(reading.len(), 1);
/// ```
#[derive(Clone)]
pub struct DocumentCollection {
    name: String,
    storage_key: String,
    lock_handle: LockHandle,
    operations: CollectionOperations,
}

impl DocumentCollection {
    pub(crate) fn new(
        name: &str,
        storage_key: &str,
        store: KeyValueStore,
        id_generator: Arc<dyn IdGenerator>,
        lock_handle: LockHandle,
    ) -> Self {
        DocumentCollection {
            name: name.to_string(),
            storage_key: storage_key.to_string(),
            lock_handle,
            operations: CollectionOperations::new(storage_key, store, id_generator),
        }
    }

    /// The collection name as passed to [crate::Database::collection].
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The key-value entry holding this collection, `db_<database>_<collection>`.
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Inserts a document and returns it as stored.
    ///
    /// `_id`, `createdAt` and `updatedAt` are assigned by the engine; values the caller
    /// put in those fields are replaced. `createdAt` equals `updatedAt` on the result.
    ///
    /// # Errors
    ///
    /// Fails only when the substrate fails; the error is returned unchanged.
    pub fn insert_one(&self, document: Document) -> ShelfResult<Document> {
        let _guard = self.lock_handle.write();
        let mut inserted = self.operations.insert(vec![document])?;
        inserted.pop().ok_or_else(|| {
            log::error!("Insert into {} returned no document", self.storage_key);
            ShelfError::new("Insert returned no document", ErrorKind::InternalError)
        })
    }

    /// Inserts documents in order with a single write and returns them as stored.
    ///
    /// An empty input returns an empty vector without touching the substrate.
    pub fn insert_many(&self, documents: Vec<Document>) -> ShelfResult<Vec<Document>> {
        let _guard = self.lock_handle.write();
        self.operations.insert(documents)
    }

    /// Finds every document matching `filter`, in collection order.
    pub fn find(&self, filter: Filter) -> ShelfResult<Vec<Document>> {
        self.find_with_options(filter, FindOptions::new())
    }

    /// Finds documents matching `filter`, then sorts, skips and limits per `find_options`.
    ///
    /// The sort is stable: documents equal on every sort field keep collection order.
    /// A field missing from a document sorts as `null`.
    pub fn find_with_options(&self, filter: Filter, find_options: FindOptions) -> ShelfResult<Vec<Document>> {
        let _guard = self.lock_handle.read();
        self.operations.find(&filter, &find_options)
    }

    /// Returns the first document matching `filter`, or `None`.
    pub fn find_one(&self, filter: Filter) -> ShelfResult<Option<Document>> {
        self.find_one_with_options(filter, FindOptions::new())
    }

    /// Returns the first document of the sorted, skipped result, or `None`.
    ///
    /// Any limit in `find_options` is replaced by one.
    pub fn find_one_with_options(&self, filter: Filter, find_options: FindOptions) -> ShelfResult<Option<Document>> {
        let documents = self.find_with_options(filter, find_options.limit(1))?;
        Ok(documents.into_iter().next())
    }

    pub fn find_by_id(&self, id: &str) -> ShelfResult<Option<Document>> {
        self.find_one(by_id(id))
    }

    /// Merges `update` into the first document matching `filter`.
    ///
    /// Engine-managed fields in `update` are ignored and `updatedAt` is refreshed. The
    /// collection is written back even when nothing matched.
    pub fn update_one(&self, filter: Filter, update: &Document) -> ShelfResult<UpdateResult> {
        self.update_one_with_options(filter, update, UpdateOptions::default())
    }

    /// Like [update_one](Self::update_one); with `upsert` set and no match, inserts
    /// the filter fields merged with `update` as a new document.
    pub fn update_one_with_options(
        &self,
        filter: Filter,
        update: &Document,
        update_options: UpdateOptions,
    ) -> ShelfResult<UpdateResult> {
        let _guard = self.lock_handle.write();
        self.operations.update(&filter, update, &update_options, true)
    }

    /// Merges `update` into every document matching `filter`.
    pub fn update_many(&self, filter: Filter, update: &Document) -> ShelfResult<UpdateResult> {
        self.update_many_with_options(filter, update, UpdateOptions::default())
    }

    pub fn update_many_with_options(
        &self,
        filter: Filter,
        update: &Document,
        update_options: UpdateOptions,
    ) -> ShelfResult<UpdateResult> {
        let _guard = self.lock_handle.write();
        self.operations.update(&filter, update, &update_options, false)
    }

    /// Removes the first document matching `filter`.
    pub fn delete_one(&self, filter: Filter) -> ShelfResult<DeleteResult> {
        let _guard = self.lock_handle.write();
        self.operations.remove(&filter, true)
    }

    /// Removes every document matching `filter`.
    pub fn delete_many(&self, filter: Filter) -> ShelfResult<DeleteResult> {
        let _guard = self.lock_handle.write();
        self.operations.remove(&filter, false)
    }

    pub fn count_documents(&self, filter: Filter) -> ShelfResult<u64> {
        let _guard = self.lock_handle.read();
        self.operations.count(&filter)
    }

    /// Deletes the collection entry. Dropping a missing collection succeeds, and the
    /// handle stays usable: later reads see an empty collection.
    pub fn drop(&self) -> ShelfResult<()> {
        let _guard = self.lock_handle.write();
        self.operations.drop_collection()?;
        log::debug!("Dropped collection {}", self.storage_key);
        Ok(())
    }

    /// Whether the collection entry currently exists in the substrate.
    pub fn exists(&self) -> ShelfResult<bool> {
        let _guard = self.lock_handle.read();
        self.operations.exists()
    }

    /// Registers an index request.
    ///
    /// The field list is validated and the request logged. No index structure is built
    /// and no uniqueness is enforced.
    pub fn create_index(&self, field_names: Vec<&str>) -> ShelfResult<()> {
        if field_names.is_empty() {
            log::error!("Index on {} requested without fields", self.storage_key);
            return Err(ShelfError::new(
                "Index field names cannot be empty",
                ErrorKind::ValidationError,
            ));
        }

        if field_names.iter().any(|field| field.is_empty()) {
            log::error!("Index on {} requested with an empty field name", self.storage_key);
            return Err(ShelfError::new(
                "Index field name cannot be empty",
                ErrorKind::ValidationError,
            ));
        }

        log::debug!(
            "Index on {:?} for collection {} accepted, no index is maintained",
            field_names,
            self.storage_key
        );
        Ok(())
    }
}
