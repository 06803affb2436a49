use super::write_result::{DeleteResult, UpdateResult};
use crate::collection::{Document, IdGenerator, UpdateOptions};
use crate::common::util::current_timestamp;
use crate::common::{Value, DOC_CREATED_AT, DOC_ID, DOC_UPDATED_AT, RESERVED_FIELDS};
use crate::filter::Filter;
use std::sync::Arc;

/// Mutations over a materialized collection.
///
/// Every method works on the in-memory `Vec<Document>` only. Persisting the result is
/// the caller's job, so a failed persist discards the whole computation.
#[derive(Clone)]
pub(crate) struct WriteOperations {
    id_generator: Arc<dyn IdGenerator>,
}

impl WriteOperations {
    pub fn new(id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { id_generator }
    }

    /// Stamps and appends `new_documents` in input order, returning the stamped copies.
    pub fn insert(&self, documents: &mut Vec<Document>, new_documents: Vec<Document>) -> Vec<Document> {
        let mut inserted = Vec::with_capacity(new_documents.len());
        for document in new_documents {
            let stamped = self.stamp_new(document);
            documents.push(stamped.clone());
            inserted.push(stamped);
        }
        inserted
    }

    /// Merges `update` into the first (`just_once`) or every document matching `filter`.
    ///
    /// With nothing matched and `upsert` set, appends `filter ∪ update` as a new document.
    pub fn update(
        &self,
        documents: &mut Vec<Document>,
        filter: &Filter,
        update: &Document,
        update_options: &UpdateOptions,
        just_once: bool,
    ) -> UpdateResult {
        let patch = self.prepare_patch(update);
        let now = Value::Timestamp(current_timestamp());

        let mut matched = 0u64;
        for document in documents.iter_mut() {
            if !filter.apply(document) {
                continue;
            }

            document.merge(&patch);
            document.put_unchecked(DOC_UPDATED_AT, now.clone());
            matched += 1;

            if just_once {
                break;
            }
        }

        if matched > 0 {
            return UpdateResult::matched(matched);
        }

        if update_options.is_upsert() {
            let mut upserted = filter.conditions().clone();
            upserted.merge(&patch);
            let upserted = self.stamp_new(upserted);
            let id = upserted.id().unwrap_or_default().to_string();

            log::debug!("No document matched {}, upserted document {}", filter, id);
            documents.push(upserted);
            return UpdateResult::upserted(id);
        }

        UpdateResult::matched(0)
    }

    /// Removes the first (`just_once`) or every document matching `filter`.
    pub fn remove(&self, documents: &mut Vec<Document>, filter: &Filter, just_once: bool) -> DeleteResult {
        if just_once {
            return match documents.iter().position(|document| filter.apply(document)) {
                Some(index) => {
                    documents.remove(index);
                    DeleteResult::new(1)
                }
                None => DeleteResult::new(0),
            };
        }

        let before = documents.len();
        documents.retain(|document| !filter.apply(document));
        DeleteResult::new((before - documents.len()) as u64)
    }

    // assigns _id, createdAt and updatedAt, replacing caller-supplied values
    fn stamp_new(&self, mut document: Document) -> Document {
        if document.contains_key(DOC_ID) {
            log::debug!("Replacing caller-supplied _id {:?} on insert", document.get(DOC_ID));
        }

        let now = Value::Timestamp(current_timestamp());
        document.put_unchecked(DOC_ID, Value::String(self.id_generator.next_id()));
        document.put_unchecked(DOC_CREATED_AT, now.clone());
        document.put_unchecked(DOC_UPDATED_AT, now);
        document
    }

    fn prepare_patch(&self, update: &Document) -> Document {
        if RESERVED_FIELDS.iter().any(|field| update.contains_key(field)) {
            log::warn!("Update tried to change engine-managed fields, ignoring them: {}", update);
        }
        update.without_reserved_fields()
    }
}
