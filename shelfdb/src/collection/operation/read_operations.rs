use crate::collection::{Document, FindOptions};
use crate::common::{SortOrder, SortableFields, Value};
use crate::filter::Filter;
use std::cmp::Ordering;

// missing fields sort as null
static NULL_VALUE: Value = Value::Null;

/// Runs a query over a materialized collection.
///
/// Matches are collected in collection order, stably sorted, then `skip` and `limit`
/// are applied. A `limit` of zero means no limit. The returned documents are clones;
/// `documents` is never modified.
pub(crate) fn find_documents(
    documents: &[Document],
    filter: &Filter,
    find_options: &FindOptions,
) -> Vec<Document> {
    let mut matches: Vec<&Document> = documents
        .iter()
        .filter(|document| filter.apply(document))
        .collect();

    if let Some(sort_fields) = find_options.sort_fields() {
        if !sort_fields.is_empty() {
            sort_documents(&mut matches, sort_fields);
        }
    }

    let skip = find_options.skip_count().map(saturating_usize).unwrap_or(0);
    let limit = find_options
        .limit_count()
        .filter(|limit| *limit > 0)
        .map(saturating_usize)
        .unwrap_or(usize::MAX);

    matches.into_iter().skip(skip).take(limit).cloned().collect()
}

/// Counts the documents matching `filter`.
pub(crate) fn count_documents(documents: &[Document], filter: &Filter) -> u64 {
    if filter.is_all() {
        return documents.len() as u64;
    }
    documents.iter().filter(|document| filter.apply(document)).count() as u64
}

fn sort_documents(documents: &mut [&Document], sort_fields: &SortableFields) {
    // sort_by is stable: full ties keep collection order
    documents.sort_by(|a, b| compare_documents(a, b, sort_fields));
}

pub(crate) fn compare_documents(a: &Document, b: &Document, sort_fields: &SortableFields) -> Ordering {
    for (field, order) in sort_fields.sorting_order() {
        let a_value = a.get(field).unwrap_or(&NULL_VALUE);
        let b_value = b.get(field).unwrap_or(&NULL_VALUE);

        let cmp = a_value.cmp(b_value);
        if cmp != Ordering::Equal {
            return match order {
                SortOrder::Ascending => cmp,
                SortOrder::Descending => cmp.reverse(),
            };
        }
    }
    Ordering::Equal
}

fn saturating_usize(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}
