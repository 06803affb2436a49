use crate::common::{SortOrder, SortableFields};

/// Options for controlling find operations on documents.
///
/// Sorting is applied first, then `skip`, then `limit`.
///
/// # Examples
///
/// ```rust
/// use shelfdb::collection::{order_by, FindOptions};
/// use shelfdb::common::SortOrder;
///
/// // second page of ten, newest first
/// let options = FindOptions::new()
///     .sort_by("createdAt", SortOrder::Descending)
///     .skip(10)
///     .limit(10);
///
/// let by_title = order_by("title", SortOrder::Ascending);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FindOptions {
    pub(crate) sort_by: Option<SortableFields>,
    pub(crate) skip: Option<u64>,
    pub(crate) limit: Option<u64>,
}

/// Creates `FindOptions` with sorting by a field.
pub fn order_by(field_name: &str, sort_order: SortOrder) -> FindOptions {
    FindOptions::new().sort_by(field_name, sort_order)
}

/// Creates `FindOptions` that skips a number of results.
pub fn skip_by(skip: u64) -> FindOptions {
    FindOptions::new().skip(skip)
}

/// Creates `FindOptions` that limits the number of results.
pub fn limit_to(limit: u64) -> FindOptions {
    FindOptions::new().limit(limit)
}

impl FindOptions {
    pub fn new() -> FindOptions {
        FindOptions {
            sort_by: None,
            skip: None,
            limit: None,
        }
    }

    /// Sets the number of matching documents to drop after sorting.
    pub fn skip(mut self, skip: u64) -> FindOptions {
        self.skip = Some(skip);
        self
    }

    /// Sets the maximum number of documents to return.
    pub fn limit(mut self, limit: u64) -> FindOptions {
        self.limit = Some(limit);
        self
    }

    /// Appends a sort key. Keys added later break ties left by earlier ones.
    pub fn sort_by(mut self, field_name: &str, sort_order: SortOrder) -> FindOptions {
        let fields = self.sort_by.unwrap_or_default();
        self.sort_by = Some(fields.add_sorted_field(field_name.to_string(), sort_order));
        self
    }

    /// Replaces the whole sort order.
    pub fn sort(mut self, fields: SortableFields) -> FindOptions {
        self.sort_by = Some(fields);
        self
    }

    pub fn sort_fields(&self) -> Option<&SortableFields> {
        self.sort_by.as_ref()
    }

    pub fn skip_count(&self) -> Option<u64> {
        self.skip
    }

    pub fn limit_count(&self) -> Option<u64> {
        self.limit
    }
}
