/// The outcome of an update.
///
/// | situation                    | matched | modified | upserted_id |
/// |------------------------------|---------|----------|-------------|
/// | nothing matched, no upsert   | 0       | 0        | `None`      |
/// | `n` documents matched        | n       | n        | `None`      |
/// | nothing matched, upserted    | 1       | 1        | `Some(id)`  |
///
/// An upserted document is reported as matched and modified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateResult {
    matched_count: u64,
    modified_count: u64,
    upserted_id: Option<String>,
}

impl UpdateResult {
    pub fn new(matched_count: u64, modified_count: u64, upserted_id: Option<String>) -> Self {
        Self {
            matched_count,
            modified_count,
            upserted_id,
        }
    }

    pub(crate) fn matched(count: u64) -> Self {
        Self::new(count, count, None)
    }

    pub(crate) fn upserted(id: String) -> Self {
        Self::new(1, 1, Some(id))
    }

    pub fn matched_count(&self) -> u64 {
        self.matched_count
    }

    pub fn modified_count(&self) -> u64 {
        self.modified_count
    }

    /// The `_id` of the document inserted by an upsert, if one was inserted.
    pub fn upserted_id(&self) -> Option<&str> {
        self.upserted_id.as_deref()
    }
}

/// The outcome of a delete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteResult {
    deleted_count: u64,
}

impl DeleteResult {
    pub fn new(deleted_count: u64) -> Self {
        Self { deleted_count }
    }

    pub fn deleted_count(&self) -> u64 {
        self.deleted_count
    }
}
