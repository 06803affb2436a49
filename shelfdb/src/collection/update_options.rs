/// Options for controlling update operations on documents.
///
/// With `upsert` set, an update that matches nothing inserts a new document built
/// from the filter's fields merged with the update's fields.
///
/// # Examples
///
/// ```rust
/// use shelfdb::collection::{upsert, UpdateOptions};
///
/// assert!(upsert().is_upsert());
/// assert!(!UpdateOptions::default().is_upsert());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateOptions {
    upsert: bool,
}

impl UpdateOptions {
    pub fn new(upsert: bool) -> Self {
        Self { upsert }
    }

    /// Returns whether to insert if no matching documents are found.
    pub fn is_upsert(&self) -> bool {
        self.upsert
    }
}

/// Creates `UpdateOptions` with upsert behavior.
pub fn upsert() -> UpdateOptions {
    UpdateOptions::new(true)
}
