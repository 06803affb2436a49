use crate::errors::{ErrorKind, ShelfError, ShelfResult};

/// Specifies the direction for sorting documents.
///
/// Converts from the MongoDB-style numeric direction: `1` is ascending, `-1` is
/// descending.
///
/// ```rust
/// use shelfdb::common::SortOrder;
///
/// assert_eq!(SortOrder::try_from(1).unwrap(), SortOrder::Ascending);
/// assert_eq!(SortOrder::try_from(-1).unwrap(), SortOrder::Descending);
/// assert!(SortOrder::try_from(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Sort in ascending order (smallest to largest, A-Z, oldest to newest)
    Ascending,
    /// Sort in descending order (largest to smallest, Z-A, newest to oldest)
    Descending,
}

impl SortOrder {
    /// The numeric direction, `1` or `-1`.
    pub fn direction(&self) -> i32 {
        match self {
            SortOrder::Ascending => 1,
            SortOrder::Descending => -1,
        }
    }
}

impl TryFrom<i32> for SortOrder {
    type Error = ShelfError;

    fn try_from(direction: i32) -> ShelfResult<Self> {
        match direction {
            1 => Ok(SortOrder::Ascending),
            -1 => Ok(SortOrder::Descending),
            other => {
                log::error!("Invalid sort direction {}", other);
                Err(ShelfError::new(
                    &format!("Invalid sort direction {}, expected 1 or -1", other),
                    ErrorKind::ValidationError,
                ))
            }
        }
    }
}

/// An ordered list of `(field, order)` pairs. Later pairs break ties left by earlier ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SortableFields {
    sorting_order: Vec<(String, SortOrder)>,
}

impl SortableFields {
    pub fn new() -> SortableFields {
        SortableFields {
            sorting_order: Vec::new(),
        }
    }

    /// Builds a sort order from MongoDB-style `(field, ±1)` pairs.
    pub fn with_directions(pairs: &[(&str, i32)]) -> ShelfResult<SortableFields> {
        let mut fields = SortableFields::new();
        for (field_name, direction) in pairs {
            fields = fields.add_sorted_field(field_name.to_string(), SortOrder::try_from(*direction)?);
        }
        Ok(fields)
    }

    #[inline]
    pub fn add_field(self, field_name: String) -> SortableFields {
        self.add_sorted_field(field_name, SortOrder::Ascending)
    }

    #[inline]
    pub fn add_sorted_field(mut self, field_name: String, sort_order: SortOrder) -> SortableFields {
        self.sorting_order.push((field_name, sort_order));
        self
    }

    #[inline]
    pub fn sorting_order(&self) -> &[(String, SortOrder)] {
        &self.sorting_order
    }

    pub fn field_names(&self) -> Vec<String> {
        self.sorting_order.iter().map(|(name, _)| name.clone()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.sorting_order.is_empty()
    }
}
