use crate::common::Value;

use super::Filter;

/// Creates a fluent filter builder for the specified field name.
///
/// ```rust
/// use shelfdb::filter::field;
///
/// let filter = field("status").eq("reading").and(field("rating").eq(5));
/// assert_eq!(filter.conditions().size(), 2);
/// ```
pub fn field(field_name: &str) -> FluentFilter {
    FluentFilter {
        field_name: field_name.to_string(),
    }
}

/// A builder for a condition on a single field.
pub struct FluentFilter {
    field_name: String,
}

impl FluentFilter {
    /// Creates a filter that matches documents where the field equals the specified value.
    #[inline]
    pub fn eq<T: Into<Value>>(self, value: T) -> Filter {
        Filter::default().with_condition(&self.field_name, value.into())
    }
}
