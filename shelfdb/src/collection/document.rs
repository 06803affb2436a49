use crate::common::{Value, DOC_CREATED_AT, DOC_ID, DOC_UPDATED_AT, RESERVED_FIELDS};
use crate::errors::{ErrorKind, ShelfError, ShelfResult};
use chrono::{DateTime, Utc};
use im::OrdMap;
use std::fmt::{Debug, Display};

/// Represents a document stored in a shelfdb collection.
///
/// A document is a schema-free map from field name to [Value]. Field names are plain
/// top-level keys; a key containing `.` is just a key, there is no path navigation.
///
/// Three fields are managed by the collection engine and are overwritten on insert
/// and update:
///
/// * `_id` - unique identifier assigned at insert, immutable afterwards.
/// * `createdAt` - timestamp assigned at insert, immutable afterwards.
/// * `updatedAt` - timestamp assigned at insert and refreshed on every update.
///
/// ## Persistent map
///
/// Fields live in an `im::OrdMap`, so cloning a document is O(1) and a mutated clone
/// shares structure with its origin. The engine clones documents freely when it hands
/// results back to callers.
#[derive(Clone, Eq, PartialEq, Default, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Document {
    data: OrdMap<String, Value>,
}

impl Document {
    /// Creates a new empty document.
    pub fn new() -> Self {
        Document {
            data: OrdMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Associates the specified [Value] with the specified key in this document.
    ///
    /// If the key already exists its value is replaced.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the key is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shelfdb::collection::Document;
    ///
    /// let mut doc = Document::new();
    /// doc.put("title", "Dune").unwrap();
    /// doc.put("pages", 412).unwrap();
    /// assert_eq!(doc.size(), 2);
    /// assert!(doc.put("", 1).is_err());
    /// ```
    pub fn put<T: Into<Value>>(&mut self, key: &str, value: T) -> ShelfResult<()> {
        if key.is_empty() {
            log::error!("Document does not support empty key");
            return Err(ShelfError::new(
                "Document does not support empty or blank key",
                ErrorKind::ValidationError,
            ));
        }

        self.data.insert(key.to_string(), value.into());
        Ok(())
    }

    /// Returns the value of a field, or `None` if the document has no such field.
    ///
    /// A field explicitly set to [Value::Null] is returned as `Some(&Value::Null)`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Removes a field, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.data.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Returns the field names in key order.
    pub fn fields(&self) -> Vec<String> {
        self.data.keys().cloned().collect()
    }

    /// Copies every field of `other` over this document, replacing existing values.
    pub fn merge(&mut self, other: &Document) {
        for (key, value) in other.data.iter() {
            self.data.insert(key.clone(), value.clone());
        }
    }

    /// Returns a copy of this document without the engine-managed fields.
    pub fn without_reserved_fields(&self) -> Document {
        let mut data = self.data.clone();
        for field in RESERVED_FIELDS {
            data.remove(field);
        }
        Document { data }
    }

    /// The document `_id`, if it has been assigned and is a string.
    pub fn id(&self) -> Option<&str> {
        self.get(DOC_ID).and_then(|v| v.as_str())
    }

    pub fn has_id(&self) -> bool {
        self.id().is_some()
    }

    /// The `createdAt` timestamp, if present.
    pub fn created_at(&self) -> Option<&DateTime<Utc>> {
        self.get(DOC_CREATED_AT).and_then(|v| v.as_timestamp())
    }

    /// The `updatedAt` timestamp, if present.
    pub fn updated_at(&self) -> Option<&DateTime<Utc>> {
        self.get(DOC_UPDATED_AT).and_then(|v| v.as_timestamp())
    }

    /// Iterates over `(field, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.data.iter()
    }

    // bypasses key validation; used for engine fields and filter conditions
    pub(crate) fn put_unchecked(&mut self, key: &str, value: Value) {
        self.data.insert(key.to_string(), value);
    }
}

impl Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "\"{}\": {}", key, value)?;
        }
        write!(f, "}}")
    }
}

impl IntoIterator for Document {
    type Item = (String, Value);
    type IntoIter = im::ordmap::ConsumingIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

/// Strips the quotes `stringify!` leaves around string-literal keys in `doc!`.
pub fn normalize(value: &str) -> String {
    let trimmed = value.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(trimmed)
        .to_string()
}

/// Creates a [Document] from key-value pairs.
///
/// Keys may be bare identifiers or string literals. Values may be any expression
/// convertible into a [Value], a nested `{ ... }` document or a `[ ... ]` array.
///
/// # Examples
///
/// ```rust
/// use shelfdb::doc;
///
/// let book = doc! {
///     "title": "Dune",
///     status: "reading",
///     "meta": { "pages": 412 },
///     "tags": ["sf", "classic"]
/// };
/// assert_eq!(book.size(), 4);
/// ```
#[macro_export]
macro_rules! doc {
    () => {
        $crate::collection::Document::new()
    };

    ({}) => {
        $crate::collection::Document::new()
    };

    ($($key:tt : $value:tt),* $(,)?) => {
        {
            let mut doc = $crate::collection::Document::new();
            $(
                doc.put(&$crate::collection::normalize(stringify!($key)), $crate::doc_value!($value))
                    .expect(&format!("Failed to put value {} in document", stringify!($value)));
            )*
            doc
        }
    };
}

/// Helper macro converting the value side of a `doc!` entry.
#[macro_export]
macro_rules! doc_value {
    ({ $($key:tt : $value:tt),* $(,)? }) => {
        $crate::common::Value::Document($crate::doc!{ $($key : $value),* })
    };

    ([ $($value:tt),* $(,)? ]) => {
        $crate::common::Value::Array(vec![$($crate::doc_value!($value)),*])
    };

    ($value:expr) => {
        $crate::common::Value::from($value)
    };
}
