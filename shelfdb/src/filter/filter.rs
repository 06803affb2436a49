use crate::collection::Document;
use crate::common::{Value, DOC_ID};
use std::fmt::{Debug, Display, Formatter};

/// An equality-conjunction query over document fields.
#[derive(Clone, Default, PartialEq)]
pub struct Filter {
    conditions: Document,
}

/// Creates a filter that matches every document.
pub fn all() -> Filter {
    Filter::default()
}

/// Creates a filter that matches the document with the given `_id`.
pub fn by_id(id: &str) -> Filter {
    Filter::default().with_condition(DOC_ID, Value::from(id))
}

impl Filter {
    pub fn new(conditions: Document) -> Self {
        Filter { conditions }
    }

    /// The `field -> expected value` pairs of this filter.
    pub fn conditions(&self) -> &Document {
        &self.conditions
    }

    /// Whether this filter has no conditions and thus matches everything.
    pub fn is_all(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Combines two filters. A field constrained by both keeps `other`'s value.
    pub fn and(mut self, other: Filter) -> Filter {
        self.conditions.merge(&other.conditions);
        self
    }

    /// Returns whether `document` satisfies every condition.
    pub fn apply(&self, document: &Document) -> bool {
        self.conditions
            .iter()
            .all(|(field, expected)| document.get(field) == Some(expected))
    }

    pub(crate) fn with_condition(mut self, field: &str, value: Value) -> Filter {
        self.conditions.put_unchecked(field, value);
        self
    }
}

impl From<Document> for Filter {
    fn from(conditions: Document) -> Self {
        Filter::new(conditions)
    }
}

impl Display for Filter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_all() {
            return write!(f, "(all)");
        }
        write!(f, "(")?;
        for (i, (field, value)) in self.conditions.iter().enumerate() {
            if i > 0 {
                write!(f, " && ")?;
            }
            write!(f, "{} == {}", field, value)?;
        }
        write!(f, ")")
    }
}

impl Debug for Filter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}
