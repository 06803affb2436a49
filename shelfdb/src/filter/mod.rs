//! Equality filters for selecting documents from collections.
//!
//! A [`Filter`] is a conjunction of `field == value` conditions. A document matches
//! when it has every filtered field and each value is equal under [`Value`] equality
//! (integers and floats compare numerically). A field absent from the document never
//! matches, not even a `null` condition. There are no range, existence or pattern
//! operators.
//!
//! # Examples
//!
//! ```rust
//! use shelfdb::doc;
//! use shelfdb::filter::{all, field, Filter};
//!
//! let reading = field("status").eq("reading");
//! let rated = field("status").eq("completed").and(field("rating").eq(5));
//! let from_doc = Filter::from(doc! { "status": "reading" });
//!
//! assert_eq!(reading, from_doc);
//! assert!(all().is_all());
//! ```
//!
//! [`Value`]: crate::common::Value

mod filter;
mod fluent;

pub use filter::*;
pub use fluent::*;
