//! Documents and the collection engine.
//!
//! A [Document] is a schema-free map from field name to [crate::common::Value]. A
//! [DocumentCollection] stores an ordered sequence of documents under one key-value
//! entry and offers a MongoDB-style API over it.
//!
//! ```rust
//! use shelfdb::{doc, Database};
//! use shelfdb::collection::{order_by, upsert};
//! use shelfdb::common::SortOrder;
//! use shelfdb::filter::field;
//!
//! let db = Database::builder().name("library").open().unwrap();
//! let books = db.collection("books").unwrap();
//!
//! books.insert_many(vec![
//!     doc! { "title": "A", "status": "reading", "rank": 2 },
//!     doc! { "title": "B", "status": "completed", "rank": 1 },
//! ]).unwrap();
//!
//! // Query
//! let sorted = books.find_with_options(
//!     field("status").eq("reading"),
//!     order_by("rank", SortOrder::Ascending),
//! ).unwrap();
//! assert_eq!(sorted.len(), 1);
//!
//! // Upsert
//! let result = books.update_one_with_options(
//!     field("title").eq("C"),
//!     &doc! { "status": "wishlist" },
//!     upsert(),
//! ).unwrap();
//! assert!(result.upserted_id().is_some());
//! ```
//!
//! # Engine fields
//!
//! - `_id` - assigned on insert, immutable
//! - `createdAt` - assigned on insert, immutable
//! - `updatedAt` - assigned on insert, refreshed by every update

mod document;
mod document_collection;
mod find_options;
mod object_id;
pub(crate) mod operation;
mod update_options;

pub use document::*;
pub use document_collection::*;
pub use find_options::*;
pub use object_id::*;
pub use operation::{DeleteResult, UpdateResult};
pub use update_options::*;
