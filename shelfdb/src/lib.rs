//! # shelfdb - embedded document store over a key-value substrate
//!
//! shelfdb offers a MongoDB-style collection API (insert, find with filter, sort and
//! pagination, update with upsert, delete, count) on top of any store that can get,
//! set, delete and list string keys.
//!
//! ## Key Features
//!
//! - **Embedded**: runs in-process, no server
//! - **Schema-free documents**: nested documents and arrays, engine-managed `_id`,
//!   `createdAt` and `updatedAt`
//! - **Pluggable substrate**: implement [`store::KeyValueStoreProvider`] or use the
//!   bundled in-memory store
//! - **Safe concurrent writers**: per-collection locks serialize load-compute-store
//!   sequences, so updates are not lost
//!
//! ## Quick Start
//!
//! ```rust
//! use shelfdb::{doc, Database};
//! use shelfdb::collection::{order_by, upsert};
//! use shelfdb::common::SortOrder;
//! use shelfdb::filter::{all, field};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::builder().name("library").open()?;
//! let books = db.collection("books")?;
//!
//! books.insert_one(doc! { "title": "Dune", "status": "reading", "rank": 2 })?;
//! books.insert_one(doc! { "title": "Emma", "status": "completed", "rank": 1 })?;
//!
//! let ranked = books.find_with_options(all(), order_by("rank", SortOrder::Ascending))?;
//! assert_eq!(ranked[0].get("title").and_then(|v| v.as_str()), Some("Emma"));
//!
//! books.update_one(field("title").eq("Dune"), &doc! { "status": "completed" })?;
//! assert_eq!(books.count_documents(field("status").eq("completed"))?, 2);
//!
//! books.update_one_with_options(field("title").eq("Ulysses"), &doc! { "status": "wishlist" }, upsert())?;
//! assert_eq!(books.count_documents(all())?, 3);
//! # Ok(())
//! # }
//! ```
//!
//! ## Design Pattern
//!
//! [`Database`] follows the PIMPL pattern: the public handle wraps an
//! `Arc<DatabaseInner>`, so clones are cheap and share the same lock registry.
//!
//! ## Module Organization
//!
//! - [`collection`] - documents, the collection engine, find and update options
//! - [`common`] - values, sort orders, locks and constants
//! - [`errors`] - error types and result definitions
//! - [`filter`] - equality filters
//! - [`store`] - the key-value substrate contract and the in-memory store
//! - [`database`] - the collection registry
//! - [`database_builder`] - builder for opening a database
//! - [`database_config`] - database configuration

pub mod collection;
pub mod common;
pub mod database;
pub mod database_builder;
pub mod database_config;
pub mod errors;
pub mod filter;
pub mod store;

pub use database::Database;
pub use database_builder::DatabaseBuilder;
pub use database_config::DatabaseConfig;
