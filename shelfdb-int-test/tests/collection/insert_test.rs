use shelfdb::collection::ObjectIdGenerator;
use shelfdb::common::Value;
use shelfdb::doc;
use shelfdb::filter::all;
use shelfdb_int_test::test_util::{cleanup, create_test_context, insert_test_documents, run_test};
use std::collections::HashSet;

#[test]
fn test_insert_one_stamps_engine_fields() {
    run_test(
        create_test_context,
        |ctx| {
            let collection = ctx.db().collection("test")?;
            let doc = collection.insert_one(doc! { "first_name": "fn1" })?;

            let id = doc.id().unwrap();
            assert!(!id.is_empty());
            assert!(ObjectIdGenerator::is_valid(id));
            assert!(doc.created_at().is_some());
            assert_eq!(doc.created_at(), doc.updated_at());
            assert_eq!(doc.get("first_name"), Some(&Value::from("fn1")));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_insert_replaces_caller_engine_fields() {
    run_test(
        create_test_context,
        |ctx| {
            let collection = ctx.db().collection("test")?;
            let doc = collection.insert_one(doc! {
                "_id": "my-id",
                "createdAt": "long ago",
                "updatedAt": 42,
                "first_name": "fn1"
            })?;

            assert_ne!(doc.id(), Some("my-id"));
            assert!(doc.created_at().is_some());
            assert!(doc.updated_at().is_some());
            assert!(collection.find_by_id("my-id")?.is_none());
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_insert_many_keeps_order_and_count() {
    run_test(
        create_test_context,
        |ctx| {
            let collection = ctx.db().collection("test")?;
            let inserted = insert_test_documents(&collection)?;
            assert_eq!(inserted.len(), 3);

            let found = collection.find(all())?;
            assert_eq!(found, inserted);

            let ids: HashSet<&str> = found.iter().filter_map(|d| d.id()).collect();
            assert_eq!(ids.len(), 3);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_all_after_n_inserts() {
    run_test(
        create_test_context,
        |ctx| {
            let collection = ctx.db().collection("test")?;
            let mut inserted = Vec::new();
            for i in 0..25 {
                inserted.push(collection.insert_one(doc! { "seq": i })?);
            }

            let found = collection.find(all())?;
            assert_eq!(found.len(), 25);
            for doc in &inserted {
                assert_eq!(found.iter().filter(|d| d.id() == doc.id()).count(), 1);
            }
            assert_eq!(collection.count_documents(all())?, 25);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_insert_many_empty_creates_nothing() {
    run_test(
        create_test_context,
        |ctx| {
            let collection = ctx.db().collection("test")?;
            assert!(collection.insert_many(vec![])?.is_empty());
            assert!(!collection.exists()?);
            assert!(ctx.db().list_collections()?.is_empty());
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_insert_nested_values_round_trip() {
    run_test(
        create_test_context,
        |ctx| {
            let collection = ctx.db().collection("test")?;
            let doc = collection.insert_one(doc! {
                "title": "Dune",
                "meta": { "pages": 412, "isbn": "0441013597" },
                "tags": ["sf", "classic"],
                "rating": ()
            })?;

            let found = collection.find_by_id(doc.id().unwrap())?.unwrap();
            assert_eq!(found, doc);
            assert_eq!(found.get("rating"), Some(&Value::Null));
            let meta = found.get("meta").and_then(|v| v.as_document()).unwrap();
            assert_eq!(meta.get("pages"), Some(&Value::from(412)));
            Ok(())
        },
        cleanup,
    )
}
