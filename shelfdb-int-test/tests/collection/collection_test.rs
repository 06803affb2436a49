use shelfdb::common::Value;
use shelfdb::doc;
use shelfdb::filter::{all, field};
use shelfdb::store::KeyValueStoreProvider;
use shelfdb_int_test::test_util::{cleanup, create_test_context, run_test, titles};

#[test]
fn test_reading_status_scenario() {
    run_test(
        create_test_context,
        |ctx| {
            let books = ctx.db().collection("books")?;
            books.insert_one(doc! { "title": "A", "status": "reading" })?;
            books.insert_one(doc! { "title": "B", "status": "completed" })?;
            books.insert_one(doc! { "title": "C", "status": "reading" })?;

            let mut reading = titles(&books.find(field("status").eq("reading"))?);
            reading.sort();
            assert_eq!(reading, vec!["A", "C"]);
            assert_eq!(books.count_documents(field("status").eq("completed"))?, 1);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_collection_is_created_on_first_write() {
    run_test(
        create_test_context,
        |ctx| {
            let db = ctx.db();
            let books = db.collection("books")?;
            assert!(!books.exists()?);
            assert!(!db.has_collection("books")?);

            books.insert_one(doc! { "title": "A" })?;
            assert!(books.exists()?);
            assert!(db.has_collection("books")?);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_persisted_layout() {
    run_test(
        create_test_context,
        |ctx| {
            let db = ctx.db();
            let books = db.collection("books")?;
            let inserted = books.insert_many(vec![doc! { "title": "A" }, doc! { "title": "B" }])?;

            let key = format!("db_{}_books", db.name());
            assert_eq!(books.storage_key(), key);

            let raw = ctx.store().get(&key)?.unwrap();
            let expected: Vec<Value> = inserted.into_iter().map(Value::Document).collect();
            assert_eq!(raw, Value::Array(expected));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_drop_twice() {
    run_test(
        create_test_context,
        |ctx| {
            let books = ctx.db().collection("books")?;
            books.insert_one(doc! { "title": "A" })?;

            books.drop()?;
            assert_eq!(books.count_documents(all())?, 0);
            books.drop()?;
            assert_eq!(books.count_documents(all())?, 0);
            assert!(books.find(all())?.is_empty());
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_handle_usable_after_drop() {
    run_test(
        create_test_context,
        |ctx| {
            let books = ctx.db().collection("books")?;
            books.insert_one(doc! { "title": "A" })?;
            books.drop()?;

            books.insert_one(doc! { "title": "B" })?;
            assert_eq!(titles(&books.find(all())?), vec!["B"]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_collections_are_isolated() {
    run_test(
        create_test_context,
        |ctx| {
            let db = ctx.db();
            let books = db.collection("books")?;
            let users = db.collection("users")?;

            books.insert_one(doc! { "title": "A" })?;
            users.insert_one(doc! { "name": "ann" })?;
            users.insert_one(doc! { "name": "bob" })?;

            assert_eq!(books.count_documents(all())?, 1);
            assert_eq!(users.count_documents(all())?, 2);

            books.drop()?;
            assert_eq!(users.count_documents(all())?, 2);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_collection_name_with_separator() {
    run_test(
        create_test_context,
        |ctx| {
            let db = ctx.db();
            let logs = db.collection("reading_logs")?;
            logs.insert_one(doc! { "minutes": 30 })?;

            assert_eq!(logs.name(), "reading_logs");
            assert_eq!(db.list_collections()?, vec!["reading_logs"]);
            Ok(())
        },
        cleanup,
    )
}
