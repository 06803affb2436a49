use shelfdb::doc;
use shelfdb::filter::{all, by_id, field};
use shelfdb_int_test::test_util::{cleanup, create_book_docs, create_test_context, run_test, titles};

#[test]
fn test_delete_one() {
    run_test(
        create_test_context,
        |ctx| {
            let collection = ctx.db().collection("books")?;
            collection.insert_many(create_book_docs())?;

            let result = collection.delete_one(field("status").eq("reading"))?;
            assert_eq!(result.deleted_count(), 1);
            assert_eq!(titles(&collection.find(all())?), vec!["A", "E", "B", "D"]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_delete_one_by_id() {
    run_test(
        create_test_context,
        |ctx| {
            let collection = ctx.db().collection("books")?;
            let inserted = collection.insert_many(create_book_docs())?;
            let id = inserted[2].id().unwrap();

            assert_eq!(collection.delete_one(by_id(id))?.deleted_count(), 1);
            assert!(collection.find_by_id(id)?.is_none());
            assert_eq!(collection.delete_one(by_id(id))?.deleted_count(), 0);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_delete_many_removes_all_and_only_matches() {
    run_test(
        create_test_context,
        |ctx| {
            let collection = ctx.db().collection("books")?;
            collection.insert_many(create_book_docs())?;
            let before = collection.count_documents(all())?;

            let result = collection.delete_many(field("status").eq("reading"))?;
            assert_eq!(result.deleted_count(), 3);
            assert_eq!(collection.count_documents(all())?, before - result.deleted_count());
            assert_eq!(collection.count_documents(field("status").eq("reading"))?, 0);
            assert_eq!(titles(&collection.find(all())?), vec!["A", "B"]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_delete_without_match() {
    run_test(
        create_test_context,
        |ctx| {
            let collection = ctx.db().collection("test")?;
            collection.insert_one(doc! { "n": 1 })?;
            assert_eq!(collection.delete_many(field("n").eq(2))?.deleted_count(), 0);
            assert_eq!(collection.delete_one(field("n").eq(2))?.deleted_count(), 0);
            assert_eq!(collection.count_documents(all())?, 1);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_delete_many_all() {
    run_test(
        create_test_context,
        |ctx| {
            let collection = ctx.db().collection("books")?;
            collection.insert_many(create_book_docs())?;
            assert_eq!(collection.delete_many(all())?.deleted_count(), 5);
            assert_eq!(collection.count_documents(all())?, 0);
            assert!(collection.exists()?);
            Ok(())
        },
        cleanup,
    )
}
