use shelfdb::collection::{limit_to, order_by, skip_by, FindOptions};
use shelfdb::common::{SortOrder, SortableFields, Value};
use shelfdb::doc;
use shelfdb::filter::{all, field, Filter};
use shelfdb_int_test::test_util::{
    cleanup, create_book_docs, create_test_context, insert_test_documents, run_test, titles,
};

#[test]
fn test_find_by_equality() {
    run_test(
        create_test_context,
        |ctx| {
            let collection = ctx.db().collection("test")?;
            insert_test_documents(&collection)?;

            let found = collection.find(field("last_name").eq("ln2"))?;
            assert_eq!(found.len(), 2);

            let found = collection.find(field("last_name").eq("ln2").and(field("first_name").eq("fn3")))?;
            assert_eq!(found.len(), 1);
            assert_eq!(found[0].get("rank"), Some(&Value::from(1)));

            assert!(collection.find(field("last_name").eq("nobody"))?.is_empty());
            assert!(collection.find(field("no_such_field").eq("x"))?.is_empty());
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_is_exact_equality_subset() {
    run_test(
        create_test_context,
        |ctx| {
            let collection = ctx.db().collection("books")?;
            collection.insert_many(create_book_docs())?;

            let filter = field("status").eq("reading").and(field("genre").eq("fantasy"));
            let matched = collection.find(filter.clone())?;
            let everything = collection.find(all())?;

            for doc in &everything {
                let in_result = matched.iter().any(|d| d.id() == doc.id());
                let satisfies = doc.get("status") == Some(&Value::from("reading"))
                    && doc.get("genre") == Some(&Value::from("fantasy"));
                assert_eq!(in_result, satisfies);
                assert_eq!(filter.apply(doc), satisfies);
            }
            assert_eq!(titles(&matched), vec!["C", "D"]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_missing_field_never_matches_null() {
    run_test(
        create_test_context,
        |ctx| {
            let collection = ctx.db().collection("test")?;
            collection.insert_many(vec![doc! { "a": 1 }, doc! { "a": 2, "b": () }])?;

            let found = collection.find(field("b").eq(Value::Null))?;
            assert_eq!(found.len(), 1);
            assert_eq!(found[0].get("a"), Some(&Value::from(2)));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_numeric_equality_across_int_and_float() {
    run_test(
        create_test_context,
        |ctx| {
            let collection = ctx.db().collection("test")?;
            collection.insert_many(vec![doc! { "n": 5 }, doc! { "n": 5.0 }, doc! { "n": 5.5 }])?;
            assert_eq!(collection.count_documents(field("n").eq(5))?, 2);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_nested_values_compare_structurally() {
    run_test(
        create_test_context,
        |ctx| {
            let collection = ctx.db().collection("test")?;
            collection.insert_many(vec![
                doc! { "tags": ["a", "b"], "meta": { "x": 1 } },
                doc! { "tags": ["b", "a"], "meta": { "x": 2 } },
            ])?;

            let tags = Value::Array(vec![Value::from("a"), Value::from("b")]);
            assert_eq!(collection.count_documents(field("tags").eq(tags))?, 1);
            assert_eq!(collection.count_documents(field("tags").eq("a"))?, 0);
            assert_eq!(collection.count_documents(Filter::from(doc! { "meta": { "x": 2 } }))?, 1);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_sort_ascending_is_non_decreasing() {
    run_test(
        create_test_context,
        |ctx| {
            let collection = ctx.db().collection("test")?;
            collection.insert_many(vec![
                doc! { "f": 3 },
                doc! { "f": (-1) },
                doc! { "f": 2.5 },
                doc! { "f": 10 },
                doc! { "f": 0 },
                doc! { "f": 2 },
            ])?;

            let found = collection.find_with_options(all(), order_by("f", SortOrder::Ascending))?;
            let values: Vec<&Value> = found.iter().filter_map(|d| d.get("f")).collect();
            assert_eq!(values.len(), 6);
            assert!(values.windows(2).all(|w| w[0] <= w[1]));
            assert_eq!(values[0], &Value::from(-1));
            assert_eq!(values[5], &Value::from(10));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_sort_descending() {
    run_test(
        create_test_context,
        |ctx| {
            let collection = ctx.db().collection("books")?;
            collection.insert_many(create_book_docs())?;

            let found = collection.find_with_options(all(), order_by("rank", SortOrder::Descending))?;
            assert_eq!(titles(&found), vec!["E", "D", "C", "B", "A"]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_sort_on_multiple_fields() {
    run_test(
        create_test_context,
        |ctx| {
            let collection = ctx.db().collection("books")?;
            collection.insert_many(create_book_docs())?;

            let sort = SortableFields::with_directions(&[("status", 1), ("rank", -1)])?;
            let found = collection.find_with_options(all(), FindOptions::new().sort(sort))?;
            assert_eq!(titles(&found), vec!["B", "A", "E", "D", "C"]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_sort_is_stable() {
    run_test(
        create_test_context,
        |ctx| {
            let collection = ctx.db().collection("books")?;
            collection.insert_many(create_book_docs())?;

            let found = collection.find_with_options(all(), order_by("status", SortOrder::Ascending))?;
            assert_eq!(titles(&found), vec!["A", "B", "C", "E", "D"]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_missing_sort_field_sorts_first() {
    run_test(
        create_test_context,
        |ctx| {
            let collection = ctx.db().collection("test")?;
            collection.insert_many(vec![
                doc! { "title": "x", "rank": 2 },
                doc! { "title": "y" },
                doc! { "title": "z", "rank": 1 },
            ])?;

            let found = collection.find_with_options(all(), order_by("rank", SortOrder::Ascending))?;
            assert_eq!(titles(&found), vec!["y", "z", "x"]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_skip_and_limit_after_sort() {
    run_test(
        create_test_context,
        |ctx| {
            let collection = ctx.db().collection("books")?;
            collection.insert_many(create_book_docs())?;

            let options = order_by("rank", SortOrder::Ascending).skip(2).limit(2);
            let found = collection.find_with_options(all(), options)?;
            assert_eq!(titles(&found), vec!["C", "D"]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_skip_and_limit_edges() {
    run_test(
        create_test_context,
        |ctx| {
            let collection = ctx.db().collection("books")?;
            collection.insert_many(create_book_docs())?;

            assert_eq!(collection.find_with_options(all(), skip_by(10))?.len(), 0);
            assert_eq!(collection.find_with_options(all(), skip_by(3))?.len(), 2);
            assert_eq!(collection.find_with_options(all(), limit_to(0))?.len(), 5);
            assert_eq!(collection.find_with_options(all(), limit_to(100))?.len(), 5);
            assert_eq!(titles(&collection.find_with_options(all(), limit_to(2))?), vec!["C", "A"]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_one_and_find_by_id() {
    run_test(
        create_test_context,
        |ctx| {
            let collection = ctx.db().collection("books")?;
            let inserted = collection.insert_many(create_book_docs())?;

            let first = collection.find_one(field("status").eq("reading"))?.unwrap();
            assert_eq!(first.get("title"), Some(&Value::from("C")));

            let top = collection
                .find_one_with_options(all(), order_by("rank", SortOrder::Descending))?
                .unwrap();
            assert_eq!(top.get("title"), Some(&Value::from("E")));

            let by_id = collection.find_by_id(inserted[3].id().unwrap())?.unwrap();
            assert_eq!(by_id, inserted[3]);

            assert!(collection.find_one(field("status").eq("lost"))?.is_none());
            assert!(collection.find_by_id("000000000000000000000000")?.is_none());
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_results_do_not_alias_storage() {
    run_test(
        create_test_context,
        |ctx| {
            let collection = ctx.db().collection("test")?;
            collection.insert_one(doc! { "n": 1 })?;

            let mut found = collection.find(all())?;
            found[0].put("n", 99)?;

            assert_eq!(collection.count_documents(field("n").eq(1))?, 1);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_on_unknown_collection_is_empty() {
    run_test(
        create_test_context,
        |ctx| {
            let collection = ctx.db().collection("never-written")?;
            assert!(collection.find(all())?.is_empty());
            assert!(collection.find_one(all())?.is_none());
            assert_eq!(collection.count_documents(all())?, 0);
            Ok(())
        },
        cleanup,
    )
}
