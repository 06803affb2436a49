use shelfdb::doc;
use shelfdb::errors::ErrorKind;
use shelfdb::filter::field;
use shelfdb_int_test::test_util::{cleanup, create_test_context, run_test};

#[test]
fn test_create_index_is_accepted() {
    run_test(
        create_test_context,
        |ctx| {
            let collection = ctx.db().collection("users")?;
            collection.create_index(vec!["email"])?;
            collection.create_index(vec!["userId", "date"])?;
            assert!(!collection.exists()?);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_create_index_does_not_enforce_uniqueness() {
    run_test(
        create_test_context,
        |ctx| {
            let collection = ctx.db().collection("users")?;
            collection.create_index(vec!["email"])?;

            collection.insert_one(doc! { "email": "a@example.com" })?;
            collection.insert_one(doc! { "email": "a@example.com" })?;
            assert_eq!(collection.count_documents(field("email").eq("a@example.com"))?, 2);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_create_index_rejects_empty_fields() {
    run_test(
        create_test_context,
        |ctx| {
            let collection = ctx.db().collection("users")?;
            let err = collection.create_index(vec![]).unwrap_err();
            assert_eq!(err.kind(), &ErrorKind::ValidationError);
            assert!(collection.create_index(vec![""]).is_err());
            Ok(())
        },
        cleanup,
    )
}
