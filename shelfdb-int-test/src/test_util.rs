use chrono::{DateTime, Utc};
use shelfdb::collection::{Document, DocumentCollection};
use shelfdb::doc;
use shelfdb::errors::ShelfResult;
use shelfdb::store::memory::InMemoryStore;
use shelfdb::Database;
use std::backtrace::Backtrace;
use std::time::Instant;

/// Runs `test` against the context built by `before`, then `after`.
///
/// `after` runs even when the test fails. Failures and panics are reported with the
/// elapsed time before the harness panics.
pub fn run_test<T, B, A>(before: B, test: T, after: A)
where
    T: Fn(TestContext) -> ShelfResult<()> + std::panic::UnwindSafe + std::panic::RefUnwindSafe,
    B: Fn() -> ShelfResult<TestContext> + std::panic::UnwindSafe + std::panic::RefUnwindSafe,
    A: Fn(TestContext) -> ShelfResult<()> + std::panic::UnwindSafe + std::panic::RefUnwindSafe,
{
    let start_time = Instant::now();

    let result = std::panic::catch_unwind(|| {
        let backtrace = Backtrace::capture();
        match before() {
            Ok(ctx) => match test(ctx.clone()) {
                Ok(_) => after(ctx)
                    .map_err(|e| (format!("After run failed: {:?}", e), backtrace.to_string())),
                Err(e) => {
                    let _ = after(ctx);
                    Err((format!("Test failed: {:?}", e), backtrace.to_string()))
                }
            },
            Err(e) => Err((format!("Before run failed: {:?}", e), backtrace.to_string())),
        }
    });

    let elapsed = start_time.elapsed();
    let error = match result {
        Ok(Ok(_)) => return,
        Ok(Err((e, bt))) => {
            if !bt.is_empty() && !bt.contains("disabled") {
                eprintln!("\nBacktrace:\n{}", bt);
            }
            e
        }
        Err(panic_err) => {
            if let Some(s) = panic_err.downcast_ref::<&str>() {
                format!("Panic: {}", s)
            } else if let Some(s) = panic_err.downcast_ref::<String>() {
                format!("Panic: {}", s)
            } else {
                "Panic: unknown payload".to_string()
            }
        }
    };

    eprintln!("\n==================== TEST FAILED ====================");
    eprintln!("Failed after {:?}: {}", elapsed, error);
    eprintln!("=====================================================\n");
    panic!("Test failed: {}", error);
}

/// An isolated database over its own in-memory store.
#[derive(Clone)]
pub struct TestContext {
    db: Database,
    store: InMemoryStore,
}

impl TestContext {
    pub fn new(db: Database, store: InMemoryStore) -> Self {
        Self { db, store }
    }

    pub fn db(&self) -> Database {
        self.db.clone()
    }

    /// The substrate under [db](Self::db), for inspecting raw entries or closing it.
    pub fn store(&self) -> InMemoryStore {
        self.store.clone()
    }
}

/// A database name that is unique per call and free of `_`.
pub fn random_database_name() -> String {
    format!("test{}", uuid::Uuid::new_v4().simple())
}

pub fn create_test_context() -> ShelfResult<TestContext> {
    let store = InMemoryStore::new();
    let db = Database::builder()
        .name(&random_database_name())
        .store(store.clone())
        .open()?;
    Ok(TestContext::new(db, store))
}

pub fn cleanup(ctx: TestContext) -> ShelfResult<()> {
    // a test may have closed the store on purpose
    if ctx.store().is_closed() {
        return Ok(());
    }
    log::debug!("Dropping test database {}", ctx.db().name());
    ctx.db().drop()
}

pub fn parse_timestamp(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_default()
}

pub fn create_test_docs() -> Vec<Document> {
    let doc1 = doc! {
        first_name: "fn1",
        last_name: "ln1",
        birth_day: (parse_timestamp("2012-07-01T02:15:22+02:00")),
        arr: [1, 2, 3],
        body: "a quick brown fox jump over the lazy dog",
        rank: 2,
    };

    let doc2 = doc! {
        first_name: "fn2",
        last_name: "ln2",
        birth_day: (parse_timestamp("2010-06-12T12:05:35+05:30")),
        arr: [3, 4, 3],
        body: "quick hello world from shelfdb",
        rank: 3,
    };

    let doc3 = doc! {
        first_name: "fn3",
        last_name: "ln2",
        birth_day: (parse_timestamp("2014-04-17T22:25:44-04:00")),
        arr: [10, 12, 14],
        body: "Lorem ipsum dolor sit amet",
        rank: 1,
    };

    vec![doc1, doc2, doc3]
}

pub fn insert_test_documents(collection: &DocumentCollection) -> ShelfResult<Vec<Document>> {
    collection.insert_many(create_test_docs())
}

/// The five books of the reading-list fixtures, in insertion order C, A, E, B, D.
pub fn create_book_docs() -> Vec<Document> {
    vec![
        doc! { "title": "C", "status": "reading", "rank": 3, "genre": "fantasy" },
        doc! { "title": "A", "status": "completed", "rank": 1, "genre": "fiction" },
        doc! { "title": "E", "status": "reading", "rank": 5, "genre": "fiction" },
        doc! { "title": "B", "status": "completed", "rank": 2, "genre": "history" },
        doc! { "title": "D", "status": "reading", "rank": 4, "genre": "fantasy" },
    ]
}

pub fn titles(documents: &[Document]) -> Vec<String> {
    documents
        .iter()
        .filter_map(|d| d.get("title").and_then(|v| v.as_str()).map(str::to_string))
        .collect()
}
