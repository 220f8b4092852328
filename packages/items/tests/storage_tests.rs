// ABOUTME: Integration tests for the SQLite todo item store
// ABOUTME: Exercises create read-back, update row counting, and list filtering/ordering

use chrono::{TimeZone, Utc};
use sqlx::SqlitePool;
use todo_items::{SqliteStore, Storer, TodoError, TodoItem};

/// Helper to create an in-memory database for testing
async fn create_test_db() -> SqlitePool {
    let pool = SqlitePool::connect("sqlite::memory:").await.unwrap();

    sqlx::query(
        r#"
        CREATE TABLE todo_item (
            id TEXT PRIMARY KEY,
            summary TEXT NOT NULL,
            date_created TEXT NOT NULL DEFAULT (datetime('now')),
            date_updated TEXT NOT NULL DEFAULT (datetime('now')),
            deleted BOOLEAN NOT NULL DEFAULT FALSE,
            completed BOOLEAN NOT NULL DEFAULT FALSE
        )
        "#,
    )
    .execute(&pool)
    .await
    .unwrap();

    pool
}

fn new_item(summary: &str) -> TodoItem {
    TodoItem {
        summary: Some(summary.to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn create_assigns_id_timestamps_and_defaults() {
    let store = SqliteStore::new(create_test_db().await);

    let created = store.create(new_item("buy milk")).await.unwrap();

    assert!(created.id.is_some());
    assert!(!created.id.as_deref().unwrap().is_empty());
    assert!(created.created.is_some());
    assert!(created.updated.is_some());
    assert_eq!(created.completed, Some(false));
    assert_eq!(created.deleted, Some(false));
    assert_eq!(created.summary.as_deref(), Some("buy milk"));
}

#[tokio::test]
async fn create_without_summary_is_unknown_error() {
    let store = SqliteStore::new(create_test_db().await);

    let err = store.create(TodoItem::default()).await.unwrap_err();

    // NOT NULL violation is masked as an unclassified storage failure
    assert_eq!(err, TodoError::Unknown);
}

#[tokio::test]
async fn concurrent_creates_get_distinct_ids() {
    let pool = create_test_db().await;
    let store = SqliteStore::new(pool);

    let a = store.create(new_item("first")).await.unwrap();
    let b = store.create(new_item("second")).await.unwrap();

    assert_ne!(a.id, b.id);
    assert_eq!(a.summary.as_deref(), Some("first"));
    assert_eq!(b.summary.as_deref(), Some("second"));
}

#[tokio::test]
async fn get_by_id_returns_stored_row() {
    let store = SqliteStore::new(create_test_db().await);

    let created = store.create(new_item("walk the dog")).await.unwrap();
    let fetched = store
        .get_by_id(created.id.as_deref().unwrap())
        .await
        .unwrap();

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.summary.as_deref(), Some("walk the dog"));
}

#[tokio::test]
async fn get_by_id_unknown_id_is_not_found() {
    let store = SqliteStore::new(create_test_db().await);

    let err = store.get_by_id("no-such-id").await.unwrap_err();

    assert_eq!(err, TodoError::NotFound("no-such-id".to_string()));
}

#[tokio::test]
async fn update_persists_and_returns_input_verbatim() {
    let pool = create_test_db().await;
    let store = SqliteStore::new(pool);

    let created = store.create(new_item("original")).await.unwrap();

    let mut to_save = created.clone();
    to_save.summary = Some("changed".to_string());
    to_save.completed = Some(true);
    to_save.updated = Some(Utc.with_ymd_and_hms(2023, 1, 16, 12, 12, 12).unwrap());

    let saved = store.update(to_save.clone()).await.unwrap();
    assert_eq!(saved, to_save);

    let fetched = store
        .get_by_id(created.id.as_deref().unwrap())
        .await
        .unwrap();
    assert_eq!(fetched.summary.as_deref(), Some("changed"));
    assert_eq!(fetched.completed, Some(true));
    assert_eq!(
        fetched.updated,
        Some(Utc.with_ymd_and_hms(2023, 1, 16, 12, 12, 12).unwrap())
    );
    // created is immutable through updates
    assert_eq!(fetched.created, created.created);
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let store = SqliteStore::new(create_test_db().await);

    let err = store
        .update(TodoItem {
            id: Some("missing".to_string()),
            summary: Some("whatever".to_string()),
            deleted: Some(false),
            completed: Some(false),
            updated: Some(Utc::now()),
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert_eq!(err, TodoError::NotFound("missing".to_string()));
}

#[tokio::test]
async fn get_all_on_empty_table_is_empty_not_error() {
    let store = SqliteStore::new(create_test_db().await);

    let items = store.get_all().await.unwrap();

    assert!(items.is_empty());
}

#[tokio::test]
async fn get_all_excludes_deleted_and_orders_by_creation_desc() {
    let pool = create_test_db().await;
    let store = SqliteStore::new(pool.clone());

    // Insert directly so creation times are distinct and deterministic
    for (id, summary, created, deleted) in [
        ("a", "oldest", "2023-01-10 08:00:00", false),
        ("b", "middle", "2023-01-11 08:00:00", true),
        ("c", "newest", "2023-01-12 08:00:00", false),
    ] {
        sqlx::query(
            r#"
            INSERT INTO todo_item (id, summary, date_created, date_updated, deleted)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(summary)
        .bind(created)
        .bind(created)
        .bind(deleted)
        .execute(&pool)
        .await
        .unwrap();
    }

    let items = store.get_all().await.unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].summary.as_deref(), Some("newest"));
    assert_eq!(items[1].summary.as_deref(), Some("oldest"));
    assert!(items.iter().all(|i| i.deleted == Some(false)));
}

#[tokio::test]
async fn soft_deleted_rows_remain_reachable_by_id() {
    let store = SqliteStore::new(create_test_db().await);

    let created = store.create(new_item("to hide")).await.unwrap();
    let mut to_save = created.clone();
    to_save.deleted = Some(true);
    to_save.updated = Some(Utc::now());
    store.update(to_save).await.unwrap();

    // The deleted flag only gates the list query
    let fetched = store
        .get_by_id(created.id.as_deref().unwrap())
        .await
        .unwrap();
    assert_eq!(fetched.deleted, Some(true));

    let items = store.get_all().await.unwrap();
    assert!(items.is_empty());
}
