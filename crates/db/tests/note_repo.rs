//! Integration tests for `NoteRepo` against an in-memory SQLite database.

mod common;

use chrono::{Duration, TimeZone, Utc};
use notekeeper_core::notes::NotePatch;
use notekeeper_core::types::Timestamp;
use notekeeper_db::repositories::{NewNote, NoteRepo};
use notekeeper_db::DbPool;

fn base_time() -> Timestamp {
    Utc.with_ymd_and_hms(2024, 5, 10, 9, 30, 0).unwrap()
}

async fn insert(pool: &DbPool, title: &str, archived: bool, created_at: Timestamp) -> i64 {
    let categories = vec!["Work".to_string(), "Urgent".to_string()];
    NoteRepo::insert(
        pool,
        &NewNote {
            title,
            content: "body",
            is_archived: archived,
            created_at,
            categories: &categories,
        },
    )
    .await
    .unwrap()
    .id
}

// ---------------------------------------------------------------------------
// Insert / find
// ---------------------------------------------------------------------------

#[tokio::test]
async fn insert_returns_stored_row() {
    let pool = common::test_pool().await;
    let categories = vec!["Home".to_string()];

    let note = NoteRepo::insert(
        &pool,
        &NewNote {
            title: "Title",
            content: "Content",
            is_archived: false,
            created_at: base_time(),
            categories: &categories,
        },
    )
    .await
    .unwrap();

    assert!(note.id > 0);
    assert_eq!(note.title, "Title");
    assert_eq!(note.content, "Content");
    assert!(!note.is_archived);
    assert_eq!(note.created_at, base_time());
    assert_eq!(note.categories, categories);
}

#[tokio::test]
async fn insert_assigns_distinct_ids() {
    let pool = common::test_pool().await;
    let a = insert(&pool, "a", false, base_time()).await;
    let b = insert(&pool, "b", false, base_time()).await;
    assert_ne!(a, b);
}

#[tokio::test]
async fn find_by_id_round_trips() {
    let pool = common::test_pool().await;
    let id = insert(&pool, "round trip", false, base_time()).await;

    let found = NoteRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(found.id, id);
    assert_eq!(found.title, "round trip");
    assert_eq!(found.categories, vec!["Work", "Urgent"]);
}

#[tokio::test]
async fn find_by_id_missing_returns_none() {
    let pool = common::test_pool().await;
    assert!(NoteRepo::find_by_id(&pool, 4242).await.unwrap().is_none());
}

#[tokio::test]
async fn empty_categories_round_trip() {
    let pool = common::test_pool().await;
    let note = NoteRepo::insert(
        &pool,
        &NewNote {
            title: "t",
            content: "c",
            is_archived: false,
            created_at: base_time(),
            categories: &[],
        },
    )
    .await
    .unwrap();
    assert!(note.categories.is_empty());
}

#[tokio::test]
async fn null_categories_column_reads_as_empty() {
    let pool = common::test_pool().await;
    sqlx::query(
        "INSERT INTO notes (title, content, is_archived, created_at, categories)
         VALUES ('legacy', 'row', 0, '2024-01-01T00:00:00+00:00', NULL)",
    )
    .execute(&pool)
    .await
    .unwrap();

    let notes = NoteRepo::list_by_archived(&pool, false).await.unwrap();
    assert_eq!(notes.len(), 1);
    assert!(notes[0].categories.is_empty());
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_filters_by_archived_flag() {
    let pool = common::test_pool().await;
    insert(&pool, "active", false, base_time()).await;
    insert(&pool, "archived", true, base_time()).await;

    let active = NoteRepo::list_by_archived(&pool, false).await.unwrap();
    assert_eq!(active.len(), 1);
    assert!(active.iter().all(|n| !n.is_archived));

    let archived = NoteRepo::list_by_archived(&pool, true).await.unwrap();
    assert_eq!(archived.len(), 1);
    assert!(archived.iter().all(|n| n.is_archived));
}

#[tokio::test]
async fn list_orders_newest_first() {
    let pool = common::test_pool().await;
    insert(&pool, "middle", false, base_time()).await;
    insert(&pool, "oldest", false, base_time() - Duration::hours(2)).await;
    insert(&pool, "newest", false, base_time() + Duration::milliseconds(1500)).await;

    let titles: Vec<String> = NoteRepo::list_by_archived(&pool, false)
        .await
        .unwrap()
        .into_iter()
        .map(|n| n.title)
        .collect();
    assert_eq!(titles, vec!["newest", "middle", "oldest"]);
}

// ---------------------------------------------------------------------------
// Update / delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_applies_only_present_fields() {
    let pool = common::test_pool().await;
    let id = insert(&pool, "keep", false, base_time()).await;

    let matched = NoteRepo::update(&pool, id, &NotePatch::archived(true)).await.unwrap();
    assert!(matched);

    let note = NoteRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert!(note.is_archived);
    assert_eq!(note.title, "keep");
    assert_eq!(note.content, "body");
    assert_eq!(note.created_at, base_time());
    assert_eq!(note.categories, vec!["Work", "Urgent"]);
}

#[tokio::test]
async fn update_can_set_empty_values() {
    let pool = common::test_pool().await;
    let id = insert(&pool, "to clear", false, base_time()).await;

    let patch = NotePatch {
        content: Some(String::new()),
        categories: Some(Vec::new()),
        ..NotePatch::default()
    };
    assert!(NoteRepo::update(&pool, id, &patch).await.unwrap());

    let note = NoteRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(note.content, "");
    assert!(note.categories.is_empty());
    assert_eq!(note.title, "to clear");
}

#[tokio::test]
async fn update_missing_row_returns_false() {
    let pool = common::test_pool().await;
    let matched = NoteRepo::update(&pool, 999, &NotePatch::archived(true)).await.unwrap();
    assert!(!matched);
}

#[tokio::test]
async fn delete_removes_row() {
    let pool = common::test_pool().await;
    let id = insert(&pool, "gone", false, base_time()).await;

    assert!(NoteRepo::delete(&pool, id).await.unwrap());
    assert!(NoteRepo::find_by_id(&pool, id).await.unwrap().is_none());
    assert!(!NoteRepo::delete(&pool, id).await.unwrap());
}
