use notekeeper_db::DbPool;

/// Fresh in-memory database with the current schema applied.
pub async fn test_pool() -> DbPool {
    let pool = notekeeper_db::create_pool("sqlite::memory:")
        .await
        .expect("in-memory database should open");
    notekeeper_db::schema::sync_schema(&pool)
        .await
        .expect("schema sync should succeed");
    pool
}
