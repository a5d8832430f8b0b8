//! Repository for the `notes` table.

use notekeeper_core::categories::{decode_categories, encode_categories};
use notekeeper_core::notes::{Note, NotePatch};
use notekeeper_core::types::{DbId, Timestamp};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::schema::note_columns;
use crate::DbPool;

/// Column list for notes queries. Must match [`crate::schema::NOTES`].
const COLUMNS: &str = "id, title, content, is_archived, created_at, categories";

/// Values for a new row. Defaults are resolved by the caller.
#[derive(Debug, Clone)]
pub struct NewNote<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub is_archived: bool,
    pub created_at: Timestamp,
    pub categories: &'a [String],
}

/// Provides CRUD operations for notes.
pub struct NoteRepo;

impl NoteRepo {
    /// Insert a note, returning the stored row.
    pub async fn insert(pool: &DbPool, input: &NewNote<'_>) -> Result<Note, sqlx::Error> {
        let query = format!(
            "INSERT INTO notes (title, content, is_archived, created_at, categories)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query(&query)
            .bind(input.title)
            .bind(input.content)
            .bind(input.is_archived)
            .bind(input.created_at)
            .bind(encode_categories(input.categories))
            .fetch_one(pool)
            .await?;
        note_from_row(&row)
    }

    /// Find a note by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE id = $1");
        sqlx::query(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .as_ref()
            .map(note_from_row)
            .transpose()
    }

    /// List notes with the given archived flag, newest first.
    pub async fn list_by_archived(
        pool: &DbPool,
        is_archived: bool,
    ) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notes
             WHERE is_archived = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query(&query)
            .bind(is_archived)
            .fetch_all(pool)
            .await?
            .iter()
            .map(note_from_row)
            .collect()
    }

    /// Apply the present fields of `patch`. Returns `true` if a row matched.
    pub async fn update(pool: &DbPool, id: DbId, patch: &NotePatch) -> Result<bool, sqlx::Error> {
        let categories = patch.categories.as_deref().map(encode_categories);
        let result = sqlx::query(
            "UPDATE notes SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                is_archived = COALESCE($4, is_archived),
                categories = COALESCE($5, categories)
             WHERE id = $1",
        )
        .bind(id)
        .bind(patch.title.as_deref())
        .bind(patch.content.as_deref())
        .bind(patch.is_archived)
        .bind(categories)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a note by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Decode a row selected with [`COLUMNS`].
fn note_from_row(row: &SqliteRow) -> Result<Note, sqlx::Error> {
    let categories: Option<String> = row.try_get(note_columns::CATEGORIES)?;
    Ok(Note {
        id: row.try_get(note_columns::ID)?,
        title: row.try_get(note_columns::TITLE)?,
        content: row.try_get(note_columns::CONTENT)?,
        is_archived: row.try_get(note_columns::IS_ARCHIVED)?,
        created_at: row.try_get(note_columns::CREATED_AT)?,
        categories: decode_categories(categories.as_deref()),
    })
}
