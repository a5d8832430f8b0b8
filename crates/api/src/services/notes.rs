//! Note lifecycle rules.
//!
//! [`NoteService`] is the only caller of [`NoteRepo`]. It resolves creation
//! defaults, turns missing rows into [`CoreError::NotFound`], and re-reads a
//! note after every update so callers never see a stale copy.

use chrono::Utc;
use notekeeper_core::error::CoreError;
use notekeeper_core::notes::{CreateNote, Note, NotePatch, ENTITY_NOTE};
use notekeeper_core::types::DbId;
use notekeeper_db::repositories::{NewNote, NoteRepo};
use notekeeper_db::DbPool;

use crate::error::AppResult;

/// Service for creating, listing, updating and deleting notes.
pub struct NoteService {
    pool: DbPool,
}

impl NoteService {
    /// Create a service over an opened store handle.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create a note. New notes are never archived and are stamped with the
    /// current time; missing categories become an empty list.
    pub async fn create(&self, input: &CreateNote) -> AppResult<Note> {
        let categories = input.categories.as_deref().unwrap_or_default();
        let note = NoteRepo::insert(
            &self.pool,
            &NewNote {
                title: &input.title,
                content: &input.content,
                is_archived: false,
                created_at: Utc::now(),
                categories,
            },
        )
        .await?;

        tracing::info!(note_id = note.id, "Note created");
        Ok(note)
    }

    /// All notes with the given archived flag, newest first.
    pub async fn find_all(&self, archived: bool) -> AppResult<Vec<Note>> {
        Ok(NoteRepo::list_by_archived(&self.pool, archived).await?)
    }

    /// A single note, or `NotFound`.
    pub async fn find_one(&self, id: DbId) -> AppResult<Note> {
        NoteRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| not_found(id).into())
    }

    /// Apply `patch` and return the note as stored afterwards.
    ///
    /// Existence is checked before the write, so a missing id never reaches
    /// the store, and again by the read-back.
    pub async fn update(&self, id: DbId, patch: &NotePatch) -> AppResult<Note> {
        self.find_one(id).await?;

        if !NoteRepo::update(&self.pool, id, patch).await? {
            return Err(not_found(id).into());
        }

        let note = self.find_one(id).await?;
        tracing::info!(note_id = id, is_archived = note.is_archived, "Note updated");
        Ok(note)
    }

    /// Delete a note, or fail with `NotFound`.
    pub async fn remove(&self, id: DbId) -> AppResult<()> {
        self.find_one(id).await?;

        if !NoteRepo::delete(&self.pool, id).await? {
            return Err(not_found(id).into());
        }

        tracing::info!(note_id = id, "Note deleted");
        Ok(())
    }
}

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound {
        entity: ENTITY_NOTE,
        id,
    }
}
