//! Headless model of the notes screen.
//!
//! [`NotesApp`] owns the list for the selected view, the category filter and
//! the form. Every mutation goes to the server and is followed by a full
//! refetch; the local list is never edited in place.

use notekeeper_core::categories::matches_category_filter;
use notekeeper_core::notes::{Note, NotePatch};
use notekeeper_core::types::DbId;

use crate::api::NotesBackend;
use crate::error::ClientError;
use crate::form::{NoteForm, Submission};

/// Confirmation asked before a delete.
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this note?";

/// User-facing dialogs.
pub trait Prompt {
    fn alert(&mut self, message: &str);

    /// Ask a yes/no question. `true` means confirmed.
    fn confirm(&mut self, message: &str) -> bool;
}

/// State behind the notes screen.
pub struct NotesApp<B> {
    backend: B,
    notes: Vec<Note>,
    view_archived: bool,
    filter: String,
    pub form: NoteForm,
}

impl<B: NotesBackend> NotesApp<B> {
    /// Start on the active view with an empty list. Call [`Self::refresh`]
    /// to load it.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            notes: Vec::new(),
            view_archived: false,
            filter: String::new(),
            form: NoteForm::default(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Notes of the current view, unfiltered.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn is_viewing_archived(&self) -> bool {
        self.view_archived
    }

    /// The form is only offered on the active view.
    pub fn form_available(&self) -> bool {
        !self.view_archived
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
    }

    pub fn clear_filter(&mut self) {
        self.filter.clear();
    }

    /// Notes of the current view that match the category filter.
    pub fn visible_notes(&self) -> Vec<&Note> {
        self.notes
            .iter()
            .filter(|note| matches_category_filter(&note.categories, &self.filter))
            .collect()
    }

    pub fn find_note(&self, id: DbId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    // -----------------------------------------------------------------------
    // Server round trips
    // -----------------------------------------------------------------------

    /// Reload the list for the current view.
    ///
    /// A failure is logged and the previous list stays in place.
    pub async fn refresh(&mut self) {
        match self.backend.list(self.view_archived).await {
            Ok(notes) => self.notes = notes,
            Err(e) => {
                tracing::error!(error = %e, archived = self.view_archived, "Failed to fetch notes");
            }
        }
    }

    /// Switch between the active and archived views and load the new one.
    pub async fn toggle_view(&mut self) {
        self.view_archived = !self.view_archived;
        if self.view_archived {
            self.form.cancel();
        }
        self.refresh().await;
    }

    /// Submit the form. Returns `true` when the server accepted it.
    pub async fn submit(&mut self, prompt: &mut impl Prompt) -> bool {
        match self.try_submit().await {
            Ok(()) => {
                self.form.complete();
                self.refresh().await;
                true
            }
            Err(e) => {
                self.report(&e, prompt);
                false
            }
        }
    }

    async fn try_submit(&self) -> Result<(), ClientError> {
        match self.form.submission()? {
            Submission::Create(input) => {
                let note = self.backend.create(&input).await?;
                tracing::info!(note_id = note.id, "Note created");
            }
            Submission::Update { id, patch } => {
                self.backend.update(id, &patch).await?;
                tracing::info!(note_id = id, "Note updated");
            }
        }
        Ok(())
    }

    /// Flip the archived flag of `id`, then refetch.
    pub async fn toggle_archive(&mut self, id: DbId, prompt: &mut impl Prompt) -> bool {
        let Some(current) = self.find_note(id).map(|note| note.is_archived) else {
            prompt.alert(&format!("No note with id {id} in this view"));
            return false;
        };

        let result = self
            .backend
            .update(id, &NotePatch::archived(!current))
            .await;
        self.after_mutation(result.map(|_| ()), prompt).await
    }

    /// Delete `id` after the user confirms, then refetch.
    ///
    /// Returns `false` when declined or when the request failed.
    pub async fn delete(&mut self, id: DbId, prompt: &mut impl Prompt) -> bool {
        if !prompt.confirm(DELETE_CONFIRMATION) {
            return false;
        }
        let result = self.backend.delete(id).await;
        self.after_mutation(result, prompt).await
    }

    /// Load note `id` from the current list into the form.
    pub fn start_editing(&mut self, id: DbId) -> bool {
        if !self.form_available() {
            return false;
        }
        match self.notes.iter().find(|note| note.id == id) {
            Some(note) => {
                self.form.start_editing(note);
                true
            }
            None => false,
        }
    }

    pub fn cancel_editing(&mut self) {
        self.form.cancel();
    }

    async fn after_mutation(
        &mut self,
        result: Result<(), ClientError>,
        prompt: &mut impl Prompt,
    ) -> bool {
        match result {
            Ok(()) => {
                self.refresh().await;
                true
            }
            Err(e) => {
                self.report(&e, prompt);
                false
            }
        }
    }

    fn report(&self, error: &ClientError, prompt: &mut impl Prompt) {
        if error.is_transport() {
            tracing::error!(error = %error, "Request to notes server failed");
        }
        prompt.alert(&error.alert_message());
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
