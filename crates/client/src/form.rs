//! The shared create/edit form.
//!
//! ```text
//! Idle --start_editing(note)--> Editing(id)
//! Editing(id) --complete | cancel--> Idle
//! Idle --complete--> Idle (fields cleared)
//! ```
//!
//! A refused or failed submission leaves both the mode and the field
//! values untouched.

use notekeeper_core::categories::{format_category_input, parse_category_input};
use notekeeper_core::error::CoreError;
use notekeeper_core::notes::{CreateNote, Note, NotePatch};
use notekeeper_core::types::DbId;
use notekeeper_core::validation::validate_required_fields;

/// Whether the form creates a new note or edits an existing one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Idle,
    Editing(DbId),
}

/// The request a form submission turns into.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Create(CreateNote),
    Update { id: DbId, patch: NotePatch },
}

/// Field values plus mode.
#[derive(Debug, Clone, Default)]
pub struct NoteForm {
    pub title: String,
    pub content: String,
    /// Free-text category input, e.g. `"Work, Urgent"`.
    pub categories: String,
    mode: FormMode,
}

impl NoteForm {
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Editing(_))
    }

    /// Load `note` into the fields and switch to editing it.
    pub fn start_editing(&mut self, note: &Note) {
        self.title.clone_from(&note.title);
        self.content.clone_from(&note.content);
        self.categories = format_category_input(&note.categories);
        self.mode = FormMode::Editing(note.id);
    }

    /// Clear the fields and return to Idle.
    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    /// Build the request for the current fields without changing state.
    ///
    /// Fails when title or content is blank.
    pub fn submission(&self) -> Result<Submission, CoreError> {
        validate_required_fields(&self.title, &self.content)?;
        let categories = parse_category_input(&self.categories);

        Ok(match self.mode {
            FormMode::Idle => Submission::Create(CreateNote {
                title: self.title.clone(),
                content: self.content.clone(),
                categories: Some(categories),
            }),
            FormMode::Editing(id) => Submission::Update {
                id,
                patch: NotePatch {
                    title: Some(self.title.clone()),
                    content: Some(self.content.clone()),
                    is_archived: None,
                    categories: Some(categories),
                },
            },
        })
    }

    /// Mark the submission as accepted by the server.
    pub fn complete(&mut self) {
        self.cancel();
    }
}
