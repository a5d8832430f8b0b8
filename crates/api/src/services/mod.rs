//! Domain services sitting between the HTTP handlers and the repositories.

pub mod notes;

pub use notes::NoteService;
