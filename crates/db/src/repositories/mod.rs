//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&DbPool` as the first argument.

pub mod note_repo;

pub use note_repo::{NewNote, NoteRepo};
