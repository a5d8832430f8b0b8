//! Notekeeper client.
//!
//! A headless model of the notes screen ([`app::NotesApp`]) driven by a
//! terminal front end in `main.rs`. The model talks to the server through
//! the [`api::NotesBackend`] trait so it can be exercised without a network.

pub mod api;
pub mod app;
pub mod commands;
pub mod config;
pub mod error;
pub mod form;
pub mod view;
