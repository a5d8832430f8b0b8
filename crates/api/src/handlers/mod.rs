//! Request handlers.
//!
//! Handlers are thin adapters: they extract path, query and body values,
//! delegate to the service held in [`AppState`](crate::state::AppState),
//! and serialize the result.

pub mod notes;
