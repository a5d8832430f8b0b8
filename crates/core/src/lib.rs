//! Domain types shared by the notekeeper server and client.
//!
//! Nothing in this crate performs I/O: it defines the `Note` resource and
//! its request DTOs, the error taxonomy, and the pure helpers (category
//! codec, form validation, category filtering) both sides rely on.

pub mod categories;
pub mod error;
pub mod notes;
pub mod types;
pub mod validation;
