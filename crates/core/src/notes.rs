//! The `Note` resource and its request DTOs.
//!
//! Wire format uses camelCase field names (`isArchived`, `createdAt`).

use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

/// Entity name used in `NotFound` errors.
pub const ENTITY_NOTE: &str = "Note";

/// A single user-authored note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub is_archived: bool,
    pub created_at: Timestamp,
    #[serde(default)]
    pub categories: Vec<String>,
}

/// DTO for creating a note. `id`, `createdAt` and `isArchived` are assigned
/// by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNote {
    pub title: String,
    pub content: String,
    /// Defaults to an empty list if omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
}

/// Partial update for a note.
///
/// Every field is either present (`Some`, set to that value, even when the
/// value is empty) or absent (`None`, leave unchanged). JSON `null` reads as
/// absent. Server-assigned fields are not part of the patch, so an `id` or
/// `createdAt` in the request body is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_archived: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
}

impl NotePatch {
    /// Patch that only sets the archived flag.
    pub fn archived(is_archived: bool) -> Self {
        Self {
            is_archived: Some(is_archived),
            ..Self::default()
        }
    }

    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.is_archived.is_none()
            && self.categories.is_none()
    }

    /// Apply the present fields to `note`, leaving the rest untouched.
    pub fn apply_to(&self, note: &mut Note) {
        if let Some(title) = &self.title {
            note.title.clone_from(title);
        }
        if let Some(content) = &self.content {
            note.content.clone_from(content);
        }
        if let Some(is_archived) = self.is_archived {
            note.is_archived = is_archived;
        }
        if let Some(categories) = &self.categories {
            note.categories.clone_from(categories);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
