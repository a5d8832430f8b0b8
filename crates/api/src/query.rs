//! Query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for listing notes (`?archived=`).
#[derive(Debug, Default, Deserialize)]
pub struct ListNotesParams {
    /// Which view to list. Defaults to active (non-archived) notes.
    #[serde(default)]
    pub archived: bool,
}
