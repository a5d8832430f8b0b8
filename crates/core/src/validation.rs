//! Required-field checks applied by the client before submitting a note.
//!
//! The server accepts whatever shape-valid body it receives; these checks
//! only gate what the form is allowed to send.

use crate::error::CoreError;

/// Message shown when the form is submitted without a title or content.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Title and content are required";

/// True when `value` is empty or whitespace-only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validate the required note fields.
pub fn validate_required_fields(title: &str, content: &str) -> Result<(), CoreError> {
    if is_blank(title) || is_blank(content) {
        return Err(CoreError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
    }
    Ok(())
}
