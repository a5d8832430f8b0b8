//! Category helpers: the delimited-text storage codec, parsing of the free
//! text category input, and the client-side category filter.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Separator between categories in the stored column and in user input.
pub const CATEGORY_DELIMITER: &str = ",";

/// Separator used when a category list is shown back in an input field.
pub const CATEGORY_DISPLAY_SEPARATOR: &str = ", ";

// ---------------------------------------------------------------------------
// Storage codec
// ---------------------------------------------------------------------------

/// Encode a category list for the `categories` text column.
///
/// Elements are joined verbatim; an empty list encodes to `""`.
pub fn encode_categories(categories: &[String]) -> String {
    categories.join(CATEGORY_DELIMITER)
}

/// Decode the `categories` column. `NULL` and `""` both mean no categories.
pub fn decode_categories(stored: Option<&str>) -> Vec<String> {
    match stored {
        None | Some("") => Vec::new(),
        Some(text) => text.split(CATEGORY_DELIMITER).map(str::to_string).collect(),
    }
}

// ---------------------------------------------------------------------------
// User input
// ---------------------------------------------------------------------------

/// Parse a comma separated category input (`"Work, Urgent"`).
///
/// Pieces are trimmed and empty pieces dropped.
pub fn parse_category_input(input: &str) -> Vec<String> {
    input
        .split(CATEGORY_DELIMITER)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Render a category list back into the input field format.
pub fn format_category_input(categories: &[String]) -> String {
    categories.join(CATEGORY_DISPLAY_SEPARATOR)
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Case-insensitive substring match of `filter` against any category.
///
/// An empty filter matches everything, including notes without categories.
pub fn matches_category_filter(categories: &[String], filter: &str) -> bool {
    if filter.is_empty() {
        return true;
    }
    let needle = filter.to_lowercase();
    categories
        .iter()
        .any(|category| category.to_lowercase().contains(&needle))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
