#![forbid(unsafe_code)]

//! Free-text search over panel items.
//!
//! Search terms are normalized (trim + Unicode case-fold) once when set; an
//! item matches when the normalized term is a substring of its case-folded
//! title, category, or room — any one field suffices. The empty term matches
//! every item.

use crate::item::Item;

/// Normalize a search term: trim surrounding whitespace and case-fold.
#[must_use]
pub fn normalize(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Whether an item matches an already-normalized search term.
///
/// The title is matched through [`Item::display_title`], so the positional
/// fallback label of an untitled item is searchable like any configured title.
#[must_use]
pub fn item_matches(item: &Item, index: usize, normalized_term: &str) -> bool {
    if normalized_term.is_empty() {
        return true;
    }
    if item
        .display_title(index)
        .to_lowercase()
        .contains(normalized_term)
    {
        return true;
    }
    [&item.category, &item.room]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(normalized_term))
}
