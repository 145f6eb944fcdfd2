//! Substring search over reference entries.

use super::types::{Category, Entry};

/// Entries whose token or description contains `term`, in their original order.
///
/// A missing term returns every entry.
pub fn search_within(entries: &[Entry], term: Option<&str>) -> Vec<Entry> {
    let Some(term) = term else {
        return entries.to_vec();
    };

    let found: Vec<Entry> = entries
        .iter()
        .filter(|entry| entry.matches(term))
        .copied()
        .collect();

    tracing::trace!(
        term,
        kept = found.len(),
        total = entries.len(),
        "filtered entries"
    );
    found
}

/// Search every category, keeping results grouped per category.
///
/// Groups come back in `Category::all()` order and are kept even when empty.
pub fn search_all(term: &str) -> Vec<(Category, Vec<Entry>)> {
    Category::all()
        .into_iter()
        .map(|category| (category, search_within(category.entries(), Some(term))))
        .collect()
}
