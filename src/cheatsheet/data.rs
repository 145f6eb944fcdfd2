//! Reference tables.

use super::types::Entry;

pub(super) const BASICS: &[Entry] = &[
    Entry::new(":w", "write / save"),
    Entry::new(":q", "quit / exit"),
    Entry::new(":wq", "write and quit"),
    Entry::new(":q!", "quit without saving"),
    Entry::new("esc", "(escape key) cancels a multi-character command"),
];

pub(super) const MODES: &[Entry] = &[
    Entry::new("i", "insert mode"),
    Entry::new("v", "visual mode"),
    Entry::new("V", "line visual mode (selected an entire line at a time)"),
    Entry::new(
        "^v",
        "(crtl v) block visual mode (select code column by column)",
    ),
    Entry::new("R", "replace mode"),
    Entry::new("esc", "(escape key) exit from current mode"),
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::super::types::Category;

    #[test]
    fn tokens_unique_within_category() {
        for category in Category::all() {
            let entries = category.entries();
            let tokens: HashSet<_> = entries.iter().map(|e| e.token).collect();
            assert_eq!(tokens.len(), entries.len(), "{:?}", category);
        }
    }

    #[test]
    fn tables_keep_insertion_order() {
        let tokens: Vec<_> = Category::Basics.entries().iter().map(|e| e.token).collect();
        assert_eq!(tokens, vec![":w", ":q", ":wq", ":q!", "esc"]);

        let tokens: Vec<_> = Category::Modes.entries().iter().map(|e| e.token).collect();
        assert_eq!(tokens, vec!["i", "v", "V", "^v", "R", "esc"]);
    }
}
