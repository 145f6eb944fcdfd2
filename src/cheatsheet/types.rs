//! Cheat-sheet types.

use super::data::{BASICS, MODES};

/// A named group of reference entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Saving, quitting and cancelling
    Basics,
    /// Entering and leaving editor modes
    Modes,
}

impl Category {
    /// All categories, in display order.
    pub fn all() -> [Self; 2] {
        [Self::Basics, Self::Modes]
    }

    /// Display name for section headers.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Basics => "Basics",
            Self::Modes => "Modes",
        }
    }

    /// Reference entries for this category, in insertion order.
    pub fn entries(&self) -> &'static [Entry] {
        match self {
            Self::Basics => BASICS,
            Self::Modes => MODES,
        }
    }
}

/// A single token and what it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub token: &'static str,
    pub description: &'static str,
}

impl Entry {
    pub const fn new(token: &'static str, description: &'static str) -> Self {
        Self { token, description }
    }

    /// Plain, case-sensitive containment in either the token or the description.
    pub fn matches(&self, term: &str) -> bool {
        self.token.contains(term) || self.description.contains(term)
    }
}
