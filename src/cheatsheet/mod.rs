//! Vim cheat-sheet reference data and its presentation.
//!
//! # Architecture
//!
//! - `types`: Category and entry types
//! - `data`: The fixed reference tables
//! - `filter`: Substring search over entries
//! - `render`: Console lines, section headers and the banner

mod data;
mod filter;
mod render;
mod types;

pub use filter::{search_all, search_within};
pub use render::{Palette, banner, line, lines, print_section, section};
pub use types::{Category, Entry};
