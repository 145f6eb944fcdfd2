//! Console rendering for cheat-sheet entries.

use std::io::Write;

use crossterm::queue;
use crossterm::style::{Print, Stylize};

use super::types::{Category, Entry};
use crate::error::Result;

const BANNER: &str = "\u{270c}\u{fe0f} Vim Cheat Sheet for Noobs";

/// Indentation between rendered lines of a section.
const LINE_SEPARATOR: &str = "\n    ";

/// Whether output carries ANSI styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    Ansi,
    Plain,
}

/// One entry: the token as a badge, then its description.
pub fn line(token: &str, description: &str, palette: Palette) -> String {
    let badge = format!(" {} ", token);
    match palette {
        Palette::Ansi => format!("{} {}", badge.on_dark_grey(), description),
        Palette::Plain => format!("{} {}", badge, description),
    }
}

/// All entries joined into one indented block, in entry order.
pub fn lines(entries: &[Entry], palette: Palette) -> String {
    entries
        .iter()
        .map(|entry| line(entry.token, entry.description, palette))
        .collect::<Vec<_>>()
        .join(LINE_SEPARATOR)
}

/// A category block: header, blank line, then the entries.
pub fn section(
    category: Category,
    term: Option<&str>,
    entries: &[Entry],
    palette: Palette,
) -> String {
    let header = match term {
        Some(term) => format!("Commands with \"{}\" in {}:", term, category.display_name()),
        None => format!("{}:", category.display_name()),
    };

    format!("\n  {}\n\n    {}", header, lines(entries, palette))
}

/// Title line printed once before any section.
pub fn banner(palette: Palette) -> String {
    match palette {
        Palette::Ansi => BANNER.on_blue().to_string(),
        Palette::Plain => BANNER.to_string(),
    }
}

/// Write a section and its trailing newline to `out`.
pub fn print_section<W: Write>(
    out: &mut W,
    category: Category,
    term: Option<&str>,
    entries: &[Entry],
    palette: Palette,
) -> Result<()> {
    queue!(out, Print(section(category, term, entries, palette)), Print("\n"))?;
    out.flush()?;
    Ok(())
}
