//! Command-line arguments and the print plan they produce.

use std::io::{IsTerminal, Write};

use clap::{Parser, ValueEnum};
use crossterm::queue;
use crossterm::style::Print;

use crate::cheatsheet::{self, Category, Palette};
use crate::error::Result;

#[derive(Debug, Parser)]
#[command(name = "vimcheat")]
#[command(about = "Vim cheat sheet for noobs", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  vimcheat\n  vimcheat --basics w\n  vimcheat -m R\n  vimcheat quit\n"
)]
pub struct Cli {
    /// Basic commands, optionally filtered by TERM
    #[arg(short, long, value_name = "TERM", num_args = 0..=1)]
    pub basics: Option<Option<String>>,

    /// Mode selections, optionally filtered by TERM
    #[arg(short, long, value_name = "TERM", num_args = 0..=1)]
    pub modes: Option<Option<String>>,

    /// When to colour the output
    #[arg(long, value_enum, env = "VIMCHEAT_COLOR", default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Search every category (only used when no category flag is given)
    pub term: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn palette(self) -> Palette {
        match self {
            Self::Always => Palette::Ansi,
            Self::Never => Palette::Plain,
            Self::Auto => {
                if std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none() {
                    Palette::Ansi
                } else {
                    Palette::Plain
                }
            }
        }
    }
}

/// One block of output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Every category, filtered by the term, grouped per category.
    Search(String),
    /// One category, filtered when a term is given.
    Category(Category, Option<String>),
}

impl Cli {
    fn flag(&self, category: Category) -> Option<&Option<String>> {
        match category {
            Category::Basics => self.basics.as_ref(),
            Category::Modes => self.modes.as_ref(),
        }
    }

    /// Decide what to print.
    ///
    /// Without category flags the positional term searches everything, and no
    /// term at all lists both categories. Category flags are always checked
    /// afterwards and each adds its own block.
    pub fn plan(&self) -> Vec<Step> {
        let mut steps = Vec::new();
        let no_flags = self.basics.is_none() && self.modes.is_none();

        if no_flags {
            match &self.term {
                Some(term) => steps.push(Step::Search(term.clone())),
                None => steps.extend(Category::all().map(|c| Step::Category(c, None))),
            }
        }

        for category in Category::all() {
            if let Some(term) = self.flag(category) {
                steps.push(Step::Category(category, term.clone()));
            }
        }

        tracing::debug!(?steps, "planned output");
        steps
    }
}

/// Print the banner and every planned block to `out`.
pub fn run<W: Write>(cli: &Cli, out: &mut W, palette: Palette) -> Result<()> {
    queue!(out, Print(cheatsheet::banner(palette)), Print("\n"))?;

    for step in cli.plan() {
        match step {
            Step::Search(term) => {
                for (category, entries) in cheatsheet::search_all(&term) {
                    cheatsheet::print_section(out, category, Some(&term), &entries, palette)?;
                }
            }
            Step::Category(category, term) => {
                let entries = cheatsheet::search_within(category.entries(), term.as_deref());
                cheatsheet::print_section(out, category, term.as_deref(), &entries, palette)?;
            }
        }
    }

    out.flush()?;
    Ok(())
}
