use std::io;

use clap::Parser;
use crossterm::style::force_color_output;
use vimcheat::cli::{self, Cli, ColorChoice};
use vimcheat::logging;

fn main() {
    let cli = Cli::parse();
    logging::init();

    let palette = cli.color.palette();
    if cli.color == ColorChoice::Always {
        force_color_output(true);
    }

    let mut stdout = io::stdout().lock();
    if let Err(e) = cli::run(&cli, &mut stdout, palette) {
        if e.is_broken_pipe() {
            tracing::debug!("stdout closed early");
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(e.exit_code());
    }
}
