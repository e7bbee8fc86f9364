//! Running the simulation from the command line.

use crate::{
    args::{parse_iterations, Args},
    error::Error,
};
use std::io::{self, BufRead, Write};
use toruslife_lib::{CancelToken, Glyphs, Grid, NullRenderer};

/// Asks the user for the number of iterations.
fn ask_iterations() -> io::Result<Option<u64>> {
    println!("Enter number of iteration required. If indefinite, simply press enter...");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(parse_iterations(&line))
}

/// Prints every generation to the standard output.
struct Printer<'a> {
    glyphs: &'a Glyphs,
}

impl toruslife_lib::Renderer for Printer<'_> {
    fn render(&mut self, grid: &Grid, _generation: u64) {
        let mut stdout = io::stdout().lock();
        let printed = stdout.write_all(grid.display_with(self.glyphs).as_bytes());
        if let Err(e) = printed.and_then(|()| stdout.flush()) {
            log::warn!("Failed to print the grid: {}", e);
        }
    }
}

#[cfg(feature = "tui")]
fn simulate_full_screen(args: &Args, cancel: &CancelToken) -> Option<Result<Grid, Error>> {
    (!args.no_tui && !args.quiet)
        .then(|| crate::tui::simulate_with_tui(&args.config, &args.glyphs, cancel))
}

#[cfg(not(feature = "tui"))]
fn simulate_full_screen(_args: &Args, _cancel: &CancelToken) -> Option<Result<Grid, Error>> {
    None
}

pub(crate) fn simulate(mut args: Args) -> Result<(), Error> {
    if args.ask_iterations {
        args.config.iterations = ask_iterations()?;
    }

    let cancel = CancelToken::new();

    if let Some(result) = simulate_full_screen(&args, &cancel) {
        print!("{}", result?.display_with(&args.glyphs));
    } else if args.quiet {
        let grid = args.config.run(&mut NullRenderer, &cancel)?;
        print!("{}", grid.display_with(&args.glyphs));
    } else {
        let mut printer = Printer {
            glyphs: &args.glyphs,
        };
        args.config.run(&mut printer, &cancel)?;
    }
    Ok(())
}
