mod args;
mod cli;
mod error;
#[cfg(feature = "tui")]
mod tui;

use env_logger::Env;
use std::process;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let result = args::Args::parse().and_then(cli::simulate);
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
