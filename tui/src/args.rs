//! Parsing command-line arguments and config files.

use crate::error::Error;
use clap::{command, value_parser, Arg, ArgAction, ArgMatches, Command};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};
use toruslife_lib::{glider, Config, Coord, Glyphs, MAX_SIZE};

/// Everything a config file may contain.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Settings {
    /// Number of iterations; negative means no limit.
    ///
    /// If missing, the number of iterations is asked.
    iterations: Option<i64>,
    #[serde(flatten)]
    simulation: Config,
    glyphs: Glyphs,
}

impl Settings {
    /// Reads settings from a TOML, YAML or JSON file, chosen by extension.
    fn load(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path).map_err(|source| Error::ReadConfig {
            path: path.display().to_string(),
            source,
        })?;
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let settings = match ext.as_str() {
            "toml" => toml::from_str(&text)?,
            "yaml" | "yml" => serde_yaml::from_str(&text)?,
            "json" => serde_json::from_str(&text)?,
            _ => return Err(Error::UnknownFormat(path.display().to_string())),
        };
        log::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}

/// Parses a seed written as `row,col;row,col;...`.
pub(crate) fn parse_seed(s: &str) -> Result<Vec<Coord>, String> {
    s.split(';')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (row, col) = pair
                .split_once(',')
                .ok_or_else(|| format!("expected `row,col`, found {:?}", pair))?;
            let row = row.trim().parse::<i32>().map_err(|e| e.to_string())?;
            let col = col.trim().parse::<i32>().map_err(|e| e.to_string())?;
            Ok((row, col))
        })
        .collect()
}

/// Parses the side length of the grid.
pub(crate) fn parse_size(s: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(size @ 1..=MAX_SIZE) => Ok(size),
        Ok(_) => Err(format!("expected a size between 1 and {}", MAX_SIZE)),
        Err(e) => Err(e.to_string()),
    }
}

/// Interprets a line of user input as a number of iterations.
///
/// Anything but an integer means no limit, as does a negative integer.
pub(crate) fn parse_iterations(line: &str) -> Option<u64> {
    line.trim()
        .parse::<i64>()
        .ok()
        .and_then(|n| u64::try_from(n).ok())
}

/// A struct to store the parse results.
pub(crate) struct Args {
    pub(crate) config: Config,
    pub(crate) glyphs: Glyphs,
    /// Whether the number of iterations still has to be asked.
    pub(crate) ask_iterations: bool,
    pub(crate) quiet: bool,
    #[cfg(feature = "tui")]
    pub(crate) no_tui: bool,
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> Result<Self, Error> {
        Self::from_matches(&cli().get_matches())
    }

    /// Command-line flags override the config file.
    fn from_matches(matches: &ArgMatches) -> Result<Self, Error> {
        let Settings {
            iterations: file_iterations,
            simulation: mut config,
            mut glyphs,
        } = match matches.get_one::<PathBuf>("CONFIG") {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };

        let seed = matches.get_one::<Vec<Coord>>("SEED");
        if let Some(&size) = matches.get_one::<usize>("SIZE") {
            if seed.is_none() && size != config.size {
                config.seed = glider(size);
            }
            config.size = size;
        }
        if let Some(seed) = seed {
            config.seed = seed.clone();
        }
        if let Some(&delay) = matches.get_one::<u64>("DELAY") {
            config.tick_delay = Duration::from_millis(delay);
        }
        let iterations = matches.get_one::<i64>("ITERATIONS").copied().or(file_iterations);
        if let Some(count) = iterations {
            config = config.set_iteration_count(count);
        }
        if let Some(live) = matches.get_one::<String>("LIVE") {
            glyphs.live = live.clone();
        }
        if let Some(dead) = matches.get_one::<String>("DEAD") {
            glyphs.dead = dead.clone();
        }

        Ok(Args {
            config,
            glyphs,
            ask_iterations: iterations.is_none(),
            quiet: matches.get_flag("QUIET"),
            #[cfg(feature = "tui")]
            no_tui: matches.get_flag("NOTUI"),
        })
    }
}

fn cli() -> Command {
    command!()
        .long_about(
            "Conway's Game of Life on a square grid whose edges wrap around.\n\
             \n\
             Living cells are drawn as `X`, dead cells as `.`.\n\
             Without --iterations, or an `iterations` entry in the config file, \
             the number of iterations is read from the standard input; an empty \
             line means that the simulation runs until it is stopped.\n",
        )
        .arg(
            Arg::new("ITERATIONS")
                .help("Number of iterations; negative means no limit")
                .short('n')
                .long("iterations")
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i64)),
        )
        .arg(
            Arg::new("CONFIG")
                .help("Reads settings from a .toml, .yaml or .json file")
                .short('c')
                .long("config")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("SIZE")
                .help("Side length of the grid")
                .short('s')
                .long("size")
                .value_parser(parse_size),
        )
        .arg(
            Arg::new("SEED")
                .help("Initially living cells, as `row,col;row,col;...`")
                .long_help(
                    "Initially living cells, as `row,col;row,col;...`\n\
                     Rows and columns are 0-indexed, and must lie strictly between \
                     0 and the size of the grid.\n\
                     Defaults to a glider in the center.\n",
                )
                .long("seed")
                .value_parser(parse_seed),
        )
        .arg(
            Arg::new("DELAY")
                .help("Pause between two generations, in milliseconds [default: 500]")
                .short('d')
                .long("delay")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("LIVE")
                .help("Text for a living cell")
                .long("live"),
        )
        .arg(
            Arg::new("DEAD")
                .help("Text for a dead cell")
                .long("dead"),
        )
        .arg(
            Arg::new("QUIET")
                .help("Only prints the final generation")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue),
        )
        .args(tui_args())
}

#[cfg(feature = "tui")]
fn tui_args() -> Vec<Arg> {
    vec![Arg::new("NOTUI")
        .help("Prints every generation to the standard output, without the full-screen view")
        .long("no-tui")
        .action(ArgAction::SetTrue)]
}

#[cfg(not(feature = "tui"))]
fn tui_args() -> Vec<Arg> {
    Vec::new()
}
