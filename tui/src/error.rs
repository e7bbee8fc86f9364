//! Errors of the command-line program.

use displaydoc::Display;
use std::io;
use thiserror::Error;

#[derive(Debug, Display, Error)]
pub(crate) enum Error {
    /// Unable to read the config file {path}: {source}
    ReadConfig { path: String, source: io::Error },
    /// Unsupported config file format: {0:?}. Use .toml, .yaml, .yml or .json.
    UnknownFormat(String),
    /// Invalid TOML config: {0}
    Toml(#[from] toml::de::Error),
    /// Invalid YAML config: {0}
    Yaml(#[from] serde_yaml::Error),
    /// Invalid JSON config: {0}
    Json(#[from] serde_json::Error),
    /// {0}
    Io(#[from] io::Error),
    /// {0}
    Simulation(#[from] toruslife_lib::Error),
}
