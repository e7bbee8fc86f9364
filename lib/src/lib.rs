//! Conway's Game of Life on a square grid whose edges wrap around.
//!
//! ```
//! use toruslife_lib::{CancelToken, Config, NullRenderer};
//!
//! let config = Config::new(25).set_iterations(Some(4)).set_tick_delay(Default::default());
//! let grid = config.run(&mut NullRenderer, &CancelToken::new()).unwrap();
//! assert_eq!(grid.population(), 5);
//! ```

mod cancel;
mod cells;
mod config;
mod error;
mod grid;
mod render;
pub mod rule;
mod simulation;

pub use cancel::CancelToken;
pub use cells::{Coord, State, ALIVE, DEAD};
pub use config::{glider, Config, DEFAULT_SIZE, DEFAULT_TICK_DELAY_MS};
pub use error::Error;
pub use grid::{Grid, MAX_SIZE};
pub use render::{Glyphs, NullRenderer, Renderer};
pub use rule::{next_generation, step_into};
pub use simulation::Simulation;
