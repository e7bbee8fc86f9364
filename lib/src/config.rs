//! Simulation configuration.

use crate::{
    cancel::CancelToken,
    cells::Coord,
    error::Error,
    grid::{Grid, MAX_SIZE},
    render::Renderer,
    simulation::Simulation,
};
use educe::Educe;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default side length of the grid.
pub const DEFAULT_SIZE: usize = 25;

/// Default pause between two transitions, in milliseconds.
pub const DEFAULT_TICK_DELAY_MS: u64 = 500;

/// A glider near the center of a grid of the given size, moving towards
/// the bottom right.
///
/// Needs `size >= 4` to fit inside the seedable range.
/// Empty if `size` exceeds [`MAX_SIZE`], since no such grid can be built.
pub fn glider(size: usize) -> Vec<Coord> {
    let h = match i32::try_from(size / 2) {
        Ok(h) if size <= MAX_SIZE => h,
        _ => return Vec::new(),
    };
    vec![
        (h - 1, h),
        (h, h + 1),
        (h + 1, h + 1),
        (h + 1, h),
        (h + 1, h - 1),
    ]
}

/// Simulation configuration.
///
/// The simulation will be generated from this configuration.
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Side length of the grid.
    #[educe(Default(expression = "DEFAULT_SIZE"))]
    pub size: usize,

    /// Coordinates of the initially living cells.
    ///
    /// Every coordinate must lie strictly between `0` and `size`.
    #[educe(Default(expression = "glider(DEFAULT_SIZE)"))]
    pub seed: Vec<Coord>,

    /// Number of transitions.
    ///
    /// `None` means that the simulation runs until it is cancelled.
    pub iterations: Option<u64>,

    /// Pause after every transition but the last.
    #[educe(Default(expression = "Duration::from_millis(DEFAULT_TICK_DELAY_MS)"))]
    #[cfg_attr(feature = "serde", serde(rename = "tick_delay_ms", with = "millis"))]
    pub tick_delay: Duration,
}

impl Config {
    /// Sets up a new configuration with given size,
    /// seeded with a [`glider`] in the center.
    pub fn new(size: usize) -> Self {
        Config {
            size,
            seed: glider(size),
            ..Config::default()
        }
    }

    /// Sets the seed.
    pub fn set_seed<I: IntoIterator<Item = Coord>>(mut self, seed: I) -> Self {
        self.seed = seed.into_iter().collect();
        self
    }

    /// Sets the number of transitions. `None` means no limit.
    pub fn set_iterations<T: Into<Option<u64>>>(mut self, iterations: T) -> Self {
        self.iterations = iterations.into();
        self
    }

    /// Sets the number of transitions from a signed count.
    ///
    /// Negative values mean no limit.
    pub fn set_iteration_count(mut self, count: i64) -> Self {
        self.iterations = u64::try_from(count).ok();
        self
    }

    /// Sets the pause between two transitions.
    pub fn set_tick_delay(mut self, tick_delay: Duration) -> Self {
        self.tick_delay = tick_delay;
        self
    }

    /// Creates the initial grid from the configuration.
    /// Returns an error if the seed does not fit in the grid.
    pub fn grid(&self) -> Result<Grid, Error> {
        Grid::from_seed(self.size, &self.seed)
    }

    /// Creates a new simulation from the configuration.
    pub fn simulation(&self) -> Result<Simulation, Error> {
        self.grid().map(Simulation::new)
    }

    /// Builds the initial grid and runs the whole simulation,
    /// returning the final grid.
    pub fn run(&self, renderer: &mut dyn Renderer, cancel: &CancelToken) -> Result<Grid, Error> {
        let mut simulation = self.simulation()?;
        simulation.run(self.iterations, self.tick_delay, renderer, cancel)?;
        Ok(simulation.into_grid())
    }
}

#[cfg(feature = "serde")]
mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub(super) fn serialize<S: Serializer>(duration: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(duration.as_millis() as u64)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}
