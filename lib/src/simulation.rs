//! Running the simulation.

use crate::{cancel::CancelToken, error::Error, grid::Grid, render::Renderer, rule};
use log::{debug, trace, warn};
use std::time::Duration;

/// A running simulation.
///
/// It owns two grids of the same size. Each transition reads one
/// and writes the other, then the two swap roles.
/// No grid is allocated after the simulation is created.
#[derive(Clone, Debug)]
pub struct Simulation {
    /// The two buffers.
    buffers: [Grid; 2],

    /// Index of the buffer holding the current generation.
    current: usize,

    /// Number of transitions applied so far.
    generation: u64,
}

impl Simulation {
    /// Creates a simulation starting from the given grid.
    pub fn new(initial: Grid) -> Self {
        let next = initial.clone();
        Simulation {
            buffers: [initial, next],
            current: 0,
            generation: 0,
        }
    }

    /// The current generation.
    #[inline]
    pub fn current(&self) -> &Grid {
        &self.buffers[self.current]
    }

    /// Number of transitions applied so far.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Applies one transition.
    pub fn step(&mut self) {
        let (first, second) = self.buffers.split_at_mut(1);
        let (current, next) = if self.current == 0 {
            (&first[0], &mut second[0])
        } else {
            (&second[0], &mut first[0])
        };
        rule::evolve(current, next.cells_mut());
        self.current ^= 1;
        self.generation += 1;
    }

    /// Runs the simulation.
    ///
    /// Applies `iterations` transitions, or runs forever if it is `None`.
    /// `Some(0)` applies no transition at all.
    ///
    /// The renderer sees the current grid once before the first transition,
    /// and once after every transition. Between two transitions the thread
    /// pauses for `tick_delay`.
    ///
    /// If `cancel` is cancelled before the last transition, returns
    /// [`Error::Cancelled`]. Otherwise returns the grid after the last
    /// transition.
    pub fn run(
        &mut self,
        iterations: Option<u64>,
        tick_delay: Duration,
        renderer: &mut dyn Renderer,
        cancel: &CancelToken,
    ) -> Result<&Grid, Error> {
        debug!(
            "Running {} transitions from generation {}",
            iterations.map_or_else(|| String::from("unbounded"), |n| n.to_string()),
            self.generation
        );
        renderer.render(self.current(), self.generation);

        let mut remaining = iterations;
        while remaining != Some(0) {
            if cancel.is_cancelled() {
                return Err(self.cancelled());
            }

            self.step();
            trace!(
                "Generation {}: {} living cells",
                self.generation,
                self.current().population()
            );
            renderer.render(self.current(), self.generation);

            if let Some(n) = remaining.as_mut() {
                *n -= 1;
                if *n == 0 {
                    break;
                }
            }
            if cancel.sleep(tick_delay) {
                return Err(self.cancelled());
            }
        }

        debug!("Finished at generation {}", self.generation);
        Ok(self.current())
    }

    fn cancelled(&self) -> Error {
        warn!("Simulation cancelled at generation {}", self.generation);
        Error::Cancelled {
            generation: self.generation,
        }
    }

    /// Consumes the simulation and returns the current generation.
    pub fn into_grid(self) -> Grid {
        let [first, second] = self.buffers;
        if self.current == 0 {
            first
        } else {
            second
        }
    }
}
