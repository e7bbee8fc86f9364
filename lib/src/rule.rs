//! Conway's Game of Life rule, `B3/S23`.
//!
//! 1. A living cell with fewer than two living neighbors dies.
//! 2. A living cell with two or three living neighbors survives.
//! 3. A living cell with more than three living neighbors dies.
//! 4. A dead cell with exactly three living neighbors becomes alive.

use crate::{
    cells::{State, ALIVE, DEAD},
    error::Error,
    grid::Grid,
};

/// The state of a cell in the next generation, given its current state
/// and the number of its living neighbors.
#[inline]
pub fn transition(state: State, live_neighbors: u8) -> State {
    match (state, live_neighbors) {
        (ALIVE, 2) | (ALIVE, 3) => ALIVE,
        (DEAD, 3) => ALIVE,
        _ => DEAD,
    }
}

/// Computes the next generation of `current` into `next`.
///
/// Every cell of `next` is overwritten; only `current` is read,
/// so no cell sees a partially updated generation.
///
/// Returns an error if the two grids have different sizes.
pub fn step_into(current: &Grid, next: &mut Grid) -> Result<(), Error> {
    if current.size() != next.size() {
        return Err(Error::SizeMismatch {
            expected: current.size(),
            found: next.size(),
        });
    }
    evolve(current, next.cells_mut());
    Ok(())
}

/// Returns the next generation of a grid.
pub fn next_generation(current: &Grid) -> Grid {
    let mut next = current.clone();
    evolve(current, next.cells_mut());
    next
}

/// `next` must hold exactly `current.size()²` cells.
pub(crate) fn evolve(current: &Grid, next: &mut [State]) {
    let size = current.size();
    for (i, (cell, &state)) in next.iter_mut().zip(current.cells()).enumerate() {
        *cell = transition(state, current.count_neighbors(i / size, i % size));
    }
}
