//! Cells in the cellular automaton.

use std::ops::Not;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Possible states of a cell.
///
/// Historically encoded as `1` for living cells and `0` for dead cells;
/// see the `From` conversions below.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum State {
    /// The Dead state.
    #[default]
    Dead,
    /// The Alive state.
    Alive,
}

/// The Dead state.
pub const DEAD: State = State::Dead;
/// The Alive state.
pub const ALIVE: State = State::Alive;

impl State {
    /// Whether the cell is alive.
    #[inline]
    pub fn is_alive(self) -> bool {
        self == ALIVE
    }
}

/// Flips the state.
impl Not for State {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        match self {
            State::Alive => DEAD,
            State::Dead => ALIVE,
        }
    }
}

impl From<State> for u8 {
    #[inline]
    fn from(state: State) -> Self {
        match state {
            State::Dead => 0,
            State::Alive => 1,
        }
    }
}

/// Any nonzero value is alive.
impl From<u8> for State {
    #[inline]
    fn from(value: u8) -> Self {
        if value == 0 {
            DEAD
        } else {
            ALIVE
        }
    }
}

impl From<bool> for State {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive {
            ALIVE
        } else {
            DEAD
        }
    }
}

/// The coordinates of a cell.
///
/// `(row, column)`, both 0-indexed.
///
/// Signed, so that coordinates outside the grid can be reported
/// in errors and wrapped around in lookups.
pub type Coord = (i32, i32);
