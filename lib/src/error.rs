//! All kinds of errors in this crate.

use crate::cells::Coord;
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Seed value {coord:?} out of bounds for a grid of size {size}.
    SeedOutOfBounds {
        /// The offending seed coordinate.
        coord: Coord,
        /// Side length of the grid.
        size: usize,
    },
    /// Simulation cancelled after generation {generation}.
    Cancelled {
        /// Number of transitions completed before the cancellation.
        generation: u64,
    },
    /// Grid size should be positive.
    NonPositiveSize,
    /// Grid size {0} is too large.
    SizeTooLarge(usize),
    /// Grid of size {found} does not match a grid of size {expected}.
    SizeMismatch {
        /// Size of the grid being read.
        expected: usize,
        /// Size of the grid being written.
        found: usize,
    },
}
