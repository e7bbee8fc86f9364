//! The grid.

use crate::{
    cells::{Coord, State, ALIVE, DEAD},
    error::Error,
    render::Glyphs,
};
use log::debug;
use std::fmt::{self, Display, Formatter, Write};

/// Offsets of the eight neighbors, as `(row, column)`.
const NEIGHBORHOOD: [Coord; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Largest side length of a grid, so that every coordinate fits in a [`Coord`].
pub const MAX_SIZE: usize = i32::MAX as usize;

/// A square grid of cells whose edges wrap around, i.e., a torus.
///
/// Cells are stored row by row. The side length never changes
/// after the grid is created.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Side length.
    size: usize,

    /// `size * size` cells, row-major.
    cells: Box<[State]>,
}

impl Grid {
    /// Creates a grid of the given size where every cell is dead.
    ///
    /// Returns [`Error::SizeTooLarge`] if the size exceeds [`MAX_SIZE`],
    /// or if the cells cannot be allocated.
    pub fn new(size: usize) -> Result<Self, Error> {
        if size == 0 {
            return Err(Error::NonPositiveSize);
        } else if size > MAX_SIZE {
            return Err(Error::SizeTooLarge(size));
        }
        let len = size.checked_mul(size).ok_or(Error::SizeTooLarge(size))?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| Error::SizeTooLarge(size))?;
        cells.resize(len, DEAD);
        Ok(Grid {
            size,
            cells: cells.into_boxed_slice(),
        })
    }

    /// Creates a grid of the given size, and sets the cells in the seed alive.
    ///
    /// Every coordinate of the seed must lie strictly between `0` and `size`.
    /// The seed is checked in order; the first coordinate out of this range
    /// is returned in a [`Error::SeedOutOfBounds`], and no grid is built.
    pub fn from_seed(size: usize, seed: &[Coord]) -> Result<Self, Error> {
        let mut grid = Grid::new(size)?;
        for &coord in seed {
            if !grid.is_seedable(coord) {
                return Err(Error::SeedOutOfBounds { coord, size });
            }
            grid.set(coord, ALIVE);
        }
        debug!(
            "Built a {0}x{0} grid with {1} living cells",
            size,
            grid.population()
        );
        Ok(grid)
    }

    /// Whether a coordinate is accepted in a seed.
    ///
    /// Row and column `0` are rejected, as are coordinates beyond the grid.
    fn is_seedable(&self, (row, col): Coord) -> bool {
        let in_range = |c: i32| c > 0 && (c as usize) < self.size;
        in_range(row) && in_range(col)
    }

    /// Side length of the grid.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Wraps a coordinate around the torus.
    #[inline]
    fn wrap(&self, (row, col): Coord) -> (usize, usize) {
        let size = self.size as i64;
        (
            (row as i64).rem_euclid(size) as usize,
            (col as i64).rem_euclid(size) as usize,
        )
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Gets the state of a cell.
    ///
    /// Coordinates outside the grid wrap around.
    pub fn get(&self, coord: Coord) -> State {
        let (row, col) = self.wrap(coord);
        self.cells[self.index(row, col)]
    }

    /// Sets the state of a cell.
    ///
    /// Coordinates outside the grid wrap around.
    pub fn set(&mut self, coord: Coord, state: State) {
        let (row, col) = self.wrap(coord);
        let index = self.index(row, col);
        self.cells[index] = state;
    }

    /// Number of living cells among the eight neighbors of a cell.
    ///
    /// Cells on an edge count the cells on the opposite edge as neighbors.
    pub fn live_neighbors(&self, coord: Coord) -> u8 {
        let (row, col) = self.wrap(coord);
        self.count_neighbors(row, col)
    }

    /// Same as [`live_neighbors`](Self::live_neighbors), for coordinates
    /// already inside the grid.
    #[inline]
    pub(crate) fn count_neighbors(&self, row: usize, col: usize) -> u8 {
        let size = self.size as isize;
        NEIGHBORHOOD
            .iter()
            .filter(|&&(dr, dc)| {
                let r = (row as isize + dr as isize + size) % size;
                let c = (col as isize + dc as isize + size) % size;
                self.cells[self.index(r as usize, c as usize)].is_alive()
            })
            .count() as u8
    }

    /// Cell states, row-major.
    #[inline]
    pub(crate) fn cells(&self) -> &[State] {
        &self.cells
    }

    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [State] {
        &mut self.cells
    }

    /// Iterates over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[State]> {
        self.cells.chunks(self.size)
    }

    /// Coordinates of all living cells, row by row.
    pub fn live_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, state)| state.is_alive())
            .map(move |(i, _)| ((i / size) as i32, (i % size) as i32))
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|state| state.is_alive()).count()
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|state| *state = DEAD);
    }

    /// Displays the grid as text, one line per row.
    ///
    /// The border marker is written on a line of its own before the grid,
    /// and at the end of every row.
    pub fn display_with(&self, glyphs: &Glyphs) -> String {
        let mut str = String::with_capacity((self.size + 1) * (self.size * 2 + 2));
        // Writing into a `String` never fails.
        let _ = self.write_with(&mut str, glyphs);
        str
    }

    fn write_with<W: Write>(&self, f: &mut W, glyphs: &Glyphs) -> fmt::Result {
        writeln!(f, "{}", glyphs.border)?;
        for row in self.rows() {
            for &state in row {
                f.write_str(match state {
                    State::Alive => &glyphs.live,
                    State::Dead => &glyphs.dead,
                })?;
            }
            writeln!(f, "{}", glyphs.border)?;
        }
        Ok(())
    }
}

/// Displays the grid with the default [`Glyphs`].
impl Display for Grid {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        self.write_with(f, &Glyphs::default())
    }
}
