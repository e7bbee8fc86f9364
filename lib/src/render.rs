//! Hooks for displaying the grid while the simulation runs.

use crate::grid::Grid;
use educe::Educe;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Something that displays snapshots of the grid.
///
/// It is called once with generation `0` after the grid is built,
/// and once after every transition. It only observes the grid;
/// the simulation does not depend on what it does.
pub trait Renderer {
    /// Displays a snapshot of the grid after `generation` transitions.
    fn render(&mut self, grid: &Grid, generation: u64);
}

/// Any closure taking a grid and a generation is a renderer.
impl<F: FnMut(&Grid, u64)> Renderer for F {
    fn render(&mut self, grid: &Grid, generation: u64) {
        self(grid, generation)
    }
}

/// A renderer that displays nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    #[inline]
    fn render(&mut self, _grid: &Grid, _generation: u64) {}
}

/// How to draw cells when displaying the grid as text.
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Glyphs {
    /// Text for a living cell.
    #[educe(Default = "X ")]
    pub live: String,

    /// Text for a dead cell.
    #[educe(Default = ". ")]
    pub dead: String,

    /// Marker at the top of the grid and at the end of every row.
    #[educe(Default = ' ')]
    pub border: char,
}
