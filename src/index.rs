use std::collections::HashMap;

use itertools::Itertools;
use log::debug;

use crate::error::Result;
use crate::grid::Grid;
use crate::position::Position;

/// Lookup from each character of a grid to every [`Position`] holding it.
///
/// Positions under each character are kept in row-major scan order, and every cell of the grid appears under
/// exactly one character. The index is read-only once built and can be shared freely between searches.
#[derive(Clone, Debug, Default)]
pub struct CharPositionIndex {
    positions: HashMap<char, Vec<Position>>,
    cell_count: usize,
}

impl CharPositionIndex {
    /// Validate raw rows as a grid, then index it.
    ///
    /// Ragged or empty input fails with [`InvalidGridFormat`](crate::WordSearchError::InvalidGridFormat)
    /// before any indexing happens.
    pub fn from_rows<R: AsRef<[char]>>(rows: &[R]) -> Result<Self> {
        Ok(build_index(&Grid::from_rows(rows)?))
    }

    /// Every position holding `ch`, in row-major order. Empty if `ch` is absent from the grid.
    pub fn positions_of(&self, ch: char) -> &[Position] {
        self.positions.get(&ch).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `ch` occurs anywhere in the grid.
    pub fn contains(&self, ch: char) -> bool {
        self.positions.contains_key(&ch)
    }

    /// The distinct characters of the grid, in no particular order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.positions.keys().copied()
    }

    /// Total number of positions across all characters; equal to the grid's cell count.
    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    /// Iterate over `(character, positions)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &[Position])> + '_ {
        self.positions.iter().map(|(ch, positions)| (*ch, positions.as_slice()))
    }
}

/// Scan `grid` once and record where each character occurs.
pub fn build_index(grid: &Grid) -> CharPositionIndex {
    // into_group_map keeps per-key insertion order, and cells() is row-major
    let positions = grid.cells()
        .map(|(position, ch)| (ch, position))
        .into_group_map();

    debug!("indexed {}x{} grid: {} distinct characters", grid.height(), grid.width(), positions.len());

    CharPositionIndex {
        positions,
        cell_count: grid.height() * grid.width(),
    }
}
