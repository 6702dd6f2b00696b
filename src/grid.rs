use std::fmt::{Display, Formatter};

use itertools::Itertools;
use ndarray::Array2;

use crate::builder::GridBuilder;
use crate::error::Result;
use crate::position::{Coord, Position};

/// A rectangular, fully populated grid of single characters.
///
/// Grids are immutable once built. Use a [`GridBuilder`] or [`Grid::from_rows`] to make one.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid {
    cells: Array2<char>,
}

impl Grid {
    /// Only called by [`GridBuilder`], which guarantees both dimensions are nonzero.
    pub(crate) fn from_array(cells: Array2<char>) -> Self {
        Self { cells }
    }

    /// Build a grid from rows of characters, taking the width from the first row.
    ///
    /// Rows of differing lengths and empty input are rejected with
    /// [`InvalidGridFormat`](crate::WordSearchError::InvalidGridFormat).
    pub fn from_rows<R: AsRef<[char]>>(rows: &[R]) -> Result<Self> {
        let width = rows.first().map_or(0, |row| row.as_ref().len());

        GridBuilder::with_dims(rows.len(), width)
            .add_rows(rows)
            .build()
    }

    /// Convenience for tests and callers holding string rows, one character per cell.
    pub fn from_strs(rows: &[&str]) -> Result<Self> {
        Self::from_rows(&rows.iter().map(|row| row.chars().collect_vec()).collect_vec())
    }

    /// Number of rows.
    pub fn height(&self) -> Coord {
        self.cells.nrows()
    }

    /// Number of columns.
    pub fn width(&self) -> Coord {
        self.cells.ncols()
    }

    /// The character at `position`, or `None` if out of bounds.
    pub fn at(&self, position: Position) -> Option<char> {
        self.cells.get(position.as_index()).copied()
    }

    /// Every cell with its position, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        self.cells.indexed_iter().map(|(index, ch)| (Position::from(index), *ch))
    }

    /// Every position, in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        (0..self.height()).cartesian_product(0..self.width()).map(Position::from)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.rows() {
            writeln!(f, "{}", row.iter().join(" "))?;
        }

        Ok(())
    }
}
