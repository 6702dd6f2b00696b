use std::fmt::{Display, Formatter};
use std::num::NonZero;

use ndarray::Ix;

pub(crate) type Coord = usize;
pub(crate) type Dimension = NonZero<Coord>;

/// A cell `(row, column)` on a grid. The top left corner is `Position(0, 0)`.
#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
pub struct Position(pub Coord, pub Coord);

impl Position {
    /// Row index.
    pub fn row(&self) -> Coord {
        self.0
    }

    /// Column index.
    pub fn col(&self) -> Coord {
        self.1
    }

    pub(crate) fn as_index(&self) -> (Coord, Coord) {
        (self.0, self.1)
    }

    /// Chebyshev distance to `other`: the larger of the row and column differences.
    pub fn distance_to(&self, other: Position) -> Coord {
        self.0.abs_diff(other.0).max(self.1.abs_diff(other.1))
    }

    /// Whether `other` is within Chebyshev distance 1 of `self`.
    ///
    /// A position counts as adjacent to itself.
    pub fn is_adjacent_to(&self, other: Position) -> bool {
        self.distance_to(other) <= 1
    }
}

impl From<(Ix, Ix)> for Position {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.0, value.1)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}
