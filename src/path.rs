use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::grid::Grid;
use crate::position::Position;
use crate::word::Word;

/// A sequence of positions spelling a word, one position per character.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Path(Vec<Position>);

impl Path {
    /// The positions of this path, in spelling order.
    pub fn positions(&self) -> &[Position] {
        &self.0
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the path has no positions. Paths produced by a search never are.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether any position is used more than once.
    pub fn revisits_cell(&self) -> bool {
        !self.0.iter().all_unique()
    }

    /// Check that this path spells `word` on `grid`: one position per character, each holding its character,
    /// and each within Chebyshev distance 1 of the one before.
    pub fn is_valid_for(&self, word: &Word, grid: &Grid) -> bool {
        self.len() == word.len()
            && self.0.iter().zip(word.chars()).all(|(position, ch)| grid.at(*position) == Some(*ch))
            && self.0.iter().tuple_windows().all(|(a, b)| a.is_adjacent_to(*b))
    }
}

impl From<Vec<Position>> for Path {
    fn from(value: Vec<Position>) -> Self {
        Self(value)
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join("->"))
    }
}
