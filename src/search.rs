use std::collections::HashSet;

use log::{debug, trace, warn};
use strum::{Display, EnumString, VariantNames};

use crate::error::{Result, WordSearchError};
use crate::index::CharPositionIndex;
use crate::path::Path;
use crate::position::Position;
use crate::word::Word;

/// Whether a path may use the same cell more than once.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Display, EnumString, VariantNames)]
#[strum(serialize_all = "lowercase")]
pub enum CellReuse {
    /// Only adjacency is checked. A cell may reappear anywhere in a path, including twice in a row
    /// when a letter repeats, since a cell is at distance 0 from itself.
    #[default]
    Allow,
    /// Classic word search rules: each cell is used at most once per path.
    Forbid,
}

/// Bounds on a single word's search.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SearchLimits {
    /// Longest word that will be searched.
    pub max_depth: usize,
    /// Maximum number of search nodes (partial paths) visited per word, if any.
    pub max_nodes: Option<u64>,
}

impl SearchLimits {
    /// Default word length guard, in characters.
    pub const DEFAULT_MAX_DEPTH: usize = 4096;
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            max_nodes: None,
        }
    }
}

/// Everything that changes how a [`PathFinder`] searches.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct SearchOptions {
    /// Whether a path may use a cell more than once.
    pub cell_reuse: CellReuse,
    /// Depth and node bounds.
    pub limits: SearchLimits,
}

/// Depth-first backtracking search for every path spelling a word, driven entirely by an index.
///
/// The grid is not needed: candidates for each next character come from the index and adjacency is decided
/// from coordinates alone. A finder borrows its index immutably, so any number of finders may share one.
pub struct PathFinder<'a> {
    index: &'a CharPositionIndex,
    options: SearchOptions,
}

// per-word mutable state; one path buffer, plus one candidate cursor per buffered position
struct SearchState<'w> {
    word: &'w [char],
    buffer: Vec<Position>,
    cursors: Vec<usize>,
    visited: HashSet<Position>,
    found: Vec<Path>,
    explored: u64,
}

impl<'a> PathFinder<'a> {
    /// Construct a finder over `index`.
    pub fn new(index: &'a CharPositionIndex, options: SearchOptions) -> Self {
        Self { index, options }
    }

    /// The options this finder searches with.
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Find every path spelling `word`. The order of the returned paths is unspecified.
    ///
    /// A word whose first character is absent from the index yields no paths rather than an error.
    /// Fails with [`DepthExceeded`](WordSearchError::DepthExceeded) if `word` is longer than the depth guard,
    /// or [`ResourceExhausted`](WordSearchError::ResourceExhausted) if the node budget runs out mid-search.
    pub fn find(&self, word: &Word) -> Result<Vec<Path>> {
        if word.len() > self.options.limits.max_depth {
            return Err(WordSearchError::DepthExceeded { depth: word.len(), limit: self.options.limits.max_depth });
        }

        let mut state = SearchState {
            word: word.chars(),
            buffer: Vec::with_capacity(word.len()),
            cursors: Vec::with_capacity(word.len()),
            visited: HashSet::new(),
            found: Vec::new(),
            explored: 0,
        };

        for &start in self.index.positions_of(word.chars()[0]) {
            trace!("searching {word} from {start}");
            self.search_from(&mut state, start)?;
        }

        debug!("{word}: {} paths, {} nodes explored", state.found.len(), state.explored);
        Ok(state.found)
    }

    /// Depth-first walk from `start` using the buffer and cursor stack instead of the call stack.
    ///
    /// The cursor on top of the stack is the index, into the candidates for the next character, of the first
    /// candidate not yet tried from the last buffered position.
    fn search_from(&self, state: &mut SearchState, start: Position) -> Result<()> {
        self.push(state, start)?;

        while let Some(&cursor) = state.cursors.last() {
            let depth = state.buffer.len();
            let next = if depth == state.word.len() {
                None
            } else {
                self.next_candidate(state, depth, cursor)
            };

            match next {
                Some((offset, candidate)) => {
                    let top = state.cursors.len() - 1;
                    state.cursors[top] = offset + 1;
                    self.push(state, candidate)?;
                }
                None => self.pop(state),
            }
        }

        Ok(())
    }

    /// The first candidate for `word[depth]` at or after `cursor` that may follow the last buffered position.
    fn next_candidate(&self, state: &SearchState, depth: usize, cursor: usize) -> Option<(usize, Position)> {
        let last = *state.buffer.last()?;
        let forbid = self.options.cell_reuse == CellReuse::Forbid;

        self.index.positions_of(state.word[depth])
            .iter()
            .enumerate()
            .skip(cursor)
            .find(|(_, candidate)| candidate.is_adjacent_to(last) && !(forbid && state.visited.contains(*candidate)))
            .map(|(offset, candidate)| (offset, *candidate))
    }

    /// Extend the path by `next`, recording it if it completes the word.
    fn push(&self, state: &mut SearchState, next: Position) -> Result<()> {
        state.explored += 1;
        if let Some(budget) = self.options.limits.max_nodes {
            if state.explored > budget {
                warn!("node budget of {budget} exhausted");
                return Err(WordSearchError::ResourceExhausted { explored: state.explored, budget });
            }
        }

        state.buffer.push(next);
        state.cursors.push(0);
        if self.options.cell_reuse == CellReuse::Forbid {
            state.visited.insert(next);
        }

        if state.buffer.len() == state.word.len() {
            state.found.push(Path::from(state.buffer.clone()));
        }

        Ok(())
    }

    fn pop(&self, state: &mut SearchState) {
        state.cursors.pop();
        if let Some(last) = state.buffer.pop() {
            if self.options.cell_reuse == CellReuse::Forbid {
                state.visited.remove(&last);
            }
        }
    }
}

/// Find every path spelling `word` in `index` with default [`SearchOptions`].
pub fn find_paths(word: &Word, index: &CharPositionIndex) -> Result<Vec<Path>> {
    PathFinder::new(index, SearchOptions::default()).find(word)
}
