#![warn(missing_docs)]

//! # `wordpath`
//!
//! Finds every way to spell a set of words along adjacent cells of a letter grid.
//! Two cells are adjacent when their rows and columns each differ by at most one, so diagonal steps count.
//!
//! Begin by building a [`Grid`], either with a [`GridBuilder`](builder::GridBuilder), with [`Grid::from_rows`],
//! or by reading queries from text with [`parser::parse_queries`].
//! Index it with [`build_index`], then hand words to a [`PathFinder`] or [`find_paths`].
//! To process whole queries and get sorted, rendered output, use a [`QueryRunner`].
//!
//! # Internals
//! Indexing scans the grid once and records, for every character, the positions holding it in row-major order.
//! The search never consults the grid again. For a word `w`, every position of `w[0]` starts a partial path;
//! a partial path of length `i` is extended by every indexed position of `w[i]` adjacent to its last position,
//! with a single path buffer pushed before and popped after each step. Complete paths are copied out.
//!
//! By default only adjacency is checked, so a path may come back to a cell it already used, and since a cell is
//! adjacent to itself, a repeated letter may be spelled twice from the same cell.
//! Classic one-use-per-cell rules are available as [`CellReuse::Forbid`].
//!
//! The search is exponential in word length in the worst case. [`SearchLimits`] bounds the word length and,
//! optionally, the number of partial paths visited per word.

pub use builder::GridBuilder;
pub use error::{GridInvalidReason, Result, WordSearchError};
pub use grid::Grid;
pub use index::{build_index, CharPositionIndex};
pub use path::Path;
pub use position::Position;
pub use query::{render_line, run_query, Query, QueryOutput, QueryRunner};
pub use search::{find_paths, CellReuse, PathFinder, SearchLimits, SearchOptions};
pub use word::Word;

pub mod builder;
pub(crate) mod error;
pub(crate) mod grid;
pub(crate) mod index;
pub mod parser;
pub(crate) mod path;
pub(crate) mod position;
pub(crate) mod query;
pub(crate) mod search;
pub(crate) mod word;
