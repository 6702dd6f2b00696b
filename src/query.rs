use itertools::Itertools;
use log::{debug, info};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::Result;
use crate::grid::Grid;
use crate::index::build_index;
use crate::path::Path;
use crate::search::{PathFinder, SearchOptions};
use crate::word::Word;

/// One grid paired with the words to look for in it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Query {
    /// The grid to search.
    pub grid: Grid,
    /// Words to search for, unvalidated and in input order.
    pub words: Vec<String>,
}

impl Query {
    /// Pair `grid` with `words`. Words are validated when the query runs.
    pub fn new<S: Into<String>>(grid: Grid, words: impl IntoIterator<Item = S>) -> Self {
        Self {
            grid,
            words: words.into_iter().map(Into::into).collect_vec(),
        }
    }
}

/// The sorted, rendered result of running one [`Query`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct QueryOutput {
    /// One rendered line per path, sorted.
    pub lines: Vec<String>,
}

/// Render one result line: the word, a space, then the path, e.g. `AB (0,0)->(0,1)`.
pub fn render_line(word: &Word, path: &Path) -> String {
    format!("{word} {path}")
}

/// Runs queries with a fixed set of [`SearchOptions`].
#[derive(Copy, Clone, Debug, Default)]
pub struct QueryRunner {
    /// Options used for every word of every query.
    pub options: SearchOptions,
    /// Spread a batch across threads. Only honored when built with the `parallel` feature.
    pub parallel: bool,
}

impl QueryRunner {
    /// Construct a sequential runner.
    pub fn new(options: SearchOptions) -> Self {
        Self { options, parallel: false }
    }

    /// Set whether [`run_batch`](Self::run_batch) runs queries in parallel.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Search for every word of `query` and return all rendered lines, sorted lexicographically.
    ///
    /// The grid is indexed once and shared by all words. Duplicate words are searched again and contribute
    /// their lines again. A word that fails validation, or a search that hits a limit, fails the whole query.
    pub fn run_query(&self, query: &Query) -> Result<QueryOutput> {
        let index = build_index(&query.grid);
        let finder = PathFinder::new(&index, self.options);

        let mut lines = Vec::new();
        for text in &query.words {
            let word = Word::new(text)?;
            lines.extend(finder.find(&word)?.iter().map(|path| render_line(&word, path)));
        }

        lines.sort_unstable();
        debug!("query produced {} lines", lines.len());

        Ok(QueryOutput { lines })
    }

    /// Run every query independently, returning outputs in input order.
    ///
    /// Stops at the first failing query.
    pub fn run_batch(&self, queries: &[Query]) -> Result<Vec<QueryOutput>> {
        info!("running {} queries", queries.len());

        #[cfg(feature = "parallel")]
        if self.parallel {
            return queries.par_iter().map(|query| self.run_query(query)).collect();
        }

        queries.iter().map(|query| self.run_query(query)).collect()
    }
}

/// Run `query` with default options.
pub fn run_query(query: &Query) -> Result<QueryOutput> {
    QueryRunner::default().run_query(query)
}
