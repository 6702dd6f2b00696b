//! Reading queries from the plain-text input format.
//!
//! Each query is a header line `<height> <width>`, then `height` lines of `width` whitespace-separated cells,
//! then one line of whitespace-separated words. Queries follow one another until the end of input; blank lines
//! between queries are ignored. Only the first character of each cell token is kept.

use std::fs;
use std::path::Path;

use itertools::Itertools;
use log::debug;

use crate::builder::GridBuilder;
use crate::error::{Result, WordSearchError};
use crate::query::Query;

/// Read and parse every query in the file at `path`.
pub fn read_queries<P: AsRef<Path>>(path: P) -> Result<Vec<Query>> {
    let text = fs::read_to_string(path.as_ref())?;
    debug!("read {} bytes from {}", text.len(), path.as_ref().display());
    parse_queries(&text)
}

/// Parse every query in `input`.
///
/// Malformed headers and missing lines fail with [`InvalidInput`](WordSearchError::InvalidInput), carrying the
/// 1-based line number. Grids of the wrong shape fail with [`InvalidGridFormat`](WordSearchError::InvalidGridFormat).
pub fn parse_queries(input: &str) -> Result<Vec<Query>> {
    let mut lines = input.lines()
        .enumerate()
        .map(|(number, line)| (number + 1, line.trim_end()));
    let mut queries = Vec::new();

    while let Some((number, header)) = lines.by_ref().find(|(_, line)| !line.trim().is_empty()) {
        let (height, width) = parse_header(number, header)?;

        let mut builder = GridBuilder::with_dims(height, width);
        for row in 0..height {
            let Some((_, line)) = lines.next() else {
                return Err(WordSearchError::invalid_input(
                    number + row + 1,
                    format!("expected grid row {} of {height}", row + 1),
                ));
            };

            let cells = line.split_whitespace()
                .filter_map(|token| token.chars().next())
                .collect_vec();
            builder.add_row(cells);
        }
        let grid = builder.build()?;

        let Some((_, words)) = lines.next() else {
            return Err(WordSearchError::invalid_input(number + height + 1, "expected a line of words"));
        };

        queries.push(Query::new(grid, words.split_whitespace()));
    }

    debug!("parsed {} queries", queries.len());
    Ok(queries)
}

fn parse_header(number: usize, line: &str) -> Result<(usize, usize)> {
    let Some((height, width)) = line.split_whitespace().collect_tuple() else {
        return Err(WordSearchError::invalid_input(number, format!("expected \"<height> <width>\", got {line:?}")));
    };

    // non-positive dimensions are a grid problem, left for the builder to report as ZeroDimension
    let parse = |token: &str| {
        token.parse::<i64>()
            .map(|dimension| usize::try_from(dimension.max(0)).unwrap_or(usize::MAX))
            .map_err(|e| WordSearchError::invalid_input(number, format!("bad dimension {token:?}: {e}")))
    };

    Ok((parse(height)?, parse(width)?))
}

#[cfg(test)]
mod tests {
    use crate::error::{GridInvalidReason, WordSearchError};
    use crate::parser::parse_queries;

    #[test]
    fn parses_consecutive_queries() {
        let queries = parse_queries("2 2
A B
C D
AB CD

1 3
X Y Z
XZ
").unwrap();

        assert_eq!(queries.len(), 2);
        assert_eq!(queries[0].grid.to_string(), "A B\nC D\n");
        assert_eq!(queries[0].words, vec!["AB", "CD"]);
        assert_eq!(queries[1].grid.width(), 3);
        assert_eq!(queries[1].words, vec!["XZ"]);
    }

    #[test]
    fn keeps_first_character_of_cell_tokens() {
        let queries = parse_queries("1 2\nAx By\nAB\n").unwrap();
        assert_eq!(queries[0].grid.to_string(), "A B\n");
    }

    #[test]
    fn empty_input_has_no_queries() {
        assert!(parse_queries("").unwrap().is_empty());
        assert!(parse_queries("\n\n").unwrap().is_empty());
    }

    #[test]
    fn bad_header() {
        match parse_queries("2\nA B\n") {
            Err(WordSearchError::InvalidInput { line, .. }) => assert_eq!(line, 1),
            other => panic!("unexpected {other:?}"),
        }
        match parse_queries("\n2 x\n") {
            Err(WordSearchError::InvalidInput { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn missing_words_line() {
        match parse_queries("1 1\nA\n") {
            Err(WordSearchError::InvalidInput { line, .. }) => assert_eq!(line, 3),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn missing_grid_row() {
        match parse_queries("3 1\nA\nB\n") {
            Err(WordSearchError::InvalidInput { line, .. }) => assert_eq!(line, 4),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn ragged_row() {
        match parse_queries("2 2\nA B\nC\nAB\n") {
            Err(WordSearchError::InvalidGridFormat { reasons }) => assert_eq!(reasons, vec![
                GridInvalidReason::RowLengthMismatch { row: 1, expected: 2, found: 1 },
            ]),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn negative_dimension_is_a_grid_error() {
        for input in ["-1 2\nA B\nAB\n", "2 -3\nA B\nAB\n"] {
            match parse_queries(input) {
                Err(WordSearchError::InvalidGridFormat { reasons }) => assert_eq!(reasons, vec![GridInvalidReason::ZeroDimension]),
                other => panic!("unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn zero_dimension() {
        match parse_queries("0 2\nAB\n") {
            Err(WordSearchError::InvalidGridFormat { reasons }) => assert_eq!(reasons, vec![GridInvalidReason::ZeroDimension]),
            other => panic!("unexpected {other:?}"),
        }
    }
}
