//! Row-by-row construction of [`Grid`]s with every shape problem collected before reporting.

use ndarray::Array2;

use crate::error::{GridInvalidReason, Result, WordSearchError};
use crate::grid::Grid;
use crate::position::{Coord, Dimension};

/// A builder for rectangular [`Grid`]s, fed one row at a time.
///
/// Problems are not reported as they happen; the builder records every [`GridInvalidReason`] it sees and
/// [`build`](Self::build) reports them together.
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
#[derive(Clone, Debug)]
pub struct GridBuilder {
    // height, width
    dims: Option<(Dimension, Dimension)>,
    cells: Vec<char>,
    rows_added: usize,
    invalid_reasons: Vec<GridInvalidReason>,
}

impl GridBuilder {
    /// Construct a new builder expecting `height` rows of `width` cells each.
    ///
    /// A zero dimension puts the builder into a [`ZeroDimension`](GridInvalidReason::ZeroDimension) invalid state.
    pub fn with_dims(height: Coord, width: Coord) -> Self {
        let dims = Dimension::new(height).zip(Dimension::new(width));

        Self {
            dims,
            cells: Vec::new(),
            rows_added: 0,
            invalid_reasons: match dims {
                Some(_) => Vec::new(),
                None => vec![GridInvalidReason::ZeroDimension],
            },
        }
    }

    /// Append the next row.
    ///
    /// May cause the builder to enter a [`RowLengthMismatch`](GridInvalidReason::RowLengthMismatch) or
    /// [`TooManyRows`](GridInvalidReason::TooManyRows) invalid state.
    /// Rows are still counted after the builder becomes invalid so that every bad row gets reported.
    pub fn add_row<R: AsRef<[char]>>(&mut self, row: R) -> &mut Self {
        let row = row.as_ref();
        let index = self.rows_added;
        self.rows_added += 1;

        let Some((height, width)) = self.dims else {
            return self;
        };

        if index == height.get() {
            self.invalid_reasons.push(GridInvalidReason::TooManyRows);
        } else if index > height.get() {
            // already reported
        } else if row.len() != width.get() {
            self.invalid_reasons.push(GridInvalidReason::RowLengthMismatch {
                row: index,
                expected: width.get(),
                found: row.len(),
            });
        } else if self.invalid_reasons.is_empty() {
            self.cells.extend_from_slice(row);
        }

        self
    }

    /// Shorthand for repeated calls to [`Self::add_row`].
    pub fn add_rows<I, R>(&mut self, rows: I) -> &mut Self
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[char]>,
    {
        for row in rows {
            self.add_row(row);
        }

        self
    }

    /// Check the validity of this builder so far.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<GridInvalidReason>)` otherwise.
    /// A builder still waiting on rows is not yet invalid.
    pub fn is_valid(&self) -> Option<&Vec<GridInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Grid`].
    ///
    /// Fails with [`InvalidGridFormat`](WordSearchError::InvalidGridFormat) listing every problem found.
    pub fn build(&self) -> Result<Grid> {
        let mut reasons = self.invalid_reasons.clone();

        if let Some((height, _)) = self.dims {
            if self.rows_added < height.get() {
                reasons.push(GridInvalidReason::MissingRows { expected: height.get(), found: self.rows_added });
            }
        }

        match self.dims {
            Some((height, width)) if reasons.is_empty() => {
                Array2::from_shape_vec((height.get(), width.get()), self.cells.clone())
                    .map(Grid::from_array)
                    .map_err(|_| WordSearchError::InvalidGridFormat {
                        reasons: vec![GridInvalidReason::MissingRows { expected: height.get(), found: self.rows_added }],
                    })
            }
            _ => Err(WordSearchError::InvalidGridFormat { reasons }),
        }
    }
}
