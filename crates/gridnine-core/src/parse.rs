//! Loader for comma-separated puzzle text.
//!
//! The input is line-oriented: one row per line, nine comma-separated
//! fields per row, nine rows. A field that parses as an integer in 1-9
//! is a fixed cell; any other token (conventionally `x`) is an open
//! cell. Numeric fields outside 1-9 are rejected rather than treated
//! as placeholders, since they are almost certainly typos.

use std::{io, str::FromStr};

use crate::{cell::Cell, digit::Digit, grid::Grid, position::Position};

/// Error returned when puzzle text cannot be loaded into a [`Grid`].
///
/// Structural problems are reported with the offending raw row text so
/// the user can find them in the file.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ParseGridError {
    /// A row did not split into exactly nine comma-separated fields.
    #[display("malformed row data: [{row}]")]
    MalformedRow {
        /// The raw text of the offending row.
        row: String,
    },
    /// A numeric field was outside the range 1-9.
    #[display("malformed row data, {value} is not between 1 and 9: [{row}]")]
    OutOfRangeValue {
        /// The out-of-range number as written.
        value: i64,
        /// The raw text of the offending row.
        row: String,
    },
    /// Input ended before nine rows were read.
    #[display("invalid puzzle data, expected 9 rows, found {found} row(s)")]
    InsufficientRows {
        /// The number of rows actually present.
        found: usize,
    },
    /// The underlying reader failed.
    #[display("{_0}")]
    Io(#[from] io::Error),
}

impl Grid {
    /// Reads a grid from line-oriented puzzle text.
    ///
    /// Reading stops after the ninth row; anything beyond it is
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ParseGridError`] if the reader fails or the text does
    /// not describe a well-formed 9×9 grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridnine_core::Grid;
    ///
    /// let text = "1,2,3,4,5,6,7,8,9\n".repeat(9);
    /// let grid = Grid::from_reader(text.as_bytes())?;
    /// assert!(grid.is_solved());
    /// # Ok::<(), gridnine_core::ParseGridError>(())
    /// ```
    pub fn from_reader(reader: impl io::BufRead) -> Result<Self, ParseGridError> {
        let mut grid = Self::new();
        let mut rows_read = 0;

        for (row_index, line) in reader.lines().take(9).enumerate() {
            let line = line?;
            parse_row(&mut grid, row_index, &line)?;
            rows_read += 1;
        }

        if rows_read < 9 {
            return Err(ParseGridError::InsufficientRows { found: rows_read });
        }

        Ok(grid)
    }
}

fn parse_row(grid: &mut Grid, row_index: usize, line: &str) -> Result<(), ParseGridError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 9 {
        return Err(ParseGridError::MalformedRow {
            row: line.to_owned(),
        });
    }

    #[expect(clippy::cast_possible_truncation)]
    let row_index = row_index as u8;
    for (col_index, field) in (0..).zip(fields) {
        // A field that fails integer parsing is an open-cell placeholder.
        let Ok(value) = field.parse::<i64>() else {
            continue;
        };
        let digit = u8::try_from(value)
            .ok()
            .and_then(Digit::try_from_value)
            .ok_or_else(|| ParseGridError::OutOfRangeValue {
                value,
                row: line.to_owned(),
            })?;
        grid[Position::new(row_index, col_index)] = Cell::Fixed(digit);
    }

    Ok(())
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_reader(s.as_bytes())
    }
}
