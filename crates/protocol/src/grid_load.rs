//! Grid loading from the input stream (`g` command).
//!
//! Each of the H lines that follow `g` must hold exactly W single-character tokens
//! separated by single spaces. A line with the wrong token count is rejected before
//! any of its cells are written. Otherwise tokens are written left to right and the
//! first bad token stops the load, so the cells before it keep their new values.
//! Rows after the bad line are left as they were.

use std::io::{self, BufRead};

use tracing::warn;

use crate::core::Grid;
use crate::types::{Cell, Color, LearntrisError, EMPTY_SYMBOL};

/// How a grid load ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridLoadOutcome {
    /// All rows were read
    Complete,
    /// Row `rows_loaded` was rejected after that many good rows
    Aborted {
        rows_loaded: usize,
        error: LearntrisError,
    },
    /// The input ran out after `rows_loaded` rows
    EndOfInput { rows_loaded: usize },
}

/// Decode one grid token: `.` or a color symbol in either case
pub fn parse_grid_token(token: &str, row: usize) -> Result<Cell, LearntrisError> {
    let mut chars = token.chars();
    let (Some(symbol), None) = (chars.next(), chars.next()) else {
        return Err(LearntrisError::MalformedGridLine {
            row,
            reason: format!("token '{token}' is not a single character"),
        });
    };
    if symbol == EMPTY_SYMBOL {
        return Ok(None);
    }
    Color::from_symbol(symbol)
        .map(Some)
        .ok_or_else(|| LearntrisError::MalformedGridLine {
            row,
            reason: format!("unknown color '{symbol}'"),
        })
}

/// Write one grid line into row `row`, stopping at the first bad token
pub fn load_grid_line(line: &str, grid: &mut Grid, row: usize) -> Result<(), LearntrisError> {
    let width = grid.width();
    let tokens: Vec<&str> = line.split(' ').collect();
    if tokens.len() != width {
        return Err(LearntrisError::MalformedGridLine {
            row,
            reason: format!("expected {width} tokens, got {}", tokens.len()),
        });
    }

    for (x, token) in tokens.into_iter().enumerate() {
        let cell = parse_grid_token(token, row)?;
        grid.set_cell(x as i32, row as i32, cell)?;
    }
    Ok(())
}

/// Read up to `grid.height()` lines from `input` into `grid`
///
/// Malformed lines are not an error for the caller; they end the load and are
/// reported in the outcome. Only I/O failures are returned as `Err`.
pub fn load_grid<R: BufRead>(input: &mut R, grid: &mut Grid) -> io::Result<GridLoadOutcome> {
    let mut line = String::new();

    for row in 0..grid.height() {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(GridLoadOutcome::EndOfInput { rows_loaded: row });
        }

        if let Err(error) = load_grid_line(line.trim_end(), grid, row) {
            warn!(%error, "grid load aborted");
            return Ok(GridLoadOutcome::Aborted {
                rows_loaded: row,
                error,
            });
        }
    }

    Ok(GridLoadOutcome::Complete)
}
