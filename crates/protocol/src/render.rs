//! Plain-text rendering of the grid and pieces.
//!
//! Rows are separated by newlines and cells by single spaces. Settled blocks use
//! lowercase symbols, the active piece overlay uppercase, and `.` marks empty cells.

use std::io::{self, Write};

use crate::core::{ActivePiece, Grid, Tetromino};
use crate::types::{cell_symbol, EMPTY_SYMBOL};

/// Build the symbol matrix for a grid, optionally with the active piece on top
pub fn grid_symbols(grid: &Grid, overlay: Option<&ActivePiece>) -> Vec<Vec<char>> {
    let mut rows: Vec<Vec<char>> = grid
        .rows()
        .map(|row| row.iter().map(|&cell| cell_symbol(cell)).collect())
        .collect();

    if let Some(piece) = overlay {
        let symbol = piece.tetromino.color().active_symbol();
        for (x, y) in piece.cells() {
            if grid.in_bounds(x, y) {
                rows[y as usize][x as usize] = symbol;
            }
        }
    }

    rows
}

/// Symbol matrix for a piece's own bounding box
pub fn piece_symbols(tetromino: &Tetromino) -> Vec<Vec<char>> {
    tetromino
        .box_rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| cell.map_or(EMPTY_SYMBOL, |c| c.symbol()))
                .collect()
        })
        .collect()
}

/// Write a symbol matrix, one line per row
pub fn write_symbols<W: Write>(out: &mut W, rows: &[Vec<char>]) -> io::Result<()> {
    let mut line = String::new();
    for row in rows {
        line.clear();
        for (i, symbol) in row.iter().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            line.push(*symbol);
        }
        writeln!(out, "{line}")?;
    }
    Ok(())
}
