//! Grid module - manages the playfield
//!
//! The grid is a W x H matrix where each cell is empty or holds a settled color.
//! Uses a flat vector sized once at construction; it is never resized afterwards.
//! Coordinates: (x, y) where x is the column (left to right) and y the row
//! (top to bottom), origin top-left.
//!
//! Full rows are cleared in place. Rows above a cleared row stay where they are.

use crate::types::{Cell, LearntrisError, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};

/// The playfield - flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid of the reference size (10x22)
    pub fn new() -> Self {
        Self::with_dimensions(DEFAULT_GRID_WIDTH, DEFAULT_GRID_HEIGHT)
    }

    /// Create an empty grid with the given dimensions
    pub fn with_dimensions(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    /// Get cell at position (x, y)
    pub fn cell_at(&self, x: i32, y: i32) -> Result<Cell, LearntrisError> {
        self.index(x, y)
            .map(|idx| self.cells[idx])
            .ok_or(LearntrisError::OutOfBounds { x, y })
    }

    /// Set cell at position (x, y)
    pub fn set_cell(&mut self, x: i32, y: i32, cell: Cell) -> Result<(), LearntrisError> {
        let idx = self
            .index(x, y)
            .ok_or(LearntrisError::OutOfBounds { x, y })?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.cell_at(x, y), Ok(Some(_)))
    }

    /// Borrow one row; `y` must be below `height`
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    /// Iterate over rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1)).take(self.height)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Empty every full row in place and return how many were cleared
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        for y in 0..self.height {
            if self.is_row_full(y) {
                let start = y * self.width;
                self.cells[start..start + self.width].fill(None);
                cleared += 1;
            }
        }
        cleared
    }

    /// Clear the entire grid
    pub fn reset(&mut self) {
        self.cells.fill(None);
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
