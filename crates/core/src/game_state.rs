//! Game state module - manages the complete game state
//!
//! This module ties together the grid, the active piece, the spawn randomizer and
//! scoring. Every move goes through copy-validate-commit: a candidate piece is built
//! from the current one, checked against the grid, and only then swapped in.
//!
//! There is no gravity clock. Pieces only descend on explicit soft or hard drops,
//! and full rows are only cleared by an explicit [`GameState::step`].

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::rng::PieceRandomizer;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::tetromino::Tetromino;
use crate::types::*;

/// Grid-space cells covered by a piece
pub type PieceCells = ArrayVec<(i32, i32), 4>;

/// A tetromino anchored in the grid by the top-left corner of its bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub tetromino: Tetromino,
    pub x: i32,
    pub y: i32,
}

impl ActivePiece {
    /// Anchor a fresh tetromino at the spawn position for its box size
    pub fn spawn(kind: PieceKind) -> Self {
        let x = if kind.box_size() < 3 {
            SMALL_SPAWN_COLUMN
        } else {
            SPAWN_COLUMN
        };
        Self {
            tetromino: Tetromino::new(kind),
            x,
            y: SPAWN_ROW,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.tetromino.kind()
    }

    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    pub fn rotated(&self, spin: Spin) -> Self {
        Self {
            tetromino: self.tetromino.rotated(spin),
            ..*self
        }
    }

    /// Occupied cells offset by the anchor
    pub fn cells(&self) -> PieceCells {
        self.tetromino
            .shape()
            .iter()
            .map(|&(dx, dy)| (self.x + dx as i32, self.y + dy as i32))
            .collect()
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    active: ActivePiece,
    pieces: PieceRandomizer,
    score: u32,
    lines: u32,
    in_title: bool,
    paused: bool,
    /// Set by the first confirm after leaving the title screen
    start_consumed: bool,
}

impl GameState {
    /// Create a new game on the reference 10x22 grid
    pub fn new(seed: u32) -> Self {
        Self::with_dimensions(DEFAULT_GRID_WIDTH, DEFAULT_GRID_HEIGHT, seed)
    }

    /// Create a new game with fixed grid dimensions and spawn the first piece
    pub fn with_dimensions(width: usize, height: usize, seed: u32) -> Self {
        let mut pieces = PieceRandomizer::new(seed);
        let first = pieces.draw();

        Self {
            grid: Grid::with_dimensions(width, height),
            active: ActivePiece::spawn(first),
            pieces,
            score: 0,
            lines: 0,
            in_title: false,
            paused: false,
            start_consumed: false,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn in_title(&self) -> bool {
        self.in_title
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn seed(&self) -> u32 {
        self.pieces.seed()
    }

    /// Replace the active piece with a fresh one of `kind`
    ///
    /// Spawning does not check the grid; a piece may appear on top of settled blocks.
    pub fn spawn(&mut self, kind: PieceKind) {
        self.active = ActivePiece::spawn(kind);
    }

    /// Replace the active piece with a random kind
    pub fn spawn_random(&mut self) -> PieceKind {
        let kind = self.pieces.draw();
        self.spawn(kind);
        kind
    }

    /// Check a candidate piece against the grid
    ///
    /// Columns must be inside the grid and rows above the bottom edge. Rows above the
    /// top edge are allowed; cells inside the grid must be empty.
    pub fn is_valid_placement(&self, piece: &ActivePiece) -> bool {
        piece.cells().iter().all(|&(x, y)| {
            if x < 0 || x as usize >= self.grid.width() {
                return false;
            }
            if y >= self.grid.height() as i32 {
                return false;
            }
            y < 0 || !self.grid.is_occupied(x, y)
        })
    }

    /// Commit `candidate` if it is a valid placement
    fn try_commit(&mut self, candidate: ActivePiece) -> bool {
        if self.is_valid_placement(&candidate) {
            self.active = candidate;
            true
        } else {
            false
        }
    }

    /// Attempt a move; rejected moves leave the state unchanged
    pub fn attempt_move(&mut self, action: GameAction) -> bool {
        let active = self.active;
        match action {
            GameAction::RotateCw => self.try_commit(active.rotated(Spin::Clockwise)),
            GameAction::RotateCcw => self.try_commit(active.rotated(Spin::CounterClockwise)),
            GameAction::MoveLeft => self.try_commit(active.translated(-1, 0)),
            GameAction::MoveRight => self.try_commit(active.translated(1, 0)),
            GameAction::SoftDrop => self.try_commit(active.translated(0, 1)),
            GameAction::HardDrop => self.hard_drop(),
        }
    }

    /// Drop the active piece as far as it goes, then lock it
    ///
    /// When the piece cannot move down even one row nothing happens, not even a lock.
    pub fn hard_drop(&mut self) -> bool {
        let mut landed = self.active.translated(0, 1);
        if !self.is_valid_placement(&landed) {
            return false;
        }

        loop {
            let next = landed.translated(0, 1);
            if !self.is_valid_placement(&next) {
                break;
            }
            landed = next;
        }

        self.active = landed;
        self.lock_active();
        true
    }

    /// Write the active piece into the grid and spawn a random replacement
    pub fn lock_active(&mut self) {
        let color = self.active.tetromino.color();
        for (x, y) in self.active.cells() {
            // Cells above the top edge have nowhere to go.
            if y < 0 {
                continue;
            }
            let result = self.grid.set_cell(x, y, Some(color));
            debug_assert!(result.is_ok(), "locked piece outside the grid at ({x}, {y})");
        }
        self.spawn_random();
    }

    /// Clear full rows and score them; returns the number of rows cleared
    pub fn step(&mut self) -> u32 {
        let cleared = self.grid.clear_full_rows() as u32;
        self.score += cleared * LINE_CLEAR_SCORE;
        self.lines += cleared;
        cleared
    }

    /// Empty the grid; score and the active piece are kept
    pub fn clear_grid(&mut self) {
        self.grid.reset();
    }

    /// Show the title screen
    pub fn enter_title(&mut self) {
        self.in_title = true;
    }

    /// Handle the start button
    ///
    /// Leaves the title screen if it is showing. Otherwise the first press is
    /// swallowed and later presses toggle pause.
    pub fn confirm(&mut self) {
        if self.in_title {
            self.in_title = false;
        } else if !self.start_consumed {
            self.start_consumed = true;
        } else {
            self.paused = !self.paused;
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            width: self.grid.width(),
            height: self.grid.height(),
            active: ActiveSnapshot::from(self.active),
            seed: self.pieces.seed(),
            score: self.score,
            lines: self.lines,
            in_title: self.in_title,
            paused: self.paused,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
