//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the grid model, tetromino rotation and the game state
//! machine. It has **zero dependencies** on the command protocol or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical spawn sequences
//! - **Testable**: Every rule is exercised without a front end
//! - **Portable**: Any driver can own a [`GameState`] and call into it
//!
//! # Module Structure
//!
//! - [`grid`]: W x H playfield with bounds-checked access and in-place row clears
//! - [`tetromino`]: Shapes and the quarter-turn rotation transform
//! - [`game_state`]: Active piece, copy-validate-commit moves, locking, scoring
//! - [`rng`]: Seeded uniform piece selection
//! - [`snapshot`]: Plain copy of the observable state
//!
//! # Game Rules
//!
//! - No wall kicks: a rotation that collides is rejected as a whole
//! - No gravity clock: pieces fall only on soft/hard drop
//! - Line clears happen on [`GameState::step`], 100 points per row, and rows above
//!   a cleared row do not fall
//!
//! # Example
//!
//! ```
//! use learntris_core::GameState;
//! use learntris_types::{GameAction, PieceKind};
//!
//! let mut game = GameState::new(12345);
//! game.spawn(PieceKind::O);
//!
//! game.attempt_move(GameAction::MoveRight);
//! game.attempt_move(GameAction::HardDrop);
//!
//! assert!(game.grid().is_occupied(5, 21));
//! assert_eq!(game.step(), 0);
//! assert_eq!(game.score(), 0);
//! ```

pub mod game_state;
pub mod grid;
pub mod rng;
pub mod snapshot;
pub mod tetromino;

pub use learntris_types as types;

// Re-export commonly used types for convenience
pub use game_state::{ActivePiece, GameState, PieceCells};
pub use grid::Grid;
pub use rng::{PieceRandomizer, SimpleRng};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use tetromino::{rotate_shape, spawn_shape, PieceShape, Tetromino};
