//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, text rendering, command protocol).
//!
//! # Grid Dimensions
//!
//! The reference playfield is 10 columns by 22 rows:
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 22 rows (indexed 0-21, top to bottom)
//! - **Spawn anchor**: column 4 for 2x2 pieces, column 3 otherwise, row 0
//!
//! # Protocol Symbols
//!
//! | Symbol | Meaning |
//! |--------|---------|
//! | `.` | empty cell |
//! | `r` `g` `b` `c` `y` `m` `o` | settled block (red, green, blue, cyan, yellow, magenta, orange) |
//! | `R` `G` `B` `C` `Y` `M` `O` | active piece overlay |
//!
//! # Examples
//!
//! ```
//! use learntris_types::{Color, PieceKind, Spin, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};
//!
//! let piece = PieceKind::from_char('T').unwrap();
//! assert_eq!(piece.color(), Color::Magenta);
//! assert_eq!(piece.box_size(), 3);
//!
//! assert_eq!(Color::from_symbol('Y'), Some(Color::Yellow));
//! assert_eq!(Color::Yellow.symbol(), 'y');
//!
//! assert_eq!(Spin::Clockwise.reversed(), Spin::CounterClockwise);
//!
//! assert_eq!(DEFAULT_GRID_WIDTH, 10);
//! assert_eq!(DEFAULT_GRID_HEIGHT, 22);
//! ```

use std::fmt;

/// Default grid width in cells (10 columns)
pub const DEFAULT_GRID_WIDTH: usize = 10;

/// Default grid height in cells (22 rows)
pub const DEFAULT_GRID_HEIGHT: usize = 22;

/// Points awarded for every cleared row
pub const LINE_CLEAR_SCORE: u32 = 100;

/// Spawn column for pieces whose bounding box is smaller than 3x3
pub const SMALL_SPAWN_COLUMN: i32 = 4;

/// Spawn column for 3x3 and 4x4 pieces
pub const SPAWN_COLUMN: i32 = 3;

/// Spawn row for every piece
pub const SPAWN_ROW: i32 = 0;

/// Text printed by `p` while the title screen is showing
pub const TITLE_TEXT: &str = "Learntris (c) 1992 Tetraminex, Inc.\nPress start button to begin.";

/// Text printed by `p` while paused
pub const PAUSE_TEXT: &str = "Paused\nPress start button to continue.";

/// Prefix for the diagnostic printed on unrecognized commands
pub const INVALID_COMMAND_PREFIX: &str = ">>>Invalid command:";

/// Symbol used for an empty cell
pub const EMPTY_SYMBOL: char = '.';

/// Block colors
///
/// Every settled block carries one of the seven piece colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Blue,
    Cyan,
    Yellow,
    Magenta,
    Orange,
}

impl Color {
    /// Parse a color from its protocol symbol (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use learntris_types::Color;
    ///
    /// assert_eq!(Color::from_symbol('r'), Some(Color::Red));
    /// assert_eq!(Color::from_symbol('C'), Some(Color::Cyan));
    /// assert_eq!(Color::from_symbol('.'), None);
    /// assert_eq!(Color::from_symbol('x'), None);
    /// ```
    pub fn from_symbol(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'r' => Some(Color::Red),
            'g' => Some(Color::Green),
            'b' => Some(Color::Blue),
            'c' => Some(Color::Cyan),
            'y' => Some(Color::Yellow),
            'm' => Some(Color::Magenta),
            'o' => Some(Color::Orange),
            _ => None,
        }
    }

    /// Lowercase symbol used for settled blocks
    pub fn symbol(&self) -> char {
        match self {
            Color::Red => 'r',
            Color::Green => 'g',
            Color::Blue => 'b',
            Color::Cyan => 'c',
            Color::Yellow => 'y',
            Color::Magenta => 'm',
            Color::Orange => 'o',
        }
    }

    /// Uppercase symbol used for the active piece overlay
    pub fn active_symbol(&self) -> char {
        self.symbol().to_ascii_uppercase()
    }
}

/// Cell on the grid (None = empty, Some = settled block of that color)
pub type Cell = Option<Color>;

/// Protocol symbol for a cell
pub fn cell_symbol(cell: Cell) -> char {
    cell.map_or(EMPTY_SYMBOL, |color| color.symbol())
}

/// The seven tetromino piece kinds
///
/// Each piece has a fixed color and bounding box:
/// - **I**: Cyan, 4x4
/// - **O**: Yellow, 2x2
/// - **T**: Magenta, 3x3
/// - **J**: Blue, 3x3
/// - **L**: Orange, 3x3
/// - **S**: Green, 3x3
/// - **Z**: Red, 3x3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    J,
    L,
    S,
    Z,
}

impl PieceKind {
    /// All kinds in protocol order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Parse from the uppercase protocol letter
    ///
    /// Lowercase letters are other commands in the protocol and are rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use learntris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_char('I'), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_char('s'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(PieceKind::I),
            'O' => Some(PieceKind::O),
            'T' => Some(PieceKind::T),
            'J' => Some(PieceKind::J),
            'L' => Some(PieceKind::L),
            'S' => Some(PieceKind::S),
            'Z' => Some(PieceKind::Z),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
        }
    }

    pub fn color(&self) -> Color {
        match self {
            PieceKind::I => Color::Cyan,
            PieceKind::O => Color::Yellow,
            PieceKind::T => Color::Magenta,
            PieceKind::J => Color::Blue,
            PieceKind::L => Color::Orange,
            PieceKind::S => Color::Green,
            PieceKind::Z => Color::Red,
        }
    }

    /// Side length of the square bounding box
    pub fn box_size(&self) -> usize {
        match self {
            PieceKind::O => 2,
            PieceKind::I => 4,
            _ => 3,
        }
    }
}

/// Rotation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spin {
    Clockwise,
    CounterClockwise,
}

impl Spin {
    pub fn reversed(&self) -> Self {
        match self {
            Spin::Clockwise => Spin::CounterClockwise,
            Spin::CounterClockwise => Spin::Clockwise,
        }
    }
}

/// Moves that can be attempted on the active piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    RotateCw,
    RotateCcw,
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
}

impl GameAction {
    /// Parse from the protocol token
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            ')' => Some(GameAction::RotateCw),
            '(' => Some(GameAction::RotateCcw),
            '<' => Some(GameAction::MoveLeft),
            '>' => Some(GameAction::MoveRight),
            'v' => Some(GameAction::SoftDrop),
            'V' => Some(GameAction::HardDrop),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
        }
    }
}

/// Errors raised by the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LearntrisError {
    /// Unknown tetromino symbol
    InvalidShape(char),
    /// Cell access outside the grid
    OutOfBounds { x: i32, y: i32 },
    /// A grid-load line that could not be accepted
    MalformedGridLine { row: usize, reason: String },
    /// A command token the protocol does not know
    UnrecognizedCommand(String),
}

impl fmt::Display for LearntrisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidShape(c) => write!(f, "invalid tetromino shape '{c}'"),
            Self::OutOfBounds { x, y } => write!(f, "cell ({x}, {y}) is outside the grid"),
            Self::MalformedGridLine { row, reason } => {
                write!(f, "malformed grid line for row {row}: {reason}")
            }
            Self::UnrecognizedCommand(token) => write!(f, "unrecognized command '{token}'"),
        }
    }
}

impl std::error::Error for LearntrisError {}
