//! Tetromino module - piece shapes and the rotation transform
//!
//! A tetromino is a piece kind plus the four occupied offsets inside its square
//! bounding box. Offsets are `(column, row)` pairs with the origin at the top-left
//! corner of the box.
//!
//! Rotation is a transform over the current offsets rather than a table of
//! pre-rotated states. For an `n x n` box:
//!
//! - clockwise: `(i, j) -> (n - 1 - j, i)`
//! - counter-clockwise: `(i, j) -> (j, n - 1 - i)`
//!
//! Four rotations in the same direction give back the original offsets.

use arrayvec::ArrayVec;

use crate::types::{Color, LearntrisError, PieceKind, Spin};

/// Offset of a single mino relative to the bounding-box origin
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from the bounding-box origin
pub type PieceShape = [MinoOffset; 4];

/// Canonical spawn layout for a piece kind
pub fn spawn_shape(kind: PieceKind) -> PieceShape {
    match kind {
        PieceKind::I => [(0, 1), (1, 1), (2, 1), (3, 1)],
        PieceKind::O => [(0, 0), (1, 0), (0, 1), (1, 1)],
        PieceKind::T => [(1, 0), (0, 1), (1, 1), (2, 1)],
        PieceKind::J => [(0, 0), (0, 1), (1, 1), (2, 1)],
        PieceKind::L => [(2, 0), (0, 1), (1, 1), (2, 1)],
        PieceKind::S => [(1, 0), (2, 0), (0, 1), (1, 1)],
        PieceKind::Z => [(0, 0), (1, 0), (1, 1), (2, 1)],
    }
}

/// Rotate every offset of a shape inside an `n x n` box
pub fn rotate_shape(shape: &PieceShape, size: usize, spin: Spin) -> PieceShape {
    let last = size as i8 - 1;
    (*shape).map(|(i, j)| match spin {
        Spin::Clockwise => (last - j, i),
        Spin::CounterClockwise => (j, last - i),
    })
}

/// A piece kind with its current orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    kind: PieceKind,
    shape: PieceShape,
}

impl Tetromino {
    /// Create a tetromino in its spawn orientation
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: spawn_shape(kind),
        }
    }

    /// Create from a protocol letter
    ///
    /// Fails with [`LearntrisError::InvalidShape`] for anything but `IOTJLSZ`.
    pub fn from_symbol(symbol: char) -> Result<Self, LearntrisError> {
        PieceKind::from_char(symbol)
            .map(Self::new)
            .ok_or(LearntrisError::InvalidShape(symbol))
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.kind.color()
    }

    /// Side length of the bounding box
    pub fn size(&self) -> usize {
        self.kind.box_size()
    }

    /// Current occupied offsets
    pub fn shape(&self) -> &PieceShape {
        &self.shape
    }

    /// Return this tetromino rotated a quarter turn; `self` is left untouched
    pub fn rotated(&self, spin: Spin) -> Self {
        Self {
            kind: self.kind,
            shape: rotate_shape(&self.shape, self.size(), spin),
        }
    }

    /// Rows of the bounding box, `Some(color)` where a mino sits
    pub fn box_rows(&self) -> Vec<ArrayVec<Option<Color>, 4>> {
        let size = self.size();
        let mut rows: Vec<ArrayVec<Option<Color>, 4>> = (0..size)
            .map(|_| (0..size).map(|_| None).collect())
            .collect();
        for &(i, j) in &self.shape {
            rows[j as usize][i as usize] = Some(self.color());
        }
        rows
    }
}
