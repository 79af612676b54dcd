use crate::game_state::ActivePiece;
use crate::types::PieceKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub x: i32,
    pub y: i32,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind(),
            x: value.x,
            y: value.y,
        }
    }
}

/// Observable state of a game, detached from the grid storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    pub active: ActiveSnapshot,
    pub seed: u32,
    pub score: u32,
    pub lines: u32,
    pub in_title: bool,
    pub paused: bool,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.in_title && !self.paused
    }
}
