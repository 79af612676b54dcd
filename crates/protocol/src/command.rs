//! Command module - tokens of the single-character protocol
//!
//! A command line is split into single-character tokens with all whitespace removed.
//! Most tokens map to one command; `?` takes the next token as its query.

use crate::types::{GameAction, LearntrisError, PieceKind};

/// One decoded protocol command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `@`
    EnterTitle,
    /// `!`
    Confirm,
    /// `p`
    PrintGrid,
    /// `P`
    PrintActiveGrid,
    /// `g`
    LoadGrid,
    /// `c`
    ClearGrid,
    /// `s`
    Step,
    /// `?s`
    QueryScore,
    /// `?n`
    QueryLines,
    /// `I O T J L S Z`
    Spawn(PieceKind),
    /// `t`
    PrintActivePiece,
    /// `( ) < > v V`
    Move(GameAction),
    /// `;`
    Newline,
    /// `q`
    Quit,
}

impl Command {
    /// Decode a single token that needs no lookahead
    pub fn from_token(token: char) -> Option<Self> {
        let cmd = match token {
            '@' => Command::EnterTitle,
            '!' => Command::Confirm,
            'p' => Command::PrintGrid,
            'P' => Command::PrintActiveGrid,
            'g' => Command::LoadGrid,
            'c' => Command::ClearGrid,
            's' => Command::Step,
            't' => Command::PrintActivePiece,
            ';' => Command::Newline,
            'q' => Command::Quit,
            _ => {
                if let Some(kind) = PieceKind::from_char(token) {
                    Command::Spawn(kind)
                } else {
                    Command::Move(GameAction::from_char(token)?)
                }
            }
        };
        Some(cmd)
    }

    /// Decode the token following `?`
    pub fn from_query(token: char) -> Option<Self> {
        match token {
            's' => Some(Command::QueryScore),
            'n' => Some(Command::QueryLines),
            _ => None,
        }
    }
}

/// Split a line into single-character tokens, dropping whitespace
pub fn tokenize(line: &str) -> Vec<char> {
    line.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Decode every command on a line, left to right
///
/// Bad tokens come back as [`LearntrisError::UnrecognizedCommand`] in place so the
/// caller can report them and keep going.
pub fn parse_line(line: &str) -> Vec<Result<Command, LearntrisError>> {
    let mut out = Vec::new();
    let mut tokens = tokenize(line).into_iter();

    while let Some(token) = tokens.next() {
        if token == '?' {
            let parsed = match tokens.next() {
                Some(query) => Command::from_query(query)
                    .ok_or_else(|| LearntrisError::UnrecognizedCommand(format!("?{query}"))),
                None => Err(LearntrisError::UnrecognizedCommand("?".to_string())),
            };
            out.push(parsed);
            continue;
        }

        out.push(
            Command::from_token(token)
                .ok_or_else(|| LearntrisError::UnrecognizedCommand(token.to_string())),
        );
    }

    out
}
