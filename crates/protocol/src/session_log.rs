//! JSONL session log.
//!
//! When enabled, every processed command line appends one JSON object describing the
//! line and the state it left behind. The log is diagnostic only; losing it never
//! affects the game.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::GameSnapshot;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveRecord {
    pub kind: char,
    pub x: i32,
    pub y: i32,
}

/// One line of the session log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub seq: u64,
    pub line: String,
    pub width: usize,
    pub height: usize,
    pub seed: u32,
    pub score: u32,
    pub lines: u32,
    pub title: bool,
    pub paused: bool,
    pub active: ActiveRecord,
    pub quit: bool,
}

impl SessionRecord {
    pub fn new(seq: u64, line: &str, snapshot: &GameSnapshot, quit: bool) -> Self {
        Self {
            seq,
            line: line.to_string(),
            width: snapshot.width,
            height: snapshot.height,
            seed: snapshot.seed,
            score: snapshot.score,
            lines: snapshot.lines,
            title: snapshot.in_title,
            paused: snapshot.paused,
            active: ActiveRecord {
                kind: snapshot.active.kind.as_char(),
                x: snapshot.active.x,
                y: snapshot.active.y,
            },
            quit,
        }
    }
}

/// Append-only JSONL writer
pub struct SessionLog {
    file: BufWriter<File>,
    buf: Vec<u8>,
}

impl SessionLog {
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: BufWriter::new(file),
            buf: Vec::with_capacity(256),
        })
    }

    pub fn record(&mut self, record: &SessionRecord) -> io::Result<()> {
        self.buf.clear();
        serde_json::to_writer(&mut self.buf, record)?;
        self.buf.push(b'\n');
        self.file.write_all(&self.buf)?;
        self.file.flush()
    }
}
