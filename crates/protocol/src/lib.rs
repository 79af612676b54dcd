//! Protocol module - the single-character command language
//!
//! This crate drives a [`GameState`](core::GameState) from a line-oriented text
//! stream and writes plain-text results back.
//!
//! # Protocol Overview
//!
//! Each input line is a run of single-character commands (whitespace ignored),
//! executed left to right:
//!
//! | token | effect |
//! |---|---|
//! | `@` | enter title mode |
//! | `!` | leave title / toggle pause (the first press after the title is swallowed) |
//! | `p` | print the grid, or the title/pause text |
//! | `P` | print the grid with the active piece in uppercase |
//! | `g` | read H grid lines from the input |
//! | `c` | clear the grid |
//! | `s` | step: clear full rows and score them |
//! | `?s` / `?n` | print score / cleared-line count |
//! | `I O T J L S Z` | spawn that piece |
//! | `t` | print the active piece's bounding box |
//! | `(` `)` | rotate counter-clockwise / clockwise |
//! | `<` `>` | move left / right |
//! | `v` / `V` | soft drop / hard drop and lock |
//! | `;` | print an empty line |
//! | `q` | quit |
//!
//! Anything else prints `>>>Invalid command: <token>` and the line continues.
//!
//! # Example Session
//!
//! ```text
//! Input:  O V ?n
//! Output: 0
//! ```
//!
//! # Implementation
//!
//! - See [`command`] for token decoding
//! - See [`interpreter`] for the run loop
//! - See [`grid_load`] for the `g` reader
//! - See [`session_log`] for the optional JSONL log

pub mod command;
pub mod config;
pub mod grid_load;
pub mod interpreter;
pub mod render;
pub mod session_log;

pub use learntris_core as core;
pub use learntris_types as types;

pub use command::{parse_line, tokenize, Command};
pub use config::LearntrisConfig;
pub use grid_load::{load_grid, load_grid_line, parse_grid_token, GridLoadOutcome};
pub use interpreter::{CommandInterpreter, Flow};
pub use session_log::{SessionLog, SessionRecord};
