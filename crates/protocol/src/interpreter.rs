//! Command interpreter - drives a [`GameState`] from the text protocol.
//!
//! The interpreter owns the game, the input reader and the output writer. Each input
//! line is decoded and executed left to right; bad tokens print a diagnostic and the
//! rest of the line still runs. `q` or end of input stops the loop.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::command::{parse_line, Command};
use crate::core::GameState;
use crate::grid_load::{load_grid, GridLoadOutcome};
use crate::render::{grid_symbols, piece_symbols, write_symbols};
use crate::session_log::{SessionLog, SessionRecord};
use crate::types::{LearntrisError, INVALID_COMMAND_PREFIX, PAUSE_TEXT, TITLE_TEXT};

/// Whether the run loop should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Runs protocol lines against one [`GameState`]
///
/// `g` reads its grid rows from the same `input` the commands come from.
pub struct CommandInterpreter<R, W> {
    state: GameState,
    input: R,
    output: W,
    log: Option<SessionLog>,
    seq: u64,
}

impl<R: BufRead, W: Write> CommandInterpreter<R, W> {
    pub fn new(state: GameState, input: R, output: W) -> Self {
        Self {
            state,
            input,
            output,
            log: None,
            seq: 0,
        }
    }

    /// Record every processed line to `log`
    pub fn with_session_log(mut self, log: SessionLog) -> Self {
        self.log = Some(log);
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Read and execute lines until `q` or end of input
    pub fn run(&mut self) -> Result<()> {
        let mut line = String::new();
        loop {
            line.clear();
            let n = self
                .input
                .read_line(&mut line)
                .context("failed to read command line")?;
            if n == 0 {
                info!(lines = self.seq, "end of input");
                break;
            }

            let flow = self.execute_line(&line)?;
            // Interactive drivers wait for a line's output before sending the next one.
            self.output.flush().context("failed to flush output")?;
            if flow == Flow::Quit {
                info!(lines = self.seq, "quit requested");
                break;
            }
        }
        self.output.flush().context("failed to flush output")?;
        Ok(())
    }

    /// Execute every command on one line
    pub fn execute_line(&mut self, line: &str) -> Result<Flow> {
        self.seq += 1;
        let mut flow = Flow::Continue;

        for parsed in parse_line(line) {
            match parsed {
                Ok(command) => {
                    debug!(?command, "execute");
                    if self.execute(command)? == Flow::Quit {
                        flow = Flow::Quit;
                        break;
                    }
                }
                Err(error) => {
                    warn!(%error, "diagnostic");
                    if let LearntrisError::UnrecognizedCommand(token) = &error {
                        writeln!(self.output, "{INVALID_COMMAND_PREFIX} {token}")?;
                    }
                }
            }
        }

        self.record(line.trim_end(), flow == Flow::Quit);
        Ok(flow)
    }

    /// Execute one decoded command
    pub fn execute(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::EnterTitle => self.state.enter_title(),
            Command::Confirm => self.state.confirm(),
            Command::PrintGrid => {
                if self.state.in_title() {
                    writeln!(self.output, "{TITLE_TEXT}")?;
                } else if self.state.paused() {
                    writeln!(self.output, "{PAUSE_TEXT}")?;
                } else {
                    let rows = grid_symbols(self.state.grid(), None);
                    write_symbols(&mut self.output, &rows)?;
                }
            }
            Command::PrintActiveGrid => {
                let rows = grid_symbols(self.state.grid(), Some(self.state.active()));
                write_symbols(&mut self.output, &rows)?;
            }
            Command::LoadGrid => {
                let outcome = load_grid(&mut self.input, self.state.grid_mut())
                    .context("failed to read grid")?;
                if outcome != GridLoadOutcome::Complete {
                    debug!(?outcome, "grid load stopped early");
                }
            }
            Command::ClearGrid => self.state.clear_grid(),
            Command::Step => {
                let cleared = self.state.step();
                if cleared > 0 {
                    debug!(cleared, score = self.state.score(), "rows cleared");
                }
            }
            Command::QueryScore => writeln!(self.output, "{}", self.state.score())?,
            Command::QueryLines => writeln!(self.output, "{}", self.state.lines())?,
            Command::Spawn(kind) => self.state.spawn(kind),
            Command::PrintActivePiece => {
                let rows = piece_symbols(&self.state.active().tetromino);
                write_symbols(&mut self.output, &rows)?;
            }
            Command::Move(action) => {
                let moved = self.state.attempt_move(action);
                debug!(action = action.as_str(), moved, "move");
            }
            Command::Newline => writeln!(self.output)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn record(&mut self, line: &str, quit: bool) {
        let Some(log) = self.log.as_mut() else {
            return;
        };
        let record = SessionRecord::new(self.seq, line, &self.state.snapshot(), quit);
        if let Err(error) = log.record(&record) {
            warn!(%error, "session log disabled");
            self.log = None;
        }
    }
}
