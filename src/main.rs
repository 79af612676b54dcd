//! Learntris runner (default binary).
//!
//! Reads protocol commands from stdin and writes results to stdout. Diagnostics
//! from `tracing` go to stderr so they never mix with protocol output.

use std::io::{self, BufWriter};

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn, Level};

use learntris::core::GameState;
use learntris::protocol::{CommandInterpreter, LearntrisConfig, SessionLog};

#[derive(Debug, Parser)]
#[command(name = "learntris", about = "Text-protocol Tetris engine")]
struct Cli {
    #[arg(short = 'v', long, action = clap::ArgAction::Count, help = "Increase log verbosity on stderr (-v = WARN, -vv = INFO, -vvv = DEBUG)")]
    verbose: u8,

    #[arg(long, help = "Grid width (overrides LEARNTRIS_WIDTH)")]
    width: Option<usize>,

    #[arg(long, help = "Grid height (overrides LEARNTRIS_HEIGHT)")]
    height: Option<usize>,

    #[arg(long, help = "Seed for random spawns (overrides LEARNTRIS_SEED)")]
    seed: Option<u32>,

    #[arg(long, help = "Append a JSONL session log here (overrides LEARNTRIS_LOG_PATH)")]
    log_path: Option<String>,
}

impl Cli {
    fn config(&self) -> LearntrisConfig {
        let mut config = LearntrisConfig::from_env();
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.log_path.is_some() {
            config.log_path = self.log_path.clone();
        }
        config
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_max_level(level)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.config();
    config.validate()?;

    let seed = config.resolved_seed();
    info!(width = config.width, height = config.height, seed, "starting learntris");

    let state = GameState::with_dimensions(config.width, config.height, seed);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut interpreter = CommandInterpreter::new(state, stdin.lock(), BufWriter::new(stdout.lock()));

    if let Some(path) = config.log_path.as_deref() {
        match SessionLog::open(path) {
            Ok(log) => interpreter = interpreter.with_session_log(log),
            Err(error) => warn!(%error, path, "session log unavailable"),
        }
    }

    interpreter.run()
}
