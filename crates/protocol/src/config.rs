//! Runtime configuration.
//!
//! Grid dimensions are fixed for the lifetime of a run; they are read once here and
//! handed to [`GameState::with_dimensions`](crate::core::GameState::with_dimensions).

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{bail, Result};

use crate::types::{DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};

/// Narrowest grid that still fits every spawn position (column 3 + 4-wide box)
pub const MIN_GRID_WIDTH: usize = 7;

/// Shortest grid that fits a 4x4 box
pub const MIN_GRID_HEIGHT: usize = 4;

/// Largest accepted dimension
pub const MAX_GRID_DIMENSION: usize = 255;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearntrisConfig {
    pub width: usize,
    pub height: usize,
    /// Spawn seed; derived from the clock when unset
    pub seed: Option<u32>,
    /// JSONL session log destination
    pub log_path: Option<String>,
}

impl Default for LearntrisConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            seed: None,
            log_path: None,
        }
    }
}

impl LearntrisConfig {
    /// Create from environment variables
    ///
    /// - `LEARNTRIS_WIDTH` / `LEARNTRIS_HEIGHT`: grid size (default 10x22)
    /// - `LEARNTRIS_SEED`: spawn seed
    /// - `LEARNTRIS_LOG_PATH`: session log file
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unparsable values fall back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let width = lookup("LEARNTRIS_WIDTH")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_GRID_WIDTH);

        let height = lookup("LEARNTRIS_HEIGHT")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_GRID_HEIGHT);

        let seed = lookup("LEARNTRIS_SEED").and_then(|s| s.trim().parse().ok());

        let log_path = lookup("LEARNTRIS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            width,
            height,
            seed,
            log_path,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_GRID_WIDTH..=MAX_GRID_DIMENSION).contains(&self.width) {
            bail!(
                "grid width {} must be between {} and {}",
                self.width,
                MIN_GRID_WIDTH,
                MAX_GRID_DIMENSION
            );
        }
        if !(MIN_GRID_HEIGHT..=MAX_GRID_DIMENSION).contains(&self.height) {
            bail!(
                "grid height {} must be between {} and {}",
                self.height,
                MIN_GRID_HEIGHT,
                MAX_GRID_DIMENSION
            );
        }
        Ok(())
    }

    /// The configured seed, or one taken from the system clock
    pub fn resolved_seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }
}
