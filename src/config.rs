//! Runtime configuration from environment variables.
//!
//! - `TETRIS_STACK_SEED`: RNG seed (default: derived from the clock)
//! - `TETRIS_STACK_QUEUE_SIZE`: queue capacity (default: 5)
//! - `TETRIS_STACK_RESERVE_SIZE`: reserve capacity (default: 3)
//! - `TETRIS_STACK_FORMAT`: `text` or `json` (default: text)
//! - `TETRIS_STACK_NO_COLOR` / `NO_COLOR`: disable ANSI styling
//!
//! Values that fail to parse fall back to their defaults. Sizes must lie in
//! `1..=MAX_CAPACITY`.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{bail, Result};

use crate::core::GameController;
use crate::types::{QUEUE_CAPACITY, RESERVE_CAPACITY};

/// Largest queue or reserve capacity accepted from configuration.
pub const MAX_CAPACITY: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: u32,
    pub queue_size: usize,
    pub reserve_size: usize,
    pub format: OutputFormat,
    pub color: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            queue_size: QUEUE_CAPACITY,
            reserve_size: RESERVE_CAPACITY,
            format: OutputFormat::Text,
            color: true,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (used by `from_env` and tests)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("TETRIS_STACK_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let queue_size = lookup("TETRIS_STACK_QUEUE_SIZE")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(QUEUE_CAPACITY);

        let reserve_size = lookup("TETRIS_STACK_RESERVE_SIZE")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(RESERVE_CAPACITY);

        let format = lookup("TETRIS_STACK_FORMAT")
            .and_then(|s| OutputFormat::from_str(&s))
            .unwrap_or(OutputFormat::Text);

        let no_color = ["TETRIS_STACK_NO_COLOR", "NO_COLOR"].into_iter().any(|key| {
            lookup(key)
                .map(|v| {
                    let v = v.trim().to_lowercase();
                    // "0" and "false" keep color on.
                    !v.is_empty() && v != "0" && v != "false"
                })
                .unwrap_or(false)
        });

        Self {
            seed,
            queue_size,
            reserve_size,
            format,
            color: !no_color,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.queue_size == 0 {
            bail!("queue size must be at least 1");
        }
        if self.reserve_size == 0 {
            bail!("reserve size must be at least 1");
        }
        if self.queue_size > MAX_CAPACITY {
            bail!("queue size {} exceeds {MAX_CAPACITY}", self.queue_size);
        }
        if self.reserve_size > MAX_CAPACITY {
            bail!("reserve size {} exceeds {MAX_CAPACITY}", self.reserve_size);
        }
        Ok(())
    }

    /// Build a fresh game from this configuration.
    pub fn new_game(&self) -> Result<GameController> {
        self.validate()?;
        Ok(GameController::with_seed(
            self.queue_size,
            self.reserve_size,
            self.seed,
        ))
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| (d.as_secs() as u32) ^ d.subsec_nanos())
        .unwrap_or(1)
}
