//! Command-line options and the validated game configuration.

use crate::build_info::BUILD_VERSION;
use crate::constants::DEFAULT_GRAVITY;
use crate::error::ConfigError;
use clap::Parser;
use std::path::PathBuf;

/// Turn-based artillery duel in the terminal.
#[derive(Parser, Debug, Clone)]
#[command(name = "artillery", version = BUILD_VERSION, long_about = None)]
pub struct Cli {
    /// Seed for terrain and placement (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Downward acceleration applied to the shell
    #[arg(long, default_value_t = DEFAULT_GRAVITY)]
    pub gravity: f64,

    /// Keep angle and power when a miss restarts the match
    #[arg(long, default_value_t = false)]
    pub keep_aim: bool,

    /// Write logs to this file (filter via ARTILLERY_LOG, default "info")
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Draw without colors
    #[arg(long, default_value_t = false)]
    pub no_color: bool,
}

impl Cli {
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        let config = GameConfig {
            gravity: self.gravity,
            seed: self.seed,
            keep_aim: self.keep_aim,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Settings fixed for the whole session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub gravity: f64,
    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,
    /// Whether aim survives a miss-triggered restart
    pub keep_aim: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            seed: None,
            keep_aim: false,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Zero gravity would let a vertical shot fly forever.
        if !self.gravity.is_finite() || self.gravity <= 0.0 {
            return Err(ConfigError::InvalidGravity(self.gravity));
        }
        Ok(())
    }
}
