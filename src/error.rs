//! Error types for terrain generation, configuration, and startup.

use std::io;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TerrainError {
    #[error("terrain needs at least one octave")]
    ZeroOctaves,

    #[error("terrain width must be positive")]
    ZeroWidth,

    #[error("{octaves} octaves exceed the supported stride range")]
    TooManyOctaves { octaves: u32 },

    #[error("terrain height at column {column} is negative")]
    NegativeHeight { column: usize },

    #[error("terrain width {width} is narrower than the coarsest octave stride {stride}")]
    WidthTooNarrow { width: usize, stride: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Terrain(#[from] TerrainError),

    #[error("tank column {tank} and target column {target} must be distinct and inside width {width}")]
    InvalidPlacement {
        tank: usize,
        target: usize,
        width: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("gravity must be a finite, positive number (got {0})")]
    InvalidGravity(f64),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("could not set up the match: {0}")]
    Game(#[from] GameError),

    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("could not open log file {path}: {source}")]
    LogFile {
        path: String,
        #[source]
        source: io::Error,
    },
}
