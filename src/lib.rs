//! Artillery - turn-based terminal artillery duel.
//!
//! This module exposes the terrain generator, projectile simulation, and
//! match state machine for testing and for the terminal front end.

pub mod build_info;
pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod input;
pub mod logging;
pub mod projectile;
pub mod scheduler;
pub mod terrain;
pub mod ui;

pub use config::{Cli, GameConfig};
pub use error::{AppError, ConfigError, GameError, TerrainError};
pub use game::{ArtilleryGame, ArtilleryInput, Effect, GameEvent, Phase, Timer, Update};
pub use projectile::{Aim, MissReason, Position, ShotOutcome};
pub use terrain::Terrain;
