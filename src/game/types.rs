//! Artillery match data structures.
//!
//! A match is one terrain, one tank, one target, and the player's aim. The
//! player adjusts angle and power, fires, and the shell is simulated tick by
//! tick until it hits the target or misses. A miss regenerates the match.

use crate::config::GameConfig;
use crate::constants::{
    TANK_COLUMN_MAX, TANK_COLUMN_MIN, TARGET_COLUMN_MAX, TARGET_COLUMN_MIN, TERRAIN_OCTAVES,
    TERRAIN_WIDTH,
};
use crate::error::GameError;
use crate::projectile::{Aim, MissReason, Position, Shot};
use crate::terrain::{generate_terrain, Terrain};
use rand::Rng;
use std::time::Duration;

/// Where the match is in its aim/fire/resolve cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Player is adjusting aim. Initial state.
    Aiming,
    /// A shell is in flight.
    Simulating,
    /// The last shot missed; waiting for the match to regenerate.
    Missed(MissReason),
    /// The target was hit. Terminal.
    Hit,
}

/// UI-agnostic player commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtilleryInput {
    AngleDecrease,
    AngleIncrease,
    PowerIncrease,
    PowerDecrease,
    Fire,
    Quit,
    Other,
}

/// Delayed events the match asks the event loop to deliver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    Tick,
    Reset,
}

/// Anything that can drive a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Input(ArtilleryInput),
    Timer(Timer),
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Schedule { timer: Timer, delay: Duration },
    Quit,
}

/// Result of a transition: the next match state and what to do about it.
#[derive(Debug, Clone)]
pub struct Update {
    pub game: ArtilleryGame,
    pub effect: Effect,
}

impl Update {
    pub fn unchanged(game: ArtilleryGame) -> Self {
        Self {
            game,
            effect: Effect::None,
        }
    }
}

/// Main match state.
#[derive(Debug, Clone)]
pub struct ArtilleryGame {
    pub terrain: Terrain,
    pub tank_column: usize,
    pub target_column: usize,
    /// Last displayed shell cell. Sits on the tank until the first shot.
    pub projectile: Position,
    pub aim: Aim,
    pub phase: Phase,
    /// Simulated time since the current shot was fired.
    pub elapsed: f64,
    /// Number of shots fired across all matches this session.
    pub shots_fired: u32,

    // Session settings carried across resets
    pub gravity: f64,
    pub keep_aim: bool,
}

impl ArtilleryGame {
    /// Start a new match with freshly generated terrain and placement.
    pub fn new<R: Rng>(config: &GameConfig, rng: &mut R) -> Result<Self, GameError> {
        let terrain = generate_terrain(TERRAIN_WIDTH, TERRAIN_OCTAVES, rng)?;
        let tank_column = rng.gen_range(TANK_COLUMN_MIN..=TANK_COLUMN_MAX);
        let target_column = rng.gen_range(TARGET_COLUMN_MIN..=TARGET_COLUMN_MAX);
        Self::with_terrain(terrain, tank_column, target_column, config)
    }

    /// Start a match on a known terrain.
    pub fn with_terrain(
        terrain: Terrain,
        tank_column: usize,
        target_column: usize,
        config: &GameConfig,
    ) -> Result<Self, GameError> {
        let width = terrain.width();
        if tank_column == target_column || tank_column >= width || target_column >= width {
            return Err(GameError::InvalidPlacement {
                tank: tank_column,
                target: target_column,
                width,
            });
        }
        let projectile = Position {
            column: tank_column,
            row: terrain.heights()[tank_column],
        };

        Ok(Self {
            terrain,
            tank_column,
            target_column,
            projectile,
            aim: Aim::default(),
            phase: Phase::Aiming,
            elapsed: 0.0,
            shots_fired: 0,
            gravity: config.gravity,
            keep_aim: config.keep_aim,
        })
    }

    pub fn is_simulating(&self) -> bool {
        self.phase == Phase::Simulating
    }

    pub fn is_hit(&self) -> bool {
        self.phase == Phase::Hit
    }

    pub fn tank_height(&self) -> i32 {
        self.terrain.heights()[self.tank_column]
    }

    /// The shot the current aim would fire.
    pub fn shot(&self) -> Shot {
        Shot::from_column(&self.terrain, self.tank_column, self.aim, self.gravity)
    }
}
