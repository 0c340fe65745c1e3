//! Artillery match transitions: aiming, firing, per-tick simulation, and
//! regeneration after a miss.
//!
//! Every transition consumes the current match and returns the next one
//! together with the effect the event loop should carry out.

use super::types::*;
use crate::config::GameConfig;
use crate::constants::{ANGLE_STEP, POWER_STEP, RESET_DELAY, TICK_DELAY};
use crate::error::GameError;
use crate::projectile::{advance, Position, ShotOutcome};
use log::{debug, info};
use rand::Rng;

/// Route any event to its transition.
pub fn update<R: Rng>(
    game: ArtilleryGame,
    event: GameEvent,
    rng: &mut R,
) -> Result<Update, GameError> {
    match event {
        GameEvent::Input(input) => Ok(process_input(game, input)),
        GameEvent::Timer(timer) => process_timer(game, timer, rng),
    }
}

/// Process player input.
///
/// Quit is honored in every phase. Aim changes and firing only apply while
/// aiming, so the aim cannot change under a shell in flight.
pub fn process_input(mut game: ArtilleryGame, input: ArtilleryInput) -> Update {
    if input == ArtilleryInput::Quit {
        return Update {
            game,
            effect: Effect::Quit,
        };
    }

    if game.phase != Phase::Aiming {
        return Update::unchanged(game);
    }

    match input {
        ArtilleryInput::AngleDecrease => game.aim.angle -= ANGLE_STEP,
        ArtilleryInput::AngleIncrease => game.aim.angle += ANGLE_STEP,
        ArtilleryInput::PowerIncrease => game.aim.power += POWER_STEP,
        ArtilleryInput::PowerDecrease => game.aim.power -= POWER_STEP,
        ArtilleryInput::Fire => return fire(game),
        ArtilleryInput::Quit | ArtilleryInput::Other => {}
    }
    Update::unchanged(game)
}

/// Process a timer that fired. Timers that no longer match the phase they
/// were scheduled for are dropped.
pub fn process_timer<R: Rng>(
    game: ArtilleryGame,
    timer: Timer,
    rng: &mut R,
) -> Result<Update, GameError> {
    match timer {
        Timer::Tick => Ok(tick_simulation(game)),
        Timer::Reset => reset_match(game, rng),
    }
}

/// Launch a shell from the tank with the current aim.
fn fire(mut game: ArtilleryGame) -> Update {
    game.phase = Phase::Simulating;
    game.elapsed = 0.0;
    game.shots_fired += 1;
    game.projectile = Position {
        column: game.tank_column,
        row: game.tank_height(),
    };
    info!(
        "Fired shot {} at {:.1} deg, power {:.1}",
        game.shots_fired, game.aim.angle, game.aim.power
    );

    Update {
        game,
        effect: Effect::Schedule {
            timer: Timer::Tick,
            delay: TICK_DELAY,
        },
    }
}

/// Advance the shell in flight by one tick.
pub fn tick_simulation(mut game: ArtilleryGame) -> Update {
    if !game.is_simulating() {
        return Update::unchanged(game);
    }

    let shot = game.shot();
    let tick = advance(&game.terrain, &shot, game.target_column, game.elapsed);
    game.elapsed = tick.elapsed;

    let effect = match tick.outcome {
        ShotOutcome::InFlight(position) => {
            debug!(
                "t={:.1} shell at column {}, row {}",
                game.elapsed, position.column, position.row
            );
            game.projectile = position;
            Effect::Schedule {
                timer: Timer::Tick,
                delay: TICK_DELAY,
            }
        }
        ShotOutcome::Hit(position) => {
            info!(
                "Target hit at column {}, row {} after {:.1}s",
                position.column, position.row, game.elapsed
            );
            game.projectile = position;
            game.phase = Phase::Hit;
            Effect::None
        }
        ShotOutcome::Miss(reason) => {
            info!("Missed ({:?}) after {:.1}s", reason, game.elapsed);
            game.phase = Phase::Missed(reason);
            Effect::Schedule {
                timer: Timer::Reset,
                delay: RESET_DELAY,
            }
        }
    };

    Update { game, effect }
}

/// Replace a missed match with a freshly generated one.
pub fn reset_match<R: Rng>(game: ArtilleryGame, rng: &mut R) -> Result<Update, GameError> {
    if !matches!(game.phase, Phase::Missed(_)) {
        return Ok(Update::unchanged(game));
    }

    let config = GameConfig {
        gravity: game.gravity,
        seed: None,
        keep_aim: game.keep_aim,
    };
    let mut next = ArtilleryGame::new(&config, rng)?;
    next.shots_fired = game.shots_fired;
    if game.keep_aim {
        next.aim = game.aim;
    }
    info!(
        "New match: tank at column {}, target at column {}",
        next.tank_column, next.target_column
    );

    Ok(Update::unchanged(next))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TICK_STEP;
    use crate::projectile::{Aim, MissReason};
    use crate::terrain::Terrain;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    /// Flat ground at height 5 with the tank at 2 and the target at `target`.
    fn flat_game(target: usize, config: &GameConfig) -> ArtilleryGame {
        let terrain = Terrain::from_heights(vec![5; 100]).unwrap();
        ArtilleryGame::with_terrain(terrain, 2, target, config).unwrap()
    }

    /// Feed ticks until the shot resolves, returning the final update.
    fn run_until_resolved(mut game: ArtilleryGame) -> Update {
        for _ in 0..10_000 {
            let update = tick_simulation(game);
            if !update.game.is_simulating() {
                return update;
            }
            game = update.game;
        }
        panic!("shot never resolved");
    }

    #[test]
    fn test_aim_adjustments() {
        let game = flat_game(40, &GameConfig::default());
        let game = process_input(game, ArtilleryInput::AngleIncrease).game;
        assert!((game.aim.angle - 50.0).abs() < f64::EPSILON);
        let game = process_input(game, ArtilleryInput::AngleDecrease).game;
        let game = process_input(game, ArtilleryInput::AngleDecrease).game;
        assert!((game.aim.angle - 40.0).abs() < f64::EPSILON);
        let game = process_input(game, ArtilleryInput::PowerIncrease).game;
        assert!((game.aim.power - 21.0).abs() < f64::EPSILON);
        let game = process_input(game, ArtilleryInput::PowerDecrease).game;
        let game = process_input(game, ArtilleryInput::PowerDecrease).game;
        assert!((game.aim.power - 19.0).abs() < f64::EPSILON);
        assert_eq!(game.phase, Phase::Aiming);
    }

    #[test]
    fn test_aim_is_unbounded() {
        let mut game = flat_game(40, &GameConfig::default());
        for _ in 0..100 {
            game = process_input(game, ArtilleryInput::AngleIncrease).game;
            game = process_input(game, ArtilleryInput::PowerDecrease).game;
        }
        assert!((game.aim.angle - 545.0).abs() < 1e-9);
        assert!((game.aim.power + 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_other_input_ignored() {
        let game = flat_game(40, &GameConfig::default());
        let update = process_input(game, ArtilleryInput::Other);
        assert_eq!(update.effect, Effect::None);
        assert_eq!(update.game.aim, Aim::default());
    }

    #[test]
    fn test_fire_starts_simulation() {
        let game = flat_game(40, &GameConfig::default());
        let update = process_input(game, ArtilleryInput::Fire);
        assert!(update.game.is_simulating());
        assert!(update.game.elapsed.abs() < f64::EPSILON);
        assert_eq!(update.game.shots_fired, 1);
        assert_eq!(
            update.effect,
            Effect::Schedule {
                timer: Timer::Tick,
                delay: TICK_DELAY
            }
        );
    }

    #[test]
    fn test_aim_frozen_while_simulating() {
        let game = flat_game(40, &GameConfig::default());
        let game = process_input(game, ArtilleryInput::Fire).game;
        for input in [
            ArtilleryInput::AngleIncrease,
            ArtilleryInput::AngleDecrease,
            ArtilleryInput::PowerIncrease,
            ArtilleryInput::PowerDecrease,
        ] {
            let update = process_input(game.clone(), input);
            assert_eq!(update.game.aim, Aim::default());
            assert_eq!(update.effect, Effect::None);
        }
    }

    #[test]
    fn test_fire_while_simulating_schedules_nothing() {
        let game = flat_game(40, &GameConfig::default());
        let game = process_input(game, ArtilleryInput::Fire).game;
        let update = process_input(game, ArtilleryInput::Fire);
        assert_eq!(update.effect, Effect::None);
        assert_eq!(update.game.shots_fired, 1);
    }

    #[test]
    fn test_quit_from_every_phase() {
        let aiming = flat_game(40, &GameConfig::default());
        let mut simulating = aiming.clone();
        simulating.phase = Phase::Simulating;
        let mut missed = aiming.clone();
        missed.phase = Phase::Missed(MissReason::Ground);
        let mut hit = aiming.clone();
        hit.phase = Phase::Hit;

        for game in [aiming, simulating, missed, hit] {
            let phase = game.phase;
            let update = process_input(game, ArtilleryInput::Quit);
            assert_eq!(update.effect, Effect::Quit);
            assert_eq!(update.game.phase, phase);
        }
    }

    #[test]
    fn test_tick_is_noop_when_not_simulating() {
        let game = flat_game(40, &GameConfig::default());
        let update = tick_simulation(game);
        assert_eq!(update.effect, Effect::None);
        assert_eq!(update.game.phase, Phase::Aiming);
        assert!(update.game.elapsed.abs() < f64::EPSILON);
    }

    #[test]
    fn test_first_tick_position() {
        let game = flat_game(77, &GameConfig::default());
        let game = process_input(game, ArtilleryInput::Fire).game;
        let update = tick_simulation(game);
        assert!(update.game.is_simulating());
        assert_eq!(update.game.projectile, Position { column: 3, row: 6 });
        assert!((update.game.elapsed - TICK_STEP).abs() < 1e-12);
        assert_eq!(
            update.effect,
            Effect::Schedule {
                timer: Timer::Tick,
                delay: TICK_DELAY
            }
        );
    }

    #[test]
    fn test_elapsed_grows_by_step_each_tick() {
        let game = flat_game(77, &GameConfig::default());
        let mut game = process_input(game, ArtilleryInput::Fire).game;
        let mut previous = game.elapsed;
        while game.is_simulating() {
            game = tick_simulation(game).game;
            assert!((game.elapsed - previous - TICK_STEP).abs() < 1e-9);
            previous = game.elapsed;
        }
    }

    #[test]
    fn test_default_shot_hits_target_at_forty() {
        // 45 deg / power 20 from column 2 reaches column 40 at row 7 on t = 2.7.
        let game = flat_game(40, &GameConfig::default());
        let game = process_input(game, ArtilleryInput::Fire).game;
        let update = run_until_resolved(game);
        assert_eq!(update.game.phase, Phase::Hit);
        assert!(update.game.is_hit());
        assert!(!update.game.is_simulating());
        assert_eq!(update.game.projectile, Position { column: 40, row: 7 });
        assert_eq!(update.effect, Effect::None);
        assert!((update.game.elapsed - 2.7).abs() < 1e-6);
    }

    #[test]
    fn test_hit_is_terminal() {
        let game = flat_game(40, &GameConfig::default());
        let game = process_input(game, ArtilleryInput::Fire).game;
        let mut game = run_until_resolved(game).game;
        let mut rng = create_test_rng();

        for input in [
            ArtilleryInput::AngleIncrease,
            ArtilleryInput::PowerIncrease,
            ArtilleryInput::Fire,
            ArtilleryInput::Other,
        ] {
            let update = process_input(game, input);
            assert_eq!(update.effect, Effect::None);
            game = update.game;
        }
        let update = process_timer(game, Timer::Reset, &mut rng).unwrap();
        assert_eq!(update.game.phase, Phase::Hit);
        assert_eq!(update.game.aim, Aim::default());
    }

    #[test]
    fn test_miss_schedules_reset() {
        let game = flat_game(90, &GameConfig::default());
        let game = process_input(game, ArtilleryInput::Fire).game;
        let update = run_until_resolved(game);
        assert_eq!(update.game.phase, Phase::Missed(MissReason::Ground));
        assert_eq!(
            update.effect,
            Effect::Schedule {
                timer: Timer::Reset,
                delay: RESET_DELAY
            }
        );
        assert!(!update.game.is_hit());
    }

    #[test]
    fn test_wall_ahead_misses_on_first_tick() {
        let mut heights = vec![5; 100];
        heights[3] = 20;
        let terrain = Terrain::from_heights(heights).unwrap();
        let game = ArtilleryGame::with_terrain(terrain, 2, 77, &GameConfig::default()).unwrap();
        let game = process_input(game, ArtilleryInput::Fire).game;

        let update = tick_simulation(game);
        assert_eq!(update.game.phase, Phase::Missed(MissReason::Ground));
        assert!((update.game.elapsed - TICK_STEP).abs() < 1e-12);
    }

    #[test]
    fn test_input_ignored_while_waiting_for_reset() {
        let mut game = flat_game(90, &GameConfig::default());
        game.phase = Phase::Missed(MissReason::OutOfBounds);
        let update = process_input(game, ArtilleryInput::Fire);
        assert_eq!(update.effect, Effect::None);
        assert_eq!(update.game.shots_fired, 0);
        let update = process_input(update.game, ArtilleryInput::AngleIncrease);
        assert_eq!(update.game.aim, Aim::default());
    }

    #[test]
    fn test_reset_regenerates_match_and_restores_default_aim() {
        let mut rng = create_test_rng();
        let mut game = flat_game(90, &GameConfig::default());
        game.aim = Aim {
            angle: 60.0,
            power: 33.0,
        };
        game.shots_fired = 4;
        game.phase = Phase::Missed(MissReason::Ground);

        let update = process_timer(game, Timer::Reset, &mut rng).unwrap();
        let next = update.game;
        assert_eq!(update.effect, Effect::None);
        assert_eq!(next.phase, Phase::Aiming);
        assert_eq!(next.aim, Aim::default());
        assert_eq!(next.shots_fired, 4);
        assert!(next.elapsed.abs() < f64::EPSILON);
        assert_eq!(next.projectile.column, next.tank_column);
        assert_ne!(next.terrain.heights(), &[5; 100][..]);
    }

    #[test]
    fn test_reset_keeps_aim_when_configured() {
        let mut rng = create_test_rng();
        let config = GameConfig {
            keep_aim: true,
            ..Default::default()
        };
        let mut game = flat_game(90, &config);
        let aim = Aim {
            angle: 30.0,
            power: 25.0,
        };
        game.aim = aim;
        game.phase = Phase::Missed(MissReason::Ground);

        let next = process_timer(game, Timer::Reset, &mut rng).unwrap().game;
        assert_eq!(next.aim, aim);
        assert!(next.keep_aim);
    }

    #[test]
    fn test_stale_reset_ignored() {
        let mut rng = create_test_rng();
        let game = flat_game(90, &GameConfig::default());
        let heights = game.terrain.heights().to_vec();
        let update = process_timer(game, Timer::Reset, &mut rng).unwrap();
        assert_eq!(update.game.phase, Phase::Aiming);
        assert_eq!(update.game.terrain.heights(), &heights[..]);
    }

    #[test]
    fn test_update_dispatches_events() {
        let mut rng = create_test_rng();
        let game = flat_game(77, &GameConfig::default());
        let fired = update(game, GameEvent::Input(ArtilleryInput::Fire), &mut rng).unwrap();
        assert!(fired.game.is_simulating());
        let ticked = update(fired.game, GameEvent::Timer(Timer::Tick), &mut rng).unwrap();
        assert_eq!(ticked.game.projectile, Position { column: 3, row: 6 });
    }

    #[test]
    fn test_never_simulating_and_hit() {
        let mut rng = create_test_rng();
        let config = GameConfig::default();
        let mut game = ArtilleryGame::new(&config, &mut rng).unwrap();
        let inputs = [
            ArtilleryInput::PowerIncrease,
            ArtilleryInput::Fire,
            ArtilleryInput::AngleDecrease,
        ];
        for step in 0..2_000 {
            let event = match game.phase {
                Phase::Simulating => GameEvent::Timer(Timer::Tick),
                Phase::Missed(_) => GameEvent::Timer(Timer::Reset),
                Phase::Hit => break,
                Phase::Aiming => GameEvent::Input(inputs[step % inputs.len()]),
            };
            game = update(game, event, &mut rng).unwrap().game;
            assert!(!(game.is_simulating() && game.is_hit()));
        }
    }
}
