use artillery::build_info::BUILD_VERSION;
use artillery::config::Cli;
use artillery::constants::INPUT_POLL_MS;
use artillery::error::AppError;
use artillery::game::{self, ArtilleryGame, Effect, GameEvent, Timer, Update};
use artillery::input::map_key;
use artillery::logging;
use artillery::scheduler::TimerQueue;
use artillery::ui::draw_ui;
use artillery::ui::theme::Theme;
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use std::io;
use std::process::ExitCode;
use std::time::{Duration, Instant};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let session = match start(&cli) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("{}", failure_message(Stage::Startup, &e));
            return ExitCode::FAILURE;
        }
    };

    match play(session) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", failure_message(Stage::Playing, &e));
            ExitCode::FAILURE
        }
    }
}

/// Where a fatal error happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Startup,
    Playing,
}

fn failure_message(stage: Stage, error: &AppError) -> String {
    match stage {
        Stage::Startup => format!("Error starting game: {}", error),
        Stage::Playing => format!("Game error: {}", error),
    }
}

/// Everything the game loop needs, ready to run in a terminal already in raw
/// mode on the alternate screen.
struct Session {
    game: ArtilleryGame,
    theme: Theme,
    rng: StdRng,
}

fn start(cli: &Cli) -> Result<Session, AppError> {
    let config = cli.game_config()?;
    logging::init(cli.log_file.as_deref())?;

    // Seed once; every terrain and placement afterwards comes from this RNG.
    let seed = config.seed.unwrap_or_else(rand::random);
    info!("artillery {} starting with seed {}", BUILD_VERSION, seed);
    let mut rng = StdRng::seed_from_u64(seed);
    let game = ArtilleryGame::new(&config, &mut rng)?;
    info!(
        "New match: tank at column {}, target at column {}",
        game.tank_column, game.target_column
    );
    let theme = if cli.no_color {
        Theme::monochrome()
    } else {
        Theme::default()
    };

    enable_raw_mode()?;
    if let Err(e) = io::stdout().execute(EnterAlternateScreen) {
        disable_raw_mode()?;
        return Err(e.into());
    }

    Ok(Session { game, theme, rng })
}

fn play(session: Session) -> Result<(), AppError> {
    let Session {
        game,
        theme,
        mut rng,
    } = session;

    let result = Terminal::new(CrosstermBackend::new(io::stdout()))
        .map_err(AppError::from)
        .and_then(|mut terminal| run_game_loop(&mut terminal, game, &theme, &mut rng));

    // Restore the terminal even if the game failed, but report the game error first.
    let restored = restore_terminal();
    result?;
    restored?;
    info!("artillery exited");
    Ok(())
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Draw, wait for a key or the next timer, and feed every event through the
/// match state machine until it asks to quit.
fn run_game_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    mut game: ArtilleryGame,
    theme: &Theme,
    rng: &mut StdRng,
) -> Result<(), AppError> {
    let mut timers: TimerQueue<Timer> = TimerQueue::new();
    let poll_cap = Duration::from_millis(INPUT_POLL_MS);

    loop {
        terminal.draw(|frame| draw_ui(frame, &game, theme))?;

        let wait = timers
            .time_until_next(Instant::now())
            .map_or(poll_cap, |due| due.min(poll_cap));

        let mut events = Vec::new();
        if event::poll(wait)? {
            if let Event::Key(key) = event::read()? {
                events.push(GameEvent::Input(map_key(key)));
            }
        }
        while let Some(timer) = timers.pop_due(Instant::now()) {
            events.push(GameEvent::Timer(timer));
        }

        for event in events {
            let Update { game: next, effect } = game::update(game, event, rng)?;
            game = next;
            match effect {
                Effect::None => {}
                Effect::Schedule { timer, delay } => timers.schedule(timer, delay, Instant::now()),
                Effect::Quit => return Ok(()),
            }
        }
    }
}
