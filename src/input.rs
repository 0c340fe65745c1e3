//! Key bindings: translates terminal key events into match commands.

use crate::game::ArtilleryInput;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key press to a match command. Key releases, on terminals that
/// report them, map to `Other`.
pub fn map_key(key: KeyEvent) -> ArtilleryInput {
    if key.kind == KeyEventKind::Release {
        return ArtilleryInput::Other;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return ArtilleryInput::Quit;
    }

    match key.code {
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => ArtilleryInput::AngleDecrease,
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => ArtilleryInput::AngleIncrease,
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => ArtilleryInput::PowerIncrease,
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => ArtilleryInput::PowerDecrease,
        KeyCode::Enter => ArtilleryInput::Fire,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ArtilleryInput::Quit,
        _ => ArtilleryInput::Other,
    }
}
