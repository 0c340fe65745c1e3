//! Terminal presentation. Reads match state, never changes it.

pub mod artillery_scene;
pub mod game_common;
pub mod theme;

use crate::game::ArtilleryGame;
use ratatui::Frame;
use theme::Theme;

/// Main UI drawing function.
pub fn draw_ui(frame: &mut Frame, game: &ArtilleryGame, theme: &Theme) {
    let area = frame.size();
    artillery_scene::render_artillery_scene(frame, area, game, theme);
}
