//! Artillery game UI rendering.
//!
//! Draws the HUD, the terrain grid with tank, target and shell, and a status
//! bar. The grid is built as a cell buffer first, then flushed row by row.

use super::game_common::{create_game_layout, render_status_bar, render_too_small};
use super::theme::Theme;
use crate::constants::DISPLAY_MAX_ROW;
use crate::game::{ArtilleryGame, Phase};
use crate::projectile::MissReason;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const MIN_WIDTH: u16 = 30;
const MIN_HEIGHT: u16 = 10;

/// What occupies one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Projectile,
    Tank,
    Target,
    Ground,
    Empty,
}

impl CellKind {
    pub fn glyph(self) -> char {
        match self {
            CellKind::Projectile => 'O',
            CellKind::Tank => 'T',
            CellKind::Target => 'X',
            CellKind::Ground => '|',
            CellKind::Empty => ' ',
        }
    }

    fn style(self, theme: &Theme) -> Style {
        match self {
            CellKind::Projectile => theme.projectile,
            CellKind::Tank => theme.tank,
            CellKind::Target => theme.target,
            CellKind::Ground => theme.terrain,
            CellKind::Empty => Style::default(),
        }
    }
}

/// Classify the grid cell at (`column`, `row`), with row 0 at the bottom.
///
/// The shell is only drawn once a shot has been fired; before that it sits
/// on the tank and would hide it.
pub fn cell_at(game: &ArtilleryGame, column: usize, row: i32) -> CellKind {
    let Some(&height) = game.terrain.heights().get(column) else {
        return CellKind::Empty;
    };
    let shell_visible = game.phase != Phase::Aiming;

    if shell_visible && game.projectile.column == column && game.projectile.row == row {
        CellKind::Projectile
    } else if column == game.tank_column && row == height {
        CellKind::Tank
    } else if column == game.target_column && row == height {
        CellKind::Target
    } else if row <= height {
        CellKind::Ground
    } else {
        CellKind::Empty
    }
}

/// Render the full artillery scene.
pub fn render_artillery_scene(frame: &mut Frame, area: Rect, game: &ArtilleryGame, theme: &Theme) {
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        render_too_small(frame, area, MIN_WIDTH, MIN_HEIGHT);
        return;
    }

    let layout = create_game_layout(frame, area, " Artillery ", theme.border);

    render_hud(frame, layout.hud, game, theme);
    render_play_field(frame, layout.content, game, theme);
    render_status_bar_content(frame, layout.status_bar, game, theme);
}

/// Angle, power and shot count on one line.
fn render_hud(frame: &mut Frame, area: Rect, game: &ArtilleryGame, theme: &Theme) {
    let text = format!(
        "Angle: {:.1}° | Power: {:.1} | Shots: {} | Press 'q' to quit",
        game.aim.angle, game.aim.power, game.shots_fired
    );
    frame.render_widget(Paragraph::new(Span::styled(text, theme.hud)), area);
}

/// Render the terrain grid, bottom-aligned. When the area is shorter than
/// the full grid, the highest rows are cut off first.
fn render_play_field(frame: &mut Frame, area: Rect, game: &ArtilleryGame, theme: &Theme) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let visible_rows = (area.height as i32).min(DISPLAY_MAX_ROW + 1);
    let visible_columns = (area.width as usize).min(game.terrain.width());
    let top_row = visible_rows - 1;
    let y_offset = area.y + area.height - visible_rows as u16;

    for (screen_row, row) in (0..=top_row).rev().enumerate() {
        let mut spans: Vec<Span> = Vec::new();
        let mut current_kind = CellKind::Empty;
        let mut current_text = String::new();

        for column in 0..visible_columns {
            let kind = cell_at(game, column, row);
            if kind.style(theme) != current_kind.style(theme) && !current_text.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut current_text),
                    current_kind.style(theme),
                ));
            }
            current_kind = kind;
            current_text.push(kind.glyph());
        }
        if !current_text.is_empty() {
            spans.push(Span::styled(current_text, current_kind.style(theme)));
        }

        let row_area = Rect::new(
            area.x,
            y_offset + screen_row as u16,
            visible_columns as u16,
            1,
        );
        frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
    }
}

/// Status message for the current phase, plus key hints.
pub fn status_message(game: &ArtilleryGame) -> &'static str {
    match game.phase {
        Phase::Aiming => "Take aim",
        Phase::Simulating => "Shell in flight...",
        Phase::Missed(MissReason::OutOfBounds) => "Missed! Shot left the field. Game restarting...",
        Phase::Missed(MissReason::Ground) => "Missed! Game restarting...",
        Phase::Hit => "You hit the target! Press 'q' to quit.",
    }
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &ArtilleryGame, theme: &Theme) {
    let (style, controls): (Style, &[(&str, &str)]) = match game.phase {
        Phase::Aiming => (
            theme.status,
            &[
                ("[A/D]", "Angle"),
                ("[W/S]", "Power"),
                ("[Enter]", "Fire"),
                ("[Q]", "Quit"),
            ],
        ),
        Phase::Simulating => (theme.status, &[("[Q]", "Quit")]),
        Phase::Missed(_) => (theme.miss, &[("[Q]", "Quit")]),
        Phase::Hit => (theme.hit, &[("[Q]", "Quit")]),
    };
    render_status_bar(frame, area, status_message(game), style, controls);
}
