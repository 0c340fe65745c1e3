//! Immutable color and glyph settings handed to the renderer.

use ratatui::style::{Color, Modifier, Style};

/// Styles for every kind of cell and text the scene draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub terrain: Style,
    pub tank: Style,
    pub target: Style,
    pub projectile: Style,
    pub hud: Style,
    pub border: Color,
    pub hit: Style,
    pub miss: Style,
    pub status: Style,
}

impl Default for Theme {
    /// The classic 256-color palette.
    fn default() -> Self {
        Self {
            terrain: Style::default().fg(Color::Indexed(63)),
            tank: Style::default()
                .fg(Color::Indexed(205))
                .add_modifier(Modifier::BOLD),
            target: Style::default()
                .fg(Color::Indexed(1))
                .add_modifier(Modifier::BOLD),
            projectile: Style::default()
                .fg(Color::Indexed(214))
                .add_modifier(Modifier::BOLD),
            hud: Style::default()
                .fg(Color::Indexed(7))
                .add_modifier(Modifier::BOLD),
            border: Color::Indexed(63),
            hit: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            miss: Style::default().fg(Color::Red),
            status: Style::default().fg(Color::LightBlue),
        }
    }
}

impl Theme {
    /// Plain text with no colors, for terminals without color support.
    pub fn monochrome() -> Self {
        let plain = Style::default();
        let bold = Style::default().add_modifier(Modifier::BOLD);
        Self {
            terrain: plain,
            tank: bold,
            target: bold,
            projectile: bold,
            hud: bold,
            border: Color::Reset,
            hit: bold,
            miss: plain,
            status: plain,
        }
    }
}
