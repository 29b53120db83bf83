//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

/// Central theme — change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    // ── friend list ────────────────────────────────────────────
    pub fn name_style() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn owe_style() -> Style {
        Style::default().fg(Color::LightRed)
    }

    pub fn owed_style() -> Style {
        Style::default().fg(Color::LightGreen)
    }

    pub fn even_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn image_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    /// Background for the friend currently chosen for a split.
    pub fn selected_row_style() -> Style {
        Style::default().bg(Color::Rgb(60, 45, 20))
    }

    /// Marker beside the row under the keyboard cursor.
    pub fn cursor_style() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    // ── forms ──────────────────────────────────────────────────
    pub fn label_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn input_style() -> Style {
        Style::default().bg(Color::Rgb(40, 40, 40)).fg(Color::White)
    }

    pub fn input_focused_style() -> Style {
        Style::default().bg(Color::Rgb(60, 60, 80)).fg(Color::White)
    }

    pub fn readonly_style() -> Style {
        Style::default().bg(Color::Rgb(30, 30, 30)).fg(Color::DarkGray)
    }

    pub fn button_style() -> Style {
        Style::default().fg(Color::Black).bg(Color::Rgb(255, 169, 77))
    }

    pub fn button_focused_style() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Rgb(255, 212, 59))
            .add_modifier(Modifier::BOLD)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn border_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn focused_border_style() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn title_style() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }
}
