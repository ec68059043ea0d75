//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

/// Every style the explorer draws with.
pub struct Theme;

impl Theme {
    // ── tree view ──────────────────────────────────────────────
    pub fn dir_style() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn file_style() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn meta_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    /// The file picked with click / Enter / Space.
    pub fn selected_style() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    /// Extra modifier for the focused file.
    pub fn focused_modifier() -> Modifier {
        Modifier::UNDERLINED
    }

    /// The row that receives key presses.
    pub fn cursor_style() -> Style {
        Style::default().bg(Color::DarkGray)
    }

    // ── context menu ───────────────────────────────────────────
    pub fn menu_style() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn menu_highlight_style() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    }

    pub fn menu_hotkey_style() -> Style {
        Style::default().fg(Color::Yellow)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn border_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn title_style() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }

    pub fn status_error_style() -> Style {
        Style::default().bg(Color::Red).fg(Color::White)
    }
}
