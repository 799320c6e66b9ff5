//! Color themes for checkup TUI.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI.
///
/// Contains all colors and styles needed to render the assessment form,
/// signature panels and history list.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    // Answer colors
    pub yes: Color,
    pub no: Color,
    pub unset: Color,

    // UI element colors
    pub border: Color,
    pub selection: Color,
    pub disabled: Color,

    // Text styles
    pub bold: Style,
    pub dim: Style,
    pub italic: Style,
}

/// Names accepted by [`theme_by_name`].
pub const THEME_NAMES: &[&str] = &["checkup", "high-contrast"];

/// Creates the default checkup theme: soft white text on a dark slate
/// background with a teal accent.
pub fn checkup_default() -> Theme {
    let fg = Color::Rgb(224, 228, 232); // #e0e4e8

    Theme {
        name: "checkup".into(),

        bg: Color::Rgb(22, 27, 34), // #161b22
        fg,
        accent: Color::Rgb(0, 170, 170),  // #00aaaa
        success: Color::Rgb(80, 200, 120), // #50c878
        warning: Color::Rgb(255, 200, 0),  // #ffc800
        error: Color::Rgb(255, 85, 85),    // #ff5555

        yes: Color::Rgb(80, 200, 120),
        no: Color::Rgb(255, 85, 85),
        unset: Color::Rgb(110, 118, 129), // #6e7681

        border: Color::Rgb(60, 68, 78),     // #3c444e
        selection: Color::Rgb(33, 58, 76),  // #213a4c
        disabled: Color::Rgb(90, 96, 104),  // #5a6068

        bold: Style::default().fg(fg).add_modifier(Modifier::BOLD),
        dim: Style::default().fg(fg).add_modifier(Modifier::DIM),
        italic: Style::default().fg(fg).add_modifier(Modifier::ITALIC),
    }
}

/// Creates a 16-color theme for terminals without true color.
pub fn high_contrast() -> Theme {
    Theme {
        name: "high-contrast".into(),

        bg: Color::Black,
        fg: Color::White,
        accent: Color::Cyan,
        success: Color::Green,
        warning: Color::Yellow,
        error: Color::Red,

        yes: Color::Green,
        no: Color::Red,
        unset: Color::Gray,

        border: Color::White,
        selection: Color::Blue,
        disabled: Color::DarkGray,

        bold: Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        dim: Style::default().fg(Color::Gray),
        italic: Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::ITALIC),
    }
}

/// Looks up a theme by name.
pub fn theme_by_name(name: &str) -> Option<Theme> {
    match name {
        "checkup" => Some(checkup_default()),
        "high-contrast" => Some(high_contrast()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkup_default_has_correct_name() {
        let theme = checkup_default();
        assert_eq!(theme.name, "checkup");
    }

    #[test]
    fn answer_colors_match_semantic_meaning() {
        let theme = checkup_default();
        assert_eq!(theme.yes, theme.success);
        assert_eq!(theme.no, theme.error);
    }

    #[test]
    fn theme_by_name_finds_every_listed_theme() {
        for name in THEME_NAMES {
            let theme = theme_by_name(name).expect("listed theme should exist");
            assert_eq!(theme.name, *name);
        }
    }

    #[test]
    fn theme_by_name_rejects_unknown() {
        assert!(theme_by_name("solarized").is_none());
    }
}
