//! Color themes for the UI.

use crate::app::Theme;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Heading text color.
    pub heading: Color,
    /// Label text color.
    pub label: Color,
    /// Value text color.
    pub value: Color,
    /// Border color.
    pub border: Color,
    /// Dimmed text and missing values.
    pub muted: Color,
    /// Cursor foreground color.
    pub cursor_fg: Color,
    /// Cursor background color.
    pub cursor_bg: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
    /// Error color.
    pub error: Color,
    /// Button fills, one per entry of `pages::hierarchy::COLOR_OPTIONS`.
    pub buttons: [Color; 8],
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                text: Color::Rgb(235, 219, 178),
                heading: Color::Rgb(251, 184, 108),
                label: Color::Rgb(184, 187, 38),
                value: Color::Rgb(142, 192, 124),
                border: Color::Rgb(102, 92, 84),
                muted: Color::Rgb(146, 131, 116),
                cursor_fg: Color::Rgb(40, 40, 40),
                cursor_bg: Color::Rgb(251, 184, 108),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
                error: Color::Rgb(251, 73, 52),
                buttons: [
                    Color::Rgb(131, 165, 152),
                    Color::Rgb(146, 131, 116),
                    Color::Rgb(184, 187, 38),
                    Color::Rgb(250, 189, 47),
                    Color::Rgb(251, 73, 52),
                    Color::Rgb(142, 192, 124),
                    Color::Rgb(213, 196, 161),
                    Color::Rgb(80, 73, 69),
                ],
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                text: Color::Rgb(60, 56, 54),
                heading: Color::Rgb(175, 58, 3),
                label: Color::Rgb(121, 116, 14),
                value: Color::Rgb(102, 123, 3),
                border: Color::Rgb(213, 196, 161),
                muted: Color::Rgb(124, 111, 100),
                cursor_fg: Color::Rgb(251, 245, 234),
                cursor_bg: Color::Rgb(175, 58, 3),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
                error: Color::Rgb(157, 0, 6),
                buttons: [
                    Color::Rgb(7, 102, 120),
                    Color::Rgb(124, 111, 100),
                    Color::Rgb(121, 116, 14),
                    Color::Rgb(181, 118, 20),
                    Color::Rgb(157, 0, 6),
                    Color::Rgb(66, 123, 88),
                    Color::Rgb(235, 219, 178),
                    Color::Rgb(60, 56, 54),
                ],
            },
        }
    }

    /// Fill and text color for a button drawn in palette slot `index`.
    pub fn button(&self, index: usize) -> (Color, Color) {
        let fill = self.buttons[index % self.buttons.len()];
        // "light" and "dark" need contrasting text.
        let text = match index % self.buttons.len() {
            6 => Color::Rgb(40, 40, 40),
            7 => Color::Rgb(235, 219, 178),
            _ => self.bg,
        };
        (fill, text)
    }
}
