//! Status bar UI component.

use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the status bar.
pub(crate) fn draw_status(f: &mut Frame<'_>, area: Rect, status: &str, colors: &ThemeColors) {
    let style = if status.starts_with("Error") {
        Style::default().fg(colors.error).bg(colors.status_bg)
    } else {
        Style::default().fg(colors.status_fg).bg(colors.status_bg)
    };

    f.render_widget(Paragraph::new(status.to_string()).style(style), area);
}
