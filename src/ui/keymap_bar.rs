//! Keymap help bar UI component.

use crate::pages::Page;
use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Key hints for `page`.
pub fn keymap_text(page: Page) -> &'static str {
    match page {
        Page::Plots => "Tab:page | jk/↑↓:select | c:palette | T:theme | q:quit",
        Page::Callbacks => "Tab:page | ↑↓:focus | type to edit | Backspace:erase | Esc:quit",
        Page::Interactive => {
            "Tab:page | hl/←→:hover | t:trace | Enter:click | s:select | +-:zoom | []:pan | 0:reset | q:quit"
        },
        Page::Dynamic => "Tab:page | a/Enter:add column | T:theme | q:quit",
        Page::Hierarchy => "Tab:page | a:add level | hjkl:move | Enter:click | y:copy | q:quit",
        Page::Raster => "Tab:page | c:palette | T:theme | q:quit",
    }
}

/// Draw the keymap help bar.
pub(crate) fn draw_keymap(f: &mut Frame<'_>, area: Rect, page: Page, colors: &ThemeColors) {
    let paragraph =
        Paragraph::new(keymap_text(page)).style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}
