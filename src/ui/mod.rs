//! User interface rendering.

pub mod chart;
pub mod forest;
pub mod formatters;
mod keymap_bar;
mod pages;
mod status_bar;
mod theme;

use crate::app::App;
use crate::pages::Page;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Tabs},
    Frame,
};

pub use keymap_bar::keymap_text;
pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(&app.theme);

    f.render_widget(Block::default().style(Style::default().bg(colors.bg)), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    let titles: Vec<Line<'_>> = Page::ALL.iter().map(|p| Line::from(p.name())).collect();
    let tabs = Tabs::new(titles)
        .select(app.page.index())
        .style(Style::default().fg(colors.text))
        .highlight_style(
            Style::default()
                .fg(colors.cursor_fg)
                .bg(colors.cursor_bg)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, chunks[0]);

    match app.page {
        Page::Plots => pages::draw_plots(f, chunks[1], app, &colors),
        Page::Callbacks => pages::draw_callbacks(f, chunks[1], app, &colors),
        Page::Interactive => pages::draw_interactive(f, chunks[1], app, &colors),
        Page::Dynamic => pages::draw_dynamic(f, chunks[1], app, &colors),
        Page::Hierarchy => pages::draw_hierarchy(f, chunks[1], app, &colors),
        Page::Raster => pages::draw_raster(f, chunks[1], app, &colors),
    }

    status_bar::draw_status(f, chunks[2], &app.status, &colors);
    keymap_bar::draw_keymap(f, chunks[3], app.page, &colors);
}
