//! Page bodies.

use crate::app::App;
use crate::chart::ChartKind;
use crate::data::MARKDOWN;
use crate::forest::Node;
use crate::pages::{callbacks, dynamic, hierarchy, interactive, plots};
use crate::ui::chart::{draw_chart, draw_grid, draw_series, SeriesView};
use crate::ui::forest::{draw_button, draw_forest};
use crate::ui::formatters::format_stat_value;
use crate::ui::ThemeColors;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Index of the "secondary" button style.
const SECONDARY: usize = 1;

fn panel<'a>(title: &str, colors: &ThemeColors) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(colors.heading))
}

fn markdown_lines<'a>(text: &'a str, colors: &ThemeColors) -> Vec<Line<'a>> {
    let mut in_code = false;
    let mut lines = Vec::new();
    for raw in text.lines() {
        if raw.starts_with("```") {
            in_code = !in_code;
            continue;
        }
        let line = if in_code {
            Line::from(Span::styled(format!("  {}", raw), Style::default().fg(colors.value)))
        } else if let Some(h) = raw.strip_prefix("### ") {
            Line::from(Span::styled(
                h,
                Style::default().fg(colors.heading).add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(Span::styled(raw, Style::default().fg(colors.text)))
        };
        lines.push(line);
    }
    lines
}

/// Dropdown, echo, markdown and the chart gallery.
pub(crate) fn draw_plots(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(8)])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    let mut lines: Vec<Line<'_>> = plots::CITIES
        .iter()
        .enumerate()
        .map(|(i, (label, _))| {
            if i == app.plots.selected() {
                Line::from(Span::styled(
                    format!("> {}", label),
                    Style::default().fg(colors.cursor_fg).bg(colors.cursor_bg),
                ))
            } else {
                Line::from(Span::styled(format!("  {}", label), Style::default().fg(colors.text)))
            }
        })
        .collect();
    lines.push(Line::from(vec![
        Span::styled("Output: ", Style::default().fg(colors.label)),
        Span::styled(
            app.session.text(plots::OUTPUT).to_string(),
            Style::default().fg(colors.value),
        ),
    ]));
    f.render_widget(
        Paragraph::new(lines).block(panel(plots::DROPDOWN, colors)),
        top[0],
    );
    f.render_widget(
        Paragraph::new(markdown_lines(MARKDOWN, colors))
            .wrap(Wrap { trim: false })
            .block(panel("Notes", colors)),
        top[1],
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    let charts = plots::charts(&app.sample);
    let cells = rows.iter().flat_map(|row| {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*row)
            .to_vec()
    });
    for (spec, cell) in charts.iter().zip(cells) {
        draw_chart(f, cell, spec, app.palette, &app.config.plot, &app.config.heatmap, colors);
    }
}

/// Two text inputs and their echoes.
pub(crate) fn draw_callbacks(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    for (i, id) in [callbacks::INPUT_1, callbacks::INPUT_2].into_iter().enumerate() {
        let focused = app.callbacks.focused() == id;
        let border = if focused {
            Style::default().fg(colors.cursor_bg)
        } else {
            Style::default().fg(colors.border)
        };
        let text = if focused {
            format!("{}▏", app.session.text(id))
        } else {
            app.session.text(id).to_string()
        };
        let block = panel(id, colors).border_style(border);
        f.render_widget(
            Paragraph::new(text).style(Style::default().fg(colors.text)).block(block),
            chunks[i],
        );
    }

    for (i, id) in [callbacks::OUTPUT_1, callbacks::OUTPUT_2].into_iter().enumerate() {
        f.render_widget(
            Paragraph::new(app.session.text(id).to_string())
                .style(Style::default().fg(colors.value))
                .block(panel(id, colors)),
            chunks[i + 2],
        );
    }
}

/// Interactive chart plus hover, click, selection and zoom readouts.
pub(crate) fn draw_interactive(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let spec = interactive::chart();
    if let crate::chart::ChartData::Series(series) = &spec.data {
        let range = app.interactive.x_range();
        let p = app.interactive.current();
        draw_series(
            f,
            chunks[0],
            &spec.title,
            series,
            ChartKind::Scatter,
            SeriesView {
                x_bounds: Some([range.min, range.max]),
                highlight: Some((p.x, p.y)),
            },
            app.palette,
            &app.config.plot,
            colors,
        );
    }

    let readouts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
        ])
        .split(chunks[1]);
    for (id, cell) in [
        interactive::HOVER_DATA,
        interactive::CLICK_DATA,
        interactive::SELECTED_DATA,
        interactive::RELAYOUT_DATA,
    ]
    .into_iter()
    .zip(readouts.iter())
    {
        f.render_widget(
            Paragraph::new(app.session.text(id).to_string())
                .style(Style::default().fg(colors.value))
                .block(panel(id, colors)),
            *cell,
        );
    }
}

/// The add-column button and its row.
pub(crate) fn draw_dynamic(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);
    let half = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(chunks[0]);

    draw_button(f, half[0], "Add new Row", 0, false, colors);

    let forest = app.dynamic_forest();
    let block = panel(dynamic::OUTPUT_ROW, colors);
    let inner = block.inner(chunks[1]);
    f.render_widget(block, chunks[1]);
    draw_forest(
        f,
        inner,
        &forest,
        &app.config.grid,
        None,
        dynamic::label,
        |_| SECONDARY,
        colors,
    );
}

/// The add-level button and the generated levels.
pub(crate) fn draw_hierarchy(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(14), Constraint::Min(0)])
        .split(chunks[0]);

    draw_button(f, top[0], "Add Level", SECONDARY, false, colors);

    let forest = app.hierarchy_forest();
    let summary = format!(
        "{} level(s), {} button(s)",
        forest.depth(),
        forest.node_count()
    );
    f.render_widget(
        Paragraph::new(summary).style(Style::default().fg(colors.muted)),
        Rect {
            y: top[1].y + 1,
            height: 1,
            ..top[1]
        },
    );

    let block = panel(hierarchy::DISPLAY_AREA, colors);
    let inner = block.inner(chunks[1]);
    f.render_widget(block, chunks[1]);
    draw_forest(
        f,
        inner,
        &forest,
        &app.config.grid,
        Some(app.hierarchy),
        Node::label,
        |n| n.palette_index(hierarchy::COLOR_OPTIONS.len()),
        colors,
    );
}

/// Raster heatmap and its statistics.
pub(crate) fn draw_raster(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(6)])
        .split(area);

    let grid = &app.raster.grid;
    let (rows, cols) = grid.shape();
    let mut lines = vec![Line::from(vec![
        Span::styled(
            grid.name.clone(),
            Style::default().fg(colors.heading).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  from {}", app.raster.origin),
            Style::default().fg(colors.muted),
        ),
        Span::styled(
            format!("  [{}:{}, {}:{}]", grid.dim_names.0, rows, grid.dim_names.1, cols),
            Style::default().fg(colors.text),
        ),
    ])];

    match &grid.stats {
        Some(s) => lines.push(Line::from(vec![
            Span::styled("Min: ", Style::default().fg(colors.label)),
            Span::styled(format_stat_value(s.min), Style::default().fg(colors.value)),
            Span::styled("  Max: ", Style::default().fg(colors.label)),
            Span::styled(format_stat_value(s.max), Style::default().fg(colors.value)),
            Span::styled("  Mean: ", Style::default().fg(colors.label)),
            Span::styled(format_stat_value(s.mean), Style::default().fg(colors.value)),
            Span::styled("  Valid: ", Style::default().fg(colors.label)),
            Span::styled(s.valid_count.to_string(), Style::default().fg(colors.value)),
        ])),
        None => lines.push(Line::from(Span::styled(
            "No finite values",
            Style::default().fg(colors.muted),
        ))),
    }

    if let Some(e) = &app.raster.error {
        lines.push(Line::from(Span::styled(e.clone(), Style::default().fg(colors.error))));
    }

    f.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::BOTTOM).border_style(
            Style::default().fg(colors.border),
        )),
        chunks[0],
    );

    draw_grid(
        f,
        chunks[1],
        &grid.name,
        &grid.data,
        None,
        grid.units.as_deref(),
        app.palette,
        &app.config.heatmap,
        colors,
    );
}
